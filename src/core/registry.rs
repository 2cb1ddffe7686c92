//! Lookup-or-insert caches
//!
//! Every cache is guarded by its own mutex held across lookup and insert, so
//! one key never yields two live instances. Lock order: plugins, loggers,
//! progress handles, then the terminal's board.

use super::{
    logger::NamespacedLogger,
    plugin::PluginWriters,
    progress::{ProgressHandle, ProgressTracker},
    terminal::{ProgressKey, Terminal},
};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

pub const NAMESPACE_SEPARATOR: char = ':';

/// Child namespace under which plugin loggers live
pub const PLUGIN_SEGMENT: &str = "plugin";

pub fn child_namespace(parent: &str, child: &str) -> String {
    format!("{}{}{}", parent, NAMESPACE_SEPARATOR, child)
}

#[derive(Default)]
pub(crate) struct Registry {
    loggers: Mutex<HashMap<String, Arc<NamespacedLogger>>>,
    plugins: Mutex<HashMap<String, Arc<PluginWriters>>>,
    progress: Mutex<HashMap<ProgressKey, Arc<ProgressHandle>>>,
}

impl Registry {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn logger(
        self: &Arc<Self>,
        terminal: &Arc<Terminal>,
        namespace: String,
    ) -> Arc<NamespacedLogger> {
        let mut loggers = self.loggers.lock();
        let logger = loggers.entry(namespace).or_insert_with_key(|namespace| {
            Arc::new(NamespacedLogger::new(
                namespace.clone(),
                Arc::clone(terminal),
                Arc::downgrade(self),
            ))
        });
        Arc::clone(logger)
    }

    pub(crate) fn plugin_writers(
        self: &Arc<Self>,
        terminal: &Arc<Terminal>,
        root_namespace: &str,
        plugin_id: &str,
    ) -> Arc<PluginWriters> {
        let mut plugins = self.plugins.lock();
        if let Some(writers) = plugins.get(plugin_id) {
            return Arc::clone(writers);
        }

        let namespace =
            child_namespace(&child_namespace(root_namespace, PLUGIN_SEGMENT), plugin_id);
        let log = self.logger(terminal, namespace);
        let progress = ProgressTracker::new(
            Some(plugin_id.to_string()),
            Arc::clone(terminal),
            Arc::downgrade(self),
        );
        let writers = Arc::new(PluginWriters::new(
            plugin_id.to_string(),
            log,
            progress,
            Arc::clone(terminal),
        ));
        plugins.insert(plugin_id.to_string(), Arc::clone(&writers));
        writers
    }

    pub(crate) fn progress_handle(
        &self,
        terminal: &Arc<Terminal>,
        key: ProgressKey,
    ) -> Arc<ProgressHandle> {
        let mut handles = self.progress.lock();
        let handle = handles.entry(key).or_insert_with_key(|key| {
            let generation = terminal.progress_generation();
            Arc::new(ProgressHandle::new(key.clone(), generation, Arc::clone(terminal)))
        });
        Arc::clone(handle)
    }

    /// Drop every progress handle and reset the board while no new handle can be created.
    pub(crate) fn clear_progress(&self, terminal: &Terminal) {
        let mut handles = self.progress.lock();
        handles.clear();
        terminal.clear_progress();
    }
}
