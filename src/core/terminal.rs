//! Shared terminal state
//!
//! One `Terminal` backs every logger, progress handle and plugin bundle of an
//! output. It owns the swappable sink cell, the legacy writer override and the
//! progress board. Lock order is board, then sink.

use super::{
    config::LogConfig, levels::LevelRegistry, metrics::OutputMetrics, sink::Sink,
    style::Decorator,
};
use parking_lot::Mutex;

/// Move to the first column `n` lines up, then erase to the end of the screen.
fn erase_lines(n: usize) -> String {
    if n == 0 {
        String::new()
    } else {
        format!("\x1b[{}F\x1b[J", n)
    }
}

/// Identity of one progress line: plugin scope (root when `None`) plus the caller's key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProgressKey {
    pub scope: Option<String>,
    pub name: String,
}

impl ProgressKey {
    pub fn new(scope: Option<&str>, name: &str) -> Self {
        Self {
            scope: scope.map(str::to_string),
            name: name.to_string(),
        }
    }
}

/// Current status lines of all live progress handles, in creation order.
#[derive(Debug, Default)]
pub(crate) struct ProgressBoard {
    lines: Vec<(ProgressKey, String)>,
    /// Screen rows currently painted
    drawn: usize,
    /// Erased by a partial write and owed a repaint
    pending: bool,
    /// Bumped by every clear; handles from older generations are inert
    generation: u64,
}

impl ProgressBoard {
    fn set(&mut self, key: &ProgressKey, line: String) {
        match self.lines.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = line,
            None => self.lines.push((key.clone(), line)),
        }
    }

    fn render(&self) -> String {
        self.lines
            .iter()
            .map(|(_, line)| format!("{}\n", line))
            .collect()
    }

    /// Rows the rendered board occupies; multi-line statuses count every row.
    fn rows(&self) -> usize {
        self.lines
            .iter()
            .map(|(_, line)| line.matches('\n').count() + 1)
            .sum()
    }

    pub(crate) fn len(&self) -> usize {
        self.lines.len()
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }
}

pub(crate) struct Terminal {
    pub(crate) levels: LevelRegistry,
    pub(crate) decorator: Decorator,
    pub(crate) entity: String,
    interactive: bool,
    sink: Mutex<Box<dyn Sink>>,
    legacy_write: Mutex<Option<Box<dyn Sink>>>,
    board: Mutex<ProgressBoard>,
    pub(crate) metrics: OutputMetrics,
}

impl Terminal {
    pub(crate) fn new(config: &LogConfig, sink: Box<dyn Sink>) -> Self {
        Self {
            levels: LevelRegistry::from(config.level),
            decorator: Decorator::new(config.colors),
            entity: config.entity.clone(),
            interactive: config.interactive,
            sink: Mutex::new(sink),
            legacy_write: Mutex::new(None),
            board: Mutex::new(ProgressBoard::default()),
            metrics: OutputMetrics::new(),
        }
    }

    pub(crate) fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Write text through the process sink, keeping an interactive progress board intact.
    pub(crate) fn emit(&self, text: &str) {
        let mut board = self.board.lock();
        if !self.interactive || (board.drawn == 0 && !board.pending) {
            self.write_sink(text);
            return;
        }

        let mut output = erase_lines(board.drawn);
        output.push_str(text);
        if text.ends_with('\n') {
            output.push_str(&board.render());
            board.drawn = board.rows();
            board.pending = false;
        } else {
            // Cursor is mid-line; repaint once the line is finished
            board.drawn = 0;
            board.pending = true;
        }
        self.write_sink(&output);
    }

    /// Route through the legacy override when one is installed, else through [`emit`](Self::emit).
    pub(crate) fn legacy_write(&self, text: &str) {
        {
            let mut overridden = self.legacy_write.lock();
            if let Some(sink) = overridden.as_mut() {
                self.write_to(&mut **sink, text);
                return;
            }
        }
        self.emit(text);
    }

    pub(crate) fn replace_legacy_write(
        &self,
        sink: Option<Box<dyn Sink>>,
    ) -> Option<Box<dyn Sink>> {
        std::mem::replace(&mut *self.legacy_write.lock(), sink)
    }

    pub(crate) fn replace_sink(&self, sink: Box<dyn Sink>) -> Box<dyn Sink> {
        std::mem::replace(&mut *self.sink.lock(), sink)
    }

    pub(crate) fn flush(&self) -> super::error::Result<()> {
        self.sink.lock().flush()?;
        if let Some(sink) = self.legacy_write.lock().as_mut() {
            sink.flush()?;
        }
        Ok(())
    }

    pub(crate) fn progress_generation(&self) -> u64 {
        self.board.lock().generation()
    }

    pub(crate) fn progress_lines(&self) -> usize {
        self.board.lock().len()
    }

    /// Replace the status line for `key`. Returns false for handles outlived by a clear.
    pub(crate) fn update_progress(&self, key: &ProgressKey, generation: u64, line: String) -> bool {
        let mut board = self.board.lock();
        if board.generation != generation {
            return false;
        }
        board.set(key, line);

        if self.interactive {
            let mut output = erase_lines(board.drawn);
            output.push_str(&board.render());
            board.drawn = board.rows();
            board.pending = false;
            self.write_sink(&output);
        }
        true
    }

    pub(crate) fn clear_progress(&self) {
        let mut board = self.board.lock();
        let drawn = board.drawn;
        board.lines.clear();
        board.drawn = 0;
        board.pending = false;
        board.generation += 1;

        if self.interactive && drawn > 0 {
            self.write_sink(&erase_lines(drawn));
        }
    }

    fn write_sink(&self, text: &str) {
        let mut sink = self.sink.lock();
        self.write_to(&mut **sink, text);
    }

    /// Write with panic isolation so a misbehaving sink cannot take the caller down.
    fn write_to(&self, sink: &mut dyn Sink, text: &str) {
        let result =
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| sink.write_str(text)));

        match result {
            Ok(Ok(())) => {
                self.metrics.record_written();
            }
            Ok(Err(e)) => {
                self.metrics.record_write_failure();
                eprintln!("[LOG ERROR] Sink '{}' failed: {}", sink.name(), e);
            }
            Err(panic_info) => {
                self.metrics.record_write_failure();
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!("[LOG CRITICAL] Sink '{}' panicked: {}", sink.name(), panic_msg);
            }
        }
    }
}
