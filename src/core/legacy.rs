//! Backward-compatible message format
//!
//! `"<entity>: " + decorated message + "\n"`, or just the decorated message and a
//! newline when the entity is disabled.

use super::{
    error::Result,
    sink::Sink,
    style::{parse_color, Decorator, Style},
    terminal::Terminal,
};
use colored::Color;
use std::sync::Arc;

pub const DEFAULT_COLOR: Color = Color::Yellow;

/// Entity prefix selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Entity {
    /// Use the output's configured entity
    #[default]
    Default,
    Named(String),
    /// Emit no prefix at all
    Disabled,
}

impl Entity {
    pub fn resolve<'a>(&'a self, default: &'a str) -> Option<&'a str> {
        match self {
            Entity::Default => Some(default),
            Entity::Named(name) => Some(name.as_str()),
            Entity::Disabled => None,
        }
    }
}

/// Options for [`Legacy::log_with`].
///
/// ```
/// use serverless_log::LegacyOptions;
///
/// let options = LegacyOptions::new()
///     .entity("Deploy")
///     .color_name("green")
///     .unwrap()
///     .bold(true);
/// assert!(options.bold);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyOptions {
    pub entity: Entity,
    pub color: Option<Color>,
    pub underline: bool,
    pub bold: bool,
}

impl LegacyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Entity::Named(entity.into());
        self
    }

    #[must_use]
    pub fn no_entity(mut self) -> Self {
        self.entity = Entity::Disabled;
        self
    }

    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Select the color by keyword; unknown keywords are rejected.
    pub fn color_name(self, name: &str) -> Result<Self> {
        Ok(self.color(parse_color(name)?))
    }

    #[must_use]
    pub fn underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    #[must_use]
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn style(&self) -> Style {
        Style::color(self.color.unwrap_or(DEFAULT_COLOR))
            .underline(self.underline)
            .bold(self.bold)
    }
}

pub fn format_legacy(
    message: &str,
    options: &LegacyOptions,
    default_entity: &str,
    decorator: &Decorator,
) -> String {
    let text = decorator.decorate(message, &options.style());
    match options.entity.resolve(default_entity) {
        Some(entity) => format!("{}: {}\n", entity, text),
        None => format!("{}\n", text),
    }
}

/// The interchangeable legacy interface.
///
/// `write` goes to the legacy writer, which defaults to the output's sink and
/// can be swapped with [`replace_write`](Self::replace_write). `console_log`
/// and `log` resolve the writer on every call.
pub struct Legacy {
    terminal: Arc<Terminal>,
}

impl Legacy {
    pub(crate) fn new(terminal: Arc<Terminal>) -> Self {
        Self { terminal }
    }

    /// Raw pass-through, nothing appended.
    pub fn write(&self, text: &str) {
        self.terminal.legacy_write(text);
    }

    pub fn console_log(&self, text: &str) {
        self.write(&format!("{}\n", text));
    }

    pub fn log(&self, message: &str) {
        self.log_with(message, &LegacyOptions::default());
    }

    pub fn log_with(&self, message: &str, options: &LegacyOptions) {
        let formatted = format_legacy(
            message,
            options,
            &self.terminal.entity,
            &self.terminal.decorator,
        );
        self.write(&formatted);
    }

    /// Install a writer override (`None` restores the output's sink), returning the previous one.
    pub fn replace_write(&self, writer: Option<Box<dyn Sink>>) -> Option<Box<dyn Sink>> {
        self.terminal.replace_legacy_write(writer)
    }
}
