//! Text decoration
//!
//! A [`Style`] is a stateless request for color and emphasis; a [`Decorator`]
//! renders it, or returns the text untouched when colors are off.

use super::error::{LogError, Result};
use colored::{Color, Colorize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub color: Option<Color>,
    pub bold: bool,
    pub underline: bool,
    pub dimmed: bool,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            color: None,
            bold: false,
            underline: false,
            dimmed: false,
        }
    }

    pub const fn color(color: Color) -> Self {
        Self {
            color: Some(color),
            bold: false,
            underline: false,
            dimmed: false,
        }
    }

    /// Style with a color given by keyword, e.g. `"green"` or `"bright red"`.
    pub fn named(name: &str) -> Result<Self> {
        Ok(Self::color(parse_color(name)?))
    }

    #[must_use]
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    #[must_use]
    pub fn underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    #[must_use]
    pub fn dimmed(mut self, dimmed: bool) -> Self {
        self.dimmed = dimmed;
        self
    }

    /// Render `text` with this style. Honors the terminal's color support.
    pub fn paint(&self, text: &str) -> String {
        let mut painted = text.normal();
        if let Some(color) = self.color {
            painted = painted.color(color);
        }
        if self.bold {
            painted = painted.bold();
        }
        if self.underline {
            painted = painted.underline();
        }
        if self.dimmed {
            painted = painted.dimmed();
        }
        painted.to_string()
    }
}

pub fn parse_color(name: &str) -> Result<Color> {
    name.parse::<Color>()
        .map_err(|()| LogError::invalid_color(name))
}

/// Per-output switch between styled and plain rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decorator {
    enabled: bool,
}

impl Decorator {
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn decorate(&self, text: &str, style: &Style) -> String {
        if self.enabled {
            style.paint(text)
        } else {
            text.to_string()
        }
    }
}

impl Default for Decorator {
    fn default() -> Self {
        Self::new(true)
    }
}
