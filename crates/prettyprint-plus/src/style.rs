//! ANSI color and emphasis wrapping.
//!
//! Every helper here is a pure string transform: the text is wrapped in a
//! start sequence and [`RESET`]. The escape codes are fixed constants; nothing
//! is configured at runtime.
//!
//! ```rust
//! use prettyprint_plus::style::{bold, colorize, Color};
//!
//! assert_eq!(colorize("ok", Color::Green), "\x1b[92mok\x1b[0m");
//! assert_eq!(bold("ok"), "\x1b[1mok\x1b[0m");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::boxed::wrap_in_box;
use crate::config::PrintOptions;

/// Resets all attributes.
pub const RESET: &str = "\x1b[0m";
/// Bold / increased intensity.
pub const BOLD: &str = "\x1b[1m";
/// Underline.
pub const UNDERLINE: &str = "\x1b[4m";

/// Named foreground colors (bright variants of the ANSI palette).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// All colors, in palette order.
    pub const ALL: [Color; 7] = [
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// The escape sequence that switches to this color.
    pub const fn code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[91m",
            Color::Green => "\x1b[92m",
            Color::Yellow => "\x1b[93m",
            Color::Blue => "\x1b[94m",
            Color::Magenta => "\x1b[95m",
            Color::Cyan => "\x1b[96m",
            Color::White => "\x1b[97m",
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a color name is not in the palette.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color '{0}' (expected one of red, green, yellow, blue, magenta, cyan, white)")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Color::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

fn wrap(start: &str, text: &str) -> String {
    let mut out = String::with_capacity(start.len() + text.len() + RESET.len());
    out.push_str(start);
    out.push_str(text);
    out.push_str(RESET);
    out
}

/// Wraps `text` in the escape codes for `color`.
pub fn colorize(text: &str, color: Color) -> String {
    wrap(color.code(), text)
}

/// Wraps `text` in bold escape codes.
pub fn bold(text: &str) -> String {
    wrap(BOLD, text)
}

/// Wraps `text` in underline escape codes.
pub fn underline(text: &str) -> String {
    wrap(UNDERLINE, text)
}

/// Applies color, then bold, then the box border, as configured by `options`.
///
/// Bold wraps outside the color so both survive the inner reset. The box is
/// drawn last and sized from display width, so escape codes do not widen it.
pub fn decorate(text: &str, options: &PrintOptions) -> String {
    let mut out = match options.color {
        Some(color) => colorize(text, color),
        None => text.to_string(),
    };
    if options.bold {
        out = bold(&out);
    }
    if options.boxed {
        out = wrap_in_box(&out);
    }
    out
}
