//! Output mode control and line sinks.
//!
//! The [`OutputMode`] decides whether escape codes reach the terminal. The
//! [`OutputSink`] trait is the only I/O the crate performs: a rendered block
//! is written as one line of text followed by a newline.

use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use console::{strip_ansi_codes, Term};
use serde::{Deserialize, Serialize};

use crate::config::PrintOptions;
use crate::format::PrettyFormat;
use crate::style::decorate;

/// Controls whether ANSI escape codes are kept in the output.
///
/// - `Auto` - keep codes when stdout supports colors
/// - `Term` - always keep codes
/// - `Text` - always strip codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Auto-detect terminal capabilities
    #[default]
    Auto,
    /// Always use ANSI escape codes
    Term,
    /// Never use ANSI escape codes
    Text,
}

impl OutputMode {
    /// Resolves the mode to a concrete decision about whether to use color.
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => Term::stdout().features().colors_supported(),
            OutputMode::Term => true,
            OutputMode::Text => false,
        }
    }

    /// Returns `text` unchanged, or with escape codes removed when this mode
    /// does not use color.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.should_use_color() {
            Cow::Borrowed(text)
        } else {
            strip_ansi_codes(text)
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputMode::Auto => "auto",
            OutputMode::Term => "term",
            OutputMode::Text => "text",
        })
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(OutputMode::Auto),
            "term" => Ok(OutputMode::Term),
            "text" => Ok(OutputMode::Text),
            other => Err(format!(
                "unknown output mode '{}' (expected auto, term or text)",
                other
            )),
        }
    }
}

/// Something that accepts whole lines of text.
pub trait OutputSink {
    /// Writes `line` followed by a newline.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

impl<W: Write + ?Sized> OutputSink for W {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.write_all(line.as_bytes())?;
        self.write_all(b"\n")
    }
}

/// Formats `value`, decorates it per `options` and writes it to stdout.
///
/// ```rust,no_run
/// use prettyprint_plus::{pprint, PrintOptions};
///
/// pprint(&vec![1, 2, 3], &PrintOptions::default().bold(true)).unwrap();
/// ```
pub fn pprint<T: PrettyFormat + ?Sized>(value: &T, options: &PrintOptions) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    pprint_to(&mut lock, value, options)
}

/// Like [`pprint`], writing to an arbitrary sink.
pub fn pprint_to<S, T>(sink: &mut S, value: &T, options: &PrintOptions) -> io::Result<()>
where
    S: OutputSink + ?Sized,
    T: PrettyFormat + ?Sized,
{
    let decorated = decorate(&value.pretty(), options);
    sink.write_line(&options.mode.apply(&decorated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn term_keeps_codes() {
        assert_eq!(OutputMode::Term.apply("\x1b[1mx\x1b[0m"), "\x1b[1mx\x1b[0m");
    }

    #[test]
    fn text_strips_codes() {
        assert_eq!(OutputMode::Text.apply("\x1b[91mred\x1b[0m"), "red");
        assert!(!OutputMode::Text.should_use_color());
    }

    #[test]
    fn parse_mode() {
        assert_eq!("TEXT".parse::<OutputMode>(), Ok(OutputMode::Text));
        assert_eq!("auto".parse::<OutputMode>(), Ok(OutputMode::Auto));
        assert!("json".parse::<OutputMode>().is_err());
    }

    #[test]
    fn write_line_appends_newline() {
        let mut buf: Vec<u8> = Vec::new();
        buf.write_line("hello").unwrap();
        assert_eq!(buf, b"hello\n");
    }

    #[test]
    fn pprint_to_colored_list() {
        let mut buf: Vec<u8> = Vec::new();
        let options = PrintOptions::default()
            .color(Color::Red)
            .mode(OutputMode::Term);
        pprint_to(&mut buf, &vec![1, 2], &options).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\x1b[91m[ 1, 2 ]\x1b[0m\n");
    }

    #[test]
    fn pprint_to_plain_boxed_tuple() {
        let mut buf: Vec<u8> = Vec::new();
        let options = PrintOptions::default()
            .bold(true)
            .boxed(true)
            .mode(OutputMode::Text);
        pprint_to(&mut buf, &("a", 1), &options).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "+----------+\n| ( a, 1 ) |\n+----------+\n"
        );
    }
}
