//! Print options, loadable from YAML.
//!
//! ```rust
//! use prettyprint_plus::config::PrintOptions;
//! use prettyprint_plus::style::Color;
//!
//! let options = PrintOptions::from_yaml("color: green\nboxed: true\n").unwrap();
//! assert_eq!(options.color, Some(Color::Green));
//! assert!(options.boxed);
//! assert!(!options.bold);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::output::OutputMode;
use crate::style::Color;

/// How a value is decorated before it is written.
///
/// Defaults to cyan, not bold, no box, auto-detected color support.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrintOptions {
    /// Foreground color; `None` leaves the text uncolored.
    pub color: Option<Color>,
    /// Wrap the text in bold.
    pub bold: bool,
    /// Draw an ASCII box around the text.
    pub boxed: bool,
    /// Whether escape codes reach the sink.
    pub mode: OutputMode,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            color: Some(Color::Cyan),
            bold: false,
            boxed: false,
            mode: OutputMode::Auto,
        }
    }
}

impl PrintOptions {
    /// Parses options from a YAML document. Missing keys keep their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Reads and parses a YAML options file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn no_color(mut self) -> Self {
        self.color = None;
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn boxed(mut self, boxed: bool) -> Self {
        self.boxed = boxed;
        self
    }

    pub fn mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }
}
