//! # PrettyPrint Plus - Decorated Console Output
//!
//! Small helpers for making terminal output easier to read:
//!
//! - [`pprint`]: format a sequence, map, tuple or scalar, optionally colored,
//!   bold and boxed, and write it to stdout
//! - [`Table`]: a mutable grid with auto-sized columns rendered with
//!   box-drawing borders
//! - [`style`]: ANSI color and emphasis wrapping
//! - [`PrintOptions`]: print settings, loadable from YAML
//!
//! ## Quick Start
//!
//! ```rust
//! use prettyprint_plus::{pprint_to, row, Color, OutputMode, PrintOptions, Table};
//!
//! let options = PrintOptions::default()
//!     .color(Color::Green)
//!     .boxed(true)
//!     .mode(OutputMode::Text);
//!
//! let mut out = Vec::new();
//! pprint_to(&mut out, &vec![1, 2, 3], &options).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "+-------------+\n| [ 1, 2, 3 ] |\n+-------------+\n"
//! );
//!
//! let mut table = Table::new(["Name", "Age"]);
//! table.add_row(row!["Ann", 5]).unwrap();
//! table.add_row(row!["Bob", 30]).unwrap();
//! assert_eq!(table.column_widths(), &[4, 3]);
//! ```

pub mod boxed;
pub mod config;
pub mod error;
pub mod format;
pub mod output;
pub mod style;
pub mod table;

pub use boxed::wrap_in_box;
pub use config::PrintOptions;
pub use error::{ConfigError, Result, TableError};
pub use format::PrettyFormat;
pub use output::{pprint, pprint_to, OutputMode, OutputSink};
pub use style::{bold, colorize, decorate, underline, Color};
pub use table::{BorderStyle, Cell, Table};
