//! Box-drawn tables with a mutable grid of rows.
//!
//! A [`Table`] owns its headers, rows and per-column widths. Widths are kept
//! at least as wide as the header and every value in the column, so rendering
//! only pads and never truncates.
//!
//! ```rust
//! use prettyprint_plus::{row, table::{BorderStyle, Table}};
//!
//! let mut table = Table::new(["Name", "Age", "City"]);
//! table.add_row(row!["John Doe", 30, "New York"]).unwrap();
//! table.add_row(row!["Jane Smith", 25, "London"]).unwrap();
//! table.update_cell(1, "City", "Paris").unwrap();
//!
//! assert_eq!(table.column_widths(), &[10, 3, 8]);
//! assert_eq!(table.get_cell(1, "City").unwrap().to_string(), "Paris");
//!
//! // `Display` renders without escape codes
//! let text = table.border(BorderStyle::Ascii).to_string();
//! assert!(text.starts_with("+------------+-----+----------+"));
//! ```
//!
//! # Errors
//!
//! | Error | Raised when |
//! |-------|-------------|
//! | [`TableError::ShapeMismatch`] | a row or column has the wrong length |
//! | [`TableError::IndexOutOfRange`] | a row index is past the last row |
//! | [`TableError::UnknownColumn`] | a column name is not a header |
//!
//! [`TableError::ShapeMismatch`]: crate::error::TableError::ShapeMismatch
//! [`TableError::IndexOutOfRange`]: crate::error::TableError::IndexOutOfRange
//! [`TableError::UnknownColumn`]: crate::error::TableError::UnknownColumn

mod border;
mod cell;
mod grid;

pub use border::BorderStyle;
pub use cell::Cell;
pub use grid::Table;
