use std::fmt;
use std::io;

use console::{measure_text_width, pad_str, Alignment};

use super::border::{BorderStyle, LineType};
use super::cell::Cell;
use crate::error::{Result, TableError};
use crate::output::{OutputMode, OutputSink};
use crate::style::bold;

const LOG_TARGET: &str = "prettyprint_plus::table";

/// A mutable grid of rows under a fixed list of headers.
///
/// Column widths start at the header lengths and grow as wider values are
/// stored. They never shrink, so a column keeps its width after its longest
/// value is replaced by a shorter one.
///
/// `get_row` hands out a shared borrow: the rows can only change through the
/// table's own update methods, which keep the widths current.
///
/// ```compile_fail
/// use prettyprint_plus::{row, table::Table};
///
/// let mut table = Table::new(["Name"]);
/// table.add_row(row!["Ann"]).unwrap();
/// let r = table.get_row(0).unwrap();
/// r[0] = "Bartholomew".into();
/// ```
#[derive(Clone, Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
    column_widths: Vec<usize>,
    border: BorderStyle,
}

fn display_width(cell: &Cell) -> usize {
    match cell {
        Cell::Text(s) => measure_text_width(s),
        other => measure_text_width(&other.to_string()),
    }
}

impl Table {
    /// Creates an empty table. Column widths start at the header lengths.
    pub fn new<S: Into<String>, I: IntoIterator<Item = S>>(headers: I) -> Self {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let column_widths = headers.iter().map(|h| measure_text_width(h)).collect();
        Table {
            headers,
            rows: Vec::new(),
            column_widths,
            border: BorderStyle::default(),
        }
    }

    /// Set the border style.
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Get the border style.
    pub fn get_border(&self) -> BorderStyle {
        self.border
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Current width reserved for each column, in header order.
    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    pub fn num_columns(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates rows in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    fn column_index(&self, column_name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == column_name)
            .ok_or_else(|| {
                tracing::debug!(target: LOG_TARGET, column = column_name, "unknown column");
                TableError::UnknownColumn(column_name.to_string())
            })
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.rows.len() {
            Ok(())
        } else {
            tracing::debug!(target: LOG_TARGET, index, len = self.rows.len(), "row index out of range");
            Err(TableError::IndexOutOfRange {
                index,
                len: self.rows.len(),
            })
        }
    }

    fn check_shape(expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            tracing::debug!(target: LOG_TARGET, expected, actual, "shape mismatch");
            Err(TableError::ShapeMismatch { expected, actual })
        }
    }

    fn widen(&mut self, column: usize, cell: &Cell) {
        let width = display_width(cell);
        if width > self.column_widths[column] {
            self.column_widths[column] = width;
        }
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Appends a row. It must have exactly one cell per header.
    pub fn add_row<C, I>(&mut self, row: I) -> Result<()>
    where
        C: Into<Cell>,
        I: IntoIterator<Item = C>,
    {
        let row: Vec<Cell> = row.into_iter().map(Into::into).collect();
        Self::check_shape(self.headers.len(), row.len())?;

        for (i, cell) in row.iter().enumerate() {
            self.widen(i, cell);
        }
        self.rows.push(row);
        tracing::trace!(target: LOG_TARGET, rows = self.rows.len(), "row added");
        Ok(())
    }

    /// Replaces one cell in place.
    pub fn update_cell(
        &mut self,
        row_index: usize,
        column_name: &str,
        value: impl Into<Cell>,
    ) -> Result<()> {
        self.check_index(row_index)?;
        let column = self.column_index(column_name)?;

        let value = value.into();
        self.widen(column, &value);
        self.rows[row_index][column] = value;
        tracing::trace!(target: LOG_TARGET, row = row_index, column = column_name, "cell updated");
        Ok(())
    }

    /// Replaces a whole row.
    ///
    /// The row length is checked before the index, so a malformed row is
    /// reported as a shape mismatch even when the index is also bad.
    pub fn update_row<C, I>(&mut self, index: usize, new_row: I) -> Result<()>
    where
        C: Into<Cell>,
        I: IntoIterator<Item = C>,
    {
        let new_row: Vec<Cell> = new_row.into_iter().map(Into::into).collect();
        Self::check_shape(self.headers.len(), new_row.len())?;
        self.check_index(index)?;

        for (i, cell) in new_row.iter().enumerate() {
            self.widen(i, cell);
        }
        self.rows[index] = new_row;
        tracing::trace!(target: LOG_TARGET, row = index, "row replaced");
        Ok(())
    }

    /// Replaces every value in a column. One value per row is required.
    pub fn update_column<C, I>(&mut self, column_name: &str, new_values: I) -> Result<()>
    where
        C: Into<Cell>,
        I: IntoIterator<Item = C>,
    {
        let column = self.column_index(column_name)?;
        let new_values: Vec<Cell> = new_values.into_iter().map(Into::into).collect();
        Self::check_shape(self.rows.len(), new_values.len())?;

        for (row, value) in new_values.into_iter().enumerate() {
            self.widen(column, &value);
            self.rows[row][column] = value;
        }
        tracing::trace!(target: LOG_TARGET, column = column_name, "column replaced");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Access
    // ------------------------------------------------------------------

    pub fn get_row(&self, index: usize) -> Result<&[Cell]> {
        self.check_index(index)?;
        Ok(&self.rows[index])
    }

    /// Values of one column, in row order.
    pub fn get_column(&self, column_name: &str) -> Result<Vec<&Cell>> {
        let column = self.column_index(column_name)?;
        Ok(self.rows.iter().map(|row| &row[column]).collect())
    }

    pub fn get_cell(&self, row_index: usize, column_name: &str) -> Result<&Cell> {
        self.check_index(row_index)?;
        let column = self.column_index(column_name)?;
        Ok(&self.rows[row_index][column])
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    fn format_row<'a, I>(&self, cells: I, emphasize: bool) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let vertical = self.border.chars().vertical;
        let mut line = String::new();
        line.push(vertical);
        for (text, &width) in cells.into_iter().zip(&self.column_widths) {
            let padded = pad_str(text, width, Alignment::Left, None);
            line.push(' ');
            if emphasize {
                line.push_str(&bold(&padded));
            } else {
                line.push_str(&padded);
            }
            line.push(' ');
            line.push(vertical);
        }
        line
    }

    /// Renders the bordered table with bold headers.
    ///
    /// The result always contains ANSI codes for the header row; see
    /// [`Table::render_with`] to control that.
    pub fn render(&self) -> String {
        let chars = self.border.chars();
        let mut output = Vec::with_capacity(self.rows.len() + 4);

        output.push(chars.rule(LineType::Top, &self.column_widths));
        output.push(self.format_row(self.headers.iter().map(String::as_str), true));
        output.push(chars.rule(LineType::Middle, &self.column_widths));
        for row in &self.rows {
            let texts: Vec<String> = row.iter().map(Cell::to_string).collect();
            output.push(self.format_row(texts.iter().map(String::as_str), false));
        }
        output.push(chars.rule(LineType::Bottom, &self.column_widths));

        output.join("\n")
    }

    /// Renders the table, keeping or stripping ANSI codes per `mode`.
    pub fn render_with(&self, mode: OutputMode) -> String {
        mode.apply(&self.render()).into_owned()
    }

    /// Writes the table to stdout, with bold headers when the terminal
    /// supports it.
    pub fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.print_to(&mut lock, OutputMode::Auto)
    }

    /// Writes the rendered table and a trailing newline to `sink`.
    pub fn print_to<S: OutputSink + ?Sized>(&self, sink: &mut S, mode: OutputMode) -> io::Result<()> {
        sink.write_line(&self.render_with(mode))
    }
}

/// Plain-text rendering without escape codes.
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(OutputMode::Text))
    }
}
