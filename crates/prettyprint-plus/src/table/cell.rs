//! Table cell values.

use std::fmt;

use serde_json::Value;

/// A single value stored in a table.
///
/// Any common scalar converts into a `Cell` with `From`, so rows can mix
/// text and numbers:
///
/// ```rust
/// use prettyprint_plus::{row, table::Cell};
///
/// let cells = row!["Ann", 5, 1.5, true];
/// assert_eq!(cells[0], Cell::Text("Ann".into()));
/// assert_eq!(cells[1].to_string(), "5");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    Text(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    #[default]
    Empty,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Int(n) => write!(f, "{}", n),
            Cell::UInt(n) => write!(f, "{}", n),
            Cell::Float(x) => write!(f, "{}", x),
            Cell::Bool(b) => write!(f, "{}", b),
            Cell::Empty => Ok(()),
        }
    }
}

macro_rules! cell_from {
    ($variant:ident: $($ty:ty),+) => {
        $(
            impl From<$ty> for Cell {
                fn from(value: $ty) -> Self {
                    Cell::$variant(value.into())
                }
            }
        )+
    };
}

cell_from!(Text: String, &str, &String, char);
cell_from!(Int: i8, i16, i32, i64, u8, u16, u32);
cell_from!(UInt: u64);
cell_from!(Float: f32, f64);
cell_from!(Bool: bool);

impl From<usize> for Cell {
    fn from(value: usize) -> Self {
        Cell::UInt(value as u64)
    }
}

impl From<isize> for Cell {
    fn from(value: isize) -> Self {
        Cell::Int(value as i64)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Empty, Into::into)
    }
}

/// JSON scalars map to their cell variant; arrays and objects become compact
/// JSON text.
impl From<&Value> for Cell {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Cell::Empty,
            Value::Bool(b) => Cell::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Cell::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Cell::UInt(u)
                } else {
                    Cell::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => Cell::Text(s.clone()),
            other => Cell::Text(other.to_string()),
        }
    }
}

impl From<Value> for Cell {
    fn from(value: Value) -> Self {
        Cell::from(&value)
    }
}

/// Builds a `Vec<Cell>` from a list of values of any convertible type.
#[macro_export]
macro_rules! row {
    ($($cell:expr),* $(,)?) => {
        vec![$($crate::table::Cell::from($cell)),*]
    };
}
