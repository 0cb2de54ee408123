//! Reading JSON input and turning it into tables.

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use prettyprint_plus::{BorderStyle, Cell, Table};
use serde_json::{Map, Value};

/// Reads and parses JSON from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_json(path: Option<&Path>) -> Result<Value> {
    let raw = match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read {}", p.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("input is not valid JSON")
}

/// Builds a table from an array of objects (or a single object).
///
/// Headers are the union of keys in first-seen order; a row without a key
/// gets an empty cell in that column.
pub fn json_to_table(value: &Value, border: BorderStyle) -> Result<Table> {
    let records: Vec<&Map<String, Value>> = match value {
        Value::Object(map) => vec![map],
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(map) => Ok(map),
                _ => bail!("element {} is not an object", i),
            })
            .collect::<Result<_>>()?,
        _ => bail!("--table expects an object or an array of objects"),
    };

    let mut headers: Vec<&str> = Vec::new();
    for record in &records {
        for key in record.keys() {
            if !headers.contains(&key.as_str()) {
                headers.push(key);
            }
        }
    }

    let mut table = Table::new(headers.iter().copied()).border(border);
    for record in records {
        let row = headers
            .iter()
            .map(|h| record.get(*h).map(Cell::from).unwrap_or_default());
        table.add_row(row)?;
    }
    tracing::debug!(rows = table.len(), columns = table.num_columns(), "built table from JSON");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn headers_follow_document_order() {
        let value = json!([
            {"name": "Ann", "age": 5, "city": "Oslo"},
            {"zip": "0150", "name": "Bob"}
        ]);
        let table = json_to_table(&value, BorderStyle::Light).unwrap();
        assert_eq!(table.headers(), &["name", "age", "city", "zip"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get_cell(1, "age").unwrap(), &Cell::Empty);
        assert_eq!(table.get_cell(1, "zip").unwrap(), &Cell::from("0150"));
        assert_eq!(table.get_cell(0, "zip").unwrap(), &Cell::Empty);
    }

    #[test]
    fn parsed_text_keeps_key_order() {
        let value: Value = serde_json::from_str(r#"{"zeta": 1, "alpha": 2}"#).unwrap();
        let table = json_to_table(&value, BorderStyle::Light).unwrap();
        assert_eq!(table.headers(), &["zeta", "alpha"]);
    }

    #[test]
    fn single_object_is_one_row() {
        let table = json_to_table(&json!({"a": 1}), BorderStyle::Ascii).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get_border(), BorderStyle::Ascii);
    }

    #[test]
    fn rejects_scalars() {
        assert!(json_to_table(&json!(3), BorderStyle::Light).is_err());
        let err = json_to_table(&json!([{"a": 1}, 2]), BorderStyle::Light).unwrap_err();
        assert!(err.to_string().contains("element 1"));
    }

    #[test]
    fn read_json_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[1, 2]").unwrap();
        assert_eq!(read_json(Some(file.path())).unwrap(), json!([1, 2]));
    }

    #[test]
    fn read_json_missing_file() {
        let err = read_json(Some(Path::new("/no/such/file.json"))).unwrap_err();
        assert!(err.to_string().contains("/no/such/file.json"));
    }
}
