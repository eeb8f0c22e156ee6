// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Record input.
//!
//! Records arrive as a JSON array of objects. Object keys keep their document
//! order, so the first object decides the default column order.

use std::{
    fs,
    io::{self, Read},
};

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tablefmt::Record;

/// Reads the raw input document from `path`, or from stdin when `path` is
/// absent or `-`.
pub(crate) fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
        Some(path) => fs::read_to_string(path).with_context(|| format!("Failed to read {path}")),
    }
}

/// Parses a JSON array of objects into records.
///
/// # Errors
///
/// Returns an error if the document is not valid JSON, is not an array, or
/// contains an element that is not an object.
pub(crate) fn parse_records(json: &str) -> Result<Vec<Record>> {
    let value: Value = serde_json::from_str(json).context("Invalid JSON")?;

    let Value::Array(items) = value else {
        bail!("Expected a JSON array of objects");
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| -> Result<Record> {
            match item {
                Value::Object(fields) => Ok(fields
                    .into_iter()
                    .filter_map(|(key, value)| cell_text(value).map(|text| (key, text)))
                    .collect()),
                other => bail!("Element {index} is not an object: {other}"),
            }
        })
        .collect()
}

/// Converts a JSON value to the text shown in its cell.
///
/// `null` yields `None`, which leaves the key out of the record so the cell
/// renders empty.
fn cell_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_document_key_order() {
        let records = parse_records(r#"[{"zeta": "z", "alpha": "a"}]"#).unwrap();
        let keys: Vec<&str> = records[0].keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha"]);
    }

    #[test]
    fn converts_scalar_values_to_text() {
        let records =
            parse_records(r#"[{"s": "text", "n": 42, "f": 1.5, "b": true, "null": null}]"#)
                .unwrap();
        let row = &records[0];

        assert_eq!(row["s"], "text");
        assert_eq!(row["n"], "42");
        assert_eq!(row["f"], "1.5");
        assert_eq!(row["b"], "true");
        assert!(!row.contains_key("null"));
    }

    #[test]
    fn nested_values_render_as_json() {
        let records = parse_records(r#"[{"tags": ["a", "b"]}]"#).unwrap();
        assert_eq!(records[0]["tags"], r#"["a","b"]"#);
    }

    #[test]
    fn empty_array_yields_no_records() {
        assert!(parse_records("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_array_documents() {
        let err = parse_records(r#"{"a": "1"}"#).unwrap_err();
        assert!(err.to_string().contains("array"));
    }

    #[test]
    fn rejects_non_object_elements() {
        let err = parse_records(r#"[{"a": "1"}, 2]"#).unwrap_err();
        assert_eq!(err.to_string(), "Element 1 is not an object: 2");
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(parse_records("[{").is_err());
    }
}
