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

//! Fixed-width text tables.
//!
//! A [`Table`] is built once from its records and options, then rendered any
//! number of times. Column widths are measured at construction and never
//! change afterwards, so a table holds no interior mutability and can be
//! shared between threads and rendered concurrently.

mod render;

use std::collections::HashMap;

use tracing::debug;

use crate::{
    error::TableError,
    model::{Borders, Record, TableOptions},
    util::format::char_len,
};

/// A set of records laid out under a fixed list of column headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Record>,
    borders: Borders,
    bold_header: bool,
    widths: HashMap<String, usize>,
}

impl Table {
    /// Creates a table with default options.
    ///
    /// Headers are taken from the keys of the first record, in their
    /// insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::NoHeaders`] if `rows` is empty.
    pub fn new(rows: Vec<Record>) -> Result<Self, TableError> {
        Self::with_options(rows, TableOptions::default())
    }

    /// Creates a table from `rows`, resolving every unset option to its
    /// default.
    ///
    /// Headers that name a column missing from some or all records are
    /// allowed, those cells render empty. Record keys that are not headers
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::NoHeaders`] if no headers were given and `rows`
    /// is empty.
    pub fn with_options(rows: Vec<Record>, options: TableOptions) -> Result<Self, TableError> {
        let TableOptions {
            headers,
            borders,
            bold_header,
        } = options;

        let headers = match headers {
            Some(headers) => headers,
            None => {
                let first = rows.first().ok_or(TableError::NoHeaders)?;
                debug!(count = first.len(), "deriving headers from first record");
                first.keys().cloned().collect()
            }
        };

        let widths = column_widths(&headers, &rows);

        debug!(
            rows = rows.len(),
            columns = headers.len(),
            bold_header,
            %borders,
            "table created"
        );

        Ok(Self {
            headers,
            rows,
            borders,
            bold_header,
            widths,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn borders(&self) -> Borders {
        self.borders
    }

    pub fn bold_header(&self) -> bool {
        self.bold_header
    }

    /// Content width of the named column in code points, excluding the
    /// single space of padding on either side.
    pub fn width(&self, header: &str) -> Option<usize> {
        self.widths.get(header).copied()
    }

    pub fn widths(&self) -> &HashMap<String, usize> {
        &self.widths
    }

    /// Width of a column that is known to exist.
    fn column_width(&self, header: &str) -> usize {
        self.width(header).unwrap_or_else(|| char_len(header))
    }
}

/// Measures every column: the longest of its title and each record's value,
/// a missing value counting as empty.
///
/// Duplicate headers share one entry.
fn column_widths(headers: &[String], rows: &[Record]) -> HashMap<String, usize> {
    let mut widths = HashMap::with_capacity(headers.len());

    for header in headers {
        let longest_value = rows
            .iter()
            .filter_map(|row| row.get(header))
            .map(|value| char_len(value))
            .max()
            .unwrap_or(0);

        widths.insert(header.clone(), char_len(header).max(longest_value));
    }

    widths
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn derives_headers_from_first_record_in_order() {
        let table = Table::new(vec![
            record(&[("zeta", "1"), ("alpha", "2")]),
            record(&[("other", "3")]),
        ])
        .unwrap();

        assert_eq!(table.headers(), ["zeta", "alpha"]);
    }

    #[test]
    fn empty_rows_without_headers_fail() {
        let err = Table::new(vec![]).unwrap_err();
        assert_eq!(err, TableError::NoHeaders);
        assert!(err.is_invalid_input());
    }

    #[test]
    fn empty_rows_with_headers_succeed() {
        let table = Table::with_options(vec![], TableOptions::default().headers(["id", "name"]))
            .unwrap();

        assert_eq!(table.width("id"), Some(2));
        assert_eq!(table.width("name"), Some(4));
        assert!(table.rows().is_empty());
    }

    #[test]
    fn width_covers_header_and_values() {
        let table = Table::with_options(
            vec![
                record(&[("a", "12345"), ("long header", "x")]),
                record(&[("a", "1")]),
            ],
            TableOptions::default().headers(["a", "long header", "missing"]),
        )
        .unwrap();

        assert_eq!(table.width("a"), Some(5));
        assert_eq!(table.width("long header"), Some(11));
        assert_eq!(table.width("missing"), Some(7));
        assert_eq!(table.width("not a header"), None);
    }

    #[test]
    fn width_counts_code_points() {
        let table = Table::new(vec![record(&[("k", "日本語"), ("é", "")])]).unwrap();

        assert_eq!(table.width("k"), Some(3));
        assert_eq!(table.width("é"), Some(1));
    }

    #[test]
    fn extra_keys_do_not_get_widths() {
        let table = Table::with_options(
            vec![record(&[("a", "1"), ("ignored", "a very long value")])],
            TableOptions::default().headers(["a"]),
        )
        .unwrap();

        assert_eq!(table.widths().len(), 1);
        assert_eq!(table.width("ignored"), None);
    }

    #[test]
    fn duplicate_headers_share_a_width() {
        let table = Table::with_options(
            vec![record(&[("a", "123")])],
            TableOptions::default().headers(["a", "a"]),
        )
        .unwrap();

        assert_eq!(table.headers().len(), 2);
        assert_eq!(table.widths().len(), 1);
        assert_eq!(table.width("a"), Some(3));
    }

    #[test]
    fn table_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Table>();
    }
}
