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

//! Table data model.
//!
//! This module defines the records a table is built from, the border glyphs
//! used to draw it, and the options resolved when a [`crate::Table`] is
//! constructed.

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// One row of data, keyed by column name.
///
/// Keys keep their insertion order, which is what makes deriving headers
/// from the first record deterministic.
pub type Record = IndexMap<String, String>;

/// The three glyphs used to draw a table.
///
/// Serialized as a three character string in corner, horizontal, vertical
/// order, e.g. `"+-|"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Borders {
    /// Drawn at line ends and column junctions of separator lines.
    pub corner: char,
    /// Fill character for separator lines.
    pub horizontal: char,
    /// Divider between cells on header and data lines.
    pub vertical: char,
}

impl Default for Borders {
    fn default() -> Self {
        Self::new('+', '-', '|')
    }
}

impl Borders {
    pub const fn new(corner: char, horizontal: char, vertical: char) -> Self {
        Self {
            corner,
            horizontal,
            vertical,
        }
    }

    /// Builds a border set from a slice of exactly three characters.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidBorders`] if the slice does not hold
    /// exactly three characters.
    pub fn from_chars(chars: &[char]) -> Result<Self, TableError> {
        match chars {
            [corner, horizontal, vertical] => Ok(Self::new(*corner, *horizontal, *vertical)),
            _ => Err(TableError::InvalidBorders { found: chars.len() }),
        }
    }
}

impl FromStr for Borders {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        Self::from_chars(&chars)
    }
}

impl TryFrom<String> for Borders {
    type Error = TableError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Borders> for String {
    fn from(borders: Borders) -> Self {
        borders.to_string()
    }
}

impl fmt::Display for Borders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.corner, self.horizontal, self.vertical)
    }
}

/// Construction options for a [`crate::Table`].
///
/// Every field has a default, so callers only set what they need:
///
/// ```
/// use tablefmt::{Borders, TableOptions};
///
/// let options = TableOptions::default()
///     .headers(["name", "size"])
///     .borders(Borders::new('*', '=', '!'))
///     .bold_header(true);
/// assert!(options.bold_header);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableOptions {
    /// Column order. When `None`, the keys of the first record are used.
    pub headers: Option<Vec<String>>,
    pub borders: Borders,
    /// Wrap header titles in terminal bold sequences.
    pub bold_header: bool,
}

impl TableOptions {
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    pub fn bold_header(mut self, bold_header: bool) -> Self {
        self.bold_header = bold_header;
        self
    }
}
