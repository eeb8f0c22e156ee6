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

//! Error types for table construction.

use thiserror::Error;

/// Errors raised while building a [`crate::Table`].
///
/// Both variants describe input the renderer cannot work with; see
/// [`TableError::is_invalid_input`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// No headers were supplied and there is no first record to derive
    /// them from.
    #[error("cannot derive headers: no rows and no explicit headers")]
    NoHeaders,

    #[error("expected exactly 3 border characters (corner, horizontal, vertical), found {found}")]
    InvalidBorders { found: usize },
}

impl TableError {
    /// Whether the error was caused by invalid caller input.
    ///
    /// This is the single failure class the renderer reports.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::NoHeaders | Self::InvalidBorders { .. })
    }
}
