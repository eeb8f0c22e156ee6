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

//! # Text tables for the terminal.
//!
//! Renders a list of records as a fixed-width table with configurable border
//! glyphs and optionally bold header titles.
//!
//! ```
//! use tablefmt::{Record, Table, TableOptions};
//!
//! let mut row = Record::new();
//! row.insert("name".into(), "chooui".into());
//! row.insert("lang".into(), "rust".into());
//!
//! let table = Table::with_options(vec![row], TableOptions::default())?;
//! assert_eq!(
//!     table.render(),
//!     "+--------+------+\n\
//!      | name   | lang |\n\
//!      +--------+------+\n\
//!      | chooui | rust |\n\
//!      +--------+------+"
//! );
//! # Ok::<(), tablefmt::TableError>(())
//! ```
//!
//! Column widths are counted in Unicode code points. Characters that occupy
//! two terminal cells will therefore misalign their column.

mod error;
mod model;
mod table;
mod util;

pub use crate::{
    error::TableError,
    model::{Borders, Record, TableOptions},
    table::Table,
    util::term::{BOLD_END, BOLD_START},
};
