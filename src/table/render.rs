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

//! Text layout for tables.
//!
//! A rendered table looks like this with the default borders:
//!
//! ```text
//! +------+-----+
//! | name | age |
//! +------+-----+
//! | Ann  | 41  |
//! +------+-----+
//! ```
//!
//! Lines are joined with `\n` and the output ends with the last separator
//! line, without a trailing newline.

use std::fmt;

use tracing::trace;

use crate::{
    table::Table,
    util::{
        format::{char_len, push_padded, push_spaces},
        term::push_bold,
    },
};

impl Table {
    /// Builds the line drawn above and below the header and after every
    /// record, e.g. `+-----+----+`.
    pub fn separator_line(&self) -> String {
        let borders = self.borders;
        let mut line = String::new();

        line.push(borders.corner);
        for header in &self.headers {
            line.extend(std::iter::repeat_n(
                borders.horizontal,
                self.column_width(header) + 2,
            ));
            line.push(borders.corner);
        }

        line
    }

    /// Renders the whole table.
    ///
    /// The output depends only on the table's contents, so repeated calls
    /// return identical strings.
    pub fn render(&self) -> String {
        let separator = self.separator_line();
        let mut out = String::with_capacity(separator.len() * (2 * self.rows.len() + 4));

        out.push_str(&separator);
        out.push('\n');
        self.push_header_line(&mut out);
        out.push('\n');
        out.push_str(&separator);

        for row in &self.rows {
            out.push('\n');
            out.push(self.borders.vertical);
            for header in &self.headers {
                let value = row.get(header).map(String::as_str).unwrap_or_default();
                out.push(' ');
                push_padded(&mut out, value, self.column_width(header));
                out.push(' ');
                out.push(self.borders.vertical);
            }
            out.push('\n');
            out.push_str(&separator);
        }

        trace!(bytes = out.len(), rows = self.rows.len(), "table rendered");

        out
    }

    /// Appends the header titles, bolded when requested.
    ///
    /// Padding is measured on the bare title so the bold sequences never
    /// shift the column.
    fn push_header_line(&self, out: &mut String) {
        out.push(self.borders.vertical);
        for header in &self.headers {
            out.push(' ');
            if self.bold_header {
                push_bold(out, header);
            } else {
                out.push_str(header);
            }
            push_spaces(out, self.column_width(header).saturating_sub(char_len(header)));
            out.push(' ');
            out.push(self.borders.vertical);
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
