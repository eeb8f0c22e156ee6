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

//! Terminal styling escape sequences.
//!
//! These are SGR (Select Graphic Rendition) codes understood by virtually
//! every terminal emulator. They print nothing themselves, so they must never
//! be counted when measuring or padding text.

/// Turns on bold text.
pub const BOLD_START: &str = "\x1b[1m";

/// Resets all attributes, ending bold text.
pub const BOLD_END: &str = "\x1b[0m";

/// Appends `text` to `buf` wrapped in the bold on / reset pair.
pub(crate) fn push_bold(buf: &mut String, text: &str) {
    buf.push_str(BOLD_START);
    buf.push_str(text);
    buf.push_str(BOLD_END);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_text_in_sgr_pair() {
        let mut buf = String::new();
        push_bold(&mut buf, "name");
        assert_eq!(buf, "\x1b[1mname\x1b[0m");
    }
}
