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

/// Returns the length of `text` in Unicode code points.
///
/// This is neither the byte length nor the display width: double-width
/// characters count as one and will visually misalign a column.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(char_len("abc"), 3);
/// assert_eq!(char_len("héllo"), 5);
/// ```
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Appends `count` spaces to `buf`.
pub(crate) fn push_spaces(buf: &mut String, count: usize) {
    buf.extend(std::iter::repeat_n(' ', count));
}

/// Appends `text` to `buf`, right-padded with spaces to `width` code points.
///
/// Text already at or beyond `width` is appended unpadded.
pub(crate) fn push_padded(buf: &mut String, text: &str, width: usize) {
    buf.push_str(text);
    push_spaces(buf, width.saturating_sub(char_len(text)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_code_points_not_bytes() {
        assert_eq!(char_len(""), 0);
        assert_eq!(char_len("abc"), 3);
        assert_eq!(char_len("héllo"), 5);
        assert_eq!(char_len("日本"), 2);
    }

    #[test]
    fn pads_to_width() {
        let mut buf = String::new();
        push_padded(&mut buf, "ab", 5);
        assert_eq!(buf, "ab   ");
    }

    #[test]
    fn pads_multibyte_by_code_point() {
        let mut buf = String::new();
        push_padded(&mut buf, "é", 3);
        assert_eq!(buf, "é  ");
    }

    #[test]
    fn never_truncates() {
        let mut buf = String::new();
        push_padded(&mut buf, "longer", 2);
        assert_eq!(buf, "longer");
    }
}
