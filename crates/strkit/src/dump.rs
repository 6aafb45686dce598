// Hex dump rendering.

use std::fmt::Write;

/// Renders `buf` as rows of `width` hex byte cells followed by the row's
/// printable text. The last row is padded with `00` cells; bytes outside the
/// printable ASCII range show as `.` in the text column. A zero `width` or
/// empty `buf` yields an empty string.
pub fn byte_string(buf: &[u8], width: usize) -> String {
    if width == 0 || buf.is_empty() {
        return String::new();
    }
    let mut out = String::with_capacity(buf.len() * 4);
    for row in buf.chunks(width) {
        for &b in row {
            let _ = write!(out, "{b:02X} ");
        }
        for _ in row.len()..width {
            out.push_str("00 ");
        }
        out.push(' ');
        for &b in row {
            out.push(if (0x20..0x7f).contains(&b) {
                char::from(b)
            } else {
                '.'
            });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_and_padding() {
        assert_eq!(byte_string(b"ABC", 2), "41 42  AB\n43 00  C\n");
        assert_eq!(byte_string(b"AB", 2), "41 42  AB\n");
    }

    #[test]
    fn unprintable_bytes_show_as_dots() {
        assert_eq!(byte_string(&[0x00, 0x41, 0xFF], 3), "00 41 FF  .A.\n");
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(byte_string(b"", 4), "");
        assert_eq!(byte_string(b"AB", 0), "");
    }
}
