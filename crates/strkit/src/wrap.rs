// Quoting/unquoting helpers and column-bounded text wrapping.

use crate::scan::{has_prefix_fold, has_suffix_fold};

/// Removes `prefix` and `suffix` from `s`. Returns `None` unless both are
/// present.
pub fn unwrap<'a>(s: &'a str, prefix: &str, suffix: &str) -> Option<&'a str> {
    s.strip_prefix(prefix)?.strip_suffix(suffix)
}

/// Case-insensitive version of [`unwrap`].
pub fn unwrap_fold<'a>(s: &'a str, prefix: &str, suffix: &str) -> Option<&'a str> {
    if !has_prefix_fold(s, prefix) || !has_suffix_fold(s, suffix) {
        return None;
    }
    if s.len() < prefix.len() + suffix.len() {
        return None;
    }
    s.get(prefix.len()..s.len() - suffix.len())
}

/// Removes single quotes around `s`.
pub fn unquote_single(s: &str) -> Option<&str> {
    unwrap(s, "'", "'")
}

/// Removes double quotes around `s`.
pub fn unquote_double(s: &str) -> Option<&str> {
    unwrap(s, "\"", "\"")
}

/// Wraps `s` within `prefix` and `suffix`.
pub fn wrap(s: &str, prefix: &str, suffix: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + s.len() + suffix.len());
    out.push_str(prefix);
    out.push_str(s);
    out.push_str(suffix);
    out
}

/// Wraps `s` with single quotes.
pub fn quote_single(s: &str) -> String {
    wrap(s, "'", "'")
}

/// Wraps `s` with double quotes.
pub fn quote_double(s: &str) -> String {
    wrap(s, "\"", "\"")
}

/// Wraps `text` into lines at the last space at or before `cols` columns.
///
/// A word longer than `cols` is split at `cols` when `force` is set,
/// otherwise it is placed on a line of its own at the next space. Newlines
/// in the input always start a new line, and spaces at the start of a fresh
/// line are dropped. Operates on characters, so multi-byte input is never
/// split inside a code point.
pub fn wrap_text(text: &str, cols: usize, force: bool) -> Vec<String> {
    let runes: Vec<char> = text.chars().collect();
    let l = runes.len();
    let mut out = Vec::new();

    let mut idx = 0; // scan index
    let mut start = 0; // copy offset
    let mut space: Option<usize> = None; // last space position
    let mut col = 0; // column counter

    while idx < l {
        if runes[idx] == '\n' {
            out.push(line(&runes[start..idx]));
            col = 0;
            start = idx + 1;
            space = None;
            idx += 1;
            continue;
        }

        let is_space = runes[idx] == ' ';
        if is_space && col == 0 {
            idx += 1;
            start = idx;
            continue;
        }

        if col + 1 == cols {
            // Last column is a space.
            if is_space {
                out.push(line(&runes[start..idx]));
                col = 0;
                start = idx + 1;
                space = None;
                idx += 1;
                continue;
            }

            // Wrap at the last space seen on this line.
            if let Some(sp) = space {
                out.push(line(&runes[start..sp]));
                col = cols.saturating_sub(sp - start + 1);
                start = sp + 1;
                space = None;
                idx += 1;
                continue;
            }

            // Split the word here if forced, or when the next character is
            // a space anyway.
            if force || (idx + 1 < l && runes[idx + 1] == ' ') {
                out.push(line(&runes[start..=idx]));
                start = idx + 1;
                idx += 1;
                col = 0;
                space = None;
                continue;
            }
        }

        if is_space {
            if col + 1 > cols {
                // An unforced word ran past cols; break after it.
                out.push(line(&runes[start..idx]));
                col = 0;
                start = idx + 1;
                space = None;
                idx += 1;
                continue;
            }
            space = Some(idx);
        }

        col += 1;
        idx += 1;
    }

    if start < l {
        out.push(line(&runes[start..]));
    }
    out
}

fn line(runes: &[char]) -> String {
    runes.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- unwrap/quote tests --

    #[test]
    fn unwrap_requires_both_ends() {
        assert_eq!(unwrap("[abc]", "[", "]"), Some("abc"));
        assert_eq!(unwrap("[abc", "[", "]"), None);
        assert_eq!(unwrap("abc]", "[", "]"), None);
        assert_eq!(unwrap("abc", "", ""), Some("abc"));
        // A single quote character cannot be both ends at once.
        assert_eq!(unwrap("'", "'", "'"), None);
    }

    #[test]
    fn unwrap_fold_ignores_case() {
        assert_eq!(unwrap_fold("BEGINxEND", "begin", "end"), Some("x"));
        assert_eq!(unwrap_fold("BEGINx", "begin", "end"), None);
        assert_eq!(unwrap_fold("ab", "ab", "b"), None);
    }

    #[test]
    fn quotes() {
        assert_eq!(unquote_single("'a'"), Some("a"));
        assert_eq!(unquote_single("\"a\""), None);
        assert_eq!(unquote_double("\"a\""), Some("a"));
        assert_eq!(unquote_double("\"a"), None);
        assert_eq!(quote_single("a"), "'a'");
        assert_eq!(quote_double("a"), "\"a\"");
        assert_eq!(wrap("a", "<", ">"), "<a>");
    }

    // -- wrap_text tests --

    #[test]
    fn wraps_at_last_space() {
        assert_eq!(wrap_text("aaa bb ccc", 8, false), vec!["aaa bb", "ccc"]);
    }

    #[test]
    fn wraps_at_newlines() {
        assert_eq!(wrap_text("ab\ncd", 10, false), vec!["ab", "cd"]);
        assert_eq!(wrap_text("ab\n\ncd", 10, false), vec!["ab", "", "cd"]);
    }

    #[test]
    fn drops_leading_spaces() {
        assert_eq!(wrap_text("  ab", 5, false), vec!["ab"]);
    }

    #[test]
    fn splits_long_words_when_forced() {
        assert_eq!(wrap_text("abcdefghij", 4, true), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn keeps_long_words_whole_when_not_forced() {
        assert_eq!(wrap_text("abcdefghij xy", 4, false), vec!["abcdefghij", "xy"]);
    }

    #[test]
    fn empty_input_yields_no_lines() {
        assert_eq!(wrap_text("", 10, false), Vec::<String>::new());
    }

    #[test]
    fn multibyte_input_stays_intact() {
        let lines = wrap_text("\u{e4}\u{e4}\u{e4} \u{f6}\u{f6}", 4, false);
        assert_eq!(lines, vec!["\u{e4}\u{e4}\u{e4}", "\u{f6}\u{f6}"]);
    }
}
