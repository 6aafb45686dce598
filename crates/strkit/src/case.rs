// Case conversion: camelCase, PascalCase, snake_case, kebab-case.
//
// All four conversions are single left-to-right byte scans driven by the
// ASCII classification in `strkit_core::ascii`. Bytes outside `[A-Za-z0-9]`
// (including every byte of a multi-byte UTF-8 sequence) act purely as word
// separators and never reach the output.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use strkit_core::ascii::{is_alphanumeric, is_digit, is_lower, is_upper, to_lower, to_upper};

// ---------------------------------------------------------------------------
// camelCase / PascalCase
// ---------------------------------------------------------------------------

/// Converts `s` to camelCase.
///
/// Words are maximal alphanumeric runs: a digit run is copied verbatim, an
/// uppercase run becomes one capitalized word (`"BAR"` -> `"Bar"`) and a
/// trailing lowercase run attaches to the word before it. The first byte of
/// the result is forced lowercase. Empty or pure-separator input yields an
/// empty string.
pub fn camel_case(s: &str) -> String {
    let mut out = camel(s);
    if let Some(first) = out.get_mut(0..1) {
        first.make_ascii_lowercase();
    }
    out
}

/// Converts `s` to PascalCase.
///
/// Identical segmentation to [`camel_case`], with the first byte of the
/// result forced uppercase.
pub fn pascal_case(s: &str) -> String {
    let mut out = camel(s);
    if let Some(first) = out.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    out
}

// Shared segmentation pass for camel_case and pascal_case. The caller fixes
// the case of the first byte.
fn camel(s: &str) -> String {
    let b = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;

    while i < b.len() {
        // Skip separator bytes between words.
        while i < b.len() && !is_alphanumeric(b[i]) {
            i += 1;
        }
        if i >= b.len() {
            break;
        }

        // Digit runs are copied verbatim, never case-transformed.
        if is_digit(b[i]) {
            while i < b.len() && is_digit(b[i]) {
                out.push(char::from(b[i]));
                i += 1;
            }
            continue;
        }

        if is_upper(b[i]) {
            // An uppercase run becomes a single capitalized word.
            out.push(char::from(b[i]));
            i += 1;
            while i < b.len() && is_upper(b[i]) {
                out.push(char::from(to_lower(b[i])));
                i += 1;
            }
        } else {
            out.push(char::from(to_upper(b[i])));
            i += 1;
        }

        // Trailing lowercase letters stay with the current word.
        while i < b.len() && is_lower(b[i]) {
            out.push(char::from(b[i]));
            i += 1;
        }
    }
    out
}

// ---------------------------------------------------------------------------
// snake_case / kebab-case
// ---------------------------------------------------------------------------

/// Converts `s` to snake_case.
///
/// Input that is already canonical (`lowercase`/`digits` words joined by
/// single interior `_`) is returned borrowed, without allocating.
pub fn snake_case(s: &str) -> Cow<'_, str> {
    separator_case(s, b'_')
}

/// Converts `s` to kebab-case.
///
/// Input that is already canonical is returned borrowed, without allocating.
pub fn kebab_case(s: &str) -> Cow<'_, str> {
    separator_case(s, b'-')
}

fn separator_case(s: &str, separator: u8) -> Cow<'_, str> {
    let b = s.as_bytes();
    let mut idx = 0;
    let mut has_lower = false;
    let mut has_separator = false;
    let mut lowercase_since_separator = false;

    // Fast path: scan over bytes that need no rewriting -- lowercase
    // letters, digits, and the separator itself when followed by a
    // lowercase letter or digit (which rejects leading, trailing and
    // doubled separators).
    while idx < b.len() {
        let c = b[idx];
        if is_lower(c) {
            has_lower = true;
            if has_separator {
                lowercase_since_separator = true;
            }
        } else if is_digit(c) {
            // fine as-is
        } else if c == separator
            && idx > 0
            && idx < b.len() - 1
            && (is_lower(b[idx + 1]) || is_digit(b[idx + 1]))
        {
            has_separator = true;
            lowercase_since_separator = false;
        } else {
            break;
        }
        idx += 1;
    }

    if idx == b.len() {
        // Already canonical; no allocation.
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 4);
    out.push_str(&s[..idx]);

    // A leading uppercase/digit run with no preceding lowercase word (or
    // none since the last separator) folds into the current word without a
    // separator: "FOObar" -> "foobar", "x_FA2" -> "x_fa2".
    if is_upper(b[idx]) && (!has_lower || has_separator && !lowercase_since_separator) {
        while idx < b.len() && (is_upper(b[idx]) || is_digit(b[idx])) {
            out.push(char::from(to_lower(b[idx])));
            idx += 1;
        }
        while idx < b.len() && (is_lower(b[idx]) || is_digit(b[idx])) {
            out.push(char::from(b[idx]));
            idx += 1;
        }
    }

    while idx < b.len() {
        if !is_alphanumeric(b[idx]) {
            idx += 1;
            continue;
        }

        if !out.is_empty() {
            out.push(char::from(separator));
        }

        // One word: an uppercase/digit run lowercased, then a
        // lowercase/digit run verbatim. Digits attach to whichever run they
        // are adjacent to ("2FA" -> "2fa", "FA2" -> "fa2").
        while idx < b.len() && (is_upper(b[idx]) || is_digit(b[idx])) {
            out.push(char::from(to_lower(b[idx])));
            idx += 1;
        }
        while idx < b.len() && (is_lower(b[idx]) || is_digit(b[idx])) {
            out.push(char::from(b[idx]));
            idx += 1;
        }
    }

    Cow::Owned(out)
}

// ---------------------------------------------------------------------------
// CaseMapping
// ---------------------------------------------------------------------------

/// One of the case mappings supported by this crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CaseMapping {
    /// Invalid/undefined mapping.
    #[default]
    Invalid,
    /// Leave input unchanged.
    None,
    /// PascalCase.
    Pascal,
    /// snake_case.
    Snake,
    /// camelCase.
    Camel,
    /// kebab-case.
    Kebab,
}

impl CaseMapping {
    /// Applies the mapping to `s`. [`CaseMapping::None`] and
    /// [`CaseMapping::Invalid`] return the input unchanged.
    pub fn apply<'a>(self, s: &'a str) -> Cow<'a, str> {
        match self {
            CaseMapping::Pascal => Cow::Owned(pascal_case(s)),
            CaseMapping::Snake => snake_case(s),
            CaseMapping::Camel => Cow::Owned(camel_case(s)),
            CaseMapping::Kebab => kebab_case(s),
            CaseMapping::None | CaseMapping::Invalid => Cow::Borrowed(s),
        }
    }

    fn name(self) -> &'static str {
        match self {
            CaseMapping::None => "NoMapping",
            CaseMapping::Pascal => "PascalMapping",
            CaseMapping::Snake => "SnakeMapping",
            CaseMapping::Camel => "CamelMapping",
            CaseMapping::Kebab => "KebabMapping",
            CaseMapping::Invalid => "InvalidMapping",
        }
    }
}

impl fmt::Display for CaseMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`CaseMapping`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown case mapping: {0}")]
pub struct UnknownMapping(pub String);

impl FromStr for CaseMapping {
    type Err = UnknownMapping;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NoMapping" => Ok(CaseMapping::None),
            "PascalMapping" => Ok(CaseMapping::Pascal),
            "SnakeMapping" => Ok(CaseMapping::Snake),
            "CamelMapping" => Ok(CaseMapping::Camel),
            "KebabMapping" => Ok(CaseMapping::Kebab),
            "InvalidMapping" => Ok(CaseMapping::Invalid),
            other => Err(UnknownMapping(other.to_owned())),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CaseMapping {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CaseMapping {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
