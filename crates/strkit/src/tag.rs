// Tag literal lookup and key/value pair parsing.
//
// A tag literal is a Go-convention string of space-separated `name:"value"`
// entries as found in struct field tags. `lookup_tag` extracts one named
// value; `Tag::parse` then splits that value into bare keys and `key=value`
// pairs collected in `Values`.

use hashbrown::HashMap;

use crate::TagError;
use crate::scan::segment;
use crate::wrap::{unquote_double, unwrap};

// ---------------------------------------------------------------------------
// Literal lookup
// ---------------------------------------------------------------------------

/// Returns the value associated with `key` in the tag literal.
///
/// The literal must follow the conventional format: space-separated
/// `name:"quoted value"` entries with backslash escapes inside the quotes.
/// Returns `None` when the key is absent; a literal that does not conform to
/// the grammar aborts the scan and reports the same way, the two cases are
/// deliberately not distinguished.
pub fn lookup_tag(literal: &str, key: &str) -> Option<String> {
    let mut rest = literal.as_bytes();
    loop {
        // Skip leading spaces.
        let mut i = 0;
        while i < rest.len() && rest[i] == b' ' {
            i += 1;
        }
        rest = &rest[i..];
        if rest.is_empty() {
            return None;
        }

        // Scan the name token. An empty name, an embedded space, quote or
        // control character, or a missing `:"` is a syntax error.
        i = 0;
        while i < rest.len()
            && rest[i] > b' '
            && rest[i] != b':'
            && rest[i] != b'"'
            && rest[i] != 0x7f
        {
            i += 1;
        }
        if i == 0 || i + 1 >= rest.len() || rest[i] != b':' || rest[i + 1] != b'"' {
            return None;
        }
        let name = &rest[..i];
        rest = &rest[i + 1..];

        // Scan the quoted value; a backslash escapes the next byte
        // unconditionally.
        i = 1;
        while i < rest.len() && rest[i] != b'"' {
            if rest[i] == b'\\' {
                i += 1;
            }
            i += 1;
        }
        if i >= rest.len() {
            return None;
        }
        let quoted = &rest[1..i];
        rest = &rest[i + 1..];

        if name == key.as_bytes() {
            return unquote(quoted);
        }
    }
}

// Decodes the standard backslash escapes inside a quoted tag value. Returns
// `None` on an unknown or truncated escape, or when the decoded bytes are
// not valid UTF-8.
fn unquote(quoted: &[u8]) -> Option<String> {
    let mut out = Vec::with_capacity(quoted.len());
    let mut i = 0;
    while i < quoted.len() {
        let b = quoted[i];
        if b != b'\\' {
            out.push(b);
            i += 1;
            continue;
        }
        i += 1;
        let escape = *quoted.get(i)?;
        i += 1;
        match escape {
            b'a' => out.push(0x07),
            b'b' => out.push(0x08),
            b'f' => out.push(0x0c),
            b'n' => out.push(b'\n'),
            b'r' => out.push(b'\r'),
            b't' => out.push(b'\t'),
            b'v' => out.push(0x0b),
            b'\\' => out.push(b'\\'),
            b'\'' => out.push(b'\''),
            b'"' => out.push(b'"'),
            b'x' => {
                let hex = quoted.get(i..i + 2)?;
                out.push(u8::try_from(hex_value(hex)?).ok()?);
                i += 2;
            }
            b'u' => {
                let hex = quoted.get(i..i + 4)?;
                push_char(&mut out, hex_value(hex)?)?;
                i += 4;
            }
            b'U' => {
                let hex = quoted.get(i..i + 8)?;
                push_char(&mut out, hex_value(hex)?)?;
                i += 8;
            }
            b'0'..=b'7' => {
                // Three-digit octal escape, first digit already consumed.
                let oct = quoted.get(i - 1..i + 2)?;
                let mut value: u32 = 0;
                for &d in oct {
                    if !(b'0'..=b'7').contains(&d) {
                        return None;
                    }
                    value = value * 8 + u32::from(d - b'0');
                }
                out.push(u8::try_from(value).ok()?);
                i += 2;
            }
            _ => return None,
        }
    }
    String::from_utf8(out).ok()
}

fn hex_value(digits: &[u8]) -> Option<u32> {
    let mut value: u32 = 0;
    for &d in digits {
        value = value * 16 + char::from(d).to_digit(16)?;
    }
    Some(value)
}

fn push_char(out: &mut Vec<u8>, code: u32) -> Option<()> {
    let ch = char::from_u32(code)?;
    let mut buf = [0u8; 4];
    out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
    Some(())
}

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

/// A parsed multi-map of `key` / `key=value` pairs from a tag value.
///
/// An entry can hold multiple values; a key that appeared without any
/// `=value` maps to an empty sequence, distinguishable from "never seen"
/// through [`Values::exists`]. Entries only grow; [`Values::clear`] resets
/// the map between independent parses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values {
    entries: HashMap<String, Vec<String>>,
}

impl Values {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `values` to the entry under `key`, creating the entry if
    /// absent.
    pub fn add<'a, I>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let entry = self.entries.entry(key.to_owned()).or_default();
        entry.extend(values.into_iter().map(str::to_owned));
    }

    /// Registers `key` with no values, creating an empty entry if absent.
    pub fn add_key(&mut self, key: &str) {
        self.entries.entry(key.to_owned()).or_default();
    }

    /// Returns true if an entry under `key` exists.
    pub fn exists(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns true if `key` exists and its first value is non-empty.
    pub fn exists_non_empty(&self, key: &str) -> bool {
        !self.first(key).is_empty()
    }

    /// Returns the first value under `key`, or an empty string if the key is
    /// absent or holds no values.
    pub fn first(&self, key: &str) -> &str {
        self.entries
            .get(key)
            .and_then(|values| values.first())
            .map_or("", String::as_str)
    }

    /// Assigns the first value under `key` to `out` if the key exists with a
    /// non-empty first value. Returns whether the assignment happened.
    pub fn set(&self, key: &str, out: &mut String) -> bool {
        if self.exists_non_empty(key) {
            *out = self.first(key).to_owned();
            return true;
        }
        false
    }

    /// Returns the values under `key`.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Number of keys seen.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no key has been seen.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates over `(key, values)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }
}

// ---------------------------------------------------------------------------
// Tag
// ---------------------------------------------------------------------------

const DEFAULT_SEPARATOR: &str = ",";

/// Parser configuration and result for one tag key.
///
/// A `Tag` is configured by the caller, then mutated in place by
/// [`Tag::parse`]: `values` receives the parsed pairs and `raw` the raw
/// payload. Repeated parses accumulate into `values` unless
/// [`Values::clear`] is called in between; that accumulation is intended.
/// An instance must not be parsed and read concurrently.
#[derive(Debug, Clone, Default)]
pub struct Tag {
    /// Name of the tag to look up in the literal. Required.
    pub tag_key: String,
    /// Pair delimiter inside the tag value. Empty selects the default `,`.
    pub separator: String,
    /// Recognized pair keys. Empty accepts every key.
    pub known_pair_keys: Vec<String>,
    /// With a non-empty `known_pair_keys`, an unknown key aborts the parse
    /// when set and is silently skipped when unset.
    pub error_on_unknown_key: bool,
    /// The raw payload of the parsed tag value: everything after the first
    /// `=`, or empty when the value carries no `=`. Set by `parse`.
    pub raw: String,
    /// Parsed pairs. Populated by `parse`.
    pub values: Values,
}

impl Tag {
    /// Creates a parser for `tag_key` with default settings.
    pub fn new(tag_key: &str) -> Self {
        Tag {
            tag_key: tag_key.to_owned(),
            ..Tag::default()
        }
    }

    fn separator(&self) -> &str {
        if self.separator.is_empty() {
            DEFAULT_SEPARATOR
        } else {
            &self.separator
        }
    }

    fn valid_key(&self, key: &str) -> bool {
        self.known_pair_keys.is_empty() || self.known_pair_keys.iter().any(|k| k == key)
    }

    /// Parses a raw tag literal, possibly wrapped in backquotes and
    /// containing other tags, into [`Tag::values`].
    ///
    /// The value under [`Tag::tag_key`] is split on [`Tag::separator`] into
    /// bare keys and `key=value` pairs; a repeated key accumulates values.
    /// When the tag key is absent the error is [`TagError::NotFound`] and
    /// `values` is left untouched. Entries added before an unknown-key abort
    /// are retained.
    pub fn parse(&mut self, literal: &str) -> Result<(), TagError> {
        if self.tag_key.is_empty() {
            return Err(TagError::KeyNotSpecified);
        }
        let literal = unwrap(literal, "`", "`").unwrap_or(literal);
        let Some(value) = lookup_tag(literal, &self.tag_key) else {
            return Err(TagError::NotFound);
        };
        self.raw = value
            .split_once('=')
            .map(|(_, raw)| raw.to_owned())
            .unwrap_or_default();
        self.parse_pairs(&value, false)
    }

    /// Parses doc comment lines into [`Tag::values`].
    ///
    /// A line participates when, after an optional leading `//`, it starts
    /// with `<tag_key>:`; the rest of the line is unquoted and fed through
    /// the same pair grammar as [`Tag::parse`], with whitespace trimmed
    /// around keys and values.
    pub fn parse_docs<'a, I>(&mut self, lines: I) -> Result<(), TagError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        if self.tag_key.is_empty() {
            return Err(TagError::KeyNotSpecified);
        }
        let prefix = format!("{}:", self.tag_key);
        for line in lines {
            let line = line.strip_prefix("//").unwrap_or(line).trim();
            let Some(rest) = line.strip_prefix(prefix.as_str()) else {
                continue;
            };
            let rest = unquote_double(rest).unwrap_or(rest);
            self.parse_pairs(rest, true)?;
        }
        Ok(())
    }

    // Shared pair grammar for `parse` and `parse_docs`. Empty segments are
    // skipped; unknown keys abort or are skipped per `error_on_unknown_key`.
    fn parse_pairs(&mut self, value: &str, trim: bool) -> Result<(), TagError> {
        let sep = self.separator().to_owned();
        let mut cursor = Some(0);
        while let Some(start) = cursor {
            let (seg, next) = segment(value, &sep, start);
            cursor = next;
            let seg = if trim { seg.trim() } else { seg };
            if seg.is_empty() {
                continue;
            }
            let (key, val) = match seg.split_once('=') {
                Some((key, val)) if trim => (key.trim(), Some(val.trim())),
                Some((key, val)) => (key, Some(val)),
                None => (seg, None),
            };
            if !self.valid_key(key) {
                if self.error_on_unknown_key {
                    return Err(TagError::UnknownKey {
                        key: key.to_owned(),
                    });
                }
                continue;
            }
            match val {
                Some(val) => self.values.add(key, [val]),
                None => self.values.add_key(key),
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
