//! String manipulation primitives: case conversion, a struct-tag
//! mini-language parser, substring scanning, text wrapping and random
//! string generation.
//!
//! Every operation is a pure, synchronous transform over an input string.
//! There is no I/O, no persistent state and no internal synchronization;
//! a [`Tag`] instance is owned by one logical caller for the duration of a
//! parse-then-read cycle.
//!
//! # Architecture
//!
//! - [`case`] -- snake/kebab/camel/pascal conversion with a zero-copy fast
//!   path for already-canonical input
//! - [`tag`] -- `name:"value"` tag literal lookup and key/value pair parsing
//! - [`scan`] -- case-fold comparison and search, substring indexes,
//!   wildcard matching, cursor-based segmentation
//! - [`wrap`] -- quoting/unquoting helpers and column-bounded text wrapping
//! - [`dump`] -- hex dump rendering
//! - [`random`] -- charset-driven random string generation (feature
//!   `random`, default on)

pub mod case;
pub mod dump;
#[cfg(feature = "random")]
pub mod random;
pub mod scan;
pub mod tag;
pub mod wrap;

pub use case::{CaseMapping, camel_case, kebab_case, pascal_case, snake_case};
pub use tag::{Tag, Values, lookup_tag};

/// Error type for tag parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    /// [`Tag::tag_key`] was left empty.
    #[error("tag key not specified")]
    KeyNotSpecified,
    /// The configured tag key does not appear in the literal. A literal that
    /// does not conform to the `name:"value"` grammar reports the same way.
    #[error("tag not found")]
    NotFound,
    /// A pair key missing from a non-empty [`Tag::known_pair_keys`]
    /// allowlist, with [`Tag::error_on_unknown_key`] set.
    #[error("unknown pair key: {key}")]
    UnknownKey { key: String },
}
