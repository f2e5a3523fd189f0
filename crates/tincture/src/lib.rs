#![deny(clippy::print_stderr)]

//! TextMate-style theme resolution.
//!
//! A theme is an ordered list of rules, each pairing a dotted scope selector
//! (optionally qualified by ancestor selectors) with visual attributes. This
//! crate normalizes those rules, indexes them into a scope trie, and answers
//! for any scope produced by a tokenizer which foreground, background, and
//! font style apply, packing the result into the 32-bit metadata word shared
//! with token consumers.
//!
//! # Architecture
//!
//! * [`raw`]: the deserializable theme document shape
//! * [`parser`]: normalization of settings entries into single-selector rules
//! * [`color`]: interning of color strings into dense packed ids
//! * [`order`]: deterministic comparators for rule sorting and specificity
//! * [`trie`]: the scope trie with attribute inheritance
//! * [`theme`]: building and querying immutable themes
//! * [`metadata`]: the packed token metadata word and scope-stack merging
//!
//! Theme file I/O and tokenization live with the host application. A built
//! [`Theme`] is immutable and safe to share across concurrent matchers.

pub mod color;
pub mod metadata;
pub mod order;
pub mod parser;
pub mod raw;
pub mod style;
pub mod theme;
pub mod trie;

pub use color::ColorMap;
pub use metadata::{
	ScopeListElement, ScopeMetadata, StandardTokenType, TokenMetadata, merge_metadata,
};
pub use parser::{ParsedRule, parse_theme};
pub use raw::{RawSettings, RawTheme, RawThemeSetting, ScopeSelector, ThemeError};
pub use style::FontStyle;
pub use theme::Theme;
pub use trie::ThemeTrieRule;
