//! Packed token metadata and scope-stack resolution.
//!
//! A token's resolved state travels through the tokenizer as one 32-bit word.
//! The bit layout is an external contract shared with token consumers and
//! must not change:
//!
//! | bits (LSB first) | field         | width |
//! |------------------|---------------|-------|
//! | 0                | is default    | 1     |
//! | 1–8              | language id   | 8     |
//! | 9–11             | token type    | 3     |
//! | 12–14            | font style    | 3     |
//! | 15–23            | foreground id | 9     |
//! | 24–31            | background id | 8     |

use std::sync::Arc;

use crate::style::FontStyle;
use crate::trie::ThemeTrieRule;

const IS_DEFAULT_MASK: u32 = 0b1;

const LANGUAGE_ID_OFFSET: u32 = 1;
const TOKEN_TYPE_OFFSET: u32 = 9;
const FONT_STYLE_OFFSET: u32 = 12;
const FOREGROUND_OFFSET: u32 = 15;
const BACKGROUND_OFFSET: u32 = 24;

const LANGUAGE_ID_MASK: u32 = 0xFF << LANGUAGE_ID_OFFSET;
const TOKEN_TYPE_MASK: u32 = 0b111 << TOKEN_TYPE_OFFSET;
const FONT_STYLE_MASK: u32 = 0b111 << FONT_STYLE_OFFSET;
const FOREGROUND_MASK: u32 = 0x1FF << FOREGROUND_OFFSET;
const BACKGROUND_MASK: u32 = 0xFF << BACKGROUND_OFFSET;

/// Classification stored in the 3-bit token type field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum StandardTokenType {
	#[default]
	Other = 0,
	Comment = 1,
	String = 2,
	RegEx = 3,
}

impl StandardTokenType {
	fn from_bits(bits: u32) -> Self {
		match bits {
			1 => Self::Comment,
			2 => Self::String,
			3 => Self::RegEx,
			_ => Self::Other,
		}
	}
}

/// The packed per-token metadata word.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenMetadata(pub u32);

impl TokenMetadata {
	pub fn is_default(self) -> bool {
		self.0 & IS_DEFAULT_MASK != 0
	}

	pub fn with_default(self, is_default: bool) -> Self {
		if is_default {
			Self(self.0 | IS_DEFAULT_MASK)
		} else {
			Self(self.0 & !IS_DEFAULT_MASK)
		}
	}

	#[inline]
	pub fn language_id(self) -> u32 {
		(self.0 & LANGUAGE_ID_MASK) >> LANGUAGE_ID_OFFSET
	}

	#[inline]
	pub fn token_type(self) -> StandardTokenType {
		StandardTokenType::from_bits((self.0 & TOKEN_TYPE_MASK) >> TOKEN_TYPE_OFFSET)
	}

	#[inline]
	pub fn font_style(self) -> FontStyle {
		FontStyle::from_bits_truncate((self.0 & FONT_STYLE_MASK) >> FONT_STYLE_OFFSET)
	}

	#[inline]
	pub fn foreground(self) -> u32 {
		(self.0 & FOREGROUND_MASK) >> FOREGROUND_OFFSET
	}

	#[inline]
	pub fn background(self) -> u32 {
		(self.0 & BACKGROUND_MASK) >> BACKGROUND_OFFSET
	}

	/// Overwrites the fields the arguments set, inheriting the rest.
	///
	/// A `0` language id or color id and a `None` token type or font style
	/// leave the inherited field in place. The default bit carries over
	/// untouched.
	pub fn set(
		self,
		language_id: u32,
		token_type: Option<StandardTokenType>,
		font_style: Option<FontStyle>,
		foreground: u32,
		background: u32,
	) -> Self {
		let language_id = if language_id == 0 { self.language_id() } else { language_id };
		let token_type = token_type.unwrap_or_else(|| self.token_type());
		let font_style = font_style.unwrap_or_else(|| self.font_style());
		let foreground = if foreground == 0 { self.foreground() } else { foreground };
		let background = if background == 0 { self.background() } else { background };

		Self(
			(self.0 & IS_DEFAULT_MASK)
				| ((language_id << LANGUAGE_ID_OFFSET) & LANGUAGE_ID_MASK)
				| ((token_type as u32) << TOKEN_TYPE_OFFSET)
				| ((font_style.bits() << FONT_STYLE_OFFSET) & FONT_STYLE_MASK)
				| ((foreground << FOREGROUND_OFFSET) & FOREGROUND_MASK)
				| ((background << BACKGROUND_OFFSET) & BACKGROUND_MASK),
		)
	}
}

impl From<u32> for TokenMetadata {
	fn from(word: u32) -> Self {
		Self(word)
	}
}

impl From<TokenMetadata> for u32 {
	fn from(metadata: TokenMetadata) -> Self {
		metadata.0
	}
}

/// Theme-resolved information about one scope name, as handed to the
/// tokenizer when a grammar rule pushes that scope.
#[derive(Debug, Clone)]
pub struct ScopeMetadata {
	pub scope_name: String,
	/// `0` inherits the enclosing language.
	pub language_id: u32,
	/// `None` inherits the enclosing token type.
	pub token_type: Option<StandardTokenType>,
	/// Candidate rules from [`crate::Theme::match_scope`], most specific
	/// first. `None` when the scope was never themed.
	pub theme_data: Option<Vec<ThemeTrieRule>>,
}

/// One level of the scope stack: a scope plus the metadata resolved for the
/// path up to and including it.
///
/// Levels link to their parent, so pushing a scope shares the whole enclosing
/// chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeListElement {
	pub parent: Option<Arc<ScopeListElement>>,
	pub scope: String,
	pub metadata: TokenMetadata,
}

impl ScopeListElement {
	pub fn new(
		parent: Option<Arc<ScopeListElement>>,
		scope: impl Into<String>,
		metadata: TokenMetadata,
	) -> Self {
		Self {
			parent,
			scope: scope.into(),
			metadata,
		}
	}

	/// Enumerates the chain's scopes, outermost first.
	pub fn scope_names(&self) -> Vec<&str> {
		let mut names = Vec::new();
		let mut node = Some(self);
		while let Some(current) = node {
			names.push(current.scope.as_str());
			node = current.parent.as_deref();
		}
		names.reverse();
		names
	}

	/// True when every parent selector prefix-matches some scope of the
	/// chain, in the order written (outermost first).
	///
	/// Selectors are consumed from the back while the chain is walked from
	/// the innermost level outward, which is the same in-order subsequence
	/// test expressed over the chain's natural direction.
	pub(crate) fn matches_parent_scopes(
		element: Option<&ScopeListElement>,
		parent_scopes: Option<&[String]>,
	) -> bool {
		let Some(parent_scopes) = parent_scopes else {
			return true;
		};

		let mut remaining = parent_scopes.len();
		let mut node = element;
		while remaining > 0 {
			let Some(current) = node else {
				return false;
			};
			if scope_prefix_matches(&current.scope, &parent_scopes[remaining - 1]) {
				remaining -= 1;
			}
			node = current.parent.as_deref();
		}
		true
	}
}

/// Segment-wise prefix match: `source.js` matches the selector `source` but
/// `source-js` does not.
fn scope_prefix_matches(scope: &str, selector: &str) -> bool {
	scope == selector
		|| (scope.starts_with(selector) && scope.as_bytes().get(selector.len()) == Some(&b'.'))
}

/// Combines an enclosing scope's resolved word with a newly pushed scope.
///
/// The first candidate rule whose parent selectors match the enclosing chain
/// wins; fields the winner leaves unset inherit from `old_meta`.
pub fn merge_metadata(
	old_meta: TokenMetadata,
	parent: Option<&ScopeListElement>,
	incoming: &ScopeMetadata,
) -> TokenMetadata {
	let mut font_style = None;
	let mut foreground = 0;
	let mut background = 0;

	if let Some(theme_data) = &incoming.theme_data {
		for rule in theme_data {
			if ScopeListElement::matches_parent_scopes(parent, rule.parent_scopes.as_deref()) {
				font_style = rule.font_style;
				foreground = rule.foreground;
				background = rule.background;
				break;
			}
		}
	}

	old_meta.set(incoming.language_id, incoming.token_type, font_style, foreground, background)
}
