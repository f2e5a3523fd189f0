//! Raw theme normalization.
//!
//! Settings entries carry one selector *list*; the match engine wants one
//! selector per rule. This module flattens each entry into [`ParsedRule`]s,
//! resolving the comma and whitespace structure of selectors and detecting
//! the defaults entry.

use crate::raw::{RawTheme, ScopeSelector};
use crate::style::{self, FontStyle};

/// A normalized theme rule carrying exactly one target selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRule {
	/// Dotted target selector; empty for the defaults rule.
	pub scope: String,
	/// Ancestor selectors that must appear, in the order written, in the
	/// scope stack for the rule to apply. Never `Some` with an empty list.
	pub parent_scopes: Option<Vec<String>>,
	/// Ordinal of the originating settings entry; the final tie-break when
	/// rules are sorted for insertion.
	pub index: usize,
	/// `None` leaves font styling unconstrained.
	pub font_style: Option<FontStyle>,
	/// Color string as written; the interner canonicalizes it later.
	pub foreground: Option<String>,
	pub background: Option<String>,
}

/// Flattens a raw theme into normalized single-selector rules.
///
/// Entries without `settings` are skipped. An entry without a `scope`
/// contributes the defaults rule (empty selector). Empty pieces left over
/// from comma-splitting are dropped.
pub fn parse_theme(raw: &RawTheme) -> Vec<ParsedRule> {
	let mut rules = Vec::new();

	for (index, entry) in raw.settings.iter().enumerate() {
		let Some(settings) = &entry.settings else {
			continue;
		};

		let font_style = settings.font_style.as_deref().map(style::parse_font_style);
		let foreground = settings.foreground.clone();
		let background = settings.background.clone();

		let mut push = |scope: String, parent_scopes: Option<Vec<String>>| {
			rules.push(ParsedRule {
				scope,
				parent_scopes,
				index,
				font_style,
				foreground: foreground.clone(),
				background: background.clone(),
			});
		};

		match &entry.scope {
			None => push(String::new(), None),
			Some(ScopeSelector::One(selector)) => {
				for piece in selector.split(',') {
					parse_selector_piece(piece, &mut push);
				}
			}
			Some(ScopeSelector::Many(selectors)) => {
				for piece in selectors {
					parse_selector_piece(piece, &mut push);
				}
			}
		}
	}

	rules
}

/// Splits one selector piece into its target scope and parent chain.
///
/// The last whitespace-separated token is the target; any preceding tokens
/// are the parent selectors, kept in written (outermost-first) order.
fn parse_selector_piece(piece: &str, push: &mut impl FnMut(String, Option<Vec<String>>)) {
	let mut tokens: Vec<&str> = piece.split_whitespace().collect();
	let Some(scope) = tokens.pop() else {
		return;
	};
	let parent_scopes = if tokens.is_empty() {
		None
	} else {
		Some(tokens.into_iter().map(str::to_string).collect())
	};
	push(scope.to_string(), parent_scopes);
}
