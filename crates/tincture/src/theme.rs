//! Theme building and scope matching.

use tracing::debug;

use crate::color::ColorMap;
use crate::order;
use crate::parser::{self, ParsedRule};
use crate::raw::RawTheme;
use crate::style::FontStyle;
use crate::trie::{ThemeTrieNode, ThemeTrieRule};

/// Foreground used when no defaults rule supplies one.
const DEFAULT_FOREGROUND: &str = "#000000";
/// Background used when no defaults rule supplies one.
const DEFAULT_BACKGROUND: &str = "#ffffff";

/// An immutable, queryable theme: interned colors, the defaults rule, and the
/// scope trie.
///
/// Queries never mutate; a built theme can be shared freely across concurrent
/// matchers.
#[derive(Debug, Clone)]
pub struct Theme {
	color_map: ColorMap,
	defaults: ThemeTrieRule,
	root: ThemeTrieNode,
}

impl Theme {
	/// Builds a theme from a raw settings document.
	pub fn from_raw(raw: &RawTheme) -> Self {
		Self::from_parsed_rules(parser::parse_theme(raw))
	}

	/// Builds a theme from already-normalized rules.
	pub fn from_parsed_rules(mut rules: Vec<ParsedRule>) -> Self {
		rules.sort_by(order::cmp_parsed_rules);

		let mut color_map = ColorMap::new();

		// Leading empty-selector rules fold into the defaults; a field a rule
		// leaves unset keeps the previous value.
		let mut default_font_style = FontStyle::empty();
		let mut default_foreground = DEFAULT_FOREGROUND.to_string();
		let mut default_background = DEFAULT_BACKGROUND.to_string();

		let mut rules = rules.into_iter().peekable();
		while let Some(rule) =
			rules.next_if(|rule| rule.scope.is_empty() && rule.parent_scopes.is_none())
		{
			if let Some(style) = rule.font_style {
				default_font_style = style;
			}
			if let Some(foreground) = rule.foreground {
				default_foreground = foreground;
			}
			if let Some(background) = rule.background {
				default_background = background;
			}
		}

		let defaults = ThemeTrieRule {
			scope_depth: 0,
			parent_scopes: None,
			font_style: Some(default_font_style),
			foreground: color_map.get_id(&default_foreground),
			background: color_map.get_id(&default_background),
		};

		let mut root = ThemeTrieNode::root();
		let mut rule_count = 0usize;
		for rule in rules {
			rule_count += 1;
			let foreground = rule.foreground.as_deref().map_or(0, |color| color_map.get_id(color));
			let background = rule.background.as_deref().map_or(0, |color| color_map.get_id(color));
			root.insert(0, &rule.scope, rule.parent_scopes, rule.font_style, foreground, background);
		}

		debug!(rules = rule_count, colors = color_map.len(), "built theme");
		Self { color_map, defaults, root }
	}

	/// Ranks the candidate rules for a single scope, most specific first.
	///
	/// An unknown scope yields the single not-set rule; callers fall back to
	/// [`Theme::defaults`] when every returned field is unset.
	pub fn match_scope(&self, scope: &str) -> Vec<ThemeTrieRule> {
		self.root.match_scope(scope)
	}

	/// The always-concrete defaults rule.
	pub fn defaults(&self) -> &ThemeTrieRule {
		&self.defaults
	}

	/// The id → color table; index 0 is unused.
	pub fn color_map(&self) -> &[String] {
		self.color_map.colors()
	}

	/// Resolves an interned color id. `0` (unset) has no color.
	pub fn color(&self, id: u32) -> Option<&str> {
		self.color_map.get_color(id)
	}
}
