//! Font style bitsets and the `fontStyle` string grammar.

use bitflags::bitflags;

bitflags! {
	/// Font styling applied to a token.
	///
	/// Values pack into the 3-bit font style field of the token metadata word;
	/// new flags must not be added without widening that field.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct FontStyle: u32 {
		const ITALIC = 1;
		const BOLD = 2;
		const UNDERLINE = 4;
	}
}

/// Parses the whitespace-separated `fontStyle` value of a theme rule.
///
/// An empty string is an explicit "no styles". Any unrecognized token resets
/// the whole value to "no styles" rather than applying a partial set. A rule
/// without a `fontStyle` key does not reach this function; its style stays
/// unconstrained (`None` at the rule level).
pub fn parse_font_style(raw: &str) -> FontStyle {
	let mut style = FontStyle::empty();
	for token in raw.split_whitespace() {
		match token {
			"italic" => style |= FontStyle::ITALIC,
			"bold" => style |= FontStyle::BOLD,
			"underline" => style |= FontStyle::UNDERLINE,
			_ => return FontStyle::empty(),
		}
	}
	style
}
