//! Color interning.
//!
//! Token metadata stores colors as small dense ids; the [`ColorMap`] assigns
//! ids in first-request order and resolves them back to canonical strings.
//! Id `0` is reserved for "unset" and never assigned.

use rustc_hash::FxHashMap;

/// Canonicalizes a color string for interning.
///
/// `#RGB` and `#RGBA` shorthands expand to their doubled forms; everything is
/// upper-cased. Strings that do not look like hex colors pass through
/// upper-cased so that interning stays total.
pub fn canonicalize_color(color: &str) -> String {
	let upper = color.to_ascii_uppercase();
	let hex = match upper.strip_prefix('#') {
		Some(hex)
			if (hex.len() == 3 || hex.len() == 4)
				&& hex.bytes().all(|b| b.is_ascii_hexdigit()) =>
		{
			hex
		}
		_ => return upper,
	};
	let mut expanded = String::with_capacity(1 + hex.len() * 2);
	expanded.push('#');
	for ch in hex.chars() {
		expanded.push(ch);
		expanded.push(ch);
	}
	expanded
}

/// Bijection between canonicalized color strings and dense non-zero ids.
///
/// Interning the same canonical string twice returns the same id. The map is
/// mutable only while a theme is being built; a finished [`crate::Theme`]
/// exposes it read-only.
#[derive(Debug, Clone)]
pub struct ColorMap {
	/// Id → color; index 0 is the unused "unset" slot.
	colors: Vec<String>,
	lookup: FxHashMap<String, u32>,
}

impl ColorMap {
	pub fn new() -> Self {
		Self {
			colors: vec![String::new()],
			lookup: FxHashMap::default(),
		}
	}

	/// Canonicalizes `color` and returns its id, assigning the next free id on
	/// first sight.
	pub fn get_id(&mut self, color: &str) -> u32 {
		let canonical = canonicalize_color(color);
		if let Some(&id) = self.lookup.get(&canonical) {
			return id;
		}
		let id = self.colors.len() as u32;
		self.colors.push(canonical.clone());
		self.lookup.insert(canonical, id);
		id
	}

	/// Resolves an id previously returned by [`ColorMap::get_id`].
	pub fn get_color(&self, id: u32) -> Option<&str> {
		if id == 0 {
			return None;
		}
		self.colors.get(id as usize).map(String::as_str)
	}

	/// The id → color table; index 0 is unused.
	pub fn colors(&self) -> &[String] {
		&self.colors
	}

	/// Number of interned colors (excluding the unset slot).
	pub fn len(&self) -> usize {
		self.colors.len() - 1
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Default for ColorMap {
	fn default() -> Self {
		Self::new()
	}
}
