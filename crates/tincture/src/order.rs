//! Deterministic orderings behind rule normalization and specificity ranking.
//!
//! Two total orders are used throughout: plain lexicographic comparison of
//! scope strings, and [`cmp_parent_scopes`] over optional parent-selector
//! lists. Everything a match returns is a pure function of these orders; no
//! ranking ever depends on map iteration or allocation identity.

use std::cmp::Ordering;

use crate::parser::ParsedRule;
use crate::trie::ThemeTrieRule;

/// Compares optional parent-selector lists.
///
/// `None` sorts before any list (including the empty one), shorter lists sort
/// before their extensions, and equal-length lists compare element-wise.
pub fn cmp_parent_scopes(a: Option<&[String]>, b: Option<&[String]>) -> Ordering {
	match (a, b) {
		(None, None) => Ordering::Equal,
		(None, Some(_)) => Ordering::Less,
		(Some(_), None) => Ordering::Greater,
		(Some(a), Some(b)) => a.cmp(b),
	}
}

/// Pre-insertion order for parsed rules.
///
/// Scope first, so that a selector's rules are inserted before any rule for a
/// deeper selector creates the corresponding trie descendants; ties resolve by
/// parent selectors, then by source ordinal.
pub(crate) fn cmp_parsed_rules(a: &ParsedRule, b: &ParsedRule) -> Ordering {
	a.scope
		.cmp(&b.scope)
		.then_with(|| cmp_parent_scopes(a.parent_scopes.as_deref(), b.parent_scopes.as_deref()))
		.then_with(|| a.index.cmp(&b.index))
}

/// Descending specificity: deeper selectors first, then parent-qualified
/// rules ahead of unqualified ones, longer/greater parent lists first.
pub(crate) fn cmp_specificity(a: &ThemeTrieRule, b: &ThemeTrieRule) -> Ordering {
	b.scope_depth
		.cmp(&a.scope_depth)
		.then_with(|| cmp_parent_scopes(b.parent_scopes.as_deref(), a.parent_scopes.as_deref()))
}
