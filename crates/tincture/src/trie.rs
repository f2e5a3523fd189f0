//! The scope trie.
//!
//! Edges are labelled with single dotted segments of a selector; each node
//! stores the resolved attributes for selectors ending at it plus any
//! parent-qualified rules that apply from this node downward. Children are
//! created as clones of their parent's current state, which is how attribute
//! inheritance is realized without back-references: rules are inserted in
//! ascending selector order, so an ancestor's attributes are final before any
//! descendant node exists.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use crate::order;
use crate::style::FontStyle;

/// The resolved rule stored at a trie node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeTrieRule {
	/// Number of selector segments matched to reach this rule; 0 for the
	/// defaults rule and for the root's not-set rule.
	pub scope_depth: u32,
	/// Ancestor selectors qualifying this rule, outermost first. `None` on a
	/// node's main rule.
	pub parent_scopes: Option<Vec<String>>,
	/// `None` means inherited/unset.
	pub font_style: Option<FontStyle>,
	/// Interned foreground id; `0` means unset.
	pub foreground: u32,
	/// Interned background id; `0` means unset.
	pub background: u32,
}

impl ThemeTrieRule {
	pub(crate) fn unset() -> Self {
		Self {
			scope_depth: 0,
			parent_scopes: None,
			font_style: None,
			foreground: 0,
			background: 0,
		}
	}

	/// Folds an incoming rule's concrete fields over this rule, keeping the
	/// deeper of the two scope depths.
	fn accept_overwrite(
		&mut self,
		scope_depth: u32,
		font_style: Option<FontStyle>,
		foreground: u32,
		background: u32,
	) {
		self.scope_depth = self.scope_depth.max(scope_depth);
		if let Some(style) = font_style {
			self.font_style = Some(style);
		}
		if foreground != 0 {
			self.foreground = foreground;
		}
		if background != 0 {
			self.background = background;
		}
	}
}

/// One trie node: a main rule, parent-qualified rules sorted by descending
/// specificity, and children keyed by the next selector segment.
#[derive(Debug, Clone)]
pub(crate) struct ThemeTrieNode {
	main_rule: ThemeTrieRule,
	parent_rules: Vec<ThemeTrieRule>,
	children: FxHashMap<String, ThemeTrieNode>,
}

impl ThemeTrieNode {
	pub(crate) fn root() -> Self {
		Self {
			main_rule: ThemeTrieRule::unset(),
			parent_rules: Vec::new(),
			children: FxHashMap::default(),
		}
	}

	/// Inserts a rule for `scope` relative to this node.
	///
	/// `scope_depth` is the number of segments already consumed above this
	/// node. Missing intermediate nodes are created seeded with their
	/// parent's current main rule and qualified list.
	pub(crate) fn insert(
		&mut self,
		scope_depth: u32,
		scope: &str,
		parent_scopes: Option<Vec<String>>,
		font_style: Option<FontStyle>,
		foreground: u32,
		background: u32,
	) {
		if scope.is_empty() {
			self.insert_here(scope_depth, parent_scopes, font_style, foreground, background);
			return;
		}

		let (head, tail) = match scope.split_once('.') {
			Some((head, tail)) => (head, tail),
			None => (scope, ""),
		};

		let child = match self.children.entry(head.to_string()) {
			Entry::Occupied(entry) => entry.into_mut(),
			Entry::Vacant(entry) => entry.insert(ThemeTrieNode {
				main_rule: self.main_rule.clone(),
				parent_rules: self.parent_rules.clone(),
				children: FxHashMap::default(),
			}),
		};
		child.insert(scope_depth + 1, tail, parent_scopes, font_style, foreground, background);
	}

	fn insert_here(
		&mut self,
		scope_depth: u32,
		parent_scopes: Option<Vec<String>>,
		font_style: Option<FontStyle>,
		foreground: u32,
		background: u32,
	) {
		let Some(parent_scopes) = parent_scopes else {
			self.main_rule.accept_overwrite(scope_depth, font_style, foreground, background);
			return;
		};

		// A rule constrained by the same parents merges instead of stacking.
		if let Some(existing) = self
			.parent_rules
			.iter_mut()
			.find(|rule| rule.parent_scopes.as_deref() == Some(parent_scopes.as_slice()))
		{
			existing.accept_overwrite(scope_depth, font_style, foreground, background);
			return;
		}

		// Fields the rule leaves unset inherit from the node's main rule.
		let rule = ThemeTrieRule {
			scope_depth,
			parent_scopes: Some(parent_scopes),
			font_style: font_style.or(self.main_rule.font_style),
			foreground: if foreground == 0 { self.main_rule.foreground } else { foreground },
			background: if background == 0 { self.main_rule.background } else { background },
		};

		let at = self
			.parent_rules
			.partition_point(|existing| order::cmp_specificity(existing, &rule).is_le());
		self.parent_rules.insert(at, rule);
	}

	/// Ranks the candidate rules for `scope`, most specific first.
	///
	/// Walks as deep as the scope's segments allow; the deepest reachable
	/// node's main rule and qualified rules are the candidates. At the root
	/// this degenerates to the single not-set rule.
	pub(crate) fn match_scope(&self, scope: &str) -> Vec<ThemeTrieRule> {
		if !scope.is_empty() {
			let (head, tail) = match scope.split_once('.') {
				Some((head, tail)) => (head, tail),
				None => (scope, ""),
			};
			if let Some(child) = self.children.get(head) {
				return child.match_scope(tail);
			}
		}

		let mut rules = Vec::with_capacity(1 + self.parent_rules.len());
		rules.push(self.main_rule.clone());
		rules.extend(self.parent_rules.iter().cloned());
		rules.sort_by(order::cmp_specificity);
		rules
	}
}
