#![allow(unused_crate_dependencies)]

//! End-to-end matching behavior of built themes.

use tincture::{FontStyle, RawTheme, Theme};

fn theme(json: &str) -> Theme {
	Theme::from_raw(&RawTheme::from_json_str(json).expect("valid theme json"))
}

fn color<'a>(theme: &'a Theme, id: u32) -> &'a str {
	theme.color(id).expect("interned color")
}

#[test]
fn deeper_selector_outranks_parent_qualified_rule() {
	let theme = theme(
		r##"{
			"settings": [
				{ "settings": { "foreground": "#100000", "background": "#200000" } },
				{ "scope": "punctuation.definition.string.begin.html", "settings": { "foreground": "#300000" } },
				{ "scope": "meta.tag punctuation.definition.string", "settings": { "foreground": "#400000" } }
			]
		}"##,
	);

	let matches = theme.match_scope("punctuation.definition.string.begin.html");
	assert_eq!(matches.len(), 2);

	assert_eq!(matches[0].scope_depth, 5);
	assert_eq!(matches[0].parent_scopes, None);
	assert_eq!(color(&theme, matches[0].foreground), "#300000");

	assert_eq!(matches[1].scope_depth, 3);
	assert_eq!(
		matches[1].parent_scopes.as_deref(),
		Some(&["meta.tag".to_string()][..])
	);
	assert_eq!(color(&theme, matches[1].foreground), "#400000");
}

#[test]
fn qualified_rules_outrank_the_main_rule_at_equal_depth() {
	let theme = theme(
		r##"{
			"settings": [
				{ "settings": { "foreground": "#100000", "background": "#200000" } },
				{ "scope": "c a", "settings": { "foreground": "#300000" } },
				{ "scope": "d a.b", "settings": { "foreground": "#400000" } },
				{ "scope": "a", "settings": { "foreground": "#500000" } }
			]
		}"##,
	);

	let matches = theme.match_scope("a.b");
	assert_eq!(matches.len(), 3);

	assert_eq!(matches[0].scope_depth, 2);
	assert_eq!(matches[0].parent_scopes.as_deref(), Some(&["d".to_string()][..]));
	assert_eq!(color(&theme, matches[0].foreground), "#400000");

	assert_eq!(matches[1].scope_depth, 1);
	assert_eq!(matches[1].parent_scopes.as_deref(), Some(&["c".to_string()][..]));
	assert_eq!(color(&theme, matches[1].foreground), "#300000");

	assert_eq!(matches[2].scope_depth, 1);
	assert_eq!(matches[2].parent_scopes, None);
	assert_eq!(color(&theme, matches[2].foreground), "#500000");
}

#[test]
fn children_inherit_what_they_do_not_override() {
	let theme = theme(
		r##"{
			"settings": [
				{ "settings": { "foreground": "#F8F8F2", "background": "#272822" } },
				{ "scope": "var", "settings": { "fontStyle": "bold", "foreground": "#ff0000" } },
				{ "scope": "var.identifier", "settings": { "foreground": "#00ff00" } }
			]
		}"##,
	);

	let matches = theme.match_scope("var.identifier");
	let rule = &matches[0];
	assert_eq!(rule.scope_depth, 2);
	assert_eq!(rule.font_style, Some(FontStyle::BOLD));
	assert_eq!(color(&theme, rule.foreground), "#00FF00");
	assert_eq!(rule.background, 0);
}

#[test]
fn unknown_scope_yields_the_not_set_rule() {
	let theme = theme(
		r##"{
			"settings": [
				{ "settings": { "foreground": "#100000", "background": "#200000" } },
				{ "scope": "source", "settings": { "foreground": "#300000" } }
			]
		}"##,
	);

	let matches = theme.match_scope("bazz");
	assert_eq!(matches.len(), 1);
	let rule = &matches[0];
	assert_eq!(rule.scope_depth, 0);
	assert_eq!(rule.parent_scopes, None);
	assert_eq!(rule.font_style, None);
	assert_eq!(rule.foreground, 0);
	assert_eq!(rule.background, 0);
}

#[test]
fn comma_selectors_index_as_separate_rules() {
	let theme = theme(
		r##"{
			"settings": [
				{ "scope": "source, something", "settings": { "background": "#100000" } }
			]
		}"##,
	);

	for scope in ["source", "something"] {
		let matches = theme.match_scope(scope);
		assert_eq!(matches[0].scope_depth, 1, "scope {scope}");
		assert_eq!(color(&theme, matches[0].background), "#100000", "scope {scope}");
	}
}

#[test]
fn duplicate_qualified_rules_collapse_into_one_entry() {
	let theme = theme(
		r##"{
			"settings": [
				{ "scope": "meta.tag entity", "settings": { "foreground": "#300000" } },
				{ "scope": "meta.tag entity", "settings": { "fontStyle": "italic" } }
			]
		}"##,
	);

	let matches = theme.match_scope("entity");
	let qualified: Vec<_> = matches.iter().filter(|r| r.parent_scopes.is_some()).collect();
	assert_eq!(qualified.len(), 1);
	assert_eq!(color(&theme, qualified[0].foreground), "#300000");
	assert_eq!(qualified[0].font_style, Some(FontStyle::ITALIC));
}

#[test]
fn defaults_are_always_concrete() {
	let empty = Theme::from_raw(&RawTheme::default());
	let defaults = empty.defaults();
	assert_eq!(empty.color(defaults.foreground), Some("#000000"));
	assert_eq!(empty.color(defaults.background), Some("#FFFFFF"));
	assert_eq!(defaults.font_style, Some(FontStyle::empty()));

	let overridden = theme(
		r##"{
			"settings": [
				{ "settings": { "fontStyle": "italic", "foreground": "#aBc" } }
			]
		}"##,
	);
	let defaults = overridden.defaults();
	assert_eq!(overridden.color(defaults.foreground), Some("#AABBCC"));
	assert_eq!(overridden.color(defaults.background), Some("#FFFFFF"));
	assert_eq!(defaults.font_style, Some(FontStyle::ITALIC));
}

#[test]
fn later_defaults_entries_override_earlier_ones() {
	let theme = theme(
		r##"{
			"settings": [
				{ "settings": { "foreground": "#111111", "background": "#222222" } },
				{ "settings": { "foreground": "#333333" } }
			]
		}"##,
	);

	let defaults = theme.defaults();
	assert_eq!(color(&theme, defaults.foreground), "#333333");
	assert_eq!(color(&theme, defaults.background), "#222222");
}

#[test]
fn matching_is_deterministic() {
	let theme = theme(
		r##"{
			"settings": [
				{ "settings": { "foreground": "#100000", "background": "#200000" } },
				{ "scope": "c a", "settings": { "foreground": "#300000" } },
				{ "scope": "d a.b", "settings": { "foreground": "#400000" } },
				{ "scope": "a", "settings": { "foreground": "#500000" } }
			]
		}"##,
	);

	let first = theme.match_scope("a.b.c");
	for _ in 0..16 {
		assert_eq!(theme.match_scope("a.b.c"), first);
	}
}

#[test]
fn extending_a_scope_preserves_the_main_attributes() {
	let theme = theme(
		r##"{
			"settings": [
				{ "scope": "source", "settings": { "fontStyle": "underline", "foreground": "#300000" } }
			]
		}"##,
	);

	let base = theme.match_scope("source");
	let extended = theme.match_scope("source.js.embedded");

	let base_main = base.iter().find(|r| r.parent_scopes.is_none()).unwrap();
	let extended_main = extended.iter().find(|r| r.parent_scopes.is_none()).unwrap();
	assert_eq!(base_main.font_style, extended_main.font_style);
	assert_eq!(base_main.foreground, extended_main.foreground);
	assert_eq!(base_main.background, extended_main.background);
}

#[test]
fn color_map_index_zero_is_unused() {
	let theme = theme(
		r##"{
			"settings": [
				{ "settings": { "foreground": "#100000", "background": "#200000" } }
			]
		}"##,
	);

	let colors = theme.color_map();
	assert_eq!(colors.len(), 3);
	assert!(colors[0].is_empty());
	assert_eq!(colors[1], "#100000");
	assert_eq!(colors[2], "#200000");
}

#[test]
fn json_and_constructed_documents_build_the_same_theme() {
	use tincture::{RawSettings, RawThemeSetting, ScopeSelector};

	let from_json = theme(
		r##"{
			"settings": [
				{ "settings": { "foreground": "#100000", "background": "#200000" } },
				{ "scope": "keyword.control", "settings": { "fontStyle": "bold", "foreground": "#300000" } }
			]
		}"##,
	);

	let constructed = Theme::from_raw(&RawTheme {
		name: None,
		settings: vec![
			RawThemeSetting {
				name: None,
				scope: None,
				settings: Some(RawSettings {
					font_style: None,
					foreground: Some("#100000".into()),
					background: Some("#200000".into()),
				}),
			},
			RawThemeSetting {
				name: None,
				scope: Some(ScopeSelector::One("keyword.control".into())),
				settings: Some(RawSettings {
					font_style: Some("bold".into()),
					foreground: Some("#300000".into()),
					background: None,
				}),
			},
		],
	});

	assert_eq!(from_json.color_map(), constructed.color_map());
	assert_eq!(from_json.defaults(), constructed.defaults());
	assert_eq!(
		from_json.match_scope("keyword.control.flow"),
		constructed.match_scope("keyword.control.flow")
	);
}
