//! Raw theme document shape.
//!
//! Mirrors the settings-list format of TextMate-style themes after the host
//! application has loaded them from disk. File I/O stays with the caller; this
//! module only defines the deserializable shape and a JSON entry point.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when ingesting a raw theme document.
#[derive(Debug, Error)]
pub enum ThemeError {
	/// The document is not valid JSON or does not match the settings shape.
	#[error("malformed theme document: {0}")]
	Json(#[from] serde_json::Error),
}

/// A theme document: an ordered list of settings entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTheme {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(default)]
	pub settings: Vec<RawThemeSetting>,
}

impl RawTheme {
	/// Parses a theme document from JSON text.
	pub fn from_json_str(json: &str) -> Result<Self, ThemeError> {
		Ok(serde_json::from_str(json)?)
	}
}

/// One settings entry: an optional selector plus style settings.
///
/// An entry without a `scope` contributes to the theme defaults. An entry
/// without `settings` carries no styling information and is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawThemeSetting {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub scope: Option<ScopeSelector>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub settings: Option<RawSettings>,
}

/// A selector as written in the document: either a single (possibly
/// comma-separated) string or an explicit list of selector strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScopeSelector {
	One(String),
	Many(Vec<String>),
}

/// The style settings of one entry. Absent keys mean "inherit".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSettings {
	#[serde(default, rename = "fontStyle", skip_serializing_if = "Option::is_none")]
	pub font_style: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub foreground: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub background: Option<String>,
}
