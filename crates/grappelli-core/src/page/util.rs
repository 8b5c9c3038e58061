//! Utility functions for page rendering.

use std::borrow::Cow;

/// Escapes HTML special characters in a string.
///
/// Returns a borrowed reference if no escaping is needed,
/// or an owned string if any characters were escaped.
pub(crate) fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

/// HTML boolean attributes that should only be emitted when the value is truthy.
///
/// The presence of a boolean attribute alone makes it active, regardless of
/// its value, so falsy values must be dropped entirely rather than rendered.
pub const BOOLEAN_ATTRS: &[&str] = &[
	"allowfullscreen",
	"async",
	"autofocus",
	"autoplay",
	"checked",
	"controls",
	"default",
	"defer",
	"disabled",
	"formnovalidate",
	"hidden",
	"inert",
	"ismap",
	"itemscope",
	"loop",
	"multiple",
	"muted",
	"nomodule",
	"novalidate",
	"open",
	"readonly",
	"required",
	"reversed",
	"selected",
];

/// Returns whether a boolean attribute value counts as truthy.
///
/// Empty strings, `"false"`, and `"0"` are falsy; everything else is truthy.
pub fn is_boolean_attr_truthy(value: &str) -> bool {
	!value.is_empty() && value != "false" && value != "0"
}
