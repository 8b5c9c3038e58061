//! Path pattern compilation and matching.
//!
//! Patterns use Django-style placeholders:
//! - `/users/` - exact match
//! - `/users/{id}/` - single path parameter
//! - `/users/{id}/posts/{post_id}/` - multiple parameters
//! - `/static/{path:*}` - wildcard matching (rest of path)
//!
//! ## Wildcard behavior
//!
//! The `{name:*}` wildcard compiles to `(.*)`, which matches any character
//! including path separators. Callers using captured wildcard values for
//! file system access must validate them against traversal (reject `..`
//! segments, absolute paths, and encoded sequences).

use crate::error::PatternError;
use std::collections::HashMap;

/// Maximum allowed length for a pattern string in bytes.
const MAX_PATTERN_LENGTH: usize = 1024;

/// Maximum allowed number of path segments in a pattern.
const MAX_PATH_SEGMENTS: usize = 32;

/// Maximum allowed size for a compiled pattern regex (in bytes).
const MAX_REGEX_SIZE: usize = 1 << 20; // 1 MiB

/// A compiled path pattern.
#[derive(Debug, Clone)]
pub struct PathPattern {
	/// The original pattern string.
	pattern: String,
	/// Compiled regex.
	regex: regex::Regex,
	/// Parameter names in pattern order.
	param_names: Vec<String>,
	/// Whether this pattern has no parameters.
	is_exact: bool,
}

impl PathPattern {
	/// Compiles a pattern string.
	///
	/// # Errors
	///
	/// Returns [`PatternError`] if the pattern exceeds the length or segment
	/// limits, or compiles to an invalid or oversized regex.
	pub fn new(pattern: &str) -> Result<Self, PatternError> {
		// Length and segment limits guard against ReDoS via caller-supplied patterns
		if pattern.len() > MAX_PATTERN_LENGTH {
			return Err(PatternError::TooLong {
				length: pattern.len(),
				max: MAX_PATTERN_LENGTH,
			});
		}

		let segment_count = pattern.split('/').count();
		if segment_count > MAX_PATH_SEGMENTS {
			return Err(PatternError::TooManySegments {
				count: segment_count,
				max: MAX_PATH_SEGMENTS,
			});
		}

		let (regex_str, param_names) = Self::compile_pattern(pattern);

		let regex = regex::RegexBuilder::new(&regex_str)
			.size_limit(MAX_REGEX_SIZE)
			.build()
			.map_err(|e| PatternError::InvalidRegex(e.to_string()))?;

		Ok(Self {
			pattern: pattern.to_string(),
			regex,
			param_names,
			is_exact: !pattern.contains('{'),
		})
	}

	/// Compiles a pattern string into a regex and extracts parameter names.
	fn compile_pattern(pattern: &str) -> (String, Vec<String>) {
		let mut regex_str = String::from("^");
		let mut param_names = Vec::new();
		let mut chars = pattern.chars().peekable();

		while let Some(c) = chars.next() {
			match c {
				'{' => {
					let mut param = String::new();
					let mut is_wildcard = false;

					while let Some(&next) = chars.peek() {
						if next == '}' {
							chars.next();
							break;
						}
						if next == ':' {
							chars.next();
							if chars.peek() == Some(&'*') {
								chars.next();
								is_wildcard = true;
							}
							continue;
						}
						param.push(next);
						chars.next();
					}

					param_names.push(param.clone());

					if is_wildcard {
						// Matches across path separators
						regex_str.push_str(&format!("(?P<{}>.*)", param));
					} else {
						// Matches a single segment
						regex_str.push_str(&format!("(?P<{}>[^/]+)", param));
					}
				}
				'/' | '.' | '+' | '*' | '?' | '(' | ')' | '[' | ']' | '^' | '$' | '|' | '\\' => {
					regex_str.push('\\');
					regex_str.push(c);
				}
				_ => {
					regex_str.push(c);
				}
			}
		}

		regex_str.push('$');
		(regex_str, param_names)
	}

	/// Returns the original pattern string.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// Returns the parameter names in pattern order.
	pub fn param_names(&self) -> &[String] {
		&self.param_names
	}

	/// Attempts to match a path against this pattern.
	///
	/// Returns `Some((params, param_values))` on a match, where `params`
	/// maps parameter names to extracted values and `param_values` holds
	/// the values in pattern order.
	pub fn matches(&self, path: &str) -> Option<(HashMap<String, String>, Vec<String>)> {
		self.regex.captures(path).map(|caps| {
			let params: HashMap<String, String> = self
				.param_names
				.iter()
				.filter_map(|name| {
					caps.name(name)
						.map(|m| (name.clone(), m.as_str().to_string()))
				})
				.collect();

			let param_values: Vec<String> = self
				.param_names
				.iter()
				.filter_map(|name| caps.name(name).map(|m| m.as_str().to_string()))
				.collect();

			(params, param_values)
		})
	}

	/// Generates a path from this pattern with the given parameters.
	///
	/// Returns `None` if any parameter is missing.
	pub fn reverse(&self, params: &HashMap<String, String>) -> Option<String> {
		let mut result = self.pattern.clone();

		for name in &self.param_names {
			let value = params.get(name)?;
			let placeholder = format!("{{{}}}", name);
			let wildcard_placeholder = format!("{{{}:*}}", name);

			if result.contains(&placeholder) {
				result = result.replace(&placeholder, value);
			} else if result.contains(&wildcard_placeholder) {
				result = result.replace(&wildcard_placeholder, value);
			} else {
				return None;
			}
		}

		Some(result)
	}

	/// Checks whether this pattern matches the given path.
	pub fn is_match(&self, path: &str) -> bool {
		self.regex.is_match(path)
	}

	/// Returns whether this pattern has no parameters.
	pub fn is_exact(&self) -> bool {
		self.is_exact
	}
}

impl PartialEq for PathPattern {
	fn eq(&self, other: &Self) -> bool {
		self.pattern == other.pattern
	}
}

impl Eq for PathPattern {}

impl std::fmt::Display for PathPattern {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.pattern)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_exact_pattern() {
		let pattern = PathPattern::new("/users/").unwrap();
		assert!(pattern.is_exact());
		assert!(pattern.is_match("/users/"));
		assert!(!pattern.is_match("/users/123/"));
	}

	#[test]
	fn test_single_param() {
		let pattern = PathPattern::new("/users/{id}/").unwrap();
		assert!(!pattern.is_exact());
		assert!(pattern.is_match("/users/42/"));
		assert!(pattern.is_match("/users/abc/"));
		assert!(!pattern.is_match("/users/"));

		let (params, param_values) = pattern.matches("/users/42/").unwrap();
		assert_eq!(params.get("id"), Some(&"42".to_string()));
		assert_eq!(param_values, vec!["42".to_string()]);
	}

	#[test]
	fn test_multiple_params() {
		let pattern = PathPattern::new("/users/{user_id}/posts/{post_id}/").unwrap();
		let (params, param_values) = pattern.matches("/users/42/posts/123/").unwrap();

		assert_eq!(params.get("user_id"), Some(&"42".to_string()));
		assert_eq!(params.get("post_id"), Some(&"123".to_string()));
		assert_eq!(param_values, vec!["42".to_string(), "123".to_string()]);
	}

	#[test]
	fn test_wildcard_param() {
		let pattern = PathPattern::new("/static/{path:*}").unwrap();
		let (params, param_values) = pattern.matches("/static/css/styles/main.css").unwrap();

		assert_eq!(params.get("path"), Some(&"css/styles/main.css".to_string()));
		assert_eq!(param_values, vec!["css/styles/main.css".to_string()]);
	}

	#[test]
	fn test_reverse_simple() {
		let pattern = PathPattern::new("/users/{id}/").unwrap();
		let mut params = HashMap::new();
		params.insert("id".to_string(), "42".to_string());

		assert_eq!(pattern.reverse(&params), Some("/users/42/".to_string()));
	}

	#[test]
	fn test_reverse_missing_param() {
		let pattern = PathPattern::new("/users/{id}/").unwrap();
		let params = HashMap::new();

		assert_eq!(pattern.reverse(&params), None);
	}

	#[test]
	fn test_param_names_ordered() {
		let pattern = PathPattern::new("/a/{x}/b/{y}/c/{z}/").unwrap();
		assert_eq!(pattern.param_names(), &["x", "y", "z"]);
	}

	#[test]
	fn test_special_chars_escaped() {
		let pattern = PathPattern::new("/api/v1.0/").unwrap();
		assert!(pattern.is_match("/api/v1.0/"));
		assert!(!pattern.is_match("/api/v1X0/"));
	}

	#[test]
	fn test_pattern_display_and_equality() {
		let p1 = PathPattern::new("/users/{id}/").unwrap();
		let p2 = PathPattern::new("/users/{id}/").unwrap();
		let p3 = PathPattern::new("/users/{user_id}/").unwrap();

		assert_eq!(format!("{}", p1), "/users/{id}/");
		assert_eq!(p1, p2);
		assert_ne!(p1, p3);
	}

	#[test]
	fn test_pattern_rejects_excessive_length() {
		let long_pattern = "/".to_string() + &"a".repeat(1025);

		let result = PathPattern::new(&long_pattern);

		assert!(matches!(result, Err(PatternError::TooLong { .. })));
	}

	#[test]
	fn test_pattern_rejects_excessive_segments() {
		let segments: Vec<&str> = (0..35).map(|_| "seg").collect();
		let pattern = format!("/{}/", segments.join("/"));

		let result = PathPattern::new(&pattern);

		assert!(matches!(result, Err(PatternError::TooManySegments { .. })));
	}
}
