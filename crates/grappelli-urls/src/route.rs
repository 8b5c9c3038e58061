//! Route definitions and match results.

use crate::error::{PathError, PatternError};
use crate::params::{FromPath, ParamContext};
use crate::pattern::PathPattern;
use std::collections::HashMap;

/// A single route definition: a path pattern plus an optional name for
/// reverse lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
	/// The compiled path pattern.
	pattern: PathPattern,
	/// Optional route name.
	name: Option<String>,
}

impl Route {
	/// Creates a route from a pattern string.
	///
	/// # Errors
	///
	/// Returns [`PatternError`] if the pattern fails to compile, so invalid
	/// routes surface before they reach a matcher.
	pub fn new(pattern: &str) -> Result<Self, PatternError> {
		Ok(Self {
			pattern: PathPattern::new(pattern)?,
			name: None,
		})
	}

	/// Creates a named route from a pattern string.
	///
	/// # Errors
	///
	/// Returns [`PatternError`] if the pattern fails to compile.
	pub fn named(name: impl Into<String>, pattern: &str) -> Result<Self, PatternError> {
		Ok(Self {
			pattern: PathPattern::new(pattern)?,
			name: Some(name.into()),
		})
	}

	/// Returns the route name.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Returns the compiled pattern.
	pub fn pattern(&self) -> &PathPattern {
		&self.pattern
	}
}

/// A matched route with extracted parameters.
#[derive(Debug, Clone)]
pub struct RouteMatch {
	/// The matched route.
	pub route: Route,
	/// Extracted path parameters.
	pub params: HashMap<String, String>,
	/// Parameter values in the order they appear in the pattern.
	pub(crate) param_values: Vec<String>,
}

impl RouteMatch {
	/// Extracts typed values from the matched parameters.
	///
	/// # Example
	///
	/// ```ignore
	/// let m = matcher.match_path("/users/42/").unwrap();
	/// let id: i64 = m.parse()?;
	/// ```
	///
	/// # Errors
	///
	/// Returns [`PathError`] if the parameter count or types don't line up.
	pub fn parse<T: FromPath>(&self) -> Result<T, PathError> {
		let ctx = ParamContext::new(self.params.clone(), self.param_values.clone());
		T::from_path(&ctx)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_route_new() {
		let route = Route::new("/").unwrap();
		assert!(route.name().is_none());
		assert_eq!(route.pattern().pattern(), "/");
	}

	#[test]
	fn test_route_named() {
		let route = Route::named("home", "/").unwrap();
		assert_eq!(route.name(), Some("home"));
	}

	#[test]
	fn test_route_invalid_pattern_is_err() {
		let long = "/".to_string() + &"a".repeat(2048);
		assert!(Route::new(&long).is_err());
	}

	#[test]
	fn test_route_match_parse_single() {
		let route = Route::new("/users/{id}/").unwrap();
		let (params, param_values) = route.pattern().matches("/users/42/").unwrap();
		let m = RouteMatch {
			route,
			params,
			param_values,
		};

		let id: i64 = m.parse().unwrap();
		assert_eq!(id, 42);
	}

	#[test]
	fn test_route_match_parse_tuple() {
		let route = Route::new("/users/{user_id}/posts/{post_id}/").unwrap();
		let (params, param_values) = route
			.pattern()
			.matches("/users/10/posts/20/")
			.unwrap();
		let m = RouteMatch {
			route,
			params,
			param_values,
		};

		let (user_id, post_id): (i64, i64) = m.parse().unwrap();
		assert_eq!((user_id, post_id), (10, 20));
	}

	#[test]
	fn test_route_match_parse_failure() {
		let route = Route::new("/users/{id}/").unwrap();
		let (params, param_values) = route.pattern().matches("/users/abc/").unwrap();
		let m = RouteMatch {
			route,
			params,
			param_values,
		};

		assert!(m.parse::<i64>().is_err());
	}
}
