//! The Matcher: ordered path-to-route resolution.
//!
//! A `Matcher` is built once from an ordered route table and never mutated.
//! Matching walks the table in order and returns the first route whose
//! pattern accepts the path, along with the extracted parameters.

use crate::error::MatcherError;
use crate::route::{Route, RouteMatch};
use std::collections::HashMap;

/// Resolves path strings to route definitions and extracted parameters.
///
/// The route table is fixed at construction. Each construction produces a
/// fresh, independent instance; the composition root builds one per render.
#[derive(Clone, Default)]
pub struct Matcher {
	/// Registered routes in match order.
	routes: Vec<Route>,
	/// Named route indexes for reverse lookups.
	named_routes: HashMap<String, usize>,
}

impl std::fmt::Debug for Matcher {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Matcher")
			.field("routes_count", &self.routes.len())
			.field(
				"named_routes",
				&self.named_routes.keys().collect::<Vec<_>>(),
			)
			.finish()
	}
}

impl Matcher {
	/// Creates a matcher from an ordered route table.
	///
	/// First match wins. Named routes are indexed for [`Matcher::reverse`];
	/// on duplicate names the later route wins the index.
	pub fn new(routes: Vec<Route>) -> Self {
		let named_routes = routes
			.iter()
			.enumerate()
			.filter_map(|(index, route)| route.name().map(|name| (name.to_string(), index)))
			.collect();

		tracing::debug!(routes = routes.len(), "matcher created");

		Self {
			routes,
			named_routes,
		}
	}

	/// Creates a matcher with an empty route table.
	///
	/// This is what the composition root uses when no routes are supplied;
	/// it matches nothing.
	pub fn empty() -> Self {
		Self::new(Vec::new())
	}

	/// Matches a path against the route table.
	pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
		for route in &self.routes {
			if let Some((params, param_values)) = route.pattern().matches(path) {
				return Some(RouteMatch {
					route: route.clone(),
					params,
					param_values,
				});
			}
		}
		None
	}

	/// Generates a URL by route name with parameters.
	///
	/// # Errors
	///
	/// Returns [`MatcherError::InvalidRouteName`] for unknown names and
	/// [`MatcherError::MissingParameter`] when a required parameter is
	/// absent.
	pub fn reverse(&self, name: &str, params: &[(&str, &str)]) -> Result<String, MatcherError> {
		let index = self
			.named_routes
			.get(name)
			.ok_or_else(|| MatcherError::InvalidRouteName(name.to_string()))?;

		let route = &self.routes[*index];
		let params_map: HashMap<String, String> = params
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();

		route.pattern().reverse(&params_map).ok_or_else(|| {
			let missing = route
				.pattern()
				.param_names()
				.iter()
				.find(|n| !params_map.contains_key(*n))
				.cloned()
				.unwrap_or_else(|| "unknown".to_string());
			MatcherError::MissingParameter(missing)
		})
	}

	/// Returns the number of registered routes.
	pub fn route_count(&self) -> usize {
		self.routes.len()
	}

	/// Returns whether the route table is empty.
	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}

	/// Checks if a route name exists.
	pub fn has_route(&self, name: &str) -> bool {
		self.named_routes.contains_key(name)
	}

	/// Returns the registered routes in match order.
	pub fn routes(&self) -> &[Route] {
		&self.routes
	}
}
