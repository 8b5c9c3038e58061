//! Application state types.
//!
//! State is a flat map from string keys to JSON values. The shell seeds it
//! with a `router` entry describing the current location; everything else
//! is caller-supplied.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The state key under which router information lives.
pub const ROUTER_STATE_KEY: &str = "router";

/// Application state: string keys mapped to arbitrary JSON values.
pub type StateMap = HashMap<String, serde_json::Value>;

/// Navigational state stored under [`ROUTER_STATE_KEY`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterState {
	/// The current path, if one was supplied at composition.
	pub location: Option<String>,
	/// Extracted path parameters. Always empty at construction; the shell
	/// never populates this from the path.
	pub params: HashMap<String, String>,
}

impl RouterState {
	/// Creates router state for the given location with no parameters.
	pub fn at(location: Option<impl Into<String>>) -> Self {
		Self {
			location: location.map(Into::into),
			params: HashMap::new(),
		}
	}
}

/// Builds the initial application state for one composition.
///
/// Merges the caller-supplied state with a fresh `router` entry for
/// `pathname`. The router entry is written last: a caller-supplied
/// `"router"` key is overwritten entirely (last-write-wins).
///
/// Constructed fresh per invocation; never fails. A missing `pathname`
/// yields `router.location = null`.
pub fn initial_state(state: StateMap, pathname: Option<&str>) -> StateMap {
	let mut merged = state;

	let router = RouterState::at(pathname);
	// RouterState serializes to a plain object; to_value cannot fail here.
	let value = serde_json::to_value(router).unwrap_or_else(|_| serde_json::json!({}));
	merged.insert(ROUTER_STATE_KEY.to_string(), value);

	merged
}
