//! The composition root.
//!
//! [`compose`] is the single place where the top-level dependencies of a
//! render tree are constructed and wired together: it seeds a [`Store`]
//! with router information, builds a [`Matcher`] from the configured route
//! table, and wraps the child content in an [`AppShell`].
//!
//! Every call constructs a brand-new store and matcher. Nothing is cached
//! or reused across calls, so state does not survive re-composition.
//!
//! ## Example
//!
//! ```ignore
//! use grappelli_pages::app::{AppConfig, compose};
//! use grappelli_core::page::{IntoPage, PageElement};
//!
//! let shell = compose(AppConfig::new().pathname("/home"), |ctx| {
//!     PageElement::new("p")
//!         .child(ctx.location().unwrap_or("?").to_string())
//!         .into_page()
//! });
//! ```

use crate::shell::{AppContext, AppShell};
use grappelli_core::page::Page;
use grappelli_core::state::{StateMap, initial_state};
use grappelli_core::store::Store;
use grappelli_urls::{Matcher, Route};
use std::sync::Arc;

/// Configuration for one composition.
///
/// All fields are optional and default to the values below:
///
/// | Field      | Default      |
/// |------------|--------------|
/// | `state`    | empty map    |
/// | `pathname` | `None`       |
/// | `routes`   | empty table  |
///
/// A `None` pathname yields a router location of `None`; composition never
/// fails on a missing pathname. Caller-supplied state is not validated.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
	/// Initial application state merged beneath the router entry.
	state: StateMap,
	/// The current navigational path.
	pathname: Option<String>,
	/// The route table for the matcher, in match order.
	routes: Vec<Route>,
}

impl AppConfig {
	/// Creates a configuration with all defaults.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the initial application state.
	pub fn state(mut self, state: StateMap) -> Self {
		self.state = state;
		self
	}

	/// Sets the current navigational path.
	pub fn pathname(mut self, pathname: impl Into<String>) -> Self {
		self.pathname = Some(pathname.into());
		self
	}

	/// Sets the route table handed to the matcher.
	pub fn routes(mut self, routes: Vec<Route>) -> Self {
		self.routes = routes;
		self
	}
}

/// Composes a render tree: seeds a fresh store with router state, builds a
/// fresh matcher, and wraps the children in an [`AppShell`].
///
/// `children` receives the [`AppContext`] directly - explicit dependency
/// injection in place of ambient context lookup. The caller-supplied
/// `"router"` state key, if any, is overwritten by the fresh router entry.
pub fn compose<F>(config: AppConfig, children: F) -> AppShell
where
	F: FnOnce(&AppContext) -> Page,
{
	let AppConfig {
		state,
		pathname,
		routes,
	} = config;

	let merged = initial_state(state, pathname.as_deref());
	let store = Arc::new(Store::new(merged));
	let matcher = Arc::new(Matcher::new(routes));

	tracing::debug!(
		store_id = store.id(),
		routes = matcher.route_count(),
		location = pathname.as_deref().unwrap_or(""),
		"composed app shell"
	);

	let context = AppContext::new(store, matcher, pathname);
	let body = children(&context);

	AppShell::new(context, body)
}
