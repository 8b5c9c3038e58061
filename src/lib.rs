//! # Grappelli
//!
//! A lightweight application shell for Rust. Grappelli composes three
//! pieces into one render tree: a state [`Store`] seeded with router
//! information, a URL [`Matcher`] built from an ordered route table, and
//! an [`AppShell`] wrapper that hands both to descendant content through
//! an explicit [`AppContext`].
//!
//! ## Design
//!
//! - **Explicit dependency injection**: descendants receive the store and
//!   matcher as values, never through ambient or global lookup.
//! - **Construct-on-call**: every [`compose`] invocation builds a fresh
//!   store and matcher. State is not preserved across compositions.
//! - **Last-write-wins seeding**: the `router` state entry is written after
//!   the caller-supplied state and overwrites any `"router"` key in it.
//!
//! ## Quick example
//!
//! ```rust
//! use grappelli::prelude::*;
//!
//! let routes = vec![Route::named("user_detail", "/users/{id}/").unwrap()];
//! let shell = compose(
//!     AppConfig::new().pathname("/users/42/").routes(routes),
//!     |ctx| {
//!         let m = ctx.matcher.match_path(ctx.location().unwrap()).unwrap();
//!         PageElement::new("p")
//!             .child(format!("user {}", m.params["id"]))
//!             .into_page()
//!     },
//! );
//!
//! assert!(shell.render().render_to_string().contains("user 42"));
//! ```

pub use grappelli_core as core;
pub use grappelli_pages as pages;
pub use grappelli_urls as urls;

pub use grappelli_core::page::{IntoPage, Page, PageElement};
pub use grappelli_core::state::{ROUTER_STATE_KEY, RouterState, StateMap, initial_state};
pub use grappelli_core::store::{Store, SubscriptionId};
pub use grappelli_pages::app::{AppConfig, compose};
pub use grappelli_pages::component::Component;
pub use grappelli_pages::shell::{AppContext, AppShell};
pub use grappelli_urls::{
	FromPath, Matcher, MatcherError, Path, PathError, PathPattern, PatternError, Route, RouteMatch,
};

/// Commonly used items, importable in one line.
pub mod prelude {
	pub use crate::{
		AppConfig,
		AppContext,
		AppShell,
		Component,
		IntoPage,
		Matcher,
		Page,
		PageElement,
		Route,
		RouteMatch,
		RouterState,
		StateMap,
		Store,
		compose,
	};

	// External
	pub use serde::{Deserialize, Serialize};
}
