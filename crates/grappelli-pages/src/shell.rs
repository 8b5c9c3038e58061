//! The AppShell wrapper component.
//!
//! `AppShell` is the node returned by the composition root. It holds the
//! store, the matcher, and the current location, and renders the child
//! content inside a marker element. Descendants receive these values
//! through an explicit [`AppContext`] rather than any ambient lookup.

use crate::component::Component;
use grappelli_core::page::{IntoPage, Page, PageElement};
use grappelli_core::store::Store;
use grappelli_urls::Matcher;
use std::sync::Arc;

/// The dependency bundle handed to descendant content.
///
/// Cheap to clone; the store and matcher are shared via `Arc`.
#[derive(Debug, Clone)]
pub struct AppContext {
	/// The state container for this render tree.
	pub store: Arc<Store>,
	/// The route matcher for this render tree.
	pub matcher: Arc<Matcher>,
	/// The current path, if one was supplied.
	pub location: Option<String>,
}

impl AppContext {
	/// Creates a context from its parts.
	pub fn new(store: Arc<Store>, matcher: Arc<Matcher>, location: Option<String>) -> Self {
		Self {
			store,
			matcher,
			location,
		}
	}

	/// Returns the current location, if any.
	pub fn location(&self) -> Option<&str> {
		self.location.as_deref()
	}
}

/// The wrapper component produced by composition.
///
/// Owns the store and matcher for the lifetime of one render tree and
/// exposes them to descendants via [`AppShell::context`].
#[derive(Debug, Clone)]
pub struct AppShell {
	/// The dependency bundle exposed to descendants.
	context: AppContext,
	/// The rendered child content.
	children: Page,
}

impl AppShell {
	/// Creates a shell wrapping the given children.
	pub fn new(context: AppContext, children: impl IntoPage) -> Self {
		Self {
			context,
			children: children.into_page(),
		}
	}

	/// Returns the state container.
	pub fn store(&self) -> &Arc<Store> {
		&self.context.store
	}

	/// Returns the route matcher.
	pub fn matcher(&self) -> &Arc<Matcher> {
		&self.context.matcher
	}

	/// Returns the current location, if any.
	pub fn location(&self) -> Option<&str> {
		self.context.location()
	}

	/// Returns the dependency bundle for descendant content.
	pub fn context(&self) -> &AppContext {
		&self.context
	}

	/// Returns the child content.
	pub fn children(&self) -> &Page {
		&self.children
	}
}

impl Component for AppShell {
	fn render(&self) -> Page {
		let mut el = PageElement::new("div").attr("data-app-shell", "true");

		if let Some(location) = self.context.location() {
			el = el.attr("data-location", location.to_string());
		}

		el.child(self.children.clone()).into_page()
	}

	fn name() -> &'static str {
		"AppShell"
	}
}
