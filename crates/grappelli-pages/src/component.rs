//! Component trait definition.

use grappelli_core::page::Page;

/// Trait for reusable UI components.
///
/// Components encapsulate state and rendering logic into reusable units
/// that produce a [`Page`] tree.
///
/// # Example
///
/// ```ignore
/// use grappelli_pages::component::Component;
/// use grappelli_core::page::{Page, PageElement, IntoPage};
///
/// struct Greeting {
///     name: String,
/// }
///
/// impl Component for Greeting {
///     fn render(&self) -> Page {
///         PageElement::new("div")
///             .child(format!("Hello, {}!", self.name))
///             .into_page()
///     }
///
///     fn name() -> &'static str {
///         "Greeting"
///     }
/// }
/// ```
pub trait Component: 'static {
	/// Renders the component to a Page.
	fn render(&self) -> Page;

	/// Returns the component's name for debugging.
	fn name() -> &'static str
	where
		Self: Sized;
}
