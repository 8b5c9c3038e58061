//! Page types for component rendering.
//!
//! The `Page` enum is the core abstraction for renderable content: DOM
//! elements, text nodes, fragments, or nothing. Components build a `Page`
//! tree and the shell serializes it with [`Page::render_to_string`].
//!
//! ## Example
//!
//! ```ignore
//! use grappelli_core::page::{Page, PageElement, IntoPage};
//!
//! let view = PageElement::new("div")
//!     .attr("class", "container")
//!     .child("Hello, World!")
//!     .into_page();
//!
//! let html = view.render_to_string();
//! ```

mod util;

pub(crate) use util::html_escape;
pub use util::{BOOLEAN_ATTRS, is_boolean_attr_truthy};

use std::borrow::Cow;

/// A unified representation of renderable content.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
	/// A DOM element.
	Element(PageElement),
	/// A text node.
	Text(Cow<'static, str>),
	/// A fragment containing multiple views (no wrapper element).
	Fragment(Vec<Page>),
	/// An empty view (renders nothing).
	Empty,
}

impl Page {
	/// Creates an element view with the given tag.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> PageElement {
		PageElement::new(tag)
	}

	/// Creates a text view.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Page::Text(content.into())
	}

	/// Returns whether this view renders nothing.
	pub fn is_empty(&self) -> bool {
		match self {
			Page::Empty => true,
			Page::Fragment(children) => children.iter().all(Page::is_empty),
			_ => false,
		}
	}

	/// Renders this view to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			Page::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in el.attrs() {
					// Skip boolean attributes with falsy values (empty, "false", "0")
					let name_str: &str = name.as_ref();
					if BOOLEAN_ATTRS.contains(&name_str) && !is_boolean_attr_truthy(value) {
						continue;
					}

					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape(value));
					output.push('"');
				}

				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in el.child_views() {
						child.render_to_string_inner(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			Page::Text(text) => {
				output.push_str(&html_escape(text));
			}
			Page::Fragment(children) => {
				for child in children {
					child.render_to_string_inner(output);
				}
			}
			Page::Empty => {}
		}
	}
}

/// A DOM element with a tag, attributes, and children.
#[derive(Debug, Clone, PartialEq)]
pub struct PageElement {
	/// The element tag name.
	tag: Cow<'static, str>,
	/// Attributes in insertion order.
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	/// Child views.
	children: Vec<Page>,
	/// Whether this is a void element (no closing tag).
	is_void: bool,
}

impl PageElement {
	/// Creates a new element view.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds a boolean attribute.
	///
	/// Boolean attributes in HTML are either present (true) or absent (false).
	/// When true, the attribute is added with the attribute name as its value
	/// (e.g., `disabled="disabled"`). When false, the attribute is not added.
	pub fn bool_attr(self, name: impl Into<Cow<'static, str>>, value: bool) -> Self {
		if value {
			let name = name.into();
			// Boolean attributes use the attribute name as value (e.g., disabled="disabled")
			self.attr(name.clone(), name)
		} else {
			self
		}
	}

	/// Adds a child view.
	pub fn child(mut self, child: impl IntoPage) -> Self {
		self.children.push(child.into_page());
		self
	}

	/// Adds multiple child views.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_page()));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns the child views.
	pub fn child_views(&self) -> &[Page] {
		&self.children
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}
}

/// Conversion into a [`Page`].
pub trait IntoPage {
	/// Converts self into a `Page`.
	fn into_page(self) -> Page;
}

impl IntoPage for Page {
	fn into_page(self) -> Page {
		self
	}
}

impl IntoPage for PageElement {
	fn into_page(self) -> Page {
		Page::Element(self)
	}
}

impl IntoPage for &'static str {
	fn into_page(self) -> Page {
		Page::Text(Cow::Borrowed(self))
	}
}

impl IntoPage for String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self))
	}
}

impl IntoPage for Vec<Page> {
	fn into_page(self) -> Page {
		Page::Fragment(self)
	}
}

impl<T: IntoPage> IntoPage for Option<T> {
	fn into_page(self) -> Page {
		match self {
			Some(view) => view.into_page(),
			None => Page::Empty,
		}
	}
}
