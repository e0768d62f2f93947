//! Element builder.
//!
//! An [`Element`] owns its attributes and children. Children are moved into
//! their parent, so a sub-tree can only ever be attached once.
//!
//! Two styles are supported. The `&mut self` methods (`set_attribute`,
//! `add_class`, `add_child`, ...) chain through `Result<&mut Self>`:
//!
//! ```
//! use fluent_html_core::create_element;
//!
//! let mut div = create_element("div");
//! div.set_attribute("id", "example")?
//! 	.add_class("card")?
//! 	.add_child("Hello")?;
//! assert_eq!(div.render()?, r#"<div id="example" class="card">Hello</div>"#);
//! # Ok::<(), fluent_html_core::Error>(())
//! ```
//!
//! The consuming shorthands (`attr`, `class`, `child`, ...) are convenient for
//! nested expressions:
//!
//! ```
//! use fluent_html_core::Element;
//!
//! let list = Element::new("ul")
//! 	.child(Element::new("li").child("one")?)?
//! 	.child(Element::new("li").attr("hidden", "until-found")?.child("two")?)?;
//! assert_eq!(
//! 	list.render()?,
//! 	r#"<ul><li>one</li><li hidden="until-found">two</li></ul>"#
//! );
//! # Ok::<(), fluent_html_core::Error>(())
//! ```
//!
//! Mutation requires exclusive access; share an element across threads only
//! behind your own synchronization.

use fluent_html_spec::{AttributeKind, is_void_element};
use indexmap::IndexMap;

use crate::attribute::{AttributeInput, AttributeValue, TokenSet, normalize_attribute};
use crate::content::{Content, ProcessedHtml};
use crate::error::{Error, Result, TypeGuardBypass};
use crate::render;

const CLASS: &str = "class";

/// An HTML element under construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
	#[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_tag"))]
	tag: String,
	#[cfg_attr(feature = "serde", serde(default))]
	attributes: IndexMap<String, AttributeValue>,
	#[cfg_attr(feature = "serde", serde(default))]
	children: Vec<Content>,
}

#[cfg(feature = "serde")]
fn deserialize_tag<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
	D: serde::Deserializer<'de>,
{
	let tag = <String as serde::Deserialize>::deserialize(deserializer)?;
	Ok(tag.to_ascii_lowercase())
}

/// Creates an element with the given tag name.
pub fn create_element(tag: impl AsRef<str>) -> Element {
	Element::new(tag)
}

impl Element {
	/// Creates an element; the tag name is lowercased.
	pub fn new(tag: impl AsRef<str>) -> Self {
		Self {
			tag: tag.as_ref().to_ascii_lowercase(),
			attributes: IndexMap::new(),
			children: Vec::new(),
		}
	}

	/// Alias of [`Element::new`].
	pub fn from_tag(tag: impl AsRef<str>) -> Self {
		Self::new(tag)
	}

	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns whether this is a void element (no children, no end tag).
	pub fn is_void(&self) -> bool {
		is_void_element(&self.tag)
	}

	/// Returns the attributes in insertion order.
	pub fn attributes(&self) -> &IndexMap<String, AttributeValue> {
		&self.attributes
	}

	pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
		self.attributes.get(name)
	}

	/// Returns the children in insertion order.
	pub fn contents(&self) -> &[Content] {
		&self.children
	}

	/// Returns whether `token` is an included class.
	pub fn has_class(&self, token: &str) -> bool {
		matches!(
			self.attributes.get(CLASS),
			Some(AttributeValue::TokenSet(tokens)) if tokens.is_included(token)
		)
	}

	/// Sets an attribute, replacing any previous value.
	///
	/// A replaced attribute keeps its original position in the output.
	///
	/// # Errors
	///
	/// [`Error::InapplicableType`] if the value does not fit the attribute;
	/// the element is left unchanged.
	pub fn set_attribute(
		&mut self,
		name: impl Into<String>,
		value: impl Into<AttributeInput>,
	) -> Result<&mut Self> {
		let name = name.into();
		let value = normalize_attribute(&name, value.into())?;
		self.attributes.insert(name, value);
		Ok(self)
	}

	/// Sets several attributes in iteration order; later entries win.
	///
	/// Stops at the first invalid entry. Entries before it stay applied.
	pub fn set_attributes<I, K, V>(&mut self, attributes: I) -> Result<&mut Self>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<AttributeInput>,
	{
		for (name, value) in attributes {
			self.set_attribute(name, value)?;
		}
		Ok(self)
	}

	/// Includes `token` in the `class` attribute.
	pub fn add_class(&mut self, token: impl Into<String>) -> Result<&mut Self> {
		self.class_tokens()?.include(token);
		Ok(self)
	}

	/// Excludes `token` from the `class` attribute.
	///
	/// The token is remembered, so adding it again restores its position.
	pub fn remove_class(&mut self, token: impl Into<String>) -> Result<&mut Self> {
		self.class_tokens()?.exclude(token);
		Ok(self)
	}

	fn class_tokens(&mut self) -> Result<&mut TokenSet> {
		let value = self
			.attributes
			.entry(CLASS.to_string())
			.or_insert_with(|| AttributeValue::TokenSet(TokenSet::new()));
		match value {
			AttributeValue::TokenSet(tokens) => Ok(tokens),
			other => Err(TypeGuardBypass::Attribute {
				attribute: CLASS.to_string(),
				actual: other.type_name(),
				expected: AttributeKind::SpaceSeparated,
			}
			.into()),
		}
	}

	/// Appends a child.
	///
	/// # Errors
	///
	/// [`Error::VoidElementChild`] if this is a void element; nothing is added.
	pub fn add_child(&mut self, child: impl Into<Content>) -> Result<&mut Self> {
		self.ensure_accepts_children()?;
		self.children.push(child.into());
		Ok(self)
	}

	/// Appends several children in order.
	///
	/// Fails before adding anything if this is a void element.
	pub fn append<I>(&mut self, children: I) -> Result<&mut Self>
	where
		I: IntoIterator,
		I::Item: Into<Content>,
	{
		self.ensure_accepts_children()?;
		self.children.extend(children.into_iter().map(Into::into));
		Ok(self)
	}

	fn ensure_accepts_children(&self) -> Result<()> {
		if self.is_void() {
			tracing::debug!(tag = %self.tag, "rejected child of void element");
			return Err(Error::void_element_child(&self.tag));
		}
		Ok(())
	}

	/// Consuming form of [`Element::set_attribute`].
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttributeInput>) -> Result<Self> {
		self.set_attribute(name, value)?;
		Ok(self)
	}

	/// Consuming form of [`Element::set_attributes`].
	pub fn attrs<I, K, V>(mut self, attributes: I) -> Result<Self>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<AttributeInput>,
	{
		self.set_attributes(attributes)?;
		Ok(self)
	}

	/// Consuming form of [`Element::add_class`].
	pub fn class(mut self, token: impl Into<String>) -> Result<Self> {
		self.add_class(token)?;
		Ok(self)
	}

	/// Consuming form of [`Element::add_child`].
	pub fn child(mut self, child: impl Into<Content>) -> Result<Self> {
		self.add_child(child)?;
		Ok(self)
	}

	/// Consuming form of [`Element::append`].
	pub fn children<I>(mut self, children: I) -> Result<Self>
	where
		I: IntoIterator,
		I::Item: Into<Content>,
	{
		self.append(children)?;
		Ok(self)
	}

	/// Renders this element and its descendants to an HTML string.
	pub fn render(&self) -> Result<String> {
		render::render(self)
	}

	/// Appends the rendered HTML to `output`.
	///
	/// On error `output` may hold a partial rendering.
	pub fn render_into(&self, output: &mut String) -> Result<()> {
		render::render_into(self, output)
	}
}

impl ProcessedHtml for Element {
	fn write_html(&self, output: &mut String) -> Result<()> {
		self.render_into(output)
	}
}
