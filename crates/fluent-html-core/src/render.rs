//! HTML serialization.
//!
//! Turns an [`Element`] tree into an HTML fragment. No whitespace is added
//! between tags. Attributes are emitted in insertion order and children in the
//! order they were added.
//!
//! The builder already rejects invalid values, but trees can also be
//! assembled without it (e.g. deserialized), so the serializer re-checks two
//! invariants: void elements have no children, and each stored attribute value
//! matches the classification of its name.

use std::borrow::Cow;

use fluent_html_spec::classify_attribute;

use crate::attribute::AttributeValue;
use crate::content::{Content, ProcessedHtml};
use crate::element::Element;
use crate::error::{Error, Result, TypeGuardBypass};

/// Escapes `text` for use in element content or inside a double-quoted
/// attribute value.
///
/// Both contexts share one table: `&`, `<`, `>`, `"` and `'` become
/// `&amp;`, `&lt;`, `&gt;`, `&quot;` and `&#039;`. An `&` that already starts
/// an entity is escaped like any other, so `&amp;` turns into `&amp;amp;`.
///
/// Text without any of these characters is returned borrowed.
pub fn escape_html(text: &str) -> Cow<'_, str> {
	let Some(first) = text.find(ESCAPED_CHARS) else {
		return Cow::Borrowed(text);
	};

	let (clean, rest) = text.split_at(first);
	let mut escaped = String::with_capacity(text.len() + rest.len() / 2);
	escaped.push_str(clean);
	for c in rest.chars() {
		match entity_for(c) {
			Some(entity) => escaped.push_str(entity),
			None => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}

const ESCAPED_CHARS: [char; 5] = ['&', '<', '>', '"', '\''];

fn entity_for(c: char) -> Option<&'static str> {
	let entity = match c {
		'&' => "&amp;",
		'<' => "&lt;",
		'>' => "&gt;",
		'"' => "&quot;",
		'\'' => "&#039;",
		_ => return None,
	};
	Some(entity)
}

/// Renders `element` and its descendants to an HTML string.
///
/// # Errors
///
/// [`Error::VoidElementChild`] or [`Error::TypeGuardBypass`] when the tree
/// violates an invariant the builder enforces.
pub fn render(element: &Element) -> Result<String> {
	let mut output = String::new();
	render_into(element, &mut output)?;
	Ok(output)
}

/// Appends the rendering of `element` to `output`.
pub fn render_into(element: &Element, output: &mut String) -> Result<()> {
	tracing::trace!(tag = %element.tag_name(), "rendering element");

	output.push('<');
	output.push_str(element.tag_name());

	for (name, value) in element.attributes() {
		check_attribute(name, value)?;
		match value {
			AttributeValue::Boolean(false) => {}
			AttributeValue::Boolean(true) => {
				output.push(' ');
				output.push_str(&escape_html(name));
			}
			AttributeValue::TokenSet(tokens) => {
				write_attribute(output, name, &tokens.to_attribute_value());
			}
			AttributeValue::String(value) => write_attribute(output, name, value),
		}
	}

	output.push('>');

	if element.is_void() {
		if element.contents().is_empty() {
			return Ok(());
		}
		return Err(Error::void_element_child(element.tag_name()));
	}

	for child in element.contents() {
		match child {
			Content::Text(text) => output.push_str(&escape_html(text)),
			Content::Raw(markup) => markup.write_html(output)?,
			Content::Element(nested) => render_into(nested, output)?,
		}
	}

	output.push_str("</");
	output.push_str(element.tag_name());
	output.push('>');
	Ok(())
}

fn write_attribute(output: &mut String, name: &str, value: &str) {
	output.push(' ');
	output.push_str(&escape_html(name));
	output.push_str("=\"");
	output.push_str(&escape_html(value));
	output.push('"');
}

fn check_attribute(name: &str, value: &AttributeValue) -> Result<()> {
	let kind = classify_attribute(name);
	if value.is_valid_for(kind) {
		return Ok(());
	}
	Err(TypeGuardBypass::Attribute {
		attribute: name.to_string(),
		actual: value.type_name(),
		expected: kind,
	}
	.into())
}
