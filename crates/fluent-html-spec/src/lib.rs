//! HTML element and attribute classification tables.
//!
//! This crate holds the data derived from the WHATWG HTML Living Standard that
//! the builder needs to validate attribute values and element children:
//!
//! - **Void elements**: elements that must not have an end tag or children
//!   (section 13.1.2).
//! - **Boolean attributes**: attributes whose presence alone means `true`
//!   (section 2.3.2, collected from the non-normative "Attributes" index).
//! - **Space-separated attributes**: attributes whose value is a set of
//!   space-separated tokens (section 2.3.7, collected from the same index).
//!
//! All lookups are ASCII case-insensitive.
//!
//! Last updated with data from the living standard dated 2025-02-24.
//!
//! ## Example
//!
//! ```
//! use fluent_html_spec::{AttributeKind, classify_attribute, is_void_element};
//!
//! assert!(is_void_element("BR"));
//! assert_eq!(classify_attribute("class"), AttributeKind::SpaceSeparated);
//! assert_eq!(classify_attribute("disabled"), AttributeKind::Boolean);
//! assert_eq!(classify_attribute("href"), AttributeKind::String);
//! ```

use std::borrow::Cow;
use std::fmt;

/// Void elements. These must not have an end tag.
pub const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
	"wbr",
];

/// Boolean attributes.
///
/// The presence of a boolean attribute on an element represents the true
/// value, and the absence of the attribute represents the false value.
pub const BOOLEAN_ATTRIBUTES: &[&str] = &[
	"allowfullscreen",
	"alpha",
	"async",
	"autofocus",
	"autoplay",
	"checked",
	"controls",
	"default",
	"defer",
	"disabled",
	"formnovalidate",
	"inert",
	"ismap",
	"itemscope",
	"loop",
	"multiple",
	"muted",
	"nomodule",
	"novalidate",
	"open",
	"playsinline",
	"readonly",
	"required",
	"reversed",
	"selected",
	"shadowrootclonable",
	"shadowrootdelegatesfocus",
	"shadowrootserializable",
];

/// Attributes whose value is a set of space-separated tokens.
pub const SPACE_SEPARATED_ATTRIBUTES: &[&str] = &[
	"accesskey",
	"blocking",
	"class",
	"for",
	"headers",
	"itemprop",
	"itemref",
	"itemtype",
	"ping",
	"rel",
	"sandbox",
	"sizes",
];

/// How the value of an attribute is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
	/// Present or absent, no value.
	Boolean,
	/// A set of space-separated tokens.
	SpaceSeparated,
	/// Any other attribute: a plain string value.
	String,
}

impl fmt::Display for AttributeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AttributeKind::Boolean => write!(f, "boolean"),
			AttributeKind::SpaceSeparated => write!(f, "space-separated"),
			AttributeKind::String => write!(f, "string"),
		}
	}
}

fn lowercase(name: &str) -> Cow<'_, str> {
	if name.bytes().any(|b| b.is_ascii_uppercase()) {
		Cow::Owned(name.to_ascii_lowercase())
	} else {
		Cow::Borrowed(name)
	}
}

fn contains(table: &[&str], name: &str) -> bool {
	let name = lowercase(name);
	table.contains(&name.as_ref())
}

/// Returns whether `tag_name` is a void element.
pub fn is_void_element(tag_name: &str) -> bool {
	contains(VOID_ELEMENTS, tag_name)
}

/// Returns whether `attribute_name` is a boolean attribute.
pub fn is_boolean_attribute(attribute_name: &str) -> bool {
	contains(BOOLEAN_ATTRIBUTES, attribute_name)
}

/// Returns whether `attribute_name` holds space-separated tokens.
pub fn is_space_separated_attribute(attribute_name: &str) -> bool {
	contains(SPACE_SEPARATED_ATTRIBUTES, attribute_name)
}

/// Classifies an attribute name.
///
/// The boolean and space-separated tables are disjoint, so the order of the
/// checks does not matter.
pub fn classify_attribute(attribute_name: &str) -> AttributeKind {
	if is_boolean_attribute(attribute_name) {
		AttributeKind::Boolean
	} else if is_space_separated_attribute(attribute_name) {
		AttributeKind::SpaceSeparated
	} else {
		AttributeKind::String
	}
}
