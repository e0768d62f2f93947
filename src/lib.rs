//! # fluent-html
//!
//! A fluent builder for HTML markup.
//!
//! fluent-html assembles an element tree through a chainable API and
//! serializes it to an HTML fragment. Text is always escaped, and structural
//! rules taken from the HTML Living Standard are enforced while the tree is
//! built:
//!
//! - **Void elements** (`br`, `img`, `input`, ...) reject children and render
//!   without an end tag.
//! - **Boolean attributes** (`disabled`, `checked`, ...) are the only ones that
//!   take `true`/`false`; `true` renders the bare name, `false` omits it.
//! - **Space-separated attributes** (`class`, `rel`, ...) are token sets that
//!   can be set from a string or a list and toggled one token at a time.
//!
//! ## Quick Example
//!
//! ```
//! use fluent_html::prelude::*;
//!
//! let form = create_element("form")
//! 	.attr("method", "post")?
//! 	.child(create_element("label").attr("for", "name")?.child("Name")?)?
//! 	.child(
//! 		create_element("input")
//! 			.attr("id", "name")?
//! 			.attr("required", true)?,
//! 	)?
//! 	.child(create_element("button").attr("type", "submit")?.child("Send")?)?;
//!
//! assert_eq!(
//! 	form.render()?,
//! 	concat!(
//! 		r#"<form method="post">"#,
//! 		r#"<label for="name">Name</label>"#,
//! 		r#"<input id="name" required>"#,
//! 		r#"<button type="submit">Send</button>"#,
//! 		"</form>",
//! 	)
//! );
//! # Ok::<(), fluent_html::Error>(())
//! ```
//!
//! ## Errors
//!
//! Every fallible operation returns [`Result`], whose error type [`Error`]
//! distinguishes:
//!
//! - [`Error::InapplicableType`]: a value that does not fit its attribute.
//! - [`Error::VoidElementChild`]: a child added to a void element.
//! - [`Error::TypeGuardBypass`]: a tree that was not built through the
//!   builder (e.g. deserialized) and violates its invariants.
//!
//! ## Feature Flags
//!
//! - `serde` (default) - `Serialize`/`Deserialize` for element trees and
//!   `serde_json::Value` attribute input

pub mod spec;

pub use fluent_html_core::{
	AttributeInput, AttributeValue, Content, Element, Error, ErrorKind, InapplicableType,
	ProcessedHtml, RawMarkup, Result, TokenEntry, TokenSet, TypeGuardBypass, create_element,
	escape_html, normalize_attribute, raw_markup,
};

pub use fluent_html_core::render::render;

pub use spec::{
	AttributeKind, classify_attribute, is_boolean_attribute, is_space_separated_attribute,
	is_void_element,
};

/// Re-exports the types needed to build and render markup.
pub mod prelude {
	pub use crate::{
		AttributeInput, Content, Element, Error, ProcessedHtml, RawMarkup, Result, TokenEntry,
		create_element, raw_markup,
	};
}
