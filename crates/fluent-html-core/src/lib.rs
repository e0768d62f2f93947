//! Core of the fluent HTML builder.
//!
//! This crate provides the element tree, the attribute value model and the
//! serializer:
//!
//! - [`Element`]: a node with a lowercase tag name, ordered attributes and
//!   ordered children, mutated through a fluent API.
//! - [`AttributeValue`]: boolean, token set or plain string, validated against
//!   the attribute's classification when set.
//! - [`Content`]: text (escaped), [`RawMarkup`] (verbatim) or a nested element.
//! - [`render()`](render::render): depth-first serialization with escaping.
//!
//! ## Example
//!
//! ```
//! use fluent_html_core::{create_element, raw_markup};
//!
//! let mut button = create_element("button");
//! button
//! 	.set_attribute("type", "submit")?
//! 	.set_attribute("disabled", true)?
//! 	.add_class("primary")?
//! 	.append(["Save ", "& exit"])?
//! 	.add_child(raw_markup("&rarr;"))?;
//!
//! assert_eq!(
//! 	button.render()?,
//! 	r#"<button type="submit" disabled class="primary">Save &amp; exit&rarr;</button>"#
//! );
//! # Ok::<(), fluent_html_core::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): `Serialize`/`Deserialize` for the tree types and
//!   `serde_json::Value` as an attribute input.

pub mod attribute;
pub mod content;
pub mod element;
pub mod error;
pub mod raw;
pub mod render;

pub use attribute::{AttributeInput, AttributeValue, TokenEntry, TokenSet, normalize_attribute};
pub use content::{Content, ProcessedHtml};
pub use element::{Element, create_element};
pub use error::{Error, ErrorKind, InapplicableType, Result, TypeGuardBypass};
pub use raw::{RawMarkup, raw_markup};
pub use render::escape_html;
