//! HTML classification tables.
//!
//! Case-insensitive lookups against the void element, boolean attribute and
//! space-separated attribute tables of the HTML Living Standard.
//!
//! # Examples
//!
//! ```
//! use fluent_html::spec::{is_boolean_attribute, is_void_element, VOID_ELEMENTS};
//!
//! assert!(is_void_element("IMG"));
//! assert!(is_boolean_attribute("readonly"));
//! assert_eq!(VOID_ELEMENTS.len(), 13);
//! ```

pub use fluent_html_spec::*;
