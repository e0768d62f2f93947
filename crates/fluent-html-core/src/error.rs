//! Error types for the builder and serializer.
//!
//! Every failure raised by this crate is an [`Error`]. Callers that only care
//! that *something* went wrong can propagate it with `?`; callers that need to
//! react to one failure in particular can match on the variant or on
//! [`Error::kind`].

use fluent_html_spec::AttributeKind;
use thiserror::Error;

/// Errors raised while building or rendering an element tree.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	/// An attribute value does not have a shape the attribute accepts.
	#[error(transparent)]
	InapplicableType(#[from] InapplicableType),

	/// A child was added to (or rendered inside) a void element.
	#[error("Tag `{tag}` is a void element and cannot have children")]
	VoidElementChild {
		/// Tag name of the void element.
		tag: String,
	},

	/// A stored value is outside what the public API can produce.
	///
	/// Only reachable when a tree was assembled without going through the
	/// builder, e.g. by deserializing it.
	#[error(transparent)]
	TypeGuardBypass(#[from] TypeGuardBypass),
}

/// Discriminant of [`Error`], for callers that match on the category only.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// See [`Error::InapplicableType`].
	InapplicableType,
	/// See [`Error::VoidElementChild`].
	VoidElementChild,
	/// See [`Error::TypeGuardBypass`].
	TypeGuardBypass,
}

impl Error {
	/// Returns the category of this error.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Error::InapplicableType(_) => ErrorKind::InapplicableType,
			Error::VoidElementChild { .. } => ErrorKind::VoidElementChild,
			Error::TypeGuardBypass(_) => ErrorKind::TypeGuardBypass,
		}
	}

	pub(crate) fn void_element_child(tag: impl Into<String>) -> Self {
		Error::VoidElementChild { tag: tag.into() }
	}
}

/// Ways an attribute value can be inapplicable to its attribute.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InapplicableType {
	#[error("Cannot use boolean attribute value for non-boolean attribute `{attribute}`")]
	BooleanValue { attribute: String },

	#[error(
		"Cannot use token list attribute value for non-space-separated attribute `{attribute}`"
	)]
	TokenListValue { attribute: String },

	#[error(
		"Token list value for attribute `{attribute}` has a value of type {actual} for key {key}"
	)]
	TokenListEntry {
		attribute: String,
		key: String,
		actual: &'static str,
	},

	#[error("Cannot use {actual} attribute value for attribute `{attribute}`")]
	UnsupportedValue {
		attribute: String,
		actual: &'static str,
	},
}

impl InapplicableType {
	/// Name of the attribute the rejected value was meant for.
	pub fn attribute(&self) -> &str {
		match self {
			InapplicableType::BooleanValue { attribute }
			| InapplicableType::TokenListValue { attribute }
			| InapplicableType::TokenListEntry { attribute, .. }
			| InapplicableType::UnsupportedValue { attribute, .. } => attribute,
		}
	}
}

/// Stored values that contradict the builder's invariants.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeGuardBypass {
	#[error("Attribute `{attribute}` had unexpected value of type {actual} for a {expected} attribute")]
	Attribute {
		attribute: String,
		actual: &'static str,
		expected: AttributeKind,
	},
}

/// Result type alias for builder and serializer operations.
pub type Result<T> = std::result::Result<T, Error>;
