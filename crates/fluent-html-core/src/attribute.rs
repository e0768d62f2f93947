//! Attribute value model.
//!
//! Callers hand the builder an [`AttributeInput`], which is checked against
//! the attribute's [`AttributeKind`] and normalized into the
//! [`AttributeValue`] that is actually stored:
//!
//! | input        | boolean attribute | space-separated attribute | other    |
//! |--------------|-------------------|---------------------------|----------|
//! | `bool`       | `Boolean`         | error                     | error    |
//! | string       | `String`          | `TokenSet`                | `String` |
//! | token list   | error             | `TokenSet`                | error    |
//!
//! Space-separated attributes are always stored as a [`TokenSet`], so a value
//! set wholesale and tokens toggled later with `add_class`/`remove_class`
//! compose.

use fluent_html_spec::{AttributeKind, classify_attribute};
use indexmap::IndexMap;

use crate::error::{InapplicableType, Result};

/// Ordered set of tokens, each flagged as included or excluded.
///
/// Excluded tokens are remembered so that including them again restores their
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TokenSet(IndexMap<String, bool>);

impl TokenSet {
	/// Creates an empty token set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Splits `value` on single ASCII spaces and includes every piece.
	///
	/// Consecutive spaces produce empty tokens; no trimming is done.
	pub fn from_space_separated(value: &str) -> Self {
		let mut tokens = Self::new();
		for token in value.split(' ') {
			tokens.include(token);
		}
		tokens
	}

	/// Sets the inclusion flag of `token`, keeping its position if known.
	pub fn set(&mut self, token: impl Into<String>, included: bool) {
		self.0.insert(token.into(), included);
	}

	pub fn include(&mut self, token: impl Into<String>) {
		self.set(token, true);
	}

	pub fn exclude(&mut self, token: impl Into<String>) {
		self.set(token, false);
	}

	/// Returns whether `token` is known and included.
	pub fn is_included(&self, token: &str) -> bool {
		self.0.get(token).copied().unwrap_or(false)
	}

	/// Returns whether `token` is known, included or not.
	pub fn contains(&self, token: &str) -> bool {
		self.0.contains_key(token)
	}

	/// Iterates over all known tokens and their flags in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
		self.0.iter().map(|(token, included)| (token.as_str(), *included))
	}

	/// Iterates over the included tokens in insertion order.
	pub fn included(&self) -> impl Iterator<Item = &str> {
		self.iter()
			.filter_map(|(token, included)| included.then_some(token))
	}

	/// Number of known tokens, excluded ones included.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Joins the included tokens with a single space.
	pub fn to_attribute_value(&self) -> String {
		self.included().collect::<Vec<_>>().join(" ")
	}
}

impl<S: Into<String>> FromIterator<(S, bool)> for TokenSet {
	fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
		let mut tokens = Self::new();
		for (token, included) in iter {
			tokens.set(token, included);
		}
		tokens
	}
}

/// A normalized attribute value as stored on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum AttributeValue {
	/// `true` renders the bare attribute name, `false` omits the attribute.
	Boolean(bool),
	/// Included tokens render joined by spaces.
	TokenSet(TokenSet),
	/// Rendered escaped, as is.
	String(String),
}

impl AttributeValue {
	/// Short name of the variant, used in error messages.
	pub fn type_name(&self) -> &'static str {
		match self {
			AttributeValue::Boolean(_) => "bool",
			AttributeValue::TokenSet(_) => "token set",
			AttributeValue::String(_) => "string",
		}
	}

	/// Returns whether the builder could have stored this value for an
	/// attribute of the given kind.
	///
	/// Boolean attributes accept plain strings too (`disabled="disabled"`),
	/// while space-separated attributes only ever hold token sets.
	pub fn is_valid_for(&self, kind: AttributeKind) -> bool {
		matches!(
			(self, kind),
			(AttributeValue::Boolean(_), AttributeKind::Boolean)
				| (AttributeValue::String(_), AttributeKind::Boolean)
				| (AttributeValue::TokenSet(_), AttributeKind::SpaceSeparated)
				| (AttributeValue::String(_), AttributeKind::String)
		)
	}
}

/// One entry of a token list input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenEntry {
	/// A bare token, included.
	Token(String),
	/// A token with an explicit inclusion flag.
	Toggle(String, bool),
}

impl From<&str> for TokenEntry {
	fn from(token: &str) -> Self {
		TokenEntry::Token(token.to_string())
	}
}

impl From<String> for TokenEntry {
	fn from(token: String) -> Self {
		TokenEntry::Token(token)
	}
}

impl<S: Into<String>> From<(S, bool)> for TokenEntry {
	fn from((token, included): (S, bool)) -> Self {
		TokenEntry::Toggle(token.into(), included)
	}
}

/// A caller-supplied attribute value, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeInput {
	Bool(bool),
	Str(String),
	Tokens(Vec<TokenEntry>),
	/// A JSON value: arrays hold bare tokens, objects map tokens to flags.
	#[cfg(feature = "serde")]
	Json(serde_json::Value),
}

impl From<bool> for AttributeInput {
	fn from(value: bool) -> Self {
		AttributeInput::Bool(value)
	}
}

impl From<&str> for AttributeInput {
	fn from(value: &str) -> Self {
		AttributeInput::Str(value.to_string())
	}
}

impl From<String> for AttributeInput {
	fn from(value: String) -> Self {
		AttributeInput::Str(value)
	}
}

impl From<&String> for AttributeInput {
	fn from(value: &String) -> Self {
		AttributeInput::Str(value.clone())
	}
}

impl From<Vec<TokenEntry>> for AttributeInput {
	fn from(entries: Vec<TokenEntry>) -> Self {
		AttributeInput::Tokens(entries)
	}
}

impl<const N: usize> From<[TokenEntry; N]> for AttributeInput {
	fn from(entries: [TokenEntry; N]) -> Self {
		AttributeInput::Tokens(entries.into())
	}
}

impl From<Vec<&str>> for AttributeInput {
	fn from(tokens: Vec<&str>) -> Self {
		AttributeInput::Tokens(tokens.into_iter().map(TokenEntry::from).collect())
	}
}

impl From<Vec<String>> for AttributeInput {
	fn from(tokens: Vec<String>) -> Self {
		AttributeInput::Tokens(tokens.into_iter().map(TokenEntry::from).collect())
	}
}

impl<const N: usize> From<[&str; N]> for AttributeInput {
	fn from(tokens: [&str; N]) -> Self {
		AttributeInput::Tokens(tokens.into_iter().map(TokenEntry::from).collect())
	}
}

impl From<Vec<(&str, bool)>> for AttributeInput {
	fn from(toggles: Vec<(&str, bool)>) -> Self {
		AttributeInput::Tokens(toggles.into_iter().map(TokenEntry::from).collect())
	}
}

impl<const N: usize> From<[(&str, bool); N]> for AttributeInput {
	fn from(toggles: [(&str, bool); N]) -> Self {
		AttributeInput::Tokens(toggles.into_iter().map(TokenEntry::from).collect())
	}
}

#[cfg(feature = "serde")]
impl From<serde_json::Value> for AttributeInput {
	fn from(value: serde_json::Value) -> Self {
		AttributeInput::Json(value)
	}
}

/// Checks `input` against the classification of `name` and normalizes it.
///
/// # Errors
///
/// Returns [`InapplicableType`] when a boolean is given for a non-boolean
/// attribute, a token list for a non-space-separated attribute, or a token
/// list contains an entry of the wrong type.
///
/// # Examples
///
/// ```
/// use fluent_html_core::attribute::{AttributeValue, normalize_attribute};
///
/// let value = normalize_attribute("class", "foo bar".into()).unwrap();
/// match value {
///     AttributeValue::TokenSet(tokens) => assert_eq!(tokens.to_attribute_value(), "foo bar"),
///     _ => unreachable!(),
/// }
///
/// assert!(normalize_attribute("id", true.into()).is_err());
/// ```
pub fn normalize_attribute(name: &str, input: AttributeInput) -> Result<AttributeValue> {
	let kind = classify_attribute(name);
	match input {
		AttributeInput::Bool(value) => {
			if kind != AttributeKind::Boolean {
				return Err(reject(InapplicableType::BooleanValue {
					attribute: name.to_string(),
				}));
			}
			Ok(AttributeValue::Boolean(value))
		}
		AttributeInput::Str(value) => Ok(match kind {
			AttributeKind::SpaceSeparated => {
				AttributeValue::TokenSet(TokenSet::from_space_separated(&value))
			}
			AttributeKind::Boolean | AttributeKind::String => AttributeValue::String(value),
		}),
		AttributeInput::Tokens(entries) => {
			require_space_separated(name, kind)?;
			let tokens = entries
				.into_iter()
				.map(|entry| match entry {
					TokenEntry::Token(token) => (token, true),
					TokenEntry::Toggle(token, included) => (token, included),
				})
				.collect();
			Ok(AttributeValue::TokenSet(tokens))
		}
		#[cfg(feature = "serde")]
		AttributeInput::Json(value) => normalize_json(name, kind, value),
	}
}

fn require_space_separated(name: &str, kind: AttributeKind) -> Result<()> {
	if kind == AttributeKind::SpaceSeparated {
		Ok(())
	} else {
		Err(reject(InapplicableType::TokenListValue {
			attribute: name.to_string(),
		}))
	}
}

fn reject(error: InapplicableType) -> crate::Error {
	tracing::debug!(attribute = %error.attribute(), %error, "rejected attribute value");
	error.into()
}

#[cfg(feature = "serde")]
fn normalize_json(name: &str, kind: AttributeKind, value: serde_json::Value) -> Result<AttributeValue> {
	use serde_json::Value;

	match value {
		Value::Bool(value) => normalize_attribute(name, AttributeInput::Bool(value)),
		Value::String(value) => normalize_attribute(name, AttributeInput::Str(value)),
		Value::Array(items) => {
			require_space_separated(name, kind)?;
			let mut tokens = TokenSet::new();
			for (index, item) in items.into_iter().enumerate() {
				match item {
					Value::String(token) => tokens.include(token),
					other => {
						return Err(reject(InapplicableType::TokenListEntry {
							attribute: name.to_string(),
							key: index.to_string(),
							actual: json_type_name(&other),
						}));
					}
				}
			}
			Ok(AttributeValue::TokenSet(tokens))
		}
		Value::Object(entries) => {
			require_space_separated(name, kind)?;
			let mut tokens = TokenSet::new();
			for (token, flag) in entries {
				match flag {
					Value::Bool(included) => tokens.set(token, included),
					other => {
						return Err(reject(InapplicableType::TokenListEntry {
							attribute: name.to_string(),
							key: token,
							actual: json_type_name(&other),
						}));
					}
				}
			}
			Ok(AttributeValue::TokenSet(tokens))
		}
		other @ (Value::Null | Value::Number(_)) => {
			Err(reject(InapplicableType::UnsupportedValue {
				attribute: name.to_string(),
				actual: json_type_name(&other),
			}))
		}
	}
}

#[cfg(feature = "serde")]
fn json_type_name(value: &serde_json::Value) -> &'static str {
	use serde_json::Value;

	match value {
		Value::Null => "null",
		Value::Bool(_) => "bool",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::Error;
	use rstest::rstest;

	fn tokens(value: AttributeValue) -> TokenSet {
		match value {
			AttributeValue::TokenSet(tokens) => tokens,
			other => panic!("expected token set, got {other:?}"),
		}
	}

	#[rstest]
	fn test_token_set_keeps_position_on_toggle() {
		let mut set = TokenSet::from_space_separated("a b c");
		set.exclude("a");
		set.include("d");
		set.include("a");
		assert_eq!(set.to_attribute_value(), "a b c d");
	}

	#[rstest]
	fn test_token_set_excluded_tokens_are_remembered() {
		let mut set = TokenSet::new();
		set.exclude("hidden");
		assert!(set.contains("hidden"));
		assert!(!set.is_included("hidden"));
		assert_eq!(set.len(), 1);
		assert_eq!(set.to_attribute_value(), "");
	}

	#[rstest]
	fn test_token_set_split_keeps_empty_tokens() {
		let set = TokenSet::from_space_separated("a  b");
		assert_eq!(set.iter().collect::<Vec<_>>(), vec![("a", true), ("", true), ("b", true)]);
		assert_eq!(set.to_attribute_value(), "a  b");
	}

	#[rstest]
	fn test_token_set_duplicates_collapse() {
		let set = TokenSet::from_space_separated("a b a");
		assert_eq!(set.len(), 2);
		assert_eq!(set.to_attribute_value(), "a b");
	}

	#[rstest]
	#[case("disabled", true)]
	#[case("checked", false)]
	fn test_boolean_for_boolean_attribute(#[case] name: &str, #[case] value: bool) {
		assert_eq!(
			normalize_attribute(name, value.into()).unwrap(),
			AttributeValue::Boolean(value)
		);
	}

	#[rstest]
	#[case("id")]
	#[case("class")]
	#[case("hidden")]
	fn test_boolean_for_non_boolean_attribute(#[case] name: &str) {
		let error = normalize_attribute(name, true.into()).unwrap_err();
		assert_eq!(
			error,
			Error::InapplicableType(InapplicableType::BooleanValue {
				attribute: name.to_string()
			})
		);
	}

	#[rstest]
	fn test_string_for_boolean_attribute_is_kept() {
		assert_eq!(
			normalize_attribute("disabled", "disabled".into()).unwrap(),
			AttributeValue::String("disabled".to_string())
		);
	}

	#[rstest]
	fn test_string_for_plain_attribute() {
		assert_eq!(
			normalize_attribute("data-foo", "with\"quotes".into()).unwrap(),
			AttributeValue::String("with\"quotes".to_string())
		);
	}

	#[rstest]
	fn test_string_for_space_separated_attribute() {
		let set = tokens(normalize_attribute("rel", "noopener noreferrer".into()).unwrap());
		assert_eq!(set.to_attribute_value(), "noopener noreferrer");
	}

	#[rstest]
	fn test_string_and_list_normalize_alike() {
		let from_string = normalize_attribute("class", "foo bar".into()).unwrap();
		let from_list = normalize_attribute("class", ["foo", "bar"].into()).unwrap();
		assert_eq!(from_string, from_list);
	}

	#[rstest]
	fn test_mixed_token_list() {
		let input: AttributeInput = [
			TokenEntry::from("foo"),
			TokenEntry::from(("bar", false)),
			TokenEntry::from(("baz", true)),
		]
		.into();
		let set = tokens(normalize_attribute("class", input).unwrap());
		assert_eq!(
			set.iter().collect::<Vec<_>>(),
			vec![("foo", true), ("bar", false), ("baz", true)]
		);
		assert_eq!(set.to_attribute_value(), "foo baz");
	}

	#[rstest]
	fn test_token_list_repeated_entry_overwrites_flag_in_place() {
		let input: AttributeInput = [
			TokenEntry::from(("a", true)),
			TokenEntry::from(("b", true)),
			TokenEntry::from(("a", false)),
		]
		.into();
		let set = tokens(normalize_attribute("class", input).unwrap());
		assert_eq!(set.iter().collect::<Vec<_>>(), vec![("a", false), ("b", true)]);
		assert_eq!(set.to_attribute_value(), "b");
	}

	#[rstest]
	fn test_token_list_for_plain_attribute() {
		let error = normalize_attribute("id", vec!["a", "b"].into()).unwrap_err();
		assert_eq!(
			error,
			Error::InapplicableType(InapplicableType::TokenListValue {
				attribute: "id".to_string()
			})
		);
	}

	#[rstest]
	fn test_token_list_for_boolean_attribute() {
		let error = normalize_attribute("disabled", [("a", true)].into()).unwrap_err();
		assert!(matches!(
			error,
			Error::InapplicableType(InapplicableType::TokenListValue { .. })
		));
	}

	#[rstest]
	#[case(AttributeValue::Boolean(true), AttributeKind::Boolean, true)]
	#[case(AttributeValue::String("x".into()), AttributeKind::Boolean, true)]
	#[case(AttributeValue::TokenSet(TokenSet::new()), AttributeKind::SpaceSeparated, true)]
	#[case(AttributeValue::String("x".into()), AttributeKind::SpaceSeparated, false)]
	#[case(AttributeValue::Boolean(false), AttributeKind::String, false)]
	#[case(AttributeValue::TokenSet(TokenSet::new()), AttributeKind::String, false)]
	fn test_is_valid_for(
		#[case] value: AttributeValue,
		#[case] kind: AttributeKind,
		#[case] expected: bool,
	) {
		assert_eq!(value.is_valid_for(kind), expected);
	}

	#[cfg(feature = "serde")]
	mod json {
		use super::*;

		#[rstest]
		fn test_json_array_and_object() {
			let array = tokens(
				normalize_attribute("class", serde_json::json!(["a", "b"]).into()).unwrap(),
			);
			assert_eq!(array.to_attribute_value(), "a b");

			let object = tokens(
				normalize_attribute("class", serde_json::json!({"z": true, "a": false, "m": true}).into())
					.unwrap(),
			);
			assert_eq!(
				object.iter().collect::<Vec<_>>(),
				vec![("z", true), ("a", false), ("m", true)]
			);
		}

		#[rstest]
		fn test_json_scalars_follow_plain_rules() {
			assert_eq!(
				normalize_attribute("open", serde_json::json!(true).into()).unwrap(),
				AttributeValue::Boolean(true)
			);
			assert_eq!(
				normalize_attribute("title", serde_json::json!("hi").into()).unwrap(),
				AttributeValue::String("hi".to_string())
			);
			assert!(normalize_attribute("title", serde_json::json!(false).into()).is_err());
		}

		#[rstest]
		fn test_json_array_with_non_string_entry() {
			let error =
				normalize_attribute("class", serde_json::json!(["a", 3]).into()).unwrap_err();
			assert_eq!(
				error.to_string(),
				"Token list value for attribute `class` has a value of type number for key 1"
			);
		}

		#[rstest]
		fn test_json_object_with_non_bool_entry() {
			let error =
				normalize_attribute("class", serde_json::json!({"a": "yes"}).into()).unwrap_err();
			assert_eq!(
				error,
				Error::InapplicableType(InapplicableType::TokenListEntry {
					attribute: "class".to_string(),
					key: "a".to_string(),
					actual: "string",
				})
			);
		}

		#[rstest]
		fn test_json_object_for_plain_attribute() {
			let error = normalize_attribute("id", serde_json::json!({"a": true}).into()).unwrap_err();
			assert!(matches!(
				error,
				Error::InapplicableType(InapplicableType::TokenListValue { .. })
			));
		}

		#[rstest]
		#[case(serde_json::json!(null), "null")]
		#[case(serde_json::json!(42), "number")]
		fn test_json_unsupported_values(#[case] value: serde_json::Value, #[case] actual: &str) {
			let error = normalize_attribute("title", value.into()).unwrap_err();
			assert_eq!(
				error.to_string(),
				format!("Cannot use {actual} attribute value for attribute `title`")
			);
		}
	}
}
