//! Raw markup: HTML that is emitted without escaping.

use std::fmt;

use crate::content::ProcessedHtml;
use crate::error::Result;

/// HTML that should not be escaped because its contents are known to be safe,
/// e.g. markup written by hand by the developer.
///
/// No validation is performed; the caller vouches for the contents.
///
/// # Example
///
/// ```
/// use fluent_html_core::raw_markup;
///
/// let markup = raw_markup("<b>bold</b>");
/// assert_eq!(markup.render(), "<b>bold</b>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RawMarkup(String);

impl RawMarkup {
	pub fn new(html: impl Into<String>) -> Self {
		Self(html.into())
	}

	/// Returns the markup unchanged.
	pub fn render(&self) -> &str {
		&self.0
	}

	pub fn into_string(self) -> String {
		self.0
	}
}

/// Wraps `content` as [`RawMarkup`].
pub fn raw_markup(content: impl Into<String>) -> RawMarkup {
	RawMarkup::new(content)
}

impl fmt::Display for RawMarkup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl ProcessedHtml for RawMarkup {
	fn write_html(&self, output: &mut String) -> Result<()> {
		output.push_str(&self.0);
		Ok(())
	}
}
