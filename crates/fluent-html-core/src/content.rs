//! Content items an element can hold, and the trusted-markup capability.

use crate::element::Element;
use crate::error::Result;
use crate::raw::RawMarkup;

/// HTML that has already been processed and can be trusted: it is emitted as
/// is and never escaped again.
pub trait ProcessedHtml {
	/// Appends the markup to `output`.
	///
	/// On error `output` may hold a partial rendering.
	fn write_html(&self, output: &mut String) -> Result<()>;

	/// Returns the markup as a new string.
	fn to_html(&self) -> Result<String> {
		let mut output = String::new();
		self.write_html(&mut output)?;
		Ok(output)
	}
}

/// A single child of an [`Element`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Content {
	/// Text, escaped when rendered.
	Text(String),
	/// Trusted markup, emitted verbatim.
	Raw(RawMarkup),
	/// A nested element, rendered recursively.
	Element(Element),
}

impl Content {
	/// Short name of the variant.
	pub fn type_name(&self) -> &'static str {
		match self {
			Content::Text(_) => "text",
			Content::Raw(_) => "raw markup",
			Content::Element(_) => "element",
		}
	}
}

impl From<&str> for Content {
	fn from(text: &str) -> Self {
		Content::Text(text.to_string())
	}
}

impl From<String> for Content {
	fn from(text: String) -> Self {
		Content::Text(text)
	}
}

impl From<&String> for Content {
	fn from(text: &String) -> Self {
		Content::Text(text.clone())
	}
}

impl From<RawMarkup> for Content {
	fn from(markup: RawMarkup) -> Self {
		Content::Raw(markup)
	}
}

impl From<Element> for Content {
	fn from(element: Element) -> Self {
		Content::Element(element)
	}
}
