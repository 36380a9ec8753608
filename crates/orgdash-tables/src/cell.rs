//! Formatted cell content
//!
//! [`CellContent`] is the output of the per-cell formatting dispatch and of
//! custom column renderers. It keeps enough structure for both the HTML
//! renderer and plain-text consumers such as the CSV export.

use std::borrow::Cow;

/// Placeholder shown for missing values
pub const PLACEHOLDER: &str = "-";

/// Direction of a signed amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
	/// Amount above zero, shown with `+`
	Positive,
	/// Amount below zero, shown with `-`
	Negative,
}

impl Sign {
	/// Prefix character for the sign
	pub fn prefix(&self) -> char {
		match self {
			Self::Positive => '+',
			Self::Negative => '-',
		}
	}

	/// Style class coloring the amount
	pub fn class(&self) -> &'static str {
		match self {
			Self::Positive => "text-green-600",
			Self::Negative => "text-red-600",
		}
	}
}

/// Content of one rendered cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
	/// The missing-value placeholder
	Placeholder,
	/// Plain text with an optional style class
	Text {
		/// Display text
		text: String,
		/// Optional style class
		class: Option<String>,
	},
	/// Formatted amount; `text` already carries the sign prefix when `sign` is set
	Amount {
		/// Display text
		text: String,
		/// Sign coloring, if the column shows signs
		sign: Option<Sign>,
	},
	/// Colored pill
	Badge {
		/// Display label
		label: String,
		/// Style class of the pill
		class: String,
	},
	/// Trusted markup produced by a custom renderer, with its plain-text form
	Markup {
		/// Raw HTML, inserted without escaping
		html: String,
		/// Text used by plain-text consumers
		text: String,
	},
}

impl CellContent {
	/// Plain text content without a style class
	pub fn text(text: impl Into<String>) -> Self {
		Self::Text {
			text: text.into(),
			class: None,
		}
	}

	/// Trusted markup with its plain-text fallback
	pub fn markup(html: impl Into<String>, text: impl Into<String>) -> Self {
		Self::Markup {
			html: html.into(),
			text: text.into(),
		}
	}

	/// Returns true for the missing-value placeholder
	pub fn is_placeholder(&self) -> bool {
		matches!(self, Self::Placeholder)
	}

	/// Text shown to the user, without markup
	///
	/// # Examples
	///
	/// ```
	/// use orgdash_tables::CellContent;
	///
	/// assert_eq!(CellContent::Placeholder.plain_text(), "-");
	/// assert_eq!(CellContent::markup("<b>Hi</b>", "Hi").plain_text(), "Hi");
	/// ```
	pub fn plain_text(&self) -> Cow<'_, str> {
		match self {
			Self::Placeholder => Cow::Borrowed(PLACEHOLDER),
			Self::Text { text, .. } | Self::Amount { text, .. } | Self::Markup { text, .. } => {
				Cow::Borrowed(text)
			}
			Self::Badge { label, .. } => Cow::Borrowed(label),
		}
	}

	/// Style class attached to the content, if any
	pub fn class(&self) -> Option<&str> {
		match self {
			Self::Text { class, .. } => class.as_deref(),
			Self::Amount { sign, .. } => sign.map(|s| s.class()),
			Self::Badge { class, .. } => Some(class),
			Self::Placeholder | Self::Markup { .. } => None,
		}
	}
}

impl From<String> for CellContent {
	fn from(text: String) -> Self {
		Self::text(text)
	}
}

impl From<&str> for CellContent {
	fn from(text: &str) -> Self {
		Self::text(text)
	}
}
