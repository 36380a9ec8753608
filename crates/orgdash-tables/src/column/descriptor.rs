//! Column descriptors
//!
//! A [`ColumnDescriptor`] says how one field of a row is displayed: which key
//! to read, the header title, the semantic [`ColumnType`] driving default
//! formatting, layout hints and an optional custom renderer.

use crate::badge::BadgeColor;
use crate::cell::CellContent;
use crate::error::{Result, TableError};
use crate::row::Row;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::{self, Debug};
use std::str::FromStr;
use std::sync::Arc;

/// Width used when no explicit width is set
pub const AUTO_WIDTH: &str = "auto";

/// Semantic type of a column, selecting the default cell formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
	/// Free text
	Text,
	/// Locale-grouped number
	Number,
	/// Rupiah amount
	Currency,
	/// Calendar date
	Date,
	/// Colored pill with label lookup
	Badge,
}

impl ColumnType {
	/// Lowercase name of the type
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Text => "text",
			Self::Number => "number",
			Self::Currency => "currency",
			Self::Date => "date",
			Self::Badge => "badge",
		}
	}
}

impl FromStr for ColumnType {
	type Err = String;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"text" => Ok(Self::Text),
			"number" => Ok(Self::Number),
			"currency" => Ok(Self::Currency),
			"date" => Ok(Self::Date),
			"badge" => Ok(Self::Badge),
			other => Err(format!("unknown column type: {}", other)),
		}
	}
}

/// Horizontal alignment of cell or header content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
	/// Left aligned
	#[default]
	Left,
	/// Right aligned
	Right,
	/// Centered
	Center,
}

impl Align {
	/// Style class for this alignment
	pub fn class(&self) -> &'static str {
		match self {
			Self::Left => "text-left",
			Self::Right => "text-right",
			Self::Center => "text-center",
		}
	}
}

/// Custom cell renderer, called with the cell value and the whole row
pub type CellRenderer = Arc<dyn Fn(&Value, &Row) -> CellContent + Send + Sync>;

/// Display configuration of one table column
///
/// # Examples
///
/// ```
/// use orgdash_tables::{Align, ColumnDescriptor, ColumnType};
///
/// let amount = ColumnDescriptor::currency("amount", "Jumlah")
///     .show_sign(true)
///     .align(Align::Right)
///     .width("150px");
///
/// assert_eq!(amount.column_type, Some(ColumnType::Currency));
/// assert!(amount.show_sign);
/// assert_eq!(amount.width, "150px");
/// ```
#[derive(Clone)]
pub struct ColumnDescriptor {
	/// Field name read from each row
	pub key: String,
	/// Header label
	pub title: String,
	/// Semantic type; `None` shows the raw value
	pub column_type: Option<ColumnType>,
	/// Preferred width (`auto` when unset)
	pub width: String,
	/// Minimum width
	pub min_width: Option<String>,
	/// Maximum width
	pub max_width: Option<String>,
	/// Cell alignment
	pub align: Align,
	/// Header alignment
	pub header_align: Align,
	/// Raw value (or `true`/`false`) to badge class
	pub badge_colors: BTreeMap<String, String>,
	/// Raw value to badge label
	pub badge_labels: BTreeMap<String, String>,
	/// Shows a sort indicator in the header
	pub sortable: bool,
	/// Prefixes currency amounts with `+`/`-` and colors them
	pub show_sign: bool,
	/// Extra class for body cells
	pub class_name: Option<String>,
	/// Extra class for the header cell
	pub header_class_name: Option<String>,
	/// Class wrapping text content
	pub text_class_name: Option<String>,
	/// Custom renderer overriding type-based formatting
	pub render: Option<CellRenderer>,
}

impl ColumnDescriptor {
	/// Creates an untyped column
	pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			title: title.into(),
			column_type: None,
			width: AUTO_WIDTH.to_string(),
			min_width: None,
			max_width: None,
			align: Align::Left,
			header_align: Align::Left,
			badge_colors: BTreeMap::new(),
			badge_labels: BTreeMap::new(),
			sortable: false,
			show_sign: false,
			class_name: None,
			header_class_name: None,
			text_class_name: None,
			render: None,
		}
	}

	/// Creates a text column
	pub fn text(key: impl Into<String>, title: impl Into<String>) -> Self {
		Self::new(key, title).with_type(ColumnType::Text)
	}

	/// Creates a number column
	pub fn number(key: impl Into<String>, title: impl Into<String>) -> Self {
		Self::new(key, title).with_type(ColumnType::Number)
	}

	/// Creates a currency column
	pub fn currency(key: impl Into<String>, title: impl Into<String>) -> Self {
		Self::new(key, title).with_type(ColumnType::Currency)
	}

	/// Creates a date column
	pub fn date(key: impl Into<String>, title: impl Into<String>) -> Self {
		Self::new(key, title).with_type(ColumnType::Date)
	}

	/// Creates a badge column
	pub fn badge(key: impl Into<String>, title: impl Into<String>) -> Self {
		Self::new(key, title).with_type(ColumnType::Badge)
	}

	/// Sets the column type
	pub fn with_type(mut self, column_type: ColumnType) -> Self {
		self.column_type = Some(column_type);
		self
	}

	/// Sets the preferred width
	pub fn width(mut self, width: impl Into<String>) -> Self {
		self.width = width.into();
		self
	}

	/// Sets the minimum width
	pub fn min_width(mut self, width: impl Into<String>) -> Self {
		self.min_width = Some(width.into());
		self
	}

	/// Sets the maximum width
	pub fn max_width(mut self, width: impl Into<String>) -> Self {
		self.max_width = Some(width.into());
		self
	}

	/// Sets the cell alignment
	pub fn align(mut self, align: Align) -> Self {
		self.align = align;
		self
	}

	/// Sets the header alignment
	pub fn header_align(mut self, align: Align) -> Self {
		self.header_align = align;
		self
	}

	/// Maps a raw value to a badge color and label
	pub fn badge_option(
		mut self,
		value: impl Into<String>,
		color: BadgeColor,
		label: impl Into<String>,
	) -> Self {
		let value = value.into();
		self.badge_colors
			.insert(value.clone(), color.class().to_string());
		self.badge_labels.insert(value, label.into());
		self
	}

	/// Maps a raw value to a badge class without a label
	pub fn badge_color(mut self, value: impl Into<String>, class: impl Into<String>) -> Self {
		self.badge_colors.insert(value.into(), class.into());
		self
	}

	/// Sets whether the header shows a sort indicator
	pub fn sortable(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}

	/// Sets whether currency amounts show their sign
	pub fn show_sign(mut self, show_sign: bool) -> Self {
		self.show_sign = show_sign;
		self
	}

	/// Sets the extra class for body cells
	pub fn class_name(mut self, class: impl Into<String>) -> Self {
		self.class_name = Some(class.into());
		self
	}

	/// Sets the extra class for the header cell
	pub fn header_class_name(mut self, class: impl Into<String>) -> Self {
		self.header_class_name = Some(class.into());
		self
	}

	/// Sets the class wrapping text content
	pub fn text_class_name(mut self, class: impl Into<String>) -> Self {
		self.text_class_name = Some(class.into());
		self
	}

	/// Sets a custom renderer
	pub fn render<F>(mut self, render: F) -> Self
	where
		F: Fn(&Value, &Row) -> CellContent + Send + Sync + 'static,
	{
		self.render = Some(Arc::new(render));
		self
	}

	/// Checks that the descriptor can be rendered
	pub fn validate(&self) -> Result<()> {
		if self.key.is_empty() {
			return Err(TableError::EmptyColumnKey);
		}
		Ok(())
	}
}

impl Debug for ColumnDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ColumnDescriptor")
			.field("key", &self.key)
			.field("title", &self.title)
			.field("column_type", &self.column_type)
			.field("width", &self.width)
			.field("align", &self.align)
			.field("sortable", &self.sortable)
			.field("show_sign", &self.show_sign)
			.field("badge_colors", &self.badge_colors)
			.field("badge_labels", &self.badge_labels)
			.field("custom_render", &self.render.is_some())
			.finish_non_exhaustive()
	}
}

/// Validates every descriptor of a column list
pub fn validate_columns(columns: &[ColumnDescriptor]) -> Result<()> {
	columns.iter().try_for_each(ColumnDescriptor::validate)
}
