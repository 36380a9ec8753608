//! Row actions and click routing
//!
//! The rendered HTML tags every clickable element with `data-row-index` and
//! `data-action`. A client sends those back as a [`TableEvent`] and
//! [`DataTable::dispatch`](super::DataTable::dispatch) invokes the matching
//! callback. Each event fires exactly one callback: clicks on action buttons
//! are contained and never reach the row-click handler.

use crate::row::Row;
use serde_json::Value;
use std::fmt::{self, Debug};
use std::str::FromStr;
use std::sync::Arc;

/// Callback receiving the clicked row
pub type RowCallback = Arc<dyn Fn(&Row) + Send + Sync>;

/// Callback receiving the target of a delete click
pub type DeleteCallback = Arc<dyn Fn(DeleteTarget<'_>) + Send + Sync>;

/// What a delete callback is told to delete
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeleteTarget<'a> {
	/// The row's `id` value
	Id(&'a Value),
	/// The whole row, when it has no `id`
	Row(&'a Row),
}

impl<'a> DeleteTarget<'a> {
	/// Target for `row`: its `id` when present, otherwise the row itself
	pub fn of(row: &'a Row) -> Self {
		match row.id() {
			Some(id) => Self::Id(id),
			None => Self::Row(row),
		}
	}
}

/// Caller-defined button in the actions column
#[derive(Clone)]
pub struct RowAction {
	/// Icon name or glyph shown before the label
	pub icon: Option<String>,
	/// Button label
	pub label: String,
	/// Invoked with the row when the button is clicked
	pub on_click: RowCallback,
	/// Extra button class
	pub class_name: Option<String>,
	/// Tooltip; defaults to the label
	pub title: Option<String>,
}

impl RowAction {
	/// Creates an action with a label and click handler
	pub fn new<F>(label: impl Into<String>, on_click: F) -> Self
	where
		F: Fn(&Row) + Send + Sync + 'static,
	{
		Self {
			icon: None,
			label: label.into(),
			on_click: Arc::new(on_click),
			class_name: None,
			title: None,
		}
	}

	/// Sets the icon
	pub fn icon(mut self, icon: impl Into<String>) -> Self {
		self.icon = Some(icon.into());
		self
	}

	/// Sets the extra button class
	pub fn class_name(mut self, class: impl Into<String>) -> Self {
		self.class_name = Some(class.into());
		self
	}

	/// Sets the tooltip
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}
}

impl Debug for RowAction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RowAction")
			.field("icon", &self.icon)
			.field("label", &self.label)
			.field("class_name", &self.class_name)
			.field("title", &self.title)
			.finish_non_exhaustive()
	}
}

/// Clicked element within a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Click {
	/// The row body
	Row,
	/// The edit button
	Edit,
	/// The delete button
	Delete,
	/// The additional action at this position
	Action(usize),
}

impl Click {
	/// Value of the `data-action` attribute for this click
	pub fn as_attr(&self) -> String {
		match self {
			Self::Row => "row".to_string(),
			Self::Edit => "edit".to_string(),
			Self::Delete => "delete".to_string(),
			Self::Action(index) => format!("action-{}", index),
		}
	}

	/// Returns true for clicks on buttons in the actions column
	pub fn is_action(&self) -> bool {
		!matches!(self, Self::Row)
	}
}

impl FromStr for Click {
	type Err = String;

	/// Parses a `data-action` attribute value
	///
	/// # Examples
	///
	/// ```
	/// use orgdash_tables::Click;
	///
	/// assert_eq!("delete".parse::<Click>(), Ok(Click::Delete));
	/// assert_eq!("action-2".parse::<Click>(), Ok(Click::Action(2)));
	/// assert!("action-x".parse::<Click>().is_err());
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"row" => Ok(Self::Row),
			"edit" => Ok(Self::Edit),
			"delete" => Ok(Self::Delete),
			other => other
				.strip_prefix("action-")
				.and_then(|index| index.parse().ok())
				.map(Self::Action)
				.ok_or_else(|| format!("unknown table action: {}", other)),
		}
	}
}

/// A click on one row of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEvent {
	/// Zero-based position of the row in the input sequence
	pub row: usize,
	/// What was clicked
	pub click: Click,
}

impl TableEvent {
	/// Creates an event for `click` on the row at `row`
	pub fn new(row: usize, click: Click) -> Self {
		Self { row, click }
	}

	/// Click on the row body
	pub fn row_click(row: usize) -> Self {
		Self::new(row, Click::Row)
	}

	/// Click on the edit button
	pub fn edit(row: usize) -> Self {
		Self::new(row, Click::Edit)
	}

	/// Click on the delete button
	pub fn delete(row: usize) -> Self {
		Self::new(row, Click::Delete)
	}

	/// Click on an additional action button
	pub fn action(row: usize, action: usize) -> Self {
		Self::new(row, Click::Action(action))
	}

	/// Rebuilds an event from the `data-row-index` and `data-action` attributes
	pub fn from_attrs(row_index: &str, action: &str) -> Option<Self> {
		let row = row_index.trim().parse().ok()?;
		let click = action.trim().parse().ok()?;
		Some(Self::new(row, click))
	}
}

/// Result of dispatching a [`TableEvent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
	/// Exactly one callback was invoked
	Handled,
	/// No callback was invoked
	Ignored,
}

impl DispatchOutcome {
	/// Returns true when a callback ran
	pub fn is_handled(&self) -> bool {
		matches!(self, Self::Handled)
	}
}
