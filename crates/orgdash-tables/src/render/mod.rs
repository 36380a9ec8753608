//! Generic table renderer
//!
//! [`DataTable`] takes borrowed rows and column descriptors and produces
//! either a structured [`TableView`] or escaped HTML. It owns the loading
//! and empty states, the per-cell formatting dispatch, row styling and the
//! routing of clicks back to caller callbacks.
//!
//! # Render states
//!
//! Evaluated in order, mutually exclusive:
//!
//! 1. `loading` → loading placeholder only, rows are ignored
//! 2. no rows → empty-state message only
//! 3. otherwise → header plus one body row per input row
//!
//! # Example
//!
//! ```
//! use orgdash_tables::{DataTable, Row, TableEvent, TableOptions, financial_columns};
//! use std::sync::{Arc, Mutex};
//!
//! let rows = vec![
//!     Row::new()
//!         .with("id", 1)
//!         .with("description", "Iuran anggota")
//!         .with("type", "income")
//!         .with("amount", 1500000),
//! ];
//! let columns = financial_columns(None);
//!
//! let deleted = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&deleted);
//! let mut table = DataTable::new(&rows, &columns).options(
//!     TableOptions::new()
//!         .on_delete(move |target| sink.lock().unwrap().push(format!("{:?}", target))),
//! );
//!
//! let html = table.render_html();
//! assert!(html.contains("+Rp 1.500.000"));
//! assert!(html.contains("data-action=\"delete\""));
//!
//! assert!(table.dispatch(TableEvent::delete(0)).is_handled());
//! assert_eq!(deleted.lock().unwrap().len(), 1);
//! ```

mod cell;
pub mod events;
mod html;

pub use cell::format_cell;
pub use events::{
	Click, DeleteCallback, DeleteTarget, DispatchOutcome, RowAction, RowCallback, TableEvent,
};

use crate::cell::CellContent;
use crate::column::{AUTO_WIDTH, ColumnDescriptor};
use crate::row::{IdOrIndex, Row, RowKey, RowKeyResolver};
use crate::settings::TableSettings;
use html::{Element, Node, classes};
use std::fmt::{self, Debug};
use std::sync::Arc;

const TABLE_CLASS: &str = "min-w-full divide-y divide-gray-200";
const HEADER_CELL_CLASS: &str = "text-xs font-medium text-gray-500 uppercase tracking-wider";
const CELL_CLASS: &str = "px-6 py-4 whitespace-nowrap text-sm";
const COMPACT_CELL_CLASS: &str = "px-3 py-2 whitespace-nowrap text-sm";
const STRIPED_CLASS: &str = "bg-gray-50";
const HOVER_CLASS: &str = "hover:bg-gray-100";
const HOVERED_CLASS: &str = "is-hovered";
const CLICKABLE_CLASS: &str = "cursor-pointer";
const SORTABLE_CLASS: &str = "sortable";
const BADGE_CLASS: &str = "px-2 inline-flex text-xs leading-5 font-semibold rounded-full";
const ACTIONS_CLASS: &str = "flex items-center justify-end gap-2";
const EDIT_BUTTON_CLASS: &str = "text-blue-600 hover:text-blue-900";
const DELETE_BUTTON_CLASS: &str = "text-red-600 hover:text-red-900";
const ACTION_BUTTON_CLASS: &str = "text-gray-600 hover:text-gray-900";
const STATE_CLASS: &str = "p-8 text-center text-gray-500";

/// Display options of a [`DataTable`]
///
/// # Examples
///
/// ```
/// use orgdash_tables::{RowAction, TableOptions};
///
/// let options = TableOptions::new()
///     .on_edit(|row| println!("edit {:?}", row.id()))
///     .action(RowAction::new("Detail", |_| {}).icon("eye"))
///     .show_row_numbers(true)
///     .compact(true);
///
/// assert!(options.actions);
/// assert!(options.striped);
/// assert_eq!(options.additional_actions.len(), 1);
/// ```
#[derive(Clone)]
pub struct TableOptions {
	/// Shows the trailing actions column when any action is configured
	pub actions: bool,
	/// Called with the row when its edit button is clicked
	pub on_edit: Option<RowCallback>,
	/// Called with the row's id (or the row) when its delete button is clicked
	pub on_delete: Option<DeleteCallback>,
	/// Extra buttons in the actions column, in display order
	pub additional_actions: Vec<RowAction>,
	/// Shows the loading placeholder instead of any rows
	pub loading: bool,
	/// Message shown when there are no rows; defaults to the settings label
	pub empty_message: Option<String>,
	/// Prepends a 1-based row number column
	pub show_row_numbers: bool,
	/// Shades odd-indexed rows
	pub striped: bool,
	/// Highlights the row under the pointer
	pub hoverable: bool,
	/// Uses tighter cell padding
	pub compact: bool,
	/// Called with the row when the row body is clicked
	pub on_row_click: Option<RowCallback>,
	/// Resolves the identity written to `data-row-key`
	pub row_key: Arc<dyn RowKeyResolver>,
	/// Labels and formatters
	pub settings: TableSettings,
}

impl Default for TableOptions {
	fn default() -> Self {
		Self {
			actions: true,
			on_edit: None,
			on_delete: None,
			additional_actions: Vec::new(),
			loading: false,
			empty_message: None,
			show_row_numbers: false,
			striped: true,
			hoverable: true,
			compact: false,
			on_row_click: None,
			row_key: Arc::new(IdOrIndex::default()),
			settings: TableSettings::default(),
		}
	}
}

impl TableOptions {
	/// Creates options with all defaults
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets whether the actions column may be shown
	pub fn actions(mut self, actions: bool) -> Self {
		self.actions = actions;
		self
	}

	/// Sets the edit callback
	pub fn on_edit<F>(mut self, f: F) -> Self
	where
		F: Fn(&Row) + Send + Sync + 'static,
	{
		self.on_edit = Some(Arc::new(f));
		self
	}

	/// Sets the delete callback
	pub fn on_delete<F>(mut self, f: F) -> Self
	where
		F: Fn(DeleteTarget<'_>) + Send + Sync + 'static,
	{
		self.on_delete = Some(Arc::new(f));
		self
	}

	/// Appends an additional action
	pub fn action(mut self, action: RowAction) -> Self {
		self.additional_actions.push(action);
		self
	}

	/// Sets the loading flag
	pub fn loading(mut self, loading: bool) -> Self {
		self.loading = loading;
		self
	}

	/// Sets the empty-state message
	pub fn empty_message(mut self, message: impl Into<String>) -> Self {
		self.empty_message = Some(message.into());
		self
	}

	/// Sets whether row numbers are shown
	pub fn show_row_numbers(mut self, show: bool) -> Self {
		self.show_row_numbers = show;
		self
	}

	/// Sets zebra striping
	pub fn striped(mut self, striped: bool) -> Self {
		self.striped = striped;
		self
	}

	/// Sets hover highlighting
	pub fn hoverable(mut self, hoverable: bool) -> Self {
		self.hoverable = hoverable;
		self
	}

	/// Sets compact cell padding
	pub fn compact(mut self, compact: bool) -> Self {
		self.compact = compact;
		self
	}

	/// Sets the row click callback
	pub fn on_row_click<F>(mut self, f: F) -> Self
	where
		F: Fn(&Row) + Send + Sync + 'static,
	{
		self.on_row_click = Some(Arc::new(f));
		self
	}

	/// Sets the row identity resolver
	pub fn row_key(mut self, resolver: impl RowKeyResolver + 'static) -> Self {
		self.row_key = Arc::new(resolver);
		self
	}

	/// Sets labels and formatters
	pub fn settings(mut self, settings: TableSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Returns true when the actions column is rendered
	pub fn has_actions(&self) -> bool {
		self.actions
			&& (self.on_edit.is_some()
				|| self.on_delete.is_some()
				|| !self.additional_actions.is_empty())
	}

	fn empty_text(&self) -> &str {
		self.empty_message
			.as_deref()
			.unwrap_or(&self.settings.labels.empty)
	}
}

impl Debug for TableOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TableOptions")
			.field("actions", &self.actions)
			.field("on_edit", &self.on_edit.is_some())
			.field("on_delete", &self.on_delete.is_some())
			.field("additional_actions", &self.additional_actions)
			.field("loading", &self.loading)
			.field("empty_message", &self.empty_message)
			.field("show_row_numbers", &self.show_row_numbers)
			.field("striped", &self.striped)
			.field("hoverable", &self.hoverable)
			.field("compact", &self.compact)
			.field("on_row_click", &self.on_row_click.is_some())
			.finish_non_exhaustive()
	}
}

/// Derived render state; never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRenderState {
	/// Loading placeholder is shown
	pub loading: bool,
	/// Not loading and there are no rows
	pub is_empty: bool,
	/// Number of input rows
	pub row_count: usize,
	/// Row under pointer-driven interaction, if any
	pub active_row: Option<usize>,
}

/// Transient pointer and menu state of one table instance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionState {
	/// Row under the pointer
	pub hovered: Option<usize>,
	/// Row that received the last row click
	pub pressed: Option<usize>,
	/// Row whose action menu is open
	pub open_menu: Option<usize>,
}

impl InteractionState {
	/// Row currently driven by the pointer
	pub fn active_row(&self) -> Option<usize> {
		self.pressed.or(self.hovered)
	}
}

/// Header cell of a populated table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
	/// Column key; `None` for the row number and actions columns
	pub key: Option<String>,
	/// Header text
	pub title: String,
	/// Style classes
	pub class: String,
	/// Inline width style
	pub style: Option<String>,
}

/// Body cell of a populated table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyCell {
	/// Formatted content
	pub content: CellContent,
	/// Style classes of the cell
	pub class: String,
}

/// Button in the actions column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
	/// Click routed by this button
	pub click: Click,
	/// Visible label
	pub label: String,
	/// Optional icon
	pub icon: Option<String>,
	/// Tooltip
	pub title: String,
	/// Style classes
	pub class: String,
}

/// Body row of a populated table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyRow {
	/// Identity from the row key resolver
	pub key: RowKey,
	/// Zero-based position in the input
	pub index: usize,
	/// 1-based number, when row numbers are shown
	pub number: Option<usize>,
	/// Style classes of the row number cell
	pub number_class: String,
	/// Style classes of the row
	pub class: String,
	/// One cell per column, in column order
	pub cells: Vec<BodyCell>,
	/// Buttons of the actions column; empty when the column is hidden
	pub actions: Vec<ActionButton>,
}

/// Structured render output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView {
	/// Loading placeholder
	Loading {
		/// Loading text
		message: String,
	},
	/// Empty-state message, without header or rows
	Empty {
		/// Empty-state text
		message: String,
	},
	/// Full table
	Populated {
		/// Header cells, including row number and actions headers when shown
		header: Vec<HeaderCell>,
		/// Body rows, in input order
		rows: Vec<BodyRow>,
	},
}

/// Renders rows with column descriptors
///
/// The table borrows its inputs and never mutates them. Interaction state
/// lives only as long as the table value.
pub struct DataTable<'a> {
	rows: &'a [Row],
	columns: &'a [ColumnDescriptor],
	options: TableOptions,
	interaction: InteractionState,
}

impl<'a> DataTable<'a> {
	/// Creates a table with default options
	pub fn new(rows: &'a [Row], columns: &'a [ColumnDescriptor]) -> Self {
		Self {
			rows,
			columns,
			options: TableOptions::default(),
			interaction: InteractionState::default(),
		}
	}

	/// Replaces the options
	pub fn options(mut self, options: TableOptions) -> Self {
		self.options = options;
		self
	}

	/// Current options
	pub fn table_options(&self) -> &TableOptions {
		&self.options
	}

	/// Input rows
	pub fn rows(&self) -> &'a [Row] {
		self.rows
	}

	/// Input columns
	pub fn columns(&self) -> &'a [ColumnDescriptor] {
		self.columns
	}

	/// Derived render state
	pub fn state(&self) -> TableRenderState {
		TableRenderState {
			loading: self.options.loading,
			is_empty: !self.options.loading && self.rows.is_empty(),
			row_count: self.rows.len(),
			active_row: self.interaction.active_row(),
		}
	}

	/// Transient interaction state
	pub fn interaction(&self) -> &InteractionState {
		&self.interaction
	}

	/// Records the pointer entering the row at `index`
	///
	/// A row pressed earlier stops being active once the pointer moves to
	/// another row.
	pub fn pointer_enter(&mut self, index: usize) {
		if index < self.rows.len() {
			self.interaction.hovered = Some(index);
			if self.interaction.pressed != Some(index) {
				self.interaction.pressed = None;
			}
		}
	}

	/// Records the pointer leaving the table body
	pub fn pointer_leave(&mut self) {
		self.interaction.hovered = None;
		self.interaction.pressed = None;
	}

	/// Opens the action menu of the row at `index`, or closes it if already open
	pub fn toggle_menu(&mut self, index: usize) {
		self.interaction.open_menu = match self.interaction.open_menu {
			Some(open) if open == index => None,
			_ if index < self.rows.len() => Some(index),
			_ => None,
		};
	}

	/// Returns true when the actions column is rendered
	pub fn has_actions(&self) -> bool {
		self.options.has_actions()
	}

	/// Formats one cell with this table's settings
	pub fn format_cell(&self, column: &ColumnDescriptor, row: &Row) -> CellContent {
		format_cell(column, row, &self.options.settings)
	}

	/// Builds the structured render output
	pub fn view(&self) -> TableView {
		let labels = &self.options.settings.labels;
		if self.options.loading {
			return TableView::Loading {
				message: labels.loading.clone(),
			};
		}
		if self.rows.is_empty() {
			return TableView::Empty {
				message: self.options.empty_text().to_string(),
			};
		}

		TableView::Populated {
			header: self.header(),
			rows: self
				.rows
				.iter()
				.enumerate()
				.map(|(index, row)| self.body_row(index, row))
				.collect(),
		}
	}

	fn cell_class(&self) -> &'static str {
		if self.options.compact {
			COMPACT_CELL_CLASS
		} else {
			CELL_CLASS
		}
	}

	fn header(&self) -> Vec<HeaderCell> {
		let labels = &self.options.settings.labels;
		let mut header = Vec::with_capacity(self.columns.len() + 2);

		if self.options.show_row_numbers {
			header.push(HeaderCell {
				key: None,
				title: labels.row_number.clone(),
				class: classes([self.cell_class(), HEADER_CELL_CLASS, "text-left"]),
				style: None,
			});
		}

		header.extend(self.columns.iter().map(|column| HeaderCell {
			key: Some(column.key.clone()),
			title: column.title.clone(),
			class: classes([
				self.cell_class(),
				HEADER_CELL_CLASS,
				column.header_align.class(),
				if column.sortable { SORTABLE_CLASS } else { "" },
				column.header_class_name.as_deref().unwrap_or_default(),
			]),
			style: width_style(column),
		}));

		if self.has_actions() {
			header.push(HeaderCell {
				key: None,
				title: labels.actions.clone(),
				class: classes([self.cell_class(), HEADER_CELL_CLASS, "text-right"]),
				style: None,
			});
		}
		header
	}

	fn row_class(&self, index: usize) -> String {
		classes([
			if self.options.striped && index % 2 == 1 {
				STRIPED_CLASS
			} else {
				""
			},
			if self.options.hoverable { HOVER_CLASS } else { "" },
			if self.options.hoverable && self.interaction.hovered == Some(index) {
				HOVERED_CLASS
			} else {
				""
			},
			if self.options.on_row_click.is_some() {
				CLICKABLE_CLASS
			} else {
				""
			},
		])
	}

	fn body_row(&self, index: usize, row: &Row) -> BodyRow {
		let cells = self
			.columns
			.iter()
			.map(|column| BodyCell {
				content: self.format_cell(column, row),
				class: classes([
					self.cell_class(),
					column.align.class(),
					column.class_name.as_deref().unwrap_or_default(),
				]),
			})
			.collect();

		BodyRow {
			key: self.options.row_key.resolve(row, index),
			index,
			number: self.options.show_row_numbers.then_some(index + 1),
			number_class: classes([self.cell_class(), "text-gray-500"]),
			class: self.row_class(index),
			cells,
			actions: if self.has_actions() {
				self.action_buttons()
			} else {
				Vec::new()
			},
		}
	}

	fn action_buttons(&self) -> Vec<ActionButton> {
		let labels = &self.options.settings.labels;
		let mut buttons = Vec::new();
		if self.options.on_edit.is_some() {
			buttons.push(ActionButton {
				click: Click::Edit,
				label: labels.edit.clone(),
				icon: Some("edit".to_string()),
				title: labels.edit.clone(),
				class: EDIT_BUTTON_CLASS.to_string(),
			});
		}
		if self.options.on_delete.is_some() {
			buttons.push(ActionButton {
				click: Click::Delete,
				label: labels.delete.clone(),
				icon: Some("trash".to_string()),
				title: labels.delete.clone(),
				class: DELETE_BUTTON_CLASS.to_string(),
			});
		}
		for (i, action) in self.options.additional_actions.iter().enumerate() {
			buttons.push(ActionButton {
				click: Click::Action(i),
				label: action.label.clone(),
				icon: action.icon.clone(),
				title: action.title.clone().unwrap_or_else(|| action.label.clone()),
				class: classes([
					ACTION_BUTTON_CLASS,
					action.class_name.as_deref().unwrap_or_default(),
				]),
			});
		}
		buttons
	}

	/// Renders the table to escaped HTML
	pub fn render_html(&self) -> String {
		let view = match self.view() {
			TableView::Loading { message } => Element::new("div")
				.attr("class", classes([STATE_CLASS, "table-loading"]))
				.attr("role", "status")
				.child(message),
			TableView::Empty { message } => Element::new("div")
				.attr("class", classes([STATE_CLASS, "table-empty"]))
				.child(message),
			TableView::Populated { header, rows } => {
				let thead = Element::new("thead")
					.attr("class", "bg-gray-50")
					.child(Element::new("tr").children(header.into_iter().map(header_element)));
				let tbody = Element::new("tbody")
					.attr("class", "bg-white divide-y divide-gray-200")
					.children(rows.into_iter().map(row_element));
				Element::new("div").attr("class", "overflow-x-auto").child(
					Element::new("table")
						.attr("class", TABLE_CLASS)
						.child(thead)
						.child(tbody),
				)
			}
		};
		view.render_to_string()
	}

	/// Routes a click to the matching callback
	///
	/// Action clicks never reach the row click callback. Events for rows or
	/// actions that do not exist, or arriving while loading, are ignored.
	pub fn dispatch(&mut self, event: TableEvent) -> DispatchOutcome {
		if self.options.loading {
			return DispatchOutcome::Ignored;
		}
		let rows = self.rows;
		let Some(row) = rows.get(event.row) else {
			tracing::debug!("ignoring click on missing row {}", event.row);
			return DispatchOutcome::Ignored;
		};

		if event.click.is_action() {
			if !self.has_actions() {
				return DispatchOutcome::Ignored;
			}
			self.interaction.open_menu = None;
		}

		match event.click {
			Click::Row => match &self.options.on_row_click {
				Some(on_row_click) => {
					self.interaction.pressed = Some(event.row);
					on_row_click(row);
					DispatchOutcome::Handled
				}
				None => DispatchOutcome::Ignored,
			},
			Click::Edit => match &self.options.on_edit {
				Some(on_edit) => {
					on_edit(row);
					DispatchOutcome::Handled
				}
				None => DispatchOutcome::Ignored,
			},
			Click::Delete => match &self.options.on_delete {
				Some(on_delete) => {
					on_delete(DeleteTarget::of(row));
					DispatchOutcome::Handled
				}
				None => DispatchOutcome::Ignored,
			},
			Click::Action(i) => match self.options.additional_actions.get(i) {
				Some(action) => {
					(action.on_click)(row);
					DispatchOutcome::Handled
				}
				None => {
					tracing::debug!("ignoring click on missing action {}", i);
					DispatchOutcome::Ignored
				}
			},
		}
	}

	/// Exports the formatted cells as CSV, headed by the column titles
	#[cfg(feature = "export")]
	pub fn to_csv(&self) -> crate::error::Result<Vec<u8>> {
		let headers = self.columns.iter().map(|c| c.title.clone()).collect();
		let records = self
			.rows
			.iter()
			.map(|row| {
				self.columns
					.iter()
					.map(|column| self.format_cell(column, row).plain_text().into_owned())
					.collect()
			})
			.collect();
		crate::export::CsvDocument::new(headers, records).to_bytes()
	}
}

impl Debug for DataTable<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DataTable")
			.field("rows", &self.rows.len())
			.field("columns", &self.columns)
			.field("options", &self.options)
			.field("interaction", &self.interaction)
			.finish()
	}
}

fn width_style(column: &ColumnDescriptor) -> Option<String> {
	let mut parts = Vec::new();
	if column.width != AUTO_WIDTH {
		parts.push(format!("width: {}", column.width));
	}
	if let Some(min) = &column.min_width {
		parts.push(format!("min-width: {}", min));
	}
	if let Some(max) = &column.max_width {
		parts.push(format!("max-width: {}", max));
	}
	(!parts.is_empty()).then(|| parts.join("; "))
}

fn header_element(cell: HeaderCell) -> Element {
	Element::new("th")
		.attr("scope", "col")
		.attr("class", cell.class)
		.opt_attr("data-column", cell.key)
		.opt_attr("style", cell.style)
		.child(cell.title)
}

fn content_node(content: CellContent) -> Node {
	match content {
		CellContent::Placeholder => Node::from(crate::cell::PLACEHOLDER),
		CellContent::Text { text, class: None } => Node::from(text),
		CellContent::Text {
			text,
			class: Some(class),
		} => Element::new("span").attr("class", class).child(text).into(),
		CellContent::Amount { text, sign } => Element::new("span")
			.opt_attr("class", sign.map(|s| s.class()))
			.child(text)
			.into(),
		CellContent::Badge { label, class } => Element::new("span")
			.attr("class", classes([BADGE_CLASS, class.as_str()]))
			.child(label)
			.into(),
		CellContent::Markup { html, .. } => Node::Raw(html),
	}
}

fn row_element(row: BodyRow) -> Element {
	let index = row.index.to_string();
	let mut tr = Element::new("tr")
		.attr("data-row-key", row.key.to_string())
		.attr("data-row-index", index.clone())
		.attr("data-action", Click::Row.as_attr())
		.opt_attr("class", (!row.class.is_empty()).then_some(row.class));

	if let Some(number) = row.number {
		tr = tr.child(
			Element::new("td")
				.attr("class", row.number_class)
				.child(number.to_string()),
		);
	}

	tr = tr.children(row.cells.into_iter().map(|cell| {
		Element::new("td")
			.attr("class", cell.class)
			.child(content_node(cell.content))
	}));

	if !row.actions.is_empty() {
		let buttons = row.actions.into_iter().map(|button| {
			Element::new("button")
				.attr("type", "button")
				.attr("class", button.class)
				.attr("title", button.title)
				.attr("data-row-index", index.clone())
				.attr("data-action", button.click.as_attr())
				.opt_attr("data-icon", button.icon)
				.child(button.label)
		});
		tr = tr.child(
			Element::new("td")
				.attr("class", "text-right")
				.child(Element::new("div").attr("class", ACTIONS_CLASS).children(buttons)),
		);
	}
	tr
}
