//! Per-column overrides
//!
//! Baseline column lists are immutable; callers adjust them with a map of
//! partial descriptors keyed by column key. Each set field replaces the
//! baseline field as a whole. Keys that match no baseline column are dropped,
//! never appended.

use super::descriptor::{Align, CellRenderer, ColumnDescriptor, ColumnType};
use crate::cell::CellContent;
use crate::row::Row;
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use std::fmt::{self, Debug};
use std::sync::Arc;

/// Ordered map of column key to override
pub type ColumnOverrides = BTreeMap<String, ColumnOverride>;

/// Partial column descriptor; only set fields are applied
///
/// # Examples
///
/// ```
/// use orgdash_tables::{ColumnDescriptor, ColumnOverride};
///
/// let base = ColumnDescriptor::currency("amount", "Jumlah").show_sign(true);
/// let merged = ColumnOverride::new().width("200px").apply(base);
///
/// assert_eq!(merged.width, "200px");
/// assert_eq!(merged.title, "Jumlah");
/// assert!(merged.show_sign);
/// ```
#[derive(Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnOverride {
	/// Replacement title
	pub title: Option<String>,
	/// Replacement type
	#[serde(rename = "type")]
	pub column_type: Option<ColumnType>,
	/// Replacement width
	pub width: Option<String>,
	/// Replacement minimum width
	pub min_width: Option<String>,
	/// Replacement maximum width
	pub max_width: Option<String>,
	/// Replacement cell alignment
	pub align: Option<Align>,
	/// Replacement header alignment
	pub header_align: Option<Align>,
	/// Replacement badge colors (the whole map)
	pub badge_colors: Option<BTreeMap<String, String>>,
	/// Replacement badge labels (the whole map)
	pub badge_labels: Option<BTreeMap<String, String>>,
	/// Replacement sortable flag
	pub sortable: Option<bool>,
	/// Replacement sign display flag
	pub show_sign: Option<bool>,
	/// Replacement cell class
	pub class_name: Option<String>,
	/// Replacement header class
	pub header_class_name: Option<String>,
	/// Replacement text class
	pub text_class_name: Option<String>,
	/// Replacement renderer
	#[serde(skip)]
	pub render: Option<CellRenderer>,
}

impl ColumnOverride {
	/// Creates an empty override
	pub fn new() -> Self {
		Self::default()
	}

	/// Overrides the title
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Overrides the column type
	pub fn column_type(mut self, column_type: ColumnType) -> Self {
		self.column_type = Some(column_type);
		self
	}

	/// Overrides the width
	pub fn width(mut self, width: impl Into<String>) -> Self {
		self.width = Some(width.into());
		self
	}

	/// Overrides the cell alignment
	pub fn align(mut self, align: Align) -> Self {
		self.align = Some(align);
		self
	}

	/// Overrides the badge colors
	pub fn badge_colors(mut self, colors: BTreeMap<String, String>) -> Self {
		self.badge_colors = Some(colors);
		self
	}

	/// Overrides the badge labels
	pub fn badge_labels(mut self, labels: BTreeMap<String, String>) -> Self {
		self.badge_labels = Some(labels);
		self
	}

	/// Overrides the sortable flag
	pub fn sortable(mut self, sortable: bool) -> Self {
		self.sortable = Some(sortable);
		self
	}

	/// Overrides the sign display flag
	pub fn show_sign(mut self, show_sign: bool) -> Self {
		self.show_sign = Some(show_sign);
		self
	}

	/// Overrides the renderer
	pub fn render<F>(mut self, render: F) -> Self
	where
		F: Fn(&Value, &Row) -> CellContent + Send + Sync + 'static,
	{
		self.render = Some(Arc::new(render));
		self
	}

	/// Applies the set fields on top of `base`
	pub fn apply(&self, mut base: ColumnDescriptor) -> ColumnDescriptor {
		if let Some(title) = &self.title {
			base.title = title.clone();
		}
		if let Some(column_type) = self.column_type {
			base.column_type = Some(column_type);
		}
		if let Some(width) = &self.width {
			base.width = width.clone();
		}
		if let Some(min_width) = &self.min_width {
			base.min_width = Some(min_width.clone());
		}
		if let Some(max_width) = &self.max_width {
			base.max_width = Some(max_width.clone());
		}
		if let Some(align) = self.align {
			base.align = align;
		}
		if let Some(header_align) = self.header_align {
			base.header_align = header_align;
		}
		if let Some(colors) = &self.badge_colors {
			base.badge_colors = colors.clone();
		}
		if let Some(labels) = &self.badge_labels {
			base.badge_labels = labels.clone();
		}
		if let Some(sortable) = self.sortable {
			base.sortable = sortable;
		}
		if let Some(show_sign) = self.show_sign {
			base.show_sign = show_sign;
		}
		if let Some(class) = &self.class_name {
			base.class_name = Some(class.clone());
		}
		if let Some(class) = &self.header_class_name {
			base.header_class_name = Some(class.clone());
		}
		if let Some(class) = &self.text_class_name {
			base.text_class_name = Some(class.clone());
		}
		if let Some(render) = &self.render {
			base.render = Some(Arc::clone(render));
		}
		base
	}
}

impl Debug for ColumnOverride {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ColumnOverride")
			.field("title", &self.title)
			.field("column_type", &self.column_type)
			.field("width", &self.width)
			.field("align", &self.align)
			.field("sortable", &self.sortable)
			.field("show_sign", &self.show_sign)
			.field("custom_render", &self.render.is_some())
			.finish_non_exhaustive()
	}
}

/// Applies an override map to an immutable baseline column list
///
/// # Examples
///
/// ```
/// use orgdash_tables::{ColumnDescriptor, ColumnOverride, ColumnOverrides, ColumnSetBuilder};
///
/// let baseline = vec![
///     ColumnDescriptor::text("name", "Nama"),
///     ColumnDescriptor::text("email", "Email"),
/// ];
/// let mut overrides = ColumnOverrides::new();
/// overrides.insert("email".into(), ColumnOverride::new().title("Surel"));
/// overrides.insert("phone".into(), ColumnOverride::new().title("Telepon"));
///
/// let columns = ColumnSetBuilder::new(baseline).overrides(&overrides).build();
/// let titles: Vec<_> = columns.iter().map(|c| c.title.as_str()).collect();
/// assert_eq!(titles, ["Nama", "Surel"]);
/// ```
#[derive(Debug, Clone)]
pub struct ColumnSetBuilder<'a> {
	baseline: Vec<ColumnDescriptor>,
	overrides: Option<&'a ColumnOverrides>,
}

impl<'a> ColumnSetBuilder<'a> {
	/// Starts from a baseline column list
	pub fn new(baseline: Vec<ColumnDescriptor>) -> Self {
		Self {
			baseline,
			overrides: None,
		}
	}

	/// Sets the override map
	pub fn overrides(mut self, overrides: &'a ColumnOverrides) -> Self {
		self.overrides = Some(overrides);
		self
	}

	/// Sets the override map if one is given
	pub fn maybe_overrides(mut self, overrides: Option<&'a ColumnOverrides>) -> Self {
		self.overrides = overrides;
		self
	}

	/// Returns the keys of the override map that match no baseline column
	pub fn unknown_keys(&self) -> Vec<&'a str> {
		let Some(overrides) = self.overrides else {
			return Vec::new();
		};
		let known: HashSet<&str> = self.baseline.iter().map(|c| c.key.as_str()).collect();
		overrides
			.keys()
			.map(String::as_str)
			.filter(|key| !known.contains(key))
			.collect()
	}

	/// Produces the merged column list, in baseline order
	pub fn build(self) -> Vec<ColumnDescriptor> {
		for key in self.unknown_keys() {
			tracing::debug!("dropping override for unknown column '{}'", key);
		}

		let Some(overrides) = self.overrides else {
			return self.baseline;
		};
		self.baseline
			.into_iter()
			.map(|column| match overrides.get(&column.key) {
				Some(patch) => patch.apply(column),
				None => column,
			})
			.collect()
	}
}
