//! Table settings
//!
//! Labels and formatter configuration shared by the renderer, the schema
//! generator and the export. Every field has a default, so a settings file
//! only needs to name what it changes.
//!
//! ```toml
//! [labels]
//! empty = "Belum ada transaksi"
//!
//! [currency]
//! decimals = 2
//!
//! [date]
//! style = "short"
//! ```

use crate::error::Result;
use crate::format::{CurrencyFormat, DateFormat, NumberFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// User-facing strings of a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableLabels {
	/// Label for boolean `true`
	pub yes: String,
	/// Label for boolean `false`
	pub no: String,
	/// Header of the action column
	pub actions: String,
	/// Message shown when there are no rows
	pub empty: String,
	/// Message shown while loading
	pub loading: String,
	/// Title of the edit button
	pub edit: String,
	/// Title of the delete button
	pub delete: String,
	/// Header of the row number column
	pub row_number: String,
}

impl Default for TableLabels {
	fn default() -> Self {
		Self {
			yes: "Ya".to_string(),
			no: "Tidak".to_string(),
			actions: "Aksi".to_string(),
			empty: "Tidak ada data".to_string(),
			loading: "Memuat...".to_string(),
			edit: "Edit".to_string(),
			delete: "Hapus".to_string(),
			row_number: "No".to_string(),
		}
	}
}

impl TableLabels {
	/// Label for a boolean value
	pub fn boolean(&self, value: bool) -> &str {
		if value { &self.yes } else { &self.no }
	}
}

/// Labels and formatters used when rendering and exporting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
	/// User-facing strings
	pub labels: TableLabels,
	/// Currency formatting
	pub currency: CurrencyFormat,
	/// Number formatting
	pub number: NumberFormat,
	/// Date formatting
	pub date: DateFormat,
}

impl TableSettings {
	/// Loads settings from a TOML file
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
		let content = std::fs::read_to_string(path.as_ref())?;
		Self::from_toml_str(&content)
	}

	/// Parses settings from a TOML string
	///
	/// # Examples
	///
	/// ```
	/// use orgdash_tables::TableSettings;
	///
	/// let settings = TableSettings::from_toml_str("[labels]\nyes = \"Yes\"").unwrap();
	/// assert_eq!(settings.labels.yes, "Yes");
	/// assert_eq!(settings.labels.no, "Tidak");
	/// ```
	pub fn from_toml_str(content: &str) -> Result<Self> {
		let settings = toml::from_str(content)?;
		tracing::debug!("loaded table settings");
		Ok(settings)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::TableError;
	use crate::format::DateStyle;
	use rust_decimal::Decimal;
	use std::io::Write;

	#[test]
	fn test_defaults() {
		let settings = TableSettings::default();
		assert_eq!(settings.labels.empty, "Tidak ada data");
		assert_eq!(settings.labels.loading, "Memuat...");
		assert_eq!(settings.labels.boolean(true), "Ya");
		assert_eq!(settings.labels.boolean(false), "Tidak");
		assert_eq!(settings.currency.symbol, "Rp");
		assert_eq!(settings.date.style, DateStyle::Long);
	}

	#[test]
	fn test_empty_document_is_default() {
		assert_eq!(TableSettings::from_toml_str("").unwrap(), TableSettings::default());
	}

	#[test]
	fn test_partial_sections() {
		let settings = TableSettings::from_toml_str(
			r#"
			[currency]
			decimals = 2

			[date]
			style = "iso"
			"#,
		)
		.unwrap();
		assert_eq!(settings.currency.decimals, 2);
		assert_eq!(settings.currency.symbol, "Rp");
		assert_eq!(settings.date.style, DateStyle::Iso);
		assert_eq!(settings.currency.format(Decimal::from(10)), "Rp 10,00");
	}

	#[test]
	fn test_invalid_toml() {
		assert!(matches!(
			TableSettings::from_toml_str("[labels\nyes = 1"),
			Err(TableError::Config(_))
		));
	}

	#[test]
	fn test_from_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[labels]\nempty = \"Belum ada data\"").unwrap();

		let settings = TableSettings::from_file(file.path()).unwrap();
		assert_eq!(settings.labels.empty, "Belum ada data");
		assert_eq!(settings.labels.actions, "Aksi");
	}

	#[test]
	fn test_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		assert!(matches!(
			TableSettings::from_file(dir.path().join("absent.toml")),
			Err(TableError::Io(_))
		));
	}
}
