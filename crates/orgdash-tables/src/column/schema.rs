//! Column generation from database field schemas
//!
//! Maps database-style field descriptions onto display columns.
//!
//! # Architecture
//!
//! ```text
//! Database Layer             →  Display Layer
//! ─────────────────────────────────────────────────
//! SchemaField.type (string)  →  DbFieldType
//! DbFieldType                →  ColumnType + default width
//! SchemaField.options        →  badge colors (palette by position)
//! SchemaField.name           →  humanized title
//! ```

use super::descriptor::{ColumnDescriptor, ColumnType};
use super::overrides::{ColumnOverrides, ColumnSetBuilder};
use crate::badge::{BadgeColor, palette_color};
use crate::format::humanize;
use crate::settings::TableLabels;
use serde::{Deserialize, Serialize};

/// Database-style description of one field
///
/// # Examples
///
/// ```
/// use orgdash_tables::SchemaField;
///
/// let field: SchemaField = serde_json::from_str(
///     r#"{"name": "priority", "type": "enum", "options": ["low", "high"]}"#,
/// ).unwrap();
/// assert_eq!(field.options.len(), 2);
/// assert!(field.label.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
	/// Field name, used as the column key
	pub name: String,
	/// Display label; defaults to the humanized name
	#[serde(default)]
	pub label: Option<String>,
	/// Database type name, such as `varchar` or `decimal(10,2)`
	#[serde(rename = "type")]
	pub field_type: String,
	/// Allowed values of an enum field, in declaration order
	#[serde(default)]
	pub options: Vec<String>,
}

impl SchemaField {
	/// Creates a field with a name and database type
	pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			field_type: field_type.into(),
			options: Vec::new(),
		}
	}

	/// Sets the display label
	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Sets the enum options
	pub fn options<I, S>(mut self, options: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.options = options.into_iter().map(Into::into).collect();
		self
	}
}

/// Database field type recognized by the generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbFieldType {
	/// `varchar`
	Varchar,
	/// `text`
	Text,
	/// `string`
	String,
	/// `int`
	Int,
	/// `integer`
	Integer,
	/// `float`
	Float,
	/// `double`
	Double,
	/// `decimal`
	Decimal,
	/// `boolean`
	Boolean,
	/// `date`
	Date,
	/// `datetime`
	DateTime,
	/// `timestamp`
	Timestamp,
	/// `enum`
	Enum,
	/// Any other type name, lowercased
	Other(String),
}

impl DbFieldType {
	/// Parses a type name, ignoring case and any `(..)` parameters
	///
	/// # Examples
	///
	/// ```
	/// use orgdash_tables::column::DbFieldType;
	///
	/// assert_eq!(DbFieldType::parse("VARCHAR(255)"), DbFieldType::Varchar);
	/// assert_eq!(DbFieldType::parse("decimal(12, 2)"), DbFieldType::Decimal);
	/// assert_eq!(DbFieldType::parse("uuid"), DbFieldType::Other("uuid".into()));
	/// ```
	pub fn parse(name: &str) -> Self {
		let base = name
			.split('(')
			.next()
			.unwrap_or_default()
			.trim()
			.to_ascii_lowercase();
		match base.as_str() {
			"varchar" => Self::Varchar,
			"text" => Self::Text,
			"string" => Self::String,
			"int" => Self::Int,
			"integer" => Self::Integer,
			"float" => Self::Float,
			"double" => Self::Double,
			"decimal" => Self::Decimal,
			"boolean" => Self::Boolean,
			"date" => Self::Date,
			"datetime" => Self::DateTime,
			"timestamp" => Self::Timestamp,
			"enum" => Self::Enum,
			_ => Self::Other(base),
		}
	}

	/// Display type used for this database type
	pub fn display_type(&self) -> ColumnType {
		match self {
			// Strings → free text
			Self::Varchar | Self::Text | Self::String => ColumnType::Text,

			// Integers and floats → grouped numbers
			Self::Int | Self::Integer | Self::Float | Self::Double => ColumnType::Number,

			// Exact decimals are money
			Self::Decimal => ColumnType::Currency,

			// Booleans and enums → badges
			Self::Boolean | Self::Enum => ColumnType::Badge,

			Self::Date | Self::DateTime | Self::Timestamp => ColumnType::Date,

			Self::Other(_) => ColumnType::Text,
		}
	}

	/// Default column width for this database type
	pub fn default_width(&self) -> &'static str {
		match self {
			Self::Boolean | Self::Int | Self::Integer => "100px",
			Self::Date | Self::Enum | Self::Float | Self::Double => "120px",
			Self::DateTime | Self::Timestamp | Self::Decimal => "150px",
			_ => super::descriptor::AUTO_WIDTH,
		}
	}
}

/// Width for the identifier column
const ID_WIDTH: &str = "80px";

/// Builds columns from schemas using configurable labels
#[derive(Debug, Clone, Default)]
pub struct ColumnGenerator {
	labels: TableLabels,
}

impl ColumnGenerator {
	/// Creates a generator using `labels` for boolean badges
	pub fn new(labels: TableLabels) -> Self {
		Self { labels }
	}

	/// Maps one schema field to a column
	///
	/// Returns `None` for fields with an empty name.
	pub fn column_for(&self, field: &SchemaField) -> Option<ColumnDescriptor> {
		if field.name.is_empty() {
			tracing::warn!(
				"skipping schema field with empty name (type '{}')",
				field.field_type
			);
			return None;
		}

		let db_type = DbFieldType::parse(&field.field_type);
		let title = field
			.label
			.clone()
			.unwrap_or_else(|| humanize(&field.name));
		let width = if field.name == "id" {
			ID_WIDTH
		} else {
			db_type.default_width()
		};

		let mut column = ColumnDescriptor::new(field.name.clone(), title)
			.with_type(db_type.display_type())
			.width(width);

		match db_type {
			DbFieldType::Boolean => {
				column = column
					.badge_option("true", BadgeColor::Green, self.labels.yes.clone())
					.badge_option("false", BadgeColor::Red, self.labels.no.clone());
			}
			DbFieldType::Enum => {
				for (index, option) in field.options.iter().enumerate() {
					column = column.badge_color(option.clone(), palette_color(index).class());
				}
			}
			_ => {}
		}

		Some(column)
	}

	/// Maps every field of `schema` and applies `overrides`
	pub fn generate(
		&self,
		schema: &[SchemaField],
		overrides: Option<&ColumnOverrides>,
	) -> Vec<ColumnDescriptor> {
		let baseline = schema
			.iter()
			.filter_map(|field| self.column_for(field))
			.collect();
		ColumnSetBuilder::new(baseline)
			.maybe_overrides(overrides)
			.build()
	}
}

/// Generates columns from a schema with the default labels
///
/// # Examples
///
/// ```
/// use orgdash_tables::{ColumnType, SchemaField, generate_columns_from_schema};
///
/// let schema = vec![
///     SchemaField::new("id", "integer"),
///     SchemaField::new("full_name", "varchar(120)"),
///     SchemaField::new("salary", "decimal(12,2)").label("Gaji"),
/// ];
/// let columns = generate_columns_from_schema(&schema, None);
///
/// assert_eq!(columns[0].width, "80px");
/// assert_eq!(columns[1].title, "Full Name");
/// assert_eq!(columns[2].column_type, Some(ColumnType::Currency));
/// assert_eq!(columns[2].title, "Gaji");
/// ```
pub fn generate_columns_from_schema(
	schema: &[SchemaField],
	overrides: Option<&ColumnOverrides>,
) -> Vec<ColumnDescriptor> {
	ColumnGenerator::default().generate(schema, overrides)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::column::overrides::ColumnOverride;
	use rstest::rstest;

	#[rstest]
	#[case("varchar", ColumnType::Text)]
	#[case("text", ColumnType::Text)]
	#[case("string", ColumnType::Text)]
	#[case("int", ColumnType::Number)]
	#[case("integer", ColumnType::Number)]
	#[case("float", ColumnType::Number)]
	#[case("double", ColumnType::Number)]
	#[case("decimal", ColumnType::Currency)]
	#[case("boolean", ColumnType::Badge)]
	#[case("date", ColumnType::Date)]
	#[case("datetime", ColumnType::Date)]
	#[case("timestamp", ColumnType::Date)]
	#[case("enum", ColumnType::Badge)]
	#[case("jsonb", ColumnType::Text)]
	#[case("", ColumnType::Text)]
	fn test_display_type_mapping(#[case] db_type: &str, #[case] expected: ColumnType) {
		assert_eq!(DbFieldType::parse(db_type).display_type(), expected);
	}

	#[rstest]
	#[case("boolean", "100px")]
	#[case("int", "100px")]
	#[case("integer", "100px")]
	#[case("date", "120px")]
	#[case("enum", "120px")]
	#[case("float", "120px")]
	#[case("decimal", "150px")]
	#[case("timestamp", "150px")]
	#[case("varchar", "auto")]
	fn test_default_widths(#[case] db_type: &str, #[case] expected: &str) {
		let field = SchemaField::new("field", db_type);
		let column = ColumnGenerator::default().column_for(&field).unwrap();
		assert_eq!(column.width, expected);
	}

	#[rstest]
	fn test_boolean_field_badges() {
		let columns =
			generate_columns_from_schema(&[SchemaField::new("is_active", "boolean")], None);
		let column = &columns[0];

		assert_eq!(column.column_type, Some(ColumnType::Badge));
		assert_eq!(column.width, "100px");
		assert_eq!(column.title, "Is Active");
		assert_eq!(column.badge_colors.len(), 2);
		assert_eq!(column.badge_colors["true"], BadgeColor::Green.class());
		assert_eq!(column.badge_colors["false"], BadgeColor::Red.class());
		assert_eq!(column.badge_labels["true"], "Ya");
		assert_eq!(column.badge_labels["false"], "Tidak");
	}

	#[rstest]
	fn test_enum_colors_cycle_by_position() {
		let options: Vec<String> = (0..10).map(|i| format!("opt{}", i)).collect();
		let field = SchemaField::new("stage", "enum").options(options.clone());
		let column = ColumnGenerator::default().column_for(&field).unwrap();

		for (i, option) in options.iter().enumerate() {
			assert_eq!(column.badge_colors[option], palette_color(i).class());
		}
		assert_eq!(column.badge_colors["opt8"], column.badge_colors["opt0"]);
		assert!(column.badge_labels.is_empty());
	}

	#[rstest]
	fn test_custom_labels() {
		let labels = TableLabels {
			yes: "Yes".to_string(),
			no: "No".to_string(),
			..TableLabels::default()
		};
		let column = ColumnGenerator::new(labels)
			.column_for(&SchemaField::new("verified", "BOOLEAN"))
			.unwrap();
		assert_eq!(column.badge_labels["true"], "Yes");
	}

	#[rstest]
	fn test_empty_name_skipped() {
		let schema = vec![SchemaField::new("", "varchar"), SchemaField::new("code", "varchar")];
		let columns = generate_columns_from_schema(&schema, None);
		assert_eq!(columns.len(), 1);
		assert_eq!(columns[0].key, "code");
	}

	#[rstest]
	fn test_schema_overrides() {
		let schema = vec![
			SchemaField::new("id", "int"),
			SchemaField::new("total", "decimal"),
		];
		let mut overrides = ColumnOverrides::new();
		overrides.insert("total".to_string(), ColumnOverride::new().show_sign(true));
		overrides.insert("ghost".to_string(), ColumnOverride::new().width("1px"));

		let columns = generate_columns_from_schema(&schema, Some(&overrides));
		assert_eq!(columns.len(), 2);
		assert!(columns[1].show_sign);
		assert_eq!(columns[1].width, "150px");
	}
}
