//! Column definitions
//!
//! Descriptors, override merging, the per-entity presets and the
//! schema-driven generator.

pub mod descriptor;
pub mod overrides;
pub mod presets;
pub mod schema;

pub use descriptor::{
	AUTO_WIDTH, Align, CellRenderer, ColumnDescriptor, ColumnType, validate_columns,
};
pub use overrides::{ColumnOverride, ColumnOverrides, ColumnSetBuilder};
pub use presets::{
	Entity, articles_columns, departments_columns, divisions_columns, financial_columns,
	products_columns, users_columns,
};
pub use schema::{ColumnGenerator, DbFieldType, SchemaField, generate_columns_from_schema};
