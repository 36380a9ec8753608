//! Data table core for the organization admin dashboard
//!
//! Renders rows of JSON-like records through column descriptors into HTML,
//! a structured view model or CSV.
//!
//! # Features
//!
//! - **Column presets**: fixed column layouts per dashboard entity, adjusted
//!   with shallow per-column overrides
//! - **Schema generation**: columns derived from database field types
//! - **Cell formatting**: Rupiah currency, Indonesian dates, grouped numbers,
//!   yes/no booleans and colored badges, with safe fallbacks for bad data
//! - **Rendering**: loading and empty states, zebra striping, row numbers and
//!   an actions column whose clicks are routed back to callbacks
//! - **Export**: BOM-prefixed, fully quoted CSV (requires `export` feature)
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[Entity presets] --> C[ColumnSetBuilder]
//!     B[SchemaField list] --> G[ColumnGenerator] --> C
//!     O[ColumnOverrides] --> C
//!     C --> D[ColumnDescriptor list]
//!     R[Row list] --> T[DataTable]
//!     D --> T
//!     T --> V[TableView]
//!     T --> H[HTML]
//!     T --> E[Callbacks]
//!     T --> X[CSV]
//! ```
//!
//! # Example
//!
//! ```rust
//! use orgdash_tables::{ColumnOverride, ColumnOverrides, DataTable, Row, TableView, users_columns};
//!
//! let mut overrides = ColumnOverrides::new();
//! overrides.insert("email".into(), ColumnOverride::new().title("Surel"));
//! let columns = users_columns(Some(&overrides));
//!
//! let rows = vec![
//!     Row::new()
//!         .with("id", 1)
//!         .with("name", "Sari")
//!         .with("role", "admin")
//!         .with("status", "active"),
//! ];
//! let table = DataTable::new(&rows, &columns);
//!
//! match table.view() {
//!     TableView::Populated { header, rows } => {
//!         assert_eq!(header[1].title, "Surel");
//!         assert_eq!(rows[0].cells[1].content.plain_text(), "-");
//!     }
//!     other => panic!("unexpected view: {:?}", other),
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod badge;
pub mod cell;
pub mod column;
pub mod error;
#[cfg(feature = "export")]
pub mod export;
pub mod format;
pub mod render;
pub mod row;
pub mod settings;

// Re-exports for convenience
pub use badge::{BADGE_PALETTE, BadgeColor, palette_color};
pub use cell::{CellContent, Sign};
pub use column::{
	Align, CellRenderer, ColumnDescriptor, ColumnGenerator, ColumnOverride, ColumnOverrides,
	ColumnSetBuilder, ColumnType, Entity, SchemaField, articles_columns, departments_columns,
	divisions_columns, financial_columns, generate_columns_from_schema, products_columns,
	users_columns,
};
pub use error::{Result, TableError};
#[cfg(feature = "export")]
pub use export::{ExportField, ExportResult, attendance_export, events_summary_export};
pub use render::{
	Click, DataTable, DeleteTarget, DispatchOutcome, InteractionState, RowAction, TableEvent,
	TableOptions, TableRenderState, TableView,
};
pub use row::{IdOrIndex, Row, RowKey, RowKeyResolver};
pub use settings::{TableLabels, TableSettings};
