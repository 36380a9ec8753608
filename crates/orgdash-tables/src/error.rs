//! Error types for orgdash-tables
//!
//! Rendering never surfaces these: per-cell failures degrade to a fallback
//! display. They are returned from configuration loading, export, explicit
//! validation and the standalone formatters.

use thiserror::Error;

/// Error type for table operations
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TableError {
	/// A column descriptor was declared with an empty key
	#[error("Column key must not be empty")]
	EmptyColumnKey,

	/// A value could not be parsed as a date
	#[error("Invalid date value: {0}")]
	InvalidDate(String),

	/// A value could not be parsed as a monetary amount
	#[error("Invalid amount value: {0}")]
	InvalidAmount(String),

	/// No column preset exists under this name
	#[error("Unknown entity: {0}")]
	UnknownEntity(String),

	/// Settings file could not be parsed
	#[error("Configuration error: {0}")]
	Config(#[from] toml::de::Error),

	/// Filesystem error while reading settings
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// JSON conversion error while building rows
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	/// CSV writer error during export
	#[cfg(feature = "export")]
	#[error("CSV export error: {0}")]
	Csv(#[from] csv::Error),
}

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;
