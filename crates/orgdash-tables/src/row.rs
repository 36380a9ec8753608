//! Row records and row identity
//!
//! A [`Row`] is an opaque, read-only record of field name to JSON value. The
//! table never mutates it. Identity for keying is resolved by a
//! [`RowKeyResolver`], by default the `id` field with the row position as
//! the fallback.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Name of the field used as row identity by default
pub const ID_FIELD: &str = "id";

/// A single record supplied by the caller
///
/// # Examples
///
/// ```
/// use orgdash_tables::Row;
///
/// let row = Row::new().with("id", 7).with("name", "Alice");
/// assert_eq!(row.get("name").and_then(|v| v.as_str()), Some("Alice"));
/// assert!(row.get("missing").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(Map<String, Value>);

impl Row {
	/// Creates an empty row
	pub fn new() -> Self {
		Self(Map::new())
	}

	/// Adds a field, replacing any previous value for the key
	pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.0.insert(key.into(), value.into());
		self
	}

	/// Builds a row from any value that serializes to a JSON object
	///
	/// # Examples
	///
	/// ```
	/// use orgdash_tables::Row;
	/// use serde::Serialize;
	///
	/// #[derive(Serialize)]
	/// struct Department { id: u32, name: &'static str }
	///
	/// let row = Row::from_serialize(&Department { id: 3, name: "Finance" }).unwrap();
	/// assert_eq!(row.id().and_then(|v| v.as_u64()), Some(3));
	/// ```
	pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self> {
		Ok(Self::try_from(serde_json::to_value(value)?)?)
	}

	/// Returns the value stored under `key`
	///
	/// JSON `null` is treated the same as an absent field.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key).filter(|v| !v.is_null())
	}

	/// Returns the `id` field, if present and not null
	pub fn id(&self) -> Option<&Value> {
		self.get(ID_FIELD)
	}

	/// Returns the underlying field map
	pub fn fields(&self) -> &Map<String, Value> {
		&self.0
	}

	/// Returns the number of fields in the row
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when the row has no fields
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<Map<String, Value>> for Row {
	fn from(map: Map<String, Value>) -> Self {
		Self(map)
	}
}

impl TryFrom<Value> for Row {
	type Error = serde_json::Error;

	fn try_from(value: Value) -> std::result::Result<Self, Self::Error> {
		match value {
			Value::Object(map) => Ok(Self(map)),
			other => Err(<serde_json::Error as serde::de::Error>::custom(format!(
				"row must be a JSON object, got {}",
				kind_of(&other)
			))),
		}
	}
}

fn kind_of(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

/// Returns the raw string form of a value
///
/// Strings are returned without quotes; arrays and objects as compact JSON.
pub fn raw_string(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(s) => s.clone(),
		Value::Bool(b) => b.to_string(),
		Value::Number(n) => n.to_string(),
		Value::Array(_) | Value::Object(_) => value.to_string(),
	}
}

/// Identity of a row, used for keying and in rendered `data-row-key` attributes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
	/// Identity taken from a field of the row
	Id(String),
	/// Zero-based position of the row in the input sequence
	Index(usize),
}

impl fmt::Display for RowKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Id(id) => f.write_str(id),
			Self::Index(index) => write!(f, "{}", index),
		}
	}
}

/// Strategy for resolving the identity of a row
pub trait RowKeyResolver: Send + Sync {
	/// Resolves the key of `row`, located at `index` in the input sequence
	fn resolve(&self, row: &Row, index: usize) -> RowKey;
}

/// Uses a field of the row as identity, falling back to the row position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdOrIndex {
	field: String,
}

impl IdOrIndex {
	/// Resolves identity from a field other than `id`
	pub fn field(field: impl Into<String>) -> Self {
		Self {
			field: field.into(),
		}
	}
}

impl Default for IdOrIndex {
	fn default() -> Self {
		Self::field(ID_FIELD)
	}
}

impl RowKeyResolver for IdOrIndex {
	fn resolve(&self, row: &Row, index: usize) -> RowKey {
		match row.get(&self.field) {
			Some(value) => RowKey::Id(raw_string(value)),
			None => RowKey::Index(index),
		}
	}
}

/// Adapts a closure into a [`RowKeyResolver`]
///
/// # Examples
///
/// ```
/// use orgdash_tables::{Row, RowKey, RowKeyResolver, row::ResolveWith};
///
/// let by_email = ResolveWith(|row: &Row, index: usize| {
///     row.get("email")
///         .and_then(|v| v.as_str())
///         .map(|s| RowKey::Id(s.to_lowercase()))
///         .unwrap_or(RowKey::Index(index))
/// });
/// let row = Row::new().with("email", "Bob@Example.com");
/// assert_eq!(by_email.resolve(&row, 4), RowKey::Id("bob@example.com".into()));
/// ```
pub struct ResolveWith<F>(pub F);

impl<F> RowKeyResolver for ResolveWith<F>
where
	F: Fn(&Row, usize) -> RowKey + Send + Sync,
{
	fn resolve(&self, row: &Row, index: usize) -> RowKey {
		(self.0)(row, index)
	}
}
