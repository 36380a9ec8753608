//! Date formatting with Indonesian month names

use crate::error::{Result, TableError};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const MONTHS_ID: [&str; 12] = [
	"Januari",
	"Februari",
	"Maret",
	"April",
	"Mei",
	"Juni",
	"Juli",
	"Agustus",
	"September",
	"Oktober",
	"November",
	"Desember",
];

const DATETIME_FORMATS: [&str; 4] = [
	"%Y-%m-%d %H:%M:%S",
	"%Y-%m-%dT%H:%M:%S",
	"%Y-%m-%dT%H:%M:%S%.f",
	"%Y-%m-%d %H:%M",
];

/// How dates are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
	/// `15 Januari 2024`
	#[default]
	Long,
	/// `15/01/2024`
	Short,
	/// `2024-01-15`
	Iso,
}

/// Date display settings
///
/// # Examples
///
/// ```
/// use orgdash_tables::format::{DateFormat, DateStyle};
/// use serde_json::json;
///
/// let long = DateFormat::default();
/// assert_eq!(long.format(&json!("2024-01-15")).unwrap(), "15 Januari 2024");
///
/// let short = DateFormat { style: DateStyle::Short };
/// assert_eq!(short.format(&json!("2024-03-02T10:00:00Z")).unwrap(), "02/03/2024");
///
/// assert!(long.format(&json!("yesterday")).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DateFormat {
	/// Output style
	pub style: DateStyle,
}

impl DateFormat {
	/// Parses and formats a cell value as a date
	pub fn format(&self, value: &Value) -> Result<String> {
		parse_date(value).map(|date| self.format_date(date))
	}

	/// Formats an already parsed date
	pub fn format_date(&self, date: NaiveDate) -> String {
		match self.style {
			DateStyle::Long => format!(
				"{} {} {}",
				date.day(),
				MONTHS_ID[date.month0() as usize],
				date.year()
			),
			DateStyle::Short => date.format("%d/%m/%Y").to_string(),
			DateStyle::Iso => date.format("%Y-%m-%d").to_string(),
		}
	}
}

/// Parses a cell value into a calendar date
///
/// Strings may be RFC 3339 timestamps, `YYYY-MM-DD HH:MM:SS` datetimes or
/// plain `YYYY-MM-DD` dates; numbers are read as Unix epoch milliseconds.
pub fn parse_date(value: &Value) -> Result<NaiveDate> {
	match value {
		Value::String(s) => parse_date_str(s.trim()),
		Value::Number(n) => n
			.as_i64()
			.and_then(DateTime::from_timestamp_millis)
			.map(|dt| dt.date_naive())
			.ok_or_else(|| TableError::InvalidDate(n.to_string())),
		other => Err(TableError::InvalidDate(other.to_string())),
	}
}

fn parse_date_str(s: &str) -> Result<NaiveDate> {
	if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
		return Ok(dt.date_naive());
	}
	for fmt in DATETIME_FORMATS {
		if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
			return Ok(dt.date());
		}
	}
	NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| TableError::InvalidDate(s.to_string()))
}
