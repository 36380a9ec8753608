//! CSV export
//!
//! Builds spreadsheet-friendly CSV: UTF-8 with a byte order mark, every
//! field quoted, one record per line. Reports may carry preamble lines
//! (title, export date, totals) above the header row.

use crate::error::{Result, TableError};
use crate::format::{DateFormat, slugify};
use crate::row::{Row, raw_string};
use crate::settings::TableLabels;
use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// UTF-8 byte order mark, so spreadsheet tools detect the encoding
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// MIME type of CSV exports
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8";

/// Filename slug used when a title has no letters or digits
const FALLBACK_SLUG: &str = "event";

fn title_slug(title: &str) -> String {
	let slug = slugify(title);
	if slug.is_empty() {
		FALLBACK_SLUG.to_string()
	} else {
		slug
	}
}

/// A CSV document with optional preamble lines
///
/// # Examples
///
/// ```
/// use orgdash_tables::export::CsvDocument;
///
/// let doc = CsvDocument::new(
///     vec!["Nama".into(), "Hadir".into()],
///     vec![vec!["Budi".into(), "Ya".into()]],
/// )
/// .preamble_line("Daftar Hadir");
///
/// let text = String::from_utf8(doc.to_bytes().unwrap()).unwrap();
/// assert_eq!(text, "\u{feff}\"Daftar Hadir\"\n\"Nama\",\"Hadir\"\n\"Budi\",\"Ya\"\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvDocument {
	/// Single-field lines written before the header
	pub preamble: Vec<String>,
	/// Header row
	pub headers: Vec<String>,
	/// Data records
	pub records: Vec<Vec<String>>,
}

impl CsvDocument {
	/// Creates a document without preamble
	pub fn new(headers: Vec<String>, records: Vec<Vec<String>>) -> Self {
		Self {
			preamble: Vec::new(),
			headers,
			records,
		}
	}

	/// Appends a preamble line
	pub fn preamble_line(mut self, line: impl Into<String>) -> Self {
		self.preamble.push(line.into());
		self
	}

	/// Writes the document as BOM-prefixed, fully quoted CSV
	pub fn to_bytes(&self) -> Result<Vec<u8>> {
		let mut writer = WriterBuilder::new()
			.quote_style(QuoteStyle::Always)
			.terminator(Terminator::Any(b'\n'))
			.flexible(true)
			.from_writer(UTF8_BOM.to_vec());

		for line in &self.preamble {
			writer.write_record([line])?;
		}
		writer.write_record(&self.headers)?;
		for record in &self.records {
			writer.write_record(record)?;
		}

		writer.flush()?;
		writer
			.into_inner()
			.map_err(|e| {
				TableError::Io(std::io::Error::new(e.error().kind(), e.error().to_string()))
			})
	}
}

/// Export result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportResult {
	/// Exported data as bytes
	pub data: Vec<u8>,
	/// MIME type
	pub mime_type: String,
	/// Suggested filename
	pub filename: String,
	/// Number of data rows exported
	pub row_count: usize,
}

impl ExportResult {
	/// Create a new export result
	pub fn new(
		data: Vec<u8>,
		mime_type: impl Into<String>,
		filename: impl Into<String>,
		row_count: usize,
	) -> Self {
		Self {
			data,
			mime_type: mime_type.into(),
			filename: filename.into(),
			row_count,
		}
	}

	/// Get data size in bytes
	pub fn size_bytes(&self) -> usize {
		self.data.len()
	}
}

/// A row field exported under a header label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportField {
	/// Field name read from each row
	pub key: String,
	/// Header label
	pub label: String,
}

impl ExportField {
	/// Creates an export field
	pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			label: label.into(),
		}
	}
}

impl<K: Into<String>, L: Into<String>> From<(K, L)> for ExportField {
	fn from((key, label): (K, L)) -> Self {
		Self::new(key, label)
	}
}

/// Builds report exports with configurable labels and date style
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
	labels: TableLabels,
	date: DateFormat,
}

impl CsvExporter {
	/// Creates an exporter
	pub fn new(labels: TableLabels, date: DateFormat) -> Self {
		Self { labels, date }
	}

	/// Exported text of one value: empty when missing, yes/no for booleans
	pub fn value_text(&self, value: Option<&Value>) -> String {
		match value {
			None => String::new(),
			Some(Value::Bool(b)) => self.labels.boolean(*b).to_string(),
			Some(other) => raw_string(other),
		}
	}

	fn document(&self, fields: &[ExportField], rows: &[Row]) -> CsvDocument {
		CsvDocument::new(
			fields.iter().map(|f| f.label.clone()).collect(),
			rows.iter()
				.map(|row| {
					fields
						.iter()
						.map(|f| self.value_text(row.get(&f.key)))
						.collect()
				})
				.collect(),
		)
	}

	/// Attendance report of one event
	///
	/// The preamble holds the title, the export date and the participant
	/// total; the file is named `attendance-<title slug>-<YYYY-MM-DD>.csv`.
	pub fn attendance(
		&self,
		title: &str,
		fields: &[ExportField],
		rows: &[Row],
		exported_on: NaiveDate,
	) -> Result<ExportResult> {
		let data = self
			.document(fields, rows)
			.preamble_line(title)
			.preamble_line(format!("Tanggal Export: {}", self.date.format_date(exported_on)))
			.preamble_line(format!("Total Peserta: {}", rows.len()))
			.to_bytes()?;

		let filename = format!(
			"attendance-{}-{}.csv",
			title_slug(title),
			exported_on.format("%Y-%m-%d")
		);
		tracing::debug!("exported {} attendance rows to {}", rows.len(), filename);
		Ok(ExportResult::new(data, CSV_MIME_TYPE, filename, rows.len()))
	}

	/// Summary of all events
	///
	/// The preamble holds the report name and the export date; the file is
	/// named `events-summary-<YYYY-MM-DD>.csv`.
	pub fn events_summary(
		&self,
		fields: &[ExportField],
		rows: &[Row],
		exported_on: NaiveDate,
	) -> Result<ExportResult> {
		let data = self
			.document(fields, rows)
			.preamble_line("Ringkasan Event")
			.preamble_line(format!("Tanggal Export: {}", self.date.format_date(exported_on)))
			.to_bytes()?;

		let filename = format!("events-summary-{}.csv", exported_on.format("%Y-%m-%d"));
		tracing::debug!("exported {} event rows to {}", rows.len(), filename);
		Ok(ExportResult::new(data, CSV_MIME_TYPE, filename, rows.len()))
	}
}

/// Attendance export with the default labels
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use orgdash_tables::Row;
/// use orgdash_tables::export::{ExportField, attendance_export};
///
/// let fields = [ExportField::new("name", "Nama"), ExportField::new("present", "Hadir")];
/// let rows = vec![Row::new().with("name", "Budi").with("present", true)];
/// let date = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
///
/// let result = attendance_export("Rapat Kerja", &fields, &rows, date).unwrap();
/// assert_eq!(result.filename, "attendance-rapat-kerja-2024-05-02.csv");
/// assert_eq!(result.row_count, 1);
/// ```
pub fn attendance_export(
	title: &str,
	fields: &[ExportField],
	rows: &[Row],
	exported_on: NaiveDate,
) -> Result<ExportResult> {
	CsvExporter::default().attendance(title, fields, rows, exported_on)
}

/// Events summary export with the default labels
pub fn events_summary_export(
	fields: &[ExportField],
	rows: &[Row],
	exported_on: NaiveDate,
) -> Result<ExportResult> {
	CsvExporter::default().events_summary(fields, rows, exported_on)
}
