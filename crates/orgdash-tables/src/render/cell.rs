//! Per-cell formatting dispatch
//!
//! Every cell takes exactly one path: the column's custom renderer when set,
//! otherwise the missing-value placeholder, booleans, the type default and
//! finally the raw string. Malformed values never fail; they degrade to the
//! raw string or the placeholder.

use crate::badge::neutral_class;
use crate::cell::{CellContent, Sign};
use crate::column::{ColumnDescriptor, ColumnType};
use crate::format::{parse_amount, try_parse_amount};
use crate::row::{Row, raw_string};
use crate::settings::TableSettings;
use serde_json::Value;

/// Formats the cell of `column` in `row`
///
/// # Examples
///
/// ```
/// use orgdash_tables::{CellContent, ColumnDescriptor, Row, TableSettings};
/// use orgdash_tables::render::format_cell;
///
/// let settings = TableSettings::default();
/// let amount = ColumnDescriptor::currency("amount", "Jumlah");
/// let row = Row::new().with("amount", -1500000);
///
/// let cell = format_cell(&amount, &row, &settings);
/// assert_eq!(cell.plain_text(), "Rp 1.500.000");
///
/// let missing = format_cell(&amount, &Row::new(), &settings);
/// assert_eq!(missing, CellContent::Placeholder);
/// ```
pub fn format_cell(column: &ColumnDescriptor, row: &Row, settings: &TableSettings) -> CellContent {
	let value = row.get(&column.key);

	if let Some(render) = &column.render {
		return render(value.unwrap_or(&Value::Null), row);
	}

	let Some(value) = value else {
		return CellContent::Placeholder;
	};

	match (column.column_type, value) {
		(Some(ColumnType::Badge), _) => badge(column, value, settings),
		(_, Value::Bool(b)) => CellContent::text(settings.labels.boolean(*b)),
		(Some(ColumnType::Currency), _) => currency(column, value, settings),
		(Some(ColumnType::Date), _) => date(value, settings),
		(Some(ColumnType::Number), _) => number(value, settings),
		(Some(ColumnType::Text), _) => CellContent::Text {
			text: raw_string(value),
			class: column.text_class_name.clone(),
		},
		(None, _) => raw_or_placeholder(value),
	}
}

fn currency(column: &ColumnDescriptor, value: &Value, settings: &TableSettings) -> CellContent {
	let amount = parse_amount(value);
	let body = settings.currency.format_abs(amount);

	let sign = if !column.show_sign || amount.is_zero() {
		None
	} else if amount.is_sign_negative() {
		Some(Sign::Negative)
	} else {
		Some(Sign::Positive)
	};

	let text = match sign {
		Some(sign) => format!("{}{}", sign.prefix(), body),
		None => body,
	};
	CellContent::Amount { text, sign }
}

fn date(value: &Value, settings: &TableSettings) -> CellContent {
	match settings.date.format(value) {
		Ok(text) => CellContent::text(text),
		Err(err) => {
			tracing::trace!("date fallback to raw value: {}", err);
			raw_or_placeholder(value)
		}
	}
}

fn number(value: &Value, settings: &TableSettings) -> CellContent {
	match try_parse_amount(value) {
		Ok(n) => CellContent::text(settings.number.format(n)),
		Err(_) => raw_or_placeholder(value),
	}
}

fn badge(column: &ColumnDescriptor, value: &Value, settings: &TableSettings) -> CellContent {
	let raw = raw_string(value);

	let class = match column.badge_colors.get(&raw) {
		Some(class) => class.clone(),
		None => {
			tracing::trace!(
				target: "orgdash_tables::badge",
				"column '{}' has no badge color for '{}'",
				column.key,
				raw
			);
			neutral_class().to_string()
		}
	};

	let label = match (column.badge_labels.get(&raw), value) {
		(Some(label), _) => label.clone(),
		(None, Value::Bool(b)) => settings.labels.boolean(*b).to_string(),
		(None, _) => raw,
	};

	CellContent::Badge { label, class }
}

fn raw_or_placeholder(value: &Value) -> CellContent {
	let raw = raw_string(value);
	if raw.is_empty() {
		CellContent::Placeholder
	} else {
		CellContent::text(raw)
	}
}
