//! Property-based tests for cell formatting and override merging

use orgdash_tables::render::format_cell;
use orgdash_tables::{
	BADGE_PALETTE, CellContent, ColumnDescriptor, ColumnOverride, ColumnOverrides,
	ColumnSetBuilder, Row, TableSettings, palette_color,
};
use proptest::prelude::*;
use serde_json::{Value, json};

fn any_column() -> impl Strategy<Value = ColumnDescriptor> {
	prop_oneof![
		Just(ColumnDescriptor::new("v", "V")),
		Just(ColumnDescriptor::text("v", "V")),
		Just(ColumnDescriptor::number("v", "V")),
		Just(ColumnDescriptor::currency("v", "V")),
		Just(ColumnDescriptor::currency("v", "V").show_sign(true)),
		Just(ColumnDescriptor::date("v", "V")),
		Just(ColumnDescriptor::badge("v", "V").badge_color("x", "green")),
	]
}

// ============================================================================
// Property-Based Tests: cell formatting
// ============================================================================

proptest! {
	/// Unsigned currency cells print the same text for an amount and its negation
	#[test]
	fn prop_unsigned_currency_drops_sign(amount in -1_000_000_000_000i64..1_000_000_000_000i64) {
		let settings = TableSettings::default();
		let column = ColumnDescriptor::currency("amount", "Jumlah");

		let positive = format_cell(&column, &Row::new().with("amount", amount), &settings);
		let negative = format_cell(&column, &Row::new().with("amount", -amount), &settings);
		let again = format_cell(&column, &Row::new().with("amount", amount), &settings);

		prop_assert_eq!(&positive, &negative);
		prop_assert_eq!(&positive, &again);
		prop_assert!(!positive.plain_text().starts_with('-'));
	}

	/// Signed currency cells carry a sign exactly when the amount is non-zero
	#[test]
	fn prop_signed_currency_prefix(amount in -1_000_000_000i64..1_000_000_000i64) {
		let settings = TableSettings::default();
		let column = ColumnDescriptor::currency("amount", "Jumlah").show_sign(true);
		let cell = format_cell(&column, &Row::new().with("amount", amount), &settings);
		let text = cell.plain_text();

		match amount.signum() {
			1 => prop_assert!(text.starts_with("+Rp ")),
			-1 => prop_assert!(text.starts_with("-Rp ")),
			_ => prop_assert_eq!(text.as_ref(), "Rp 0"),
		}
	}

	/// Missing and null values render as the placeholder for every column type
	#[test]
	fn prop_missing_is_placeholder(column in any_column(), present_null in any::<bool>()) {
		let settings = TableSettings::default();
		let row = if present_null {
			Row::new().with("v", Value::Null)
		} else {
			Row::new().with("other", 1)
		};
		prop_assert_eq!(format_cell(&column, &row, &settings), CellContent::Placeholder);
	}

	/// Arbitrary strings never panic and never yield an empty cell
	#[test]
	fn prop_malformed_values_degrade(column in any_column(), raw in "\\PC{1,30}") {
		let settings = TableSettings::default();
		let row = Row::new().with("v", json!(raw));
		let cell = format_cell(&column, &row, &settings);
		prop_assert!(!cell.plain_text().is_empty());
	}

	/// Palette colors cycle with period eight
	#[test]
	fn prop_palette_cycles(index in 0usize..10_000) {
		prop_assert_eq!(palette_color(index), palette_color(index + BADGE_PALETTE.len()));
		prop_assert_eq!(palette_color(index), BADGE_PALETTE[index % 8]);
	}
}

// ============================================================================
// Property-Based Tests: override merging
// ============================================================================

proptest! {
	/// Merging keeps length and order and changes only touched columns
	#[test]
	fn prop_override_shape(
		count in 1usize..12,
		touched in prop::collection::btree_set(0usize..12, 0..6),
		extra in prop::collection::vec("[a-z]{3,8}", 0..4),
	) {
		let baseline: Vec<_> = (0..count)
			.map(|i| ColumnDescriptor::text(format!("col{}", i), format!("Col {}", i)))
			.collect();

		let mut overrides = ColumnOverrides::new();
		for i in touched.iter().filter(|i| **i < count) {
			overrides.insert(format!("col{}", i), ColumnOverride::new().width("42px"));
		}
		for key in &extra {
			overrides.insert(format!("x_{}", key), ColumnOverride::new().title("Nope"));
		}

		let merged = ColumnSetBuilder::new(baseline.clone()).overrides(&overrides).build();
		prop_assert_eq!(merged.len(), baseline.len());

		for (i, (before, after)) in baseline.iter().zip(&merged).enumerate() {
			prop_assert_eq!(&before.key, &after.key);
			prop_assert_eq!(&before.title, &after.title);
			let expected_width = if touched.contains(&i) { "42px" } else { "auto" };
			prop_assert_eq!(after.width.as_str(), expected_width);
		}
	}
}
