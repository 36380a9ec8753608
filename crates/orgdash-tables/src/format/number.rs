//! Locale-grouped number formatting

use super::group_digits;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number display settings (Indonesian grouping by default)
///
/// # Examples
///
/// ```
/// use orgdash_tables::format::NumberFormat;
/// use rust_decimal::Decimal;
///
/// let fmt = NumberFormat::default();
/// assert_eq!(fmt.format(Decimal::from(1_234_567)), "1.234.567");
/// assert_eq!(fmt.format(Decimal::new(12505, 1)), "1.250,5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
	/// Thousands separator
	pub group_separator: String,
	/// Separator between the integer and fractional parts
	pub decimal_separator: String,
	/// Fractional digits kept after rounding; trailing zeros are trimmed
	pub max_fraction_digits: u32,
}

impl Default for NumberFormat {
	fn default() -> Self {
		Self {
			group_separator: ".".to_string(),
			decimal_separator: ",".to_string(),
			max_fraction_digits: 3,
		}
	}
}

impl NumberFormat {
	/// Formats a number with grouped integer digits
	pub fn format(&self, value: Decimal) -> String {
		let rounded = value
			.round_dp_with_strategy(
				self.max_fraction_digits,
				RoundingStrategy::MidpointAwayFromZero,
			)
			.normalize();
		let negative = rounded.is_sign_negative() && !rounded.is_zero();
		let text = rounded.abs().to_string();
		let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

		let mut out = String::new();
		if negative {
			out.push('-');
		}
		out.push_str(&group_digits(int_part, &self.group_separator));
		if !frac_part.is_empty() {
			out.push_str(&self.decimal_separator);
			out.push_str(frac_part);
		}
		out
	}
}
