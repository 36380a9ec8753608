//! Rupiah currency formatting

use super::group_digits;
use crate::error::{Result, TableError};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// Currency display settings
///
/// Defaults follow the Indonesian Rupiah convention: `Rp` prefix, dot
/// thousands grouping and no decimal places.
///
/// # Examples
///
/// ```
/// use orgdash_tables::format::CurrencyFormat;
/// use rust_decimal::Decimal;
///
/// let rupiah = CurrencyFormat::default();
/// assert_eq!(rupiah.format(Decimal::from(1_500_000)), "Rp 1.500.000");
/// assert_eq!(rupiah.format(Decimal::from(-2_500)), "-Rp 2.500");
/// assert_eq!(rupiah.format_abs(Decimal::from(-2_500)), "Rp 2.500");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
	/// Currency symbol placed before the amount
	pub symbol: String,
	/// Text between the symbol and the digits
	pub symbol_separator: String,
	/// Thousands separator
	pub group_separator: String,
	/// Separator between the integer and fractional parts
	pub decimal_separator: String,
	/// Number of fractional digits to print
	pub decimals: u32,
}

impl Default for CurrencyFormat {
	fn default() -> Self {
		Self {
			symbol: "Rp".to_string(),
			symbol_separator: " ".to_string(),
			group_separator: ".".to_string(),
			decimal_separator: ",".to_string(),
			decimals: 0,
		}
	}
}

impl CurrencyFormat {
	/// Formats an amount, keeping a leading `-` for negative values
	pub fn format(&self, amount: Decimal) -> String {
		let body = self.format_abs(amount);
		if amount.is_sign_negative() && !self.round(amount).is_zero() {
			format!("-{}", body)
		} else {
			body
		}
	}

	/// Formats the absolute value of an amount
	pub fn format_abs(&self, amount: Decimal) -> String {
		let rounded = self.round(amount.abs()).to_string();
		let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));

		let mut out = format!(
			"{}{}{}",
			self.symbol,
			self.symbol_separator,
			group_digits(int_part, &self.group_separator)
		);
		if self.decimals > 0 {
			let width = self.decimals as usize;
			let mut frac: String = frac_part.chars().take(width).collect();
			while frac.len() < width {
				frac.push('0');
			}
			out.push_str(&self.decimal_separator);
			out.push_str(&frac);
		}
		out
	}

	fn round(&self, amount: Decimal) -> Decimal {
		amount.round_dp_with_strategy(self.decimals, RoundingStrategy::MidpointAwayFromZero)
	}
}

/// Coerces a cell value to an amount, defaulting to zero
///
/// Accepts JSON numbers, plain decimal strings and booleans. Anything else
/// yields zero so a malformed cell never aborts rendering.
pub fn parse_amount(value: &Value) -> Decimal {
	try_parse_amount(value).unwrap_or_else(|err| {
		tracing::trace!("amount fallback to zero: {}", err);
		Decimal::ZERO
	})
}

/// Strictly parses a cell value as an amount
///
/// # Examples
///
/// ```
/// use orgdash_tables::format::try_parse_amount;
/// use rust_decimal::Decimal;
/// use serde_json::json;
///
/// assert_eq!(try_parse_amount(&json!("1250.50")).unwrap(), Decimal::new(125050, 2));
/// assert!(try_parse_amount(&json!("Rp 1.000")).is_err());
/// ```
pub fn try_parse_amount(value: &Value) -> Result<Decimal> {
	match value {
		Value::Null => Ok(Decimal::ZERO),
		Value::Bool(b) => Ok(if *b { Decimal::ONE } else { Decimal::ZERO }),
		Value::Number(n) => {
			if let Some(i) = n.as_i64() {
				Ok(Decimal::from(i))
			} else if let Some(u) = n.as_u64() {
				Ok(Decimal::from(u))
			} else {
				n.as_f64()
					.and_then(Decimal::from_f64)
					.ok_or_else(|| TableError::InvalidAmount(n.to_string()))
			}
		}
		Value::String(s) => {
			let trimmed = s.trim();
			if trimmed.is_empty() {
				return Ok(Decimal::ZERO);
			}
			Decimal::from_str(trimmed)
				.or_else(|_| Decimal::from_scientific(trimmed))
				.map_err(|_| TableError::InvalidAmount(s.clone()))
		}
		Value::Array(_) | Value::Object(_) => Err(TableError::InvalidAmount(value.to_string())),
	}
}
