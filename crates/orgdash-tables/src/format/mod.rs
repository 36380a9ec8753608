//! Formatting primitives
//!
//! Locale-aware formatters used by the cell dispatch and the CSV export:
//! Rupiah currency, grouped numbers and Indonesian dates, plus the text
//! helpers used to derive column titles and export filenames.

pub mod currency;
pub mod date;
pub mod number;

pub use currency::{CurrencyFormat, parse_amount, try_parse_amount};
pub use date::{DateFormat, DateStyle, parse_date};
pub use number::NumberFormat;

/// Converts a field name into a display title
///
/// Inserts spaces at camelCase boundaries, replaces underscores and hyphens
/// with spaces and upper-cases the first letter of every word.
///
/// # Examples
///
/// ```
/// use orgdash_tables::format::humanize;
///
/// assert_eq!(humanize("is_active"), "Is Active");
/// assert_eq!(humanize("createdAt"), "Created At");
/// assert_eq!(humanize("department_headName"), "Department Head Name");
/// ```
pub fn humanize(field: &str) -> String {
	let mut spaced = String::with_capacity(field.len() + 4);
	let mut prev: Option<char> = None;
	for ch in field.chars() {
		match ch {
			'_' | '-' => spaced.push(' '),
			_ if ch.is_uppercase()
				&& prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) =>
			{
				spaced.push(' ');
				spaced.push(ch);
			}
			_ => spaced.push(ch),
		}
		prev = Some(ch);
	}

	spaced
		.split_whitespace()
		.map(capitalize)
		.collect::<Vec<_>>()
		.join(" ")
}

fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Converts a string to a URL and filename friendly slug
///
/// Letters and digits of any script are kept after lowercasing; everything
/// else separates words. The result is empty when `text` has no letters or
/// digits at all.
///
/// # Examples
///
/// ```
/// use orgdash_tables::format::slugify;
///
/// assert_eq!(slugify("Rapat Kerja 2024"), "rapat-kerja-2024");
/// assert_eq!(slugify("  Town Hall: Q1!! "), "town-hall-q1");
/// assert_eq!(slugify("Rapat Ölçme"), "rapat-ölçme");
/// ```
pub fn slugify(text: &str) -> String {
	text.to_lowercase()
		.chars()
		.map(|ch| if ch.is_alphanumeric() { ch } else { '-' })
		.collect::<String>()
		.split('-')
		.filter(|s| !s.is_empty())
		.collect::<Vec<_>>()
		.join("-")
}

/// Inserts `separator` between every group of three digits, counting from the right
pub(crate) fn group_digits(digits: &str, separator: &str) -> String {
	let len = digits.len();
	let mut out = String::with_capacity(len + len / 3 * separator.len());
	for (i, ch) in digits.chars().enumerate() {
		if i > 0 && (len - i) % 3 == 0 {
			out.push_str(separator);
		}
		out.push(ch);
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("name", "Name")]
	#[case("created_at", "Created At")]
	#[case("memberCount", "Member Count")]
	#[case("__weird__key", "Weird Key")]
	#[case("id", "Id")]
	#[case("budget2024Total", "Budget2024 Total")]
	fn test_humanize(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(humanize(input), expected);
	}

	#[rstest]
	#[case("1", "1")]
	#[case("123", "123")]
	#[case("1234", "1.234")]
	#[case("1500000", "1.500.000")]
	#[case("123456789", "123.456.789")]
	fn test_group_digits(#[case] digits: &str, #[case] expected: &str) {
		assert_eq!(group_digits(digits, "."), expected);
	}

	#[rstest]
	fn test_slugify_collapses_separators() {
		assert_eq!(slugify("Hello  World"), "hello-world");
		assert_eq!(slugify("Special!@#Characters"), "special-characters");
		assert_eq!(slugify("---"), "");
	}

	#[test]
	fn test_slugify_keeps_unicode_letters() {
		assert_eq!(slugify("Pelatihan Ñandú"), "pelatihan-ñandú");
		assert_eq!(slugify("研修会 2024"), "研修会-2024");
		assert_eq!(slugify("Café/Bar"), "café-bar");
	}
}
