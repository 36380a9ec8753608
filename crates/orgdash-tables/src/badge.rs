//! Badge colors
//!
//! Badge columns map raw cell values to a color class. Enum-like schema
//! fields get colors from a fixed palette, assigned by option position.

use serde::{Deserialize, Serialize};

/// Color of a badge pill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
	/// Blue pill
	Blue,
	/// Green pill, used for positive states
	Green,
	/// Yellow pill
	Yellow,
	/// Red pill, used for negative states
	Red,
	/// Purple pill
	Purple,
	/// Pink pill
	Pink,
	/// Indigo pill
	Indigo,
	/// Orange pill
	Orange,
	/// Neutral gray pill, used for unmapped values
	Gray,
}

impl BadgeColor {
	/// Style class for this color
	pub fn class(&self) -> &'static str {
		match self {
			Self::Blue => "bg-blue-100 text-blue-800",
			Self::Green => "bg-green-100 text-green-800",
			Self::Yellow => "bg-yellow-100 text-yellow-800",
			Self::Red => "bg-red-100 text-red-800",
			Self::Purple => "bg-purple-100 text-purple-800",
			Self::Pink => "bg-pink-100 text-pink-800",
			Self::Indigo => "bg-indigo-100 text-indigo-800",
			Self::Orange => "bg-orange-100 text-orange-800",
			Self::Gray => "bg-gray-100 text-gray-800",
		}
	}
}

/// Colors cycled through for enum options, in assignment order
pub const BADGE_PALETTE: [BadgeColor; 8] = [
	BadgeColor::Blue,
	BadgeColor::Green,
	BadgeColor::Yellow,
	BadgeColor::Red,
	BadgeColor::Purple,
	BadgeColor::Pink,
	BadgeColor::Indigo,
	BadgeColor::Orange,
];

/// Color for the option at `index`, wrapping around the palette
///
/// # Examples
///
/// ```
/// use orgdash_tables::badge::{BadgeColor, palette_color};
///
/// assert_eq!(palette_color(0), BadgeColor::Blue);
/// assert_eq!(palette_color(8), BadgeColor::Blue);
/// assert_eq!(palette_color(9), BadgeColor::Green);
/// ```
pub fn palette_color(index: usize) -> BadgeColor {
	BADGE_PALETTE[index % BADGE_PALETTE.len()]
}

/// Class used when a badge value has no configured color
pub fn neutral_class() -> &'static str {
	BadgeColor::Gray.class()
}
