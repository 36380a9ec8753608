//! Baseline column lists for the dashboard entities

use super::descriptor::{Align, ColumnDescriptor};
use super::overrides::{ColumnOverrides, ColumnSetBuilder};
use crate::badge::BadgeColor;
use crate::error::TableError;
use std::fmt;
use std::str::FromStr;

/// Dashboard entity with a predefined column layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
	/// Organization members
	Users,
	/// Published articles
	Articles,
	/// Catalogue products
	Products,
	/// Financial transactions
	Financial,
	/// Departments
	Departments,
	/// Divisions
	Divisions,
}

impl Entity {
	/// All entities, in menu order
	pub const ALL: [Entity; 6] = [
		Entity::Users,
		Entity::Articles,
		Entity::Products,
		Entity::Financial,
		Entity::Departments,
		Entity::Divisions,
	];

	/// Lowercase name of the entity
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Users => "users",
			Self::Articles => "articles",
			Self::Products => "products",
			Self::Financial => "financial",
			Self::Departments => "departments",
			Self::Divisions => "divisions",
		}
	}

	/// The fixed baseline columns of this entity
	pub fn baseline(&self) -> Vec<ColumnDescriptor> {
		match self {
			Self::Users => users_baseline(),
			Self::Articles => articles_baseline(),
			Self::Products => products_baseline(),
			Self::Financial => financial_baseline(),
			Self::Departments => departments_baseline(),
			Self::Divisions => divisions_baseline(),
		}
	}

	/// The baseline columns with `overrides` applied
	///
	/// # Examples
	///
	/// ```
	/// use orgdash_tables::{ColumnOverride, ColumnOverrides, Entity};
	///
	/// let mut overrides = ColumnOverrides::new();
	/// overrides.insert("amount".into(), ColumnOverride::new().width("200px"));
	///
	/// let columns = Entity::Financial.columns(Some(&overrides));
	/// let amount = columns.iter().find(|c| c.key == "amount").unwrap();
	/// assert_eq!(amount.width, "200px");
	/// assert!(amount.show_sign);
	/// ```
	pub fn columns(&self, overrides: Option<&ColumnOverrides>) -> Vec<ColumnDescriptor> {
		ColumnSetBuilder::new(self.baseline())
			.maybe_overrides(overrides)
			.build()
	}
}

impl fmt::Display for Entity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Entity {
	type Err = TableError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Entity::ALL
			.into_iter()
			.find(|entity| entity.as_str().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| TableError::UnknownEntity(s.to_string()))
	}
}

/// Columns for the users list
pub fn users_columns(overrides: Option<&ColumnOverrides>) -> Vec<ColumnDescriptor> {
	Entity::Users.columns(overrides)
}

/// Columns for the articles list
pub fn articles_columns(overrides: Option<&ColumnOverrides>) -> Vec<ColumnDescriptor> {
	Entity::Articles.columns(overrides)
}

/// Columns for the products list
pub fn products_columns(overrides: Option<&ColumnOverrides>) -> Vec<ColumnDescriptor> {
	Entity::Products.columns(overrides)
}

/// Columns for the financial transactions list
pub fn financial_columns(overrides: Option<&ColumnOverrides>) -> Vec<ColumnDescriptor> {
	Entity::Financial.columns(overrides)
}

/// Columns for the departments list
pub fn departments_columns(overrides: Option<&ColumnOverrides>) -> Vec<ColumnDescriptor> {
	Entity::Departments.columns(overrides)
}

/// Columns for the divisions list
pub fn divisions_columns(overrides: Option<&ColumnOverrides>) -> Vec<ColumnDescriptor> {
	Entity::Divisions.columns(overrides)
}

fn active_status() -> ColumnDescriptor {
	ColumnDescriptor::badge("status", "Status")
		.width("120px")
		.badge_option("active", BadgeColor::Green, "Aktif")
		.badge_option("inactive", BadgeColor::Red, "Nonaktif")
}

fn users_baseline() -> Vec<ColumnDescriptor> {
	vec![
		ColumnDescriptor::text("name", "Nama").sortable(true).min_width("180px"),
		ColumnDescriptor::text("email", "Email").min_width("200px"),
		ColumnDescriptor::badge("role", "Peran")
			.width("120px")
			.badge_option("admin", BadgeColor::Purple, "Admin")
			.badge_option("manager", BadgeColor::Blue, "Manager")
			.badge_option("member", BadgeColor::Gray, "Anggota"),
		ColumnDescriptor::text("department", "Departemen"),
		active_status(),
		ColumnDescriptor::date("created_at", "Bergabung")
			.width("150px")
			.sortable(true),
	]
}

fn articles_baseline() -> Vec<ColumnDescriptor> {
	vec![
		ColumnDescriptor::text("title", "Judul")
			.sortable(true)
			.min_width("240px"),
		ColumnDescriptor::text("author", "Penulis"),
		ColumnDescriptor::text("category", "Kategori").width("140px"),
		ColumnDescriptor::badge("status", "Status")
			.width("120px")
			.badge_option("published", BadgeColor::Green, "Terbit")
			.badge_option("draft", BadgeColor::Yellow, "Draf")
			.badge_option("archived", BadgeColor::Gray, "Arsip"),
		ColumnDescriptor::number("views", "Dilihat")
			.width("100px")
			.align(Align::Right),
		ColumnDescriptor::date("published_at", "Diterbitkan")
			.width("150px")
			.sortable(true),
	]
}

fn products_baseline() -> Vec<ColumnDescriptor> {
	vec![
		ColumnDescriptor::text("name", "Nama Produk")
			.sortable(true)
			.min_width("200px"),
		ColumnDescriptor::text("sku", "SKU").width("120px"),
		ColumnDescriptor::text("category", "Kategori").width("140px"),
		ColumnDescriptor::currency("price", "Harga")
			.width("150px")
			.align(Align::Right)
			.header_align(Align::Right)
			.sortable(true),
		ColumnDescriptor::number("stock", "Stok")
			.width("100px")
			.align(Align::Right),
		active_status(),
	]
}

fn financial_baseline() -> Vec<ColumnDescriptor> {
	vec![
		ColumnDescriptor::date("date", "Tanggal")
			.width("130px")
			.sortable(true),
		ColumnDescriptor::text("description", "Deskripsi").min_width("220px"),
		ColumnDescriptor::text("category", "Kategori").width("140px"),
		ColumnDescriptor::badge("type", "Tipe")
			.width("120px")
			.badge_option("income", BadgeColor::Green, "Pemasukan")
			.badge_option("expense", BadgeColor::Red, "Pengeluaran"),
		ColumnDescriptor::currency("amount", "Jumlah")
			.width("160px")
			.align(Align::Right)
			.header_align(Align::Right)
			.show_sign(true)
			.sortable(true),
		ColumnDescriptor::badge("status", "Status")
			.width("120px")
			.badge_option("completed", BadgeColor::Green, "Selesai")
			.badge_option("pending", BadgeColor::Yellow, "Menunggu")
			.badge_option("cancelled", BadgeColor::Red, "Dibatalkan"),
	]
}

fn departments_baseline() -> Vec<ColumnDescriptor> {
	vec![
		ColumnDescriptor::text("name", "Nama Departemen")
			.sortable(true)
			.min_width("200px"),
		ColumnDescriptor::text("code", "Kode").width("100px"),
		ColumnDescriptor::text("head", "Kepala Departemen"),
		ColumnDescriptor::text("division", "Divisi"),
		ColumnDescriptor::number("member_count", "Jumlah Anggota")
			.width("140px")
			.align(Align::Right),
		active_status(),
	]
}

fn divisions_baseline() -> Vec<ColumnDescriptor> {
	vec![
		ColumnDescriptor::text("name", "Nama Divisi")
			.sortable(true)
			.min_width("200px"),
		ColumnDescriptor::text("code", "Kode").width("100px"),
		ColumnDescriptor::text("head", "Kepala Divisi"),
		ColumnDescriptor::number("department_count", "Jumlah Departemen")
			.width("160px")
			.align(Align::Right),
		ColumnDescriptor::currency("budget", "Anggaran")
			.width("160px")
			.align(Align::Right)
			.header_align(Align::Right),
		active_status(),
	]
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::column::ColumnType;
	use crate::column::overrides::ColumnOverride;
	use rstest::rstest;

	#[rstest]
	fn test_every_baseline_is_valid() {
		for entity in Entity::ALL {
			let columns = entity.baseline();
			assert!(!columns.is_empty(), "{} has no columns", entity);
			assert!(crate::column::validate_columns(&columns).is_ok());
		}
	}

	#[rstest]
	fn test_financial_layout() {
		let keys: Vec<_> = financial_columns(None)
			.into_iter()
			.map(|c| (c.key, c.column_type))
			.collect();
		assert_eq!(
			keys,
			vec![
				("date".to_string(), Some(ColumnType::Date)),
				("description".to_string(), Some(ColumnType::Text)),
				("category".to_string(), Some(ColumnType::Text)),
				("type".to_string(), Some(ColumnType::Badge)),
				("amount".to_string(), Some(ColumnType::Currency)),
				("status".to_string(), Some(ColumnType::Badge)),
			]
		);
	}

	#[rstest]
	fn test_override_keeps_order_and_length() {
		let mut overrides = ColumnOverrides::new();
		overrides.insert("email".to_string(), ColumnOverride::new().title("Surel"));
		overrides.insert("unknown".to_string(), ColumnOverride::new().title("X"));

		let base = users_columns(None);
		let merged = users_columns(Some(&overrides));
		assert_eq!(base.len(), merged.len());
		for (a, b) in base.iter().zip(&merged) {
			assert_eq!(a.key, b.key);
		}
		assert_eq!(merged[1].title, "Surel");
	}

	#[rstest]
	#[case("users", Entity::Users)]
	#[case("Financial", Entity::Financial)]
	#[case(" divisions ", Entity::Divisions)]
	fn test_entity_from_str(#[case] input: &str, #[case] expected: Entity) {
		assert_eq!(input.parse::<Entity>().unwrap(), expected);
	}

	#[rstest]
	fn test_unknown_entity() {
		assert!(matches!(
			"invoices".parse::<Entity>(),
			Err(TableError::UnknownEntity(_))
		));
	}

	#[rstest]
	fn test_preset_functions_match_entities() {
		assert_eq!(articles_columns(None).len(), Entity::Articles.baseline().len());
		assert_eq!(products_columns(None)[3].key, "price");
		assert_eq!(departments_columns(None)[4].key, "member_count");
		assert_eq!(divisions_columns(None)[4].key, "budget");
	}
}
