//! Cell values and their default ordering
//!
//! Every column projects a record onto a [`CellValue`]. Search stringifies the
//! value; sorting without a column comparator uses [`CellValue::cmp_default`].

use std::cmp::Ordering;
use std::fmt;

use nucleo_matcher::chars::normalize;

/// A single field value extracted from a record
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
	/// Missing or explicitly null field
	#[default]
	Null,
	/// Boolean flag
	Bool(bool),
	/// Integer number
	Int(i64),
	/// Floating point number
	Float(f64),
	/// Free text
	Text(String),
	/// Calendar date
	#[cfg(feature = "chrono")]
	Date(chrono::NaiveDate),
	/// Point in time
	#[cfg(feature = "chrono")]
	DateTime(chrono::DateTime<chrono::Utc>),
}

impl CellValue {
	/// Returns true for [`CellValue::Null`]
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Returns the lowercased text used for substring search
	///
	/// `Null` has no searchable text and therefore never matches a term.
	pub fn search_text(&self) -> Option<String> {
		match self {
			Self::Null => None,
			other => Some(other.to_string().to_lowercase()),
		}
	}

	/// Total ascending order used when a column has no comparator
	///
	/// - `Null` sorts before every defined value
	/// - values of different kinds are ranked bool, number, date, datetime, text
	/// - integers and floats compare numerically with each other
	/// - text uses [`collate`]
	///
	/// Descending order is the exact reverse, so nulls end up last.
	pub fn cmp_default(&self, other: &Self) -> Ordering {
		match (self, other) {
			(Self::Null, Self::Null) => Ordering::Equal,
			(Self::Null, _) => Ordering::Less,
			(_, Self::Null) => Ordering::Greater,
			(Self::Bool(a), Self::Bool(b)) => a.cmp(b),
			(Self::Int(a), Self::Int(b)) => a.cmp(b),
			(Self::Int(a), Self::Float(b)) => (*a as f64).total_cmp(b),
			(Self::Float(a), Self::Int(b)) => a.total_cmp(&(*b as f64)),
			(Self::Float(a), Self::Float(b)) => a.total_cmp(b),
			(Self::Text(a), Self::Text(b)) => collate(a, b),
			#[cfg(feature = "chrono")]
			(Self::Date(a), Self::Date(b)) => a.cmp(b),
			#[cfg(feature = "chrono")]
			(Self::DateTime(a), Self::DateTime(b)) => a.cmp(b),
			(a, b) => a.rank().cmp(&b.rank()),
		}
	}

	fn rank(&self) -> u8 {
		match self {
			Self::Null => 0,
			Self::Bool(_) => 1,
			Self::Int(_) | Self::Float(_) => 2,
			#[cfg(feature = "chrono")]
			Self::Date(_) => 3,
			#[cfg(feature = "chrono")]
			Self::DateTime(_) => 4,
			Self::Text(_) => 5,
		}
	}
}

impl fmt::Display for CellValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Null => Ok(()),
			Self::Bool(value) => write!(f, "{}", value),
			Self::Int(value) => write!(f, "{}", value),
			Self::Float(value) => write!(f, "{}", value),
			Self::Text(value) => f.write_str(value),
			#[cfg(feature = "chrono")]
			Self::Date(value) => write!(f, "{}", value.format("%Y-%m-%d")),
			#[cfg(feature = "chrono")]
			Self::DateTime(value) => f.write_str(&value.to_rfc3339()),
		}
	}
}

/// Locale-aware text ordering
///
/// Compares in three passes, like a collator at tertiary strength:
/// 1. base letters, ignoring accents and case (`"Élodie"` sorts with `"elodie"`)
/// 2. accents, ignoring case
/// 3. case, lowercase first
///
/// Strings equal at all three levels fall back to code point order so the
/// result stays a total order.
pub fn collate(a: &str, b: &str) -> Ordering {
	let primary = |s: &str| {
		s.chars()
			.map(normalize)
			.flat_map(char::to_lowercase)
			.collect::<Vec<_>>()
	};
	let secondary = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<Vec<_>>();
	let tertiary = |s: &str| s.chars().map(char::is_uppercase).collect::<Vec<_>>();

	primary(a)
		.cmp(&primary(b))
		.then_with(|| secondary(a).cmp(&secondary(b)))
		.then_with(|| tertiary(a).cmp(&tertiary(b)))
		.then_with(|| a.cmp(b))
}

impl From<&str> for CellValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for CellValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&String> for CellValue {
	fn from(value: &String) -> Self {
		Self::Text(value.clone())
	}
}

impl From<bool> for CellValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for CellValue {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<i32> for CellValue {
	fn from(value: i32) -> Self {
		Self::Int(i64::from(value))
	}
}

impl From<u32> for CellValue {
	fn from(value: u32) -> Self {
		Self::Int(i64::from(value))
	}
}

impl From<u64> for CellValue {
	fn from(value: u64) -> Self {
		i64::try_from(value)
			.map(Self::Int)
			.unwrap_or(Self::Float(value as f64))
	}
}

impl From<usize> for CellValue {
	fn from(value: usize) -> Self {
		Self::from(value as u64)
	}
}

impl From<f64> for CellValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<f32> for CellValue {
	fn from(value: f32) -> Self {
		Self::Float(f64::from(value))
	}
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for CellValue {
	fn from(value: chrono::NaiveDate) -> Self {
		Self::Date(value)
	}
}

#[cfg(feature = "chrono")]
impl From<chrono::DateTime<chrono::Utc>> for CellValue {
	fn from(value: chrono::DateTime<chrono::Utc>) -> Self {
		Self::DateTime(value)
	}
}

impl From<&serde_json::Value> for CellValue {
	fn from(value: &serde_json::Value) -> Self {
		use serde_json::Value;

		match value {
			Value::Null => Self::Null,
			Value::Bool(b) => Self::Bool(*b),
			Value::Number(n) => match n.as_i64() {
				Some(i) => Self::Int(i),
				None => n.as_f64().map_or(Self::Null, Self::Float),
			},
			Value::String(s) => Self::Text(s.clone()),
			Value::Array(_) | Value::Object(_) => Self::Text(value.to_string()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn test_null_sorts_first() {
		assert_eq!(CellValue::Null.cmp_default(&CellValue::Int(-5)), Ordering::Less);
		assert_eq!(CellValue::Text("a".into()).cmp_default(&CellValue::Null), Ordering::Greater);
		assert_eq!(CellValue::Null.cmp_default(&CellValue::Null), Ordering::Equal);
	}

	#[test]
	fn test_mixed_numbers_compare_numerically() {
		assert_eq!(CellValue::Int(2).cmp_default(&CellValue::Float(2.5)), Ordering::Less);
		assert_eq!(CellValue::Float(3.0).cmp_default(&CellValue::Int(3)), Ordering::Equal);
	}

	#[test]
	fn test_kinds_are_ranked() {
		assert_eq!(CellValue::Bool(true).cmp_default(&CellValue::Int(0)), Ordering::Less);
		assert_eq!(CellValue::Int(99).cmp_default(&CellValue::from("1")), Ordering::Less);
	}

	#[rstest]
	#[case("apple", "Banana", Ordering::Less)]
	#[case("Élodie", "Emma", Ordering::Less)]
	#[case("eclair", "éclair", Ordering::Less)]
	#[case("zoe", "Zoe", Ordering::Less)]
	#[case("Dupont", "dupont", Ordering::Greater)]
	#[case("Jean", "Jean", Ordering::Equal)]
	fn test_collate(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
		assert_eq!(collate(a, b), expected);
	}

	#[test]
	fn test_search_text() {
		assert_eq!(CellValue::Null.search_text(), None);
		assert_eq!(CellValue::from("Jean Dupont").search_text().as_deref(), Some("jean dupont"));
		assert_eq!(CellValue::Float(3.0).search_text().as_deref(), Some("3"));
		assert_eq!(CellValue::Bool(false).search_text().as_deref(), Some("false"));
	}

	#[test]
	fn test_from_json() {
		let json = serde_json::json!({"n": 4, "f": 1.5, "s": "x", "z": null, "b": true});
		assert_eq!(CellValue::from(&json["n"]), CellValue::Int(4));
		assert_eq!(CellValue::from(&json["f"]), CellValue::Float(1.5));
		assert_eq!(CellValue::from(&json["s"]), CellValue::from("x"));
		assert_eq!(CellValue::from(&json["z"]), CellValue::Null);
		assert_eq!(CellValue::from(&json["missing"]), CellValue::Null);
		assert_eq!(CellValue::from(&json["b"]), CellValue::Bool(true));
	}

	#[test]
	fn test_from_option() {
		assert_eq!(CellValue::from(None::<i64>), CellValue::Null);
		assert_eq!(CellValue::from(Some("Actif")), CellValue::from("Actif"));
	}

	#[cfg(feature = "chrono")]
	#[test]
	fn test_dates_display_iso() {
		let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
		assert_eq!(CellValue::from(date).to_string(), "2024-03-09");
	}
}
