//! Records and row keys

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use crate::value::CellValue;

/// A row of a table: an opaque bag of named fields
///
/// The engine only reads the fields named by columns and by the row key.
/// Unknown fields must read as [`CellValue::Null`].
///
/// # Example
///
/// ```rust
/// use fleetdesk_tables::{CellValue, Record};
///
/// struct Vehicle {
///     plate: String,
///     seats: u32,
/// }
///
/// impl Record for Vehicle {
///     fn field(&self, key: &str) -> CellValue {
///         match key {
///             "plate" => self.plate.as_str().into(),
///             "seats" => self.seats.into(),
///             _ => CellValue::Null,
///         }
///     }
/// }
/// ```
pub trait Record {
	/// Returns the value of the named field
	fn field(&self, key: &str) -> CellValue;
}

impl<R: Record + ?Sized> Record for &R {
	fn field(&self, key: &str) -> CellValue {
		(**self).field(key)
	}
}

impl Record for serde_json::Value {
	fn field(&self, key: &str) -> CellValue {
		self.get(key).map_or(CellValue::Null, CellValue::from)
	}
}

impl Record for serde_json::Map<String, serde_json::Value> {
	fn field(&self, key: &str) -> CellValue {
		self.get(key).map_or(CellValue::Null, CellValue::from)
	}
}

impl Record for HashMap<String, CellValue> {
	fn field(&self, key: &str) -> CellValue {
		self.get(key).cloned().unwrap_or_default()
	}
}

impl Record for BTreeMap<String, CellValue> {
	fn field(&self, key: &str) -> CellValue {
		self.get(key).cloned().unwrap_or_default()
	}
}

type KeyExtractor<R> = Arc<dyn Fn(&R) -> String + Send + Sync>;

/// How a row's unique key is derived
///
/// Keys identify rows across recomputations. Two records in the same page
/// must not share a key.
pub enum RowKey<R> {
	/// Read the key from a field
	Field(String),
	/// Compute the key from the record
	Extractor(KeyExtractor<R>),
}

impl<R> RowKey<R> {
	/// Reads the key from the named field
	pub fn field(name: impl Into<String>) -> Self {
		Self::Field(name.into())
	}

	/// Computes the key with a closure
	pub fn extractor<F>(f: F) -> Self
	where
		F: Fn(&R) -> String + Send + Sync + 'static,
	{
		Self::Extractor(Arc::new(f))
	}
}

impl<R: Record> RowKey<R> {
	/// Resolves the key for one record
	pub fn resolve(&self, record: &R) -> String {
		match self {
			Self::Field(name) => record.field(name).to_string(),
			Self::Extractor(f) => f(record),
		}
	}
}

impl<R> Default for RowKey<R> {
	fn default() -> Self {
		Self::Field("id".to_string())
	}
}

impl<R> Clone for RowKey<R> {
	fn clone(&self) -> Self {
		match self {
			Self::Field(name) => Self::Field(name.clone()),
			Self::Extractor(f) => Self::Extractor(Arc::clone(f)),
		}
	}
}

impl<R> fmt::Debug for RowKey<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Field(name) => f.debug_tuple("Field").field(name).finish(),
			Self::Extractor(_) => f.debug_tuple("Extractor").finish_non_exhaustive(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_json_record_fields() {
		let client = json!({"id": 7, "name": "Transports Martin", "siret": null});
		assert_eq!(client.field("id"), CellValue::Int(7));
		assert_eq!(client.field("name"), CellValue::from("Transports Martin"));
		assert_eq!(client.field("siret"), CellValue::Null);
		assert_eq!(client.field("missing"), CellValue::Null);
	}

	#[test]
	fn test_row_key_default_reads_id() {
		let client = json!({"id": 42});
		assert_eq!(RowKey::default().resolve(&client), "42");
	}

	#[test]
	fn test_row_key_extractor() {
		let key = RowKey::extractor(|v: &serde_json::Value| {
			format!("{}-{}", v.field("fleet"), v.field("plate"))
		});
		let vehicle = json!({"fleet": "north", "plate": "AB-123-CD"});
		assert_eq!(key.resolve(&vehicle), "north-AB-123-CD");
	}

	#[test]
	fn test_map_record() {
		let mut map = HashMap::new();
		map.insert("status".to_string(), CellValue::from("Actif"));
		assert_eq!(map.field("status"), CellValue::from("Actif"));
		assert!(map.field("other").is_null());
	}
}
