//! Base column trait and implementation

use std::cmp::Ordering;
use std::fmt::Debug;
use std::marker::PhantomData;

use crate::record::Record;
use crate::value::CellValue;

/// Trait for table column descriptors
///
/// A column describes one field of a row independently of how it is drawn.
/// Each column is responsible for:
/// - Providing a key (unique within a table) and header text
/// - Extracting the cell value from a row
/// - Declaring whether it takes part in sorting and searching
/// - Optionally ordering two rows itself
pub trait Column: Debug {
	/// The type of rows this column operates on
	type Row;

	/// Returns the key of this column
	///
	/// This is the identifier used by the sort state
	fn key(&self) -> &str;

	/// Returns the header text for this column
	fn header(&self) -> &str;

	/// Extracts the cell value for the given row
	fn value(&self, row: &Self::Row) -> CellValue;

	/// Returns whether this column can be sorted
	///
	/// Default: true
	fn sortable(&self) -> bool {
		true
	}

	/// Returns whether the search term is matched against this column
	///
	/// Default: true
	fn searchable(&self) -> bool {
		true
	}

	/// Orders two rows in ascending order, if this column has a comparator
	///
	/// Returning `None` selects the default value ordering.
	fn compare(&self, _a: &Self::Row, _b: &Self::Row) -> Option<Ordering> {
		None
	}
}

type Accessor<R> = Box<dyn Fn(&R) -> CellValue + Send + Sync>;
type Comparator<R> = Box<dyn Fn(&R, &R) -> Ordering + Send + Sync>;

/// A basic column implementation using a function to extract values
///
/// # Example
///
/// ```rust
/// use fleetdesk_tables::column::BaseColumn;
///
/// struct Driver {
///     name: String,
///     licence_points: u32,
/// }
///
/// let name = BaseColumn::new("name", "Driver", |d: &Driver| d.name.as_str().into());
/// let points = BaseColumn::new("points", "Points", |d: &Driver| d.licence_points.into())
///     .searchable(false)
///     .comparator(|a: &Driver, b: &Driver| b.licence_points.cmp(&a.licence_points));
/// ```
pub struct BaseColumn<R> {
	key: String,
	header: String,
	accessor: Accessor<R>,
	comparator: Option<Comparator<R>>,
	sortable: bool,
	searchable: bool,
	_phantom: PhantomData<fn(&R)>,
}

impl<R> BaseColumn<R> {
	/// Creates a new column reading its value through `accessor`
	pub fn new<F>(key: impl Into<String>, header: impl Into<String>, accessor: F) -> Self
	where
		F: Fn(&R) -> CellValue + Send + Sync + 'static,
	{
		Self {
			key: key.into(),
			header: header.into(),
			accessor: Box::new(accessor),
			comparator: None,
			sortable: true,
			searchable: true,
			_phantom: PhantomData,
		}
	}

	/// Sets whether this column is sortable
	pub fn sortable(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}

	/// Sets whether this column is searched
	pub fn searchable(mut self, searchable: bool) -> Self {
		self.searchable = searchable;
		self
	}

	/// Sets a custom ascending comparator
	///
	/// Descending order calls it with the arguments swapped.
	pub fn comparator<F>(mut self, comparator: F) -> Self
	where
		F: Fn(&R, &R) -> Ordering + Send + Sync + 'static,
	{
		self.comparator = Some(Box::new(comparator));
		self
	}
}

impl<R: Record + 'static> BaseColumn<R> {
	/// Creates a column reading the record field named `key`
	pub fn field(key: impl Into<String>, header: impl Into<String>) -> Self {
		let key = key.into();
		let field = key.clone();
		Self::new(key, header, move |row: &R| row.field(&field))
	}
}

impl<R> Debug for BaseColumn<R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("BaseColumn")
			.field("key", &self.key)
			.field("header", &self.header)
			.field("sortable", &self.sortable)
			.field("searchable", &self.searchable)
			.field("comparator", &self.comparator.is_some())
			.finish_non_exhaustive()
	}
}

impl<R> Column for BaseColumn<R> {
	type Row = R;

	fn key(&self) -> &str {
		&self.key
	}

	fn header(&self) -> &str {
		&self.header
	}

	fn value(&self, row: &Self::Row) -> CellValue {
		(self.accessor)(row)
	}

	fn sortable(&self) -> bool {
		self.sortable
	}

	fn searchable(&self) -> bool {
		self.searchable
	}

	fn compare(&self, a: &Self::Row, b: &Self::Row) -> Option<Ordering> {
		self.comparator.as_ref().map(|cmp| cmp(a, b))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug)]
	struct TestRow {
		value: String,
		rank: i64,
	}

	#[test]
	fn test_base_column_creation() {
		let column = BaseColumn::new("test", "Test Column", |row: &TestRow| {
			row.value.as_str().into()
		});
		assert_eq!(column.key(), "test");
		assert_eq!(column.header(), "Test Column");
		assert!(Column::sortable(&column));
		assert!(Column::searchable(&column));
	}

	#[test]
	fn test_base_column_value() {
		let column = BaseColumn::new("test", "Test", |row: &TestRow| row.value.as_str().into());
		let row = TestRow {
			value: "Hello".to_string(),
			rank: 1,
		};
		assert_eq!(column.value(&row), CellValue::from("Hello"));
	}

	#[test]
	fn test_base_column_builder() {
		let column = BaseColumn::new("test", "Test", |row: &TestRow| row.value.as_str().into())
			.sortable(false)
			.searchable(false);

		// Use Column trait methods (not builder methods)
		assert!(!Column::sortable(&column));
		assert!(!Column::searchable(&column));
	}

	#[test]
	fn test_comparator_is_optional() {
		let a = TestRow {
			value: "a".to_string(),
			rank: 2,
		};
		let b = TestRow {
			value: "b".to_string(),
			rank: 1,
		};
		let plain = BaseColumn::new("rank", "Rank", |row: &TestRow| row.rank.into());
		assert_eq!(plain.compare(&a, &b), None);

		let custom = plain.comparator(|x: &TestRow, y: &TestRow| x.rank.cmp(&y.rank));
		assert_eq!(custom.compare(&a, &b), Some(Ordering::Greater));
	}

	#[test]
	fn test_field_column_reads_record() {
		let column: BaseColumn<serde_json::Value> = BaseColumn::field("plate", "Plate");
		let vehicle = serde_json::json!({"plate": "GH-552-TR"});
		assert_eq!(column.value(&vehicle), CellValue::from("GH-552-TR"));
	}
}
