//! Column descriptors

mod base;

pub use base::{BaseColumn, Column};

use std::collections::HashSet;

use crate::error::{Result, TableError};

/// A type-erased column as stored by a table
pub type BoxedColumn<R> = Box<dyn Column<Row = R> + Send + Sync>;

/// Finds the column with the given key
pub fn find_column<'a, R>(columns: &'a [BoxedColumn<R>], key: &str) -> Option<&'a BoxedColumn<R>> {
	columns.iter().find(|column| column.key() == key)
}

/// Finds the column with the given key if it is sortable
pub fn find_sortable<'a, R>(
	columns: &'a [BoxedColumn<R>],
	key: &str,
) -> Option<&'a BoxedColumn<R>> {
	find_column(columns, key).filter(|column| column.sortable())
}

/// Checks that column keys are unique
pub fn validate_keys<R>(columns: &[BoxedColumn<R>]) -> Result<()> {
	let mut seen = HashSet::with_capacity(columns.len());
	for column in columns {
		if !seen.insert(column.key()) {
			return Err(TableError::DuplicateColumn(column.key().to_string()));
		}
	}
	Ok(())
}
