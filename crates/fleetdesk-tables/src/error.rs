//! Error types for fleetdesk-tables

use thiserror::Error;

/// Error type for table configuration and interaction
///
/// The view pipeline itself never fails: these errors only come from
/// building a table, loading settings, or driving a table instance.
#[derive(Debug, Error)]
pub enum TableError {
	/// Page size must be at least one row
	#[error("Invalid page size: {0} (must be greater than zero)")]
	InvalidPageSize(usize),

	/// Page numbers are 1-based
	#[error("Invalid page: {0} (pages start at 1)")]
	InvalidPage(usize),

	/// No column with the given key exists
	#[error("Unknown column: {0}")]
	UnknownColumn(String),

	/// The column exists but cannot be sorted
	#[error("Column is not sortable: {0}")]
	ColumnNotSortable(String),

	/// Two columns were declared with the same key
	#[error("Duplicate column key: {0}")]
	DuplicateColumn(String),

	/// No action at the given position
	#[error("Unknown action index: {0}")]
	UnknownAction(usize),

	/// The action is hidden or disabled for this record
	#[error("Action '{0}' is not available for this record")]
	ActionUnavailable(String),

	/// Settings could not be parsed
	#[error("Invalid table settings: {0}")]
	Settings(#[from] toml::de::Error),
}

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;
