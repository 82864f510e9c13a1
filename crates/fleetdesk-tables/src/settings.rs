//! Per-table settings
//!
//! List screens declare their defaults in TOML, for example:
//!
//! ```toml
//! page_size = 20
//! pagination = true
//! sort_key = "name"
//! sort_direction = "asc"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};
use crate::pagination::{PaginationState, DEFAULT_PAGE_SIZE};
use crate::sort::{SortDirection, SortState};

/// Initial configuration of a table instance
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableSettings {
	/// Rows per page
	pub page_size: usize,

	/// Whether rows are split into pages
	pub pagination: bool,

	/// Column sorted when the table opens
	pub sort_key: Option<String>,

	/// Direction of the initial sort
	pub sort_direction: SortDirection,
}

impl Default for TableSettings {
	fn default() -> Self {
		Self {
			page_size: DEFAULT_PAGE_SIZE,
			pagination: true,
			sort_key: None,
			sort_direction: SortDirection::None,
		}
	}
}

impl TableSettings {
	/// Parses and validates settings from TOML
	///
	/// # Errors
	/// Returns `Settings` for malformed TOML and `InvalidPageSize` when
	/// `page_size` is 0
	///
	/// # Examples
	///
	/// ```
	/// use fleetdesk_tables::{SortDirection, TableSettings};
	///
	/// let settings = TableSettings::from_toml_str("page_size = 25\nsort_key = \"plate\"\nsort_direction = \"desc\"").unwrap();
	/// assert_eq!(settings.page_size, 25);
	/// assert_eq!(settings.sort_direction, SortDirection::Desc);
	/// assert!(settings.pagination);
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let settings: Self = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Checks the values that serde cannot
	///
	/// # Errors
	/// Returns `InvalidPageSize` when `page_size` is 0
	pub fn validate(&self) -> Result<()> {
		if self.page_size == 0 {
			return Err(TableError::InvalidPageSize(self.page_size));
		}
		Ok(())
	}

	/// Initial sort state
	pub fn sort_state(&self) -> SortState {
		SortState {
			key: self.sort_key.clone(),
			direction: self.sort_direction,
		}
	}

	/// Initial pagination state, on page 1
	///
	/// # Errors
	/// Returns `InvalidPageSize` when `page_size` is 0
	pub fn pagination_state(&self) -> Result<PaginationState> {
		PaginationState::with_page_size(self.page_size)
	}
}
