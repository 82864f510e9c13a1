//! # Fleetdesk
//!
//! Back-office building blocks for fleet rental dashboards.
//!
//! ## Feature Flags
//!
//! - `tables` (default) - List screens: search, sorting, pagination and row
//!   actions, via [`fleetdesk-tables`](fleetdesk_tables)
//!
//! ## Quick Example
//!
//! ```rust
//! use fleetdesk::prelude::*;
//! use serde_json::{json, Value};
//!
//! let mut table: DataTable<Value> = DataTable::new();
//! table.add_column(BaseColumn::field("plate", "Plate")).unwrap();
//!
//! let vehicles = vec![json!({"id": 1, "plate": "GH-204-KL"})];
//! let view = table.view(&vehicles);
//! assert_eq!(view.rows.len(), 1);
//! ```

#[cfg(feature = "tables")]
pub use fleetdesk_tables as tables;

pub mod prelude {
	//! Commonly used types

	#[cfg(feature = "tables")]
	pub use fleetdesk_tables::{
		Action, BaseColumn, CellValue, Column, DataTable, Delegates, Record, RowKey, SortDirection,
		StageMode, StageModes, TableError, TableSettings, TableView,
	};
}
