//! Data table engine for fleetdesk list screens
//!
//! This crate turns a set of in-memory records plus column and action
//! declarations into the rows of one visible page. The vehicle, client and
//! subscription lists of the back office all go through it.
//!
//! # Features
//!
//! - **Search**: case-insensitive substring match over searchable columns
//! - **Sorting**: three-state header cycle (ascending, descending, unsorted)
//!   with per-column comparators
//! - **Pagination**: page slicing that moves back to page 1 when a narrower
//!   result strands the current page
//! - **Page window**: abbreviated pager tokens with ellipses
//! - **Row actions**: per-record visibility and disabled state
//! - **Delegation**: each stage can be handed over to the server independently
//! - **Settings**: per-table defaults loaded from TOML
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[DataTable] --> B[Columns]
//!     A --> C[Actions]
//!     A --> D[SortState]
//!     A --> E[PaginationState]
//!     A --> F[Delegates]
//!     A --> G[run]
//!     G --> H[search::filter]
//!     G --> I[sort::sort]
//!     G --> J[pagination::paginate]
//!     G --> K[window::page_window]
//!     G --> L[TableView]
//! ```
//!
//! # Example
//!
//! ```rust
//! use fleetdesk_tables::{Action, CellValue, DataTable, Record, TableSettings};
//! use fleetdesk_tables::column::BaseColumn;
//! use serde_json::{json, Value};
//!
//! let settings = TableSettings::from_toml_str("page_size = 2").unwrap();
//! let mut table: DataTable<Value> = DataTable::new().with_settings(&settings).unwrap();
//! table.add_column(BaseColumn::field("name", "Client")).unwrap();
//! table.add_action(
//!     Action::new("Désactiver", |_client: &Value, _index| {})
//!         .visible_when(|client: &Value| client.field("status") != CellValue::from("Inactif")),
//! );
//!
//! let clients = vec![
//!     json!({"id": 1, "name": "Transports Morel", "status": "Actif"}),
//!     json!({"id": 2, "name": "Garage Dupuis", "status": "Inactif"}),
//!     json!({"id": 3, "name": "Taxis Martin", "status": "Actif"}),
//! ];
//!
//! table.set_search_term("  GARAGE ");
//! let view = table.view(&clients);
//! assert_eq!(view.rows.len(), 1);
//! assert_eq!(view.rows[0].visible_actions().count(), 0);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod action;
pub mod column;
pub mod delegate;
pub mod error;
pub mod pagination;
pub mod pipeline;
pub mod record;
pub mod search;
pub mod settings;
pub mod sort;
pub mod table;
pub mod value;
pub mod window;

// Re-exports for convenience
pub use action::{Action, Flag, ResolvedAction};
pub use column::{BaseColumn, BoxedColumn, Column};
pub use delegate::Delegates;
pub use error::{Result, TableError};
pub use pagination::{PageSlice, PageSummary, PaginationState};
pub use pipeline::{run, PipelineInput, RowView, StageMode, StageModes, TableView};
pub use record::{Record, RowKey};
pub use settings::TableSettings;
pub use sort::{SortDirection, SortState};
pub use table::DataTable;
pub use value::{collate, CellValue};
pub use window::{page_window, PageToken};
