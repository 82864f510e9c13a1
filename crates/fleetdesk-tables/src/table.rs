//! Stateful table instance
//!
//! [`DataTable`] owns the column and action declarations together with the
//! interactive state (search term, sort, current page) and turns user input
//! into calls to the pure [`run`](crate::pipeline::run) pass.

use std::fmt;

use crate::action::Action;
use crate::column::{find_column, validate_keys, BoxedColumn, Column};
use crate::delegate::Delegates;
use crate::error::{Result, TableError};
use crate::pagination::PaginationState;
use crate::pipeline::{run, PipelineInput, StageMode, StageModes, TableView};
use crate::record::{Record, RowKey};
use crate::settings::TableSettings;
use crate::sort::{SortDirection, SortState};

/// A table instance bound to one list screen
///
/// # Example
///
/// ```rust
/// use fleetdesk_tables::{DataTable, SortDirection};
/// use fleetdesk_tables::column::BaseColumn;
/// use serde_json::{json, Value};
///
/// let mut table: DataTable<Value> = DataTable::new();
/// table.add_column(BaseColumn::field("plate", "Plate")).unwrap();
/// table.add_column(BaseColumn::field("model", "Model")).unwrap();
///
/// let vehicles = vec![
///     json!({"id": 1, "plate": "GH-204-KL", "model": "Kangoo"}),
///     json!({"id": 2, "plate": "AB-123-CD", "model": "Partner"}),
/// ];
///
/// table.click_header("plate").unwrap();
/// assert_eq!(table.sort_state().direction, SortDirection::Asc);
///
/// let view = table.view(&vehicles);
/// assert_eq!(view.rows[0].key, "2");
/// ```
pub struct DataTable<R> {
	columns: Vec<BoxedColumn<R>>,
	actions: Vec<Action<R>>,
	row_key: RowKey<R>,
	sort: SortState,
	pagination: PaginationState,
	paginate: bool,
	search_term: String,
	modes: StageModes,
	delegates: Delegates<R>,
	total_override: Option<usize>,
	total_pages: usize,
}

impl<R> Default for DataTable<R> {
	fn default() -> Self {
		Self {
			columns: Vec::new(),
			actions: Vec::new(),
			row_key: RowKey::default(),
			sort: SortState::unsorted(),
			pagination: PaginationState::default(),
			paginate: true,
			search_term: String::new(),
			modes: StageModes::local(),
			delegates: Delegates::new(),
			total_override: None,
			total_pages: 1,
		}
	}
}

impl<R> DataTable<R> {
	/// Empty table: no columns, unsorted, page 1 of 10 rows, all stages local
	pub fn new() -> Self {
		Self::default()
	}

	/// Table with the given columns
	///
	/// # Errors
	/// Returns `DuplicateColumn` when two columns share a key
	pub fn with_columns(columns: Vec<BoxedColumn<R>>) -> Result<Self> {
		validate_keys(&columns)?;
		Ok(Self {
			columns,
			..Self::default()
		})
	}

	/// Applies initial sort, page size and pagination flag
	///
	/// # Errors
	/// Returns `InvalidPageSize` when the settings carry a page size of 0
	pub fn with_settings(mut self, settings: &TableSettings) -> Result<Self> {
		settings.validate()?;
		self.pagination = settings.pagination_state()?;
		self.paginate = settings.pagination;
		self.sort = settings.sort_state();
		Ok(self)
	}

	/// Sets how row keys are derived (default: the `id` field)
	pub fn with_row_key(mut self, row_key: RowKey<R>) -> Self {
		self.row_key = row_key;
		self
	}

	/// Installs callbacks and adopts the stage modes they imply
	///
	/// Call [`with_modes`](Self::with_modes) afterwards to override the modes.
	pub fn with_delegates(mut self, delegates: Delegates<R>) -> Self {
		self.modes = delegates.implied_modes();
		self.delegates = delegates;
		self
	}

	/// Sets the mode of each stage explicitly
	pub fn with_modes(mut self, modes: StageModes) -> Self {
		self.modes = modes;
		self
	}

	/// Appends a column
	///
	/// # Errors
	/// Returns `DuplicateColumn` when a column with the same key exists
	pub fn add_column<C>(&mut self, column: C) -> Result<()>
	where
		C: Column<Row = R> + Send + Sync + 'static,
	{
		if find_column(&self.columns, column.key()).is_some() {
			return Err(TableError::DuplicateColumn(column.key().to_string()));
		}
		self.columns.push(Box::new(column));
		Ok(())
	}

	/// Appends a row action
	pub fn add_action(&mut self, action: Action<R>) {
		self.actions.push(action);
	}

	/// Updates the search term as typed
	///
	/// The search callback, if any, hears about every change. The current page
	/// is kept; the next [`view`](Self::view) moves back to page 1 when the
	/// narrower result no longer reaches it.
	pub fn set_search_term(&mut self, term: impl Into<String>) {
		let term = term.into();
		if term == self.search_term {
			return;
		}
		self.search_term = term;
		self.delegates.notify_search(&self.search_term);
	}

	/// Handles a click on the header of column `key`
	///
	/// # Errors
	/// Returns `UnknownColumn` or `ColumnNotSortable`; the sort is unchanged
	/// in both cases
	pub fn click_header(&mut self, key: &str) -> Result<()> {
		self.check_sortable(key)?;
		let previous = self.sort.direction;
		self.sort.toggle(key);
		tracing::debug!(
			key,
			from = %previous,
			to = %self.sort.direction,
			"sort changed by header click"
		);
		self.delegates.notify_sort(key, self.sort.direction);
		Ok(())
	}

	/// Sets the sort directly, without notifying the sort callback
	///
	/// # Errors
	/// Returns `UnknownColumn` or `ColumnNotSortable`
	pub fn sort_by(&mut self, key: &str, direction: SortDirection) -> Result<()> {
		self.check_sortable(key)?;
		self.sort = SortState::new(key, direction);
		Ok(())
	}

	/// Moves to `page`
	///
	/// Pages past the end are accepted; the next local pass brings them back.
	///
	/// # Errors
	/// Returns `InvalidPage` when `page` is 0
	pub fn go_to_page(&mut self, page: usize) -> Result<()> {
		let previous = self.pagination.current_page();
		self.pagination.set_page(page)?;
		if previous != page {
			tracing::debug!(from = previous, to = page, "page changed");
			self.delegates.notify_page(page);
		}
		Ok(())
	}

	/// Moves one page forward; returns false on the last known page
	pub fn go_to_next_page(&mut self) -> bool {
		let current = self.pagination.current_page();
		current < self.total_pages && self.go_to_page(current + 1).is_ok()
	}

	/// Moves one page back; returns false on page 1
	pub fn go_to_previous_page(&mut self) -> bool {
		let current = self.pagination.current_page();
		current > 1 && self.go_to_page(current - 1).is_ok()
	}

	/// Changes the page size and returns to page 1
	///
	/// # Errors
	/// Returns `InvalidPageSize` when `page_size` is 0
	pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
		self.pagination = PaginationState::with_page_size(page_size)?;
		Ok(())
	}

	/// Turns pagination on or off
	pub fn set_pagination(&mut self, enabled: bool) {
		self.paginate = enabled;
	}

	/// Row count across all pages, as reported by the server
	///
	/// Only read when pagination is delegated.
	pub fn set_total_count(&mut self, total: usize) {
		self.total_override = Some(total);
	}

	/// Runs the handler of action `action_index` for a row
	///
	/// # Errors
	/// Returns `UnknownAction` for an index past the declared actions and
	/// `ActionUnavailable` when the action is hidden or disabled for `record`
	pub fn trigger_action(&self, action_index: usize, record: &R, index: usize) -> Result<()> {
		let action = self
			.actions
			.get(action_index)
			.ok_or(TableError::UnknownAction(action_index))?;
		if !action.resolve(record).is_available() {
			return Err(TableError::ActionUnavailable(action.label().to_string()));
		}
		tracing::debug!(action = action.label(), index, "running row action");
		action.invoke(record, index);
		Ok(())
	}

	/// Forwards a row click to the row callback, if any
	pub fn click_row(&self, record: &R, index: usize) {
		self.delegates.notify_row_click(record, index);
	}

	/// Declared columns
	pub fn columns(&self) -> &[BoxedColumn<R>] {
		&self.columns
	}

	/// Declared row actions
	pub fn actions(&self) -> &[Action<R>] {
		&self.actions
	}

	/// Current search term as typed
	pub fn search_term(&self) -> &str {
		&self.search_term
	}

	/// Active sort
	pub fn sort_state(&self) -> &SortState {
		&self.sort
	}

	/// Arrow to draw on the header of column `key`
	pub fn sort_indicator(&self, key: &str) -> Option<SortDirection> {
		self.sort.indicator(key)
	}

	/// Current page and page size
	pub fn pagination(&self) -> PaginationState {
		self.pagination
	}

	/// Whether rows are split into pages
	pub fn is_paginated(&self) -> bool {
		self.paginate
	}

	/// Mode of each stage
	pub fn modes(&self) -> StageModes {
		self.modes
	}

	/// Page count from the last [`view`](Self::view)
	pub fn total_pages(&self) -> usize {
		self.total_pages
	}

	fn check_sortable(&self, key: &str) -> Result<()> {
		let column =
			find_column(&self.columns, key).ok_or_else(|| TableError::UnknownColumn(key.to_string()))?;
		if !column.sortable() {
			return Err(TableError::ColumnNotSortable(key.to_string()));
		}
		Ok(())
	}
}

impl<R: Record> DataTable<R> {
	/// Computes the visible page for `records`
	///
	/// Adopts the self-corrected page and remembers the page count for the
	/// pager helpers.
	pub fn view<'a>(&mut self, records: &'a [R]) -> TableView<'a, R> {
		let view = run(
			records,
			&PipelineInput {
				columns: &self.columns,
				actions: &self.actions,
				row_key: &self.row_key,
				search_term: &self.search_term,
				sort: &self.sort,
				pagination: self.pagination,
				paginate: self.paginate,
				modes: self.modes,
				total_override: self.total_override,
			},
		);
		if self.modes.pagination == StageMode::Local {
			self.pagination = view.pagination;
		}
		self.total_pages = view.total_pages;
		view
	}
}

impl<R> fmt::Debug for DataTable<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DataTable")
			.field("columns", &self.columns)
			.field("actions", &self.actions)
			.field("row_key", &self.row_key)
			.field("sort", &self.sort)
			.field("pagination", &self.pagination)
			.field("paginate", &self.paginate)
			.field("search_term", &self.search_term)
			.field("modes", &self.modes)
			.field("delegates", &self.delegates)
			.field("total_override", &self.total_override)
			.finish()
	}
}
