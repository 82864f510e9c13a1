//! The view pipeline: search, sort, then paginate
//!
//! [`run`] is a pure function of its inputs. It is recomputed in full on every
//! change (keystroke, header click, page click): the whole record set is
//! filtered and sorted again each time, which is O(n * columns) plus
//! O(n log n) per pass. This is fine for in-memory lists of a few thousand
//! rows; there is no index and no debouncing, so larger sets should delegate
//! the stages to the server.

use std::collections::HashSet;

use crate::action::{resolve_all, Action, ResolvedAction};
use crate::column::BoxedColumn;
use crate::pagination::{clamp_page, paginate, PageSummary, PaginationState};
use crate::record::{Record, RowKey};
use crate::search::filter;
use crate::sort::{sort, SortState};
use crate::window::{page_window, PageToken};

/// Whether a stage computes locally or trusts the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StageMode {
	/// The engine performs the stage
	#[default]
	Local,
	/// The caller already applied the stage to the records it passes in
	Delegated,
}

/// Mode of each stage, independent of one another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StageModes {
	/// Search stage
	pub search: StageMode,
	/// Sort stage
	pub sort: StageMode,
	/// Pagination stage
	pub pagination: StageMode,
}

impl StageModes {
	/// Every stage computed locally
	pub fn local() -> Self {
		Self::default()
	}

	/// Every stage delegated to the caller
	pub fn delegated() -> Self {
		Self {
			search: StageMode::Delegated,
			sort: StageMode::Delegated,
			pagination: StageMode::Delegated,
		}
	}
}

/// Everything a pass needs besides the records
pub struct PipelineInput<'c, R> {
	/// Column descriptors
	pub columns: &'c [BoxedColumn<R>],
	/// Row actions
	pub actions: &'c [Action<R>],
	/// Row key derivation
	pub row_key: &'c RowKey<R>,
	/// Search term as typed
	pub search_term: &'c str,
	/// Active sort
	pub sort: &'c SortState,
	/// Requested page
	pub pagination: PaginationState,
	/// Whether rows are split into pages at all
	pub paginate: bool,
	/// Mode of each stage
	pub modes: StageModes,
	/// Total row count reported by the caller for delegated pagination
	pub total_override: Option<usize>,
}

/// One rendered row
#[derive(Debug, Clone)]
pub struct RowView<'a, R> {
	/// The record
	pub record: &'a R,
	/// Position within the page, passed to row click and action handlers
	pub index: usize,
	/// Resolved row key
	pub key: String,
	/// Every action resolved against this record, in declaration order
	pub actions: Vec<ResolvedAction>,
}

impl<R> RowView<'_, R> {
	/// Actions that should be drawn for this row
	pub fn visible_actions(&self) -> impl Iterator<Item = &ResolvedAction> {
		self.actions.iter().filter(|action| action.visible)
	}
}

/// Result of a pipeline pass
#[derive(Debug, Clone)]
pub struct TableView<'a, R> {
	/// Rows of the current page
	pub rows: Vec<RowView<'a, R>>,
	/// Total number of pages, at least one
	pub total_pages: usize,
	/// Page selector tokens; empty when no pager is shown
	pub page_tokens: Vec<PageToken>,
	/// Pagination state after self-correction
	pub pagination: PaginationState,
	/// Rows left after searching
	pub filtered_count: usize,
	/// Position of the page within the result set
	pub summary: PageSummary,
}

impl<R> TableView<'_, R> {
	/// Returns true when there is nothing to show
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// Returns true when a pager should be drawn
	pub fn shows_pager(&self) -> bool {
		self.total_pages > 1
	}
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Computes the visible page of a table
///
/// ```mermaid
/// graph LR
///     A[records] --> B[search]
///     B --> C[sort]
///     C --> D[clamp page]
///     D --> E[paginate]
///     E --> F[rows + actions]
///     E --> G[page window]
/// ```
///
/// Each stage only consults its own [`StageMode`]. The pass never fails;
/// a panic in a caller-supplied comparator or predicate propagates to the
/// caller.
pub fn run<'a, R: Record>(records: &'a [R], input: &PipelineInput<'_, R>) -> TableView<'a, R> {
	let modes = input.modes;

	let filtered = filter(
		records.iter().collect(),
		input.columns,
		input.search_term,
		modes.search,
	);
	let filtered_count = filtered.len();
	let sorted = sort(filtered, input.sort, input.columns, modes.sort);

	let (page_rows, pagination, total_pages, total_count) = if input.paginate {
		let pagination = clamp_page(sorted.len(), input.pagination, true, modes.pagination);
		let slice = paginate(sorted, &pagination, modes.pagination, input.total_override);
		(slice.rows, pagination, slice.total_pages, slice.total_count)
	} else {
		let total_count = sorted.len();
		(sorted, input.pagination.first_page(), 1, total_count)
	};

	let page_tokens = if total_pages > 1 {
		page_window(pagination.current_page(), total_pages)
	} else {
		Vec::new()
	};
	let summary = PageSummary::new(&pagination, page_rows.len(), total_count, total_pages);

	tracing::trace!(
		records = records.len(),
		filtered = filtered_count,
		page = pagination.current_page(),
		total_pages,
		rows = page_rows.len(),
		"table pipeline pass"
	);

	let mut seen = HashSet::with_capacity(page_rows.len());
	let rows = page_rows
		.into_iter()
		.enumerate()
		.map(|(index, record)| {
			let key = input.row_key.resolve(record);
			if !seen.insert(key.clone()) {
				tracing::warn!(key = %key, index, "duplicate row key on the same page");
			}
			RowView {
				record,
				index,
				key,
				actions: resolve_all(input.actions, record),
			}
		})
		.collect();

	TableView {
		rows,
		total_pages,
		page_tokens,
		pagination,
		filtered_count,
		summary,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::column::BaseColumn;
	use crate::sort::SortDirection;
	use crate::value::CellValue;
	use crate::window::PageToken::{Ellipsis, Page};
	use serde_json::{json, Value};

	struct Fixture {
		columns: Vec<BoxedColumn<Value>>,
		actions: Vec<Action<Value>>,
		row_key: RowKey<Value>,
	}

	impl Fixture {
		fn new() -> Self {
			Self {
				columns: vec![
					Box::new(BaseColumn::field("id", "ID")),
					Box::new(BaseColumn::field("name", "Nom")),
				],
				actions: vec![
					Action::new("Modifier", |_: &Value, _| {}),
					Action::new("Désactiver", |_: &Value, _| {})
						.visible_when(|r: &Value| r.field("status") != CellValue::from("Inactif")),
				],
				row_key: RowKey::field("id"),
			}
		}

		fn input<'c>(
			&'c self,
			term: &'c str,
			sort: &'c SortState,
			pagination: PaginationState,
		) -> PipelineInput<'c, Value> {
			PipelineInput {
				columns: &self.columns,
				actions: &self.actions,
				row_key: &self.row_key,
				search_term: term,
				sort,
				pagination,
				paginate: true,
				modes: StageModes::local(),
				total_override: None,
			}
		}
	}

	fn clients(n: usize) -> Vec<Value> {
		(1..=n)
			.map(|i| {
				json!({
					"id": i,
					"name": format!("Client {:02}", i),
					"status": if i % 3 == 0 { "Inactif" } else { "Actif" },
				})
			})
			.collect()
	}

	fn ids(view: &TableView<'_, Value>) -> Vec<String> {
		view.rows.iter().map(|r| r.key.clone()).collect()
	}

	#[test]
	fn test_filter_sort_paginate_in_order() {
		let fixture = Fixture::new();
		let data = clients(30);
		let sort = SortState::new("name", SortDirection::Desc);
		let input = fixture.input("client 1", &sort, PaginationState::new(1, 4).unwrap());

		let view = run(&data, &input);

		// "Client 10" to "Client 19" match, sorted descending
		assert_eq!(view.filtered_count, 10);
		assert_eq!(ids(&view), vec!["19", "18", "17", "16"]);
		assert_eq!(view.total_pages, 3);
		assert_eq!(view.page_tokens, vec![Page(1), Page(2), Page(3)]);
		assert_eq!(view.summary.start_index, 1);
		assert_eq!(view.summary.end_index, 4);
	}

	#[test]
	fn test_stranded_page_is_reset() {
		let fixture = Fixture::new();
		let data = clients(30);
		let sort = SortState::unsorted();
		let input = fixture.input("client 2", &sort, PaginationState::new(3, 10).unwrap());

		let view = run(&data, &input);
		assert_eq!(view.pagination.current_page(), 1);
		assert_eq!(ids(&view).first().map(String::as_str), Some("20"));
	}

	#[test]
	fn test_empty_data() {
		let fixture = Fixture::new();
		let data: Vec<Value> = Vec::new();
		let sort = SortState::unsorted();
		let view = run(&data, &fixture.input("", &sort, PaginationState::default()));
		assert!(view.is_empty());
		assert_eq!(view.total_pages, 1);
		assert!(view.page_tokens.is_empty());
		assert!(!view.shows_pager());
	}

	#[test]
	fn test_pagination_disabled_shows_everything() {
		let fixture = Fixture::new();
		let data = clients(25);
		let sort = SortState::unsorted();
		let mut input = fixture.input("", &sort, PaginationState::new(2, 10).unwrap());
		input.paginate = false;

		let view = run(&data, &input);
		assert_eq!(view.rows.len(), 25);
		assert_eq!(view.total_pages, 1);
		assert_eq!(view.pagination.current_page(), 1);
		assert!(view.page_tokens.is_empty());
	}

	#[test]
	fn test_actions_resolved_per_row() {
		let fixture = Fixture::new();
		let data = clients(3);
		let sort = SortState::unsorted();
		let view = run(&data, &fixture.input("", &sort, PaginationState::default()));

		let visible: Vec<usize> = view.rows.iter().map(|r| r.visible_actions().count()).collect();
		assert_eq!(visible, vec![2, 2, 1]);
		assert_eq!(view.rows[2].index, 2);
	}

	#[test]
	fn test_fully_delegated_pass_through() {
		let fixture = Fixture::new();
		// The server already returned page 5 of a filtered, sorted set
		let data = clients(10);
		let sort = SortState::new("name", SortDirection::Desc);
		let page = PaginationState::new(5, 10).unwrap();
		let mut input = fixture.input("nothing matches", &sort, page);
		input.modes = StageModes::delegated();
		input.total_override = Some(100);

		let view = run(&data, &input);
		assert_eq!(view.rows.len(), 10);
		assert_eq!(ids(&view)[0], "1");
		assert_eq!(view.total_pages, 10);
		assert_eq!(view.pagination.current_page(), 5);
		assert_eq!(
			view.page_tokens,
			vec![
				Page(1),
				Ellipsis,
				Page(3),
				Page(4),
				Page(5),
				Page(6),
				Page(7),
				Ellipsis,
				Page(10)
			]
		);
		assert_eq!(view.summary.start_index, 41);
	}

	#[test]
	fn test_modes_are_independent() {
		let fixture = Fixture::new();
		let data = clients(12);
		let sort = SortState::new("name", SortDirection::Desc);
		let mut input = fixture.input("", &sort, PaginationState::new(1, 5).unwrap());
		input.modes = StageModes {
			sort: StageMode::Delegated,
			..StageModes::local()
		};

		let view = run(&data, &input);
		// Sort delegated: input order kept, but still sliced locally
		assert_eq!(ids(&view), vec!["1", "2", "3", "4", "5"]);
		assert_eq!(view.total_pages, 3);
	}
}
