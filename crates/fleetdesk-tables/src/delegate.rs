//! Callbacks notified when the user drives a table

use std::fmt;
use std::sync::Arc;

use crate::pipeline::{StageMode, StageModes};
use crate::sort::SortDirection;

type SearchCallback = Arc<dyn Fn(&str) + Send + Sync>;
type SortCallback = Arc<dyn Fn(&str, SortDirection) + Send + Sync>;
type PageCallback = Arc<dyn Fn(usize) + Send + Sync>;
type RowCallback<R> = Arc<dyn Fn(&R, usize) + Send + Sync>;

/// Optional callbacks of a table
///
/// A search, sort or page callback usually means the caller performs that
/// stage itself (server-side). [`Delegates::implied_modes`] derives the
/// matching [`StageModes`], but a table keeps its modes explicit so a caller
/// can observe changes while still computing locally.
pub struct Delegates<R> {
	pub(crate) on_search: Option<SearchCallback>,
	pub(crate) on_sort: Option<SortCallback>,
	pub(crate) on_page_change: Option<PageCallback>,
	pub(crate) on_row_click: Option<RowCallback<R>>,
}

impl<R> Default for Delegates<R> {
	fn default() -> Self {
		Self {
			on_search: None,
			on_sort: None,
			on_page_change: None,
			on_row_click: None,
		}
	}
}

impl<R> Delegates<R> {
	/// No callbacks
	pub fn new() -> Self {
		Self::default()
	}

	/// Called with the raw term whenever the search term changes
	pub fn on_search<F>(mut self, f: F) -> Self
	where
		F: Fn(&str) + Send + Sync + 'static,
	{
		self.on_search = Some(Arc::new(f));
		self
	}

	/// Called with the new key and direction after a header click
	pub fn on_sort<F>(mut self, f: F) -> Self
	where
		F: Fn(&str, SortDirection) + Send + Sync + 'static,
	{
		self.on_sort = Some(Arc::new(f));
		self
	}

	/// Called with the new page number after a pager click
	pub fn on_page_change<F>(mut self, f: F) -> Self
	where
		F: Fn(usize) + Send + Sync + 'static,
	{
		self.on_page_change = Some(Arc::new(f));
		self
	}

	/// Called with the record and its index in the page on row click
	pub fn on_row_click<F>(mut self, f: F) -> Self
	where
		F: Fn(&R, usize) + Send + Sync + 'static,
	{
		self.on_row_click = Some(Arc::new(f));
		self
	}

	/// Modes implied by which stage callbacks are present
	pub fn implied_modes(&self) -> StageModes {
		let mode = |present: bool| {
			if present {
				StageMode::Delegated
			} else {
				StageMode::Local
			}
		};
		StageModes {
			search: mode(self.on_search.is_some()),
			sort: mode(self.on_sort.is_some()),
			pagination: mode(self.on_page_change.is_some()),
		}
	}

	pub(crate) fn notify_search(&self, term: &str) {
		if let Some(f) = &self.on_search {
			tracing::debug!(term, "notifying search delegate");
			f(term);
		}
	}

	pub(crate) fn notify_sort(&self, key: &str, direction: SortDirection) {
		if let Some(f) = &self.on_sort {
			tracing::debug!(key, %direction, "notifying sort delegate");
			f(key, direction);
		}
	}

	pub(crate) fn notify_page(&self, page: usize) {
		if let Some(f) = &self.on_page_change {
			tracing::debug!(page, "notifying page delegate");
			f(page);
		}
	}

	pub(crate) fn notify_row_click(&self, record: &R, index: usize) {
		if let Some(f) = &self.on_row_click {
			f(record, index);
		}
	}
}

impl<R> Clone for Delegates<R> {
	fn clone(&self) -> Self {
		Self {
			on_search: self.on_search.clone(),
			on_sort: self.on_sort.clone(),
			on_page_change: self.on_page_change.clone(),
			on_row_click: self.on_row_click.clone(),
		}
	}
}

impl<R> fmt::Debug for Delegates<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Delegates")
			.field("on_search", &self.on_search.is_some())
			.field("on_sort", &self.on_sort.is_some())
			.field("on_page_change", &self.on_page_change.is_some())
			.field("on_row_click", &self.on_row_click.is_some())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_implied_modes() {
		let none: Delegates<()> = Delegates::new();
		assert_eq!(none.implied_modes(), StageModes::local());

		let sort_only: Delegates<()> = Delegates::new().on_sort(|_, _| {});
		assert_eq!(
			sort_only.implied_modes(),
			StageModes {
				sort: StageMode::Delegated,
				..StageModes::local()
			}
		);

		let all: Delegates<()> = Delegates::new()
			.on_search(|_| {})
			.on_sort(|_, _| {})
			.on_page_change(|_| {})
			.on_row_click(|_, _| {});
		assert_eq!(all.implied_modes(), StageModes::delegated());
	}
}
