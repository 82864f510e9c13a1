//! Pagination stage

use crate::error::{Result, TableError};
use crate::pipeline::StageMode;

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Current page and page size of a table
///
/// Both values are validated on construction: pages are 1-based and a page
/// holds at least one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
	current_page: usize,
	page_size: usize,
}

impl Default for PaginationState {
	fn default() -> Self {
		Self {
			current_page: 1,
			page_size: DEFAULT_PAGE_SIZE,
		}
	}
}

impl PaginationState {
	/// Creates a pagination state
	///
	/// # Errors
	/// Returns `InvalidPage` when `current_page` is 0 and `InvalidPageSize`
	/// when `page_size` is 0
	///
	/// # Examples
	///
	/// ```
	/// use fleetdesk_tables::PaginationState;
	///
	/// let state = PaginationState::new(2, 25).unwrap();
	/// assert_eq!(state.current_page(), 2);
	/// assert!(PaginationState::new(1, 0).is_err());
	/// ```
	pub fn new(current_page: usize, page_size: usize) -> Result<Self> {
		if page_size == 0 {
			return Err(TableError::InvalidPageSize(page_size));
		}
		if current_page == 0 {
			return Err(TableError::InvalidPage(current_page));
		}
		Ok(Self {
			current_page,
			page_size,
		})
	}

	/// First page with the given page size
	pub fn with_page_size(page_size: usize) -> Result<Self> {
		Self::new(1, page_size)
	}

	/// Current 1-based page number
	pub fn current_page(&self) -> usize {
		self.current_page
	}

	/// Rows per page
	pub fn page_size(&self) -> usize {
		self.page_size
	}

	/// Moves to another page
	///
	/// # Errors
	/// Returns `InvalidPage` when `page` is 0
	pub fn set_page(&mut self, page: usize) -> Result<()> {
		if page == 0 {
			return Err(TableError::InvalidPage(page));
		}
		self.current_page = page;
		Ok(())
	}

	/// Same page size, back on page 1
	pub fn first_page(self) -> Self {
		Self {
			current_page: 1,
			..self
		}
	}

	/// Index of the first row of the current page
	fn offset(&self) -> usize {
		(self.current_page - 1).saturating_mul(self.page_size)
	}
}

/// Number of pages needed for `total_count` rows, never less than one
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
	total_count.div_ceil(page_size.max(1)).max(1)
}

/// Resets the page to 1 when the current page ran past the data
///
/// Applies only to local, enabled pagination: when `current_page > 1` and
/// the page would be empty although `sorted_len` rows exist. Evaluated at the
/// start of every pass so a shrinking result set never strands the user on
/// an empty page.
pub fn clamp_page(
	sorted_len: usize,
	state: PaginationState,
	enabled: bool,
	mode: StageMode,
) -> PaginationState {
	let stranded = enabled
		&& mode == StageMode::Local
		&& state.current_page > 1
		&& sorted_len > 0
		&& state.offset() >= sorted_len;
	if stranded {
		tracing::debug!(
			page = state.current_page,
			rows = sorted_len,
			"current page is past the data; returning to page 1"
		);
		state.first_page()
	} else {
		state
	}
}

/// One page of rows plus the counts needed to draw a pager
#[derive(Debug, Clone)]
pub struct PageSlice<'a, R> {
	/// Rows on this page
	pub rows: Vec<&'a R>,
	/// Total number of pages, at least one
	pub total_pages: usize,
	/// Number of rows across all pages
	pub total_count: usize,
}

/// Slices the current page out of `records`
///
/// In local mode the total is `records.len()` and the rows of
/// `[(page - 1) * size, page * size)` are returned. In delegated mode the
/// caller already sliced: `records` is returned whole and the total comes
/// from `total_override`.
pub fn paginate<'a, R>(
	records: Vec<&'a R>,
	state: &PaginationState,
	mode: StageMode,
	total_override: Option<usize>,
) -> PageSlice<'a, R> {
	match mode {
		StageMode::Delegated => {
			let total_count = total_override.unwrap_or(0);
			PageSlice {
				rows: records,
				total_pages: total_pages(total_count, state.page_size),
				total_count,
			}
		}
		StageMode::Local => {
			let total_count = records.len();
			let rows = records
				.into_iter()
				.skip(state.offset())
				.take(state.page_size)
				.collect();
			PageSlice {
				rows,
				total_pages: total_pages(total_count, state.page_size),
				total_count,
			}
		}
	}
}

/// Position of the current page within the whole result set
///
/// Equivalent to the start/end index helpers of a classic paginator page,
/// used for "Showing 11-20 of 57".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
	/// 1-based index of the first row on the page, 0 when the page is empty
	pub start_index: usize,
	/// 1-based index of the last row on the page, 0 when the page is empty
	pub end_index: usize,
	/// Number of rows across all pages
	pub total_count: usize,
	/// Whether a previous page exists
	pub has_previous: bool,
	/// Whether a next page exists
	pub has_next: bool,
}

impl PageSummary {
	/// Summarizes a page of `page_len` rows
	///
	/// # Examples
	///
	/// ```
	/// use fleetdesk_tables::{PageSummary, PaginationState};
	///
	/// let state = PaginationState::new(2, 10).unwrap();
	/// let summary = PageSummary::new(&state, 10, 57, 6);
	/// assert_eq!((summary.start_index, summary.end_index), (11, 20));
	/// assert!(summary.has_previous && summary.has_next);
	/// ```
	pub fn new(
		state: &PaginationState,
		page_len: usize,
		total_count: usize,
		total_pages: usize,
	) -> Self {
		let (start_index, end_index) = if page_len == 0 {
			(0, 0)
		} else {
			let start = state.offset() + 1;
			(start, start + page_len - 1)
		};
		Self {
			start_index,
			end_index,
			total_count,
			has_previous: state.current_page > 1,
			has_next: state.current_page < total_pages,
		}
	}
}
