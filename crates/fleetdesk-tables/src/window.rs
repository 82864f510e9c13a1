//! Page window: the abbreviated page selector

use std::fmt;

use serde::Serialize;

/// One entry of the page selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "page", rename_all = "lowercase")]
pub enum PageToken {
	/// A clickable page number
	Page(usize),
	/// A gap standing for skipped pages
	Ellipsis,
}

impl PageToken {
	/// Returns the page number, or `None` for an ellipsis
	pub fn page(&self) -> Option<usize> {
		match self {
			Self::Page(n) => Some(*n),
			Self::Ellipsis => None,
		}
	}
}

impl fmt::Display for PageToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Page(n) => write!(f, "{}", n),
			Self::Ellipsis => f.write_str("…"),
		}
	}
}

/// Returns the page selector tokens around `current_page`
///
/// The window shows two pages on each side of the current one, the first
/// and last pages, and an ellipsis wherever pages are skipped. Page numbers
/// are strictly increasing and stay within `1..=total_pages`.
///
/// Callers only draw a pager when `total_pages > 1`.
///
/// # Examples
///
/// ```
/// use fleetdesk_tables::{page_window, PageToken::{Ellipsis, Page}};
///
/// assert_eq!(page_window(1, 4), vec![Page(1), Page(2), Page(3), Page(4)]);
/// assert_eq!(
///     page_window(5, 10),
///     vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis, Page(10)]
/// );
/// ```
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<PageToken> {
	let mut tokens = Vec::with_capacity(9);

	if current_page > 3 {
		tokens.push(PageToken::Page(1));
	}
	if current_page > 4 {
		tokens.push(PageToken::Ellipsis);
	}

	let first = current_page.saturating_sub(2).max(1);
	let last = total_pages.min(current_page.saturating_add(2));
	tokens.extend((first..=last).map(PageToken::Page));

	// `current < total - 3`, written without unsigned underflow
	if current_page.saturating_add(3) < total_pages {
		tokens.push(PageToken::Ellipsis);
	}
	if current_page.saturating_add(2) < total_pages {
		tokens.push(PageToken::Page(total_pages));
	}

	tokens
}
