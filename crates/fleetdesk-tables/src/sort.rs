//! Sort stage and the header sort cycle

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::column::{find_sortable, BoxedColumn};
use crate::pipeline::StageMode;

/// Direction of the active sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	/// Ascending order
	Asc,
	/// Descending order
	Desc,
	/// Unsorted
	#[default]
	None,
}

impl SortDirection {
	/// Next direction when the active column header is clicked again
	pub fn cycle(self) -> Self {
		match self {
			Self::Asc => Self::Desc,
			Self::Desc => Self::None,
			Self::None => Self::Asc,
		}
	}

	/// Convert direction to its lowercase name
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Asc => "asc",
			Self::Desc => "desc",
			Self::None => "none",
		}
	}
}

impl fmt::Display for SortDirection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The active sort of a table
///
/// At most one column is active: activating a column replaces the key, so
/// there is nothing separate to clear.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
	/// Key of the active column
	pub key: Option<String>,
	/// Direction; `None` means unsorted whatever the key
	pub direction: SortDirection,
}

impl SortState {
	/// Creates a sort state
	pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
		Self {
			key: Some(key.into()),
			direction,
		}
	}

	/// Unsorted state
	pub fn unsorted() -> Self {
		Self::default()
	}

	/// Returns true when rows are actually reordered
	pub fn is_active(&self) -> bool {
		self.key.is_some() && self.direction != SortDirection::None
	}

	/// Applies a click on the header of column `key`
	///
	/// The active column cycles asc, desc, none, asc. Any other column
	/// becomes active in ascending order.
	pub fn toggle(&mut self, key: &str) {
		if self.key.as_deref() == Some(key) {
			self.direction = self.direction.cycle();
		} else {
			self.key = Some(key.to_string());
			self.direction = SortDirection::Asc;
		}
	}

	/// Returns the direction to draw on the header of column `key`
	pub fn indicator(&self, key: &str) -> Option<SortDirection> {
		match (&self.key, self.direction) {
			(_, SortDirection::None) => None,
			(Some(active), direction) if active == key => Some(direction),
			_ => None,
		}
	}
}

/// Orders records by the active sort key
///
/// Returns the input unchanged when the stage is delegated, when no
/// direction is set, or when the key names no sortable column. Columns with
/// a comparator use it (arguments swapped for descending); others use
/// [`CellValue::cmp_default`](crate::CellValue::cmp_default), reversed for
/// descending. The sort is stable.
pub fn sort<'a, R>(
	mut records: Vec<&'a R>,
	state: &SortState,
	columns: &[BoxedColumn<R>],
	mode: StageMode,
) -> Vec<&'a R> {
	if mode == StageMode::Delegated || state.direction == SortDirection::None {
		return records;
	}
	let Some(key) = state.key.as_deref() else {
		return records;
	};
	let Some(column) = find_sortable(columns, key) else {
		tracing::warn!(key, "sort key names no sortable column; leaving rows unsorted");
		return records;
	};

	let descending = state.direction == SortDirection::Desc;
	let ascending = |a: &R, b: &R| -> Ordering {
		column
			.compare(a, b)
			.unwrap_or_else(|| column.value(a).cmp_default(&column.value(b)))
	};

	if descending {
		records.sort_by(|a, b| ascending(*b, *a));
	} else {
		records.sort_by(|a, b| ascending(*a, *b));
	}
	records
}
