//! Search stage: substring filtering across columns

use crate::column::BoxedColumn;
use crate::pipeline::StageMode;

/// Keeps the records matching `term` in at least one searchable column
///
/// Matching is a case-insensitive substring test against the stringified
/// cell value, after trimming the term. Null values never match. The result
/// preserves the input order.
///
/// A blank term, or [`StageMode::Delegated`], returns the input unchanged: a
/// delegated search has already been applied by the caller.
pub fn filter<'a, R>(
	records: Vec<&'a R>,
	columns: &[BoxedColumn<R>],
	term: &str,
	mode: StageMode,
) -> Vec<&'a R> {
	let needle = term.trim().to_lowercase();
	if mode == StageMode::Delegated || needle.is_empty() {
		return records;
	}

	let searched: Vec<_> = columns.iter().filter(|c| c.searchable()).collect();
	records
		.into_iter()
		.filter(|record| {
			searched.iter().any(|column| {
				column
					.value(record)
					.search_text()
					.is_some_and(|text| text.contains(&needle))
			})
		})
		.collect()
}
