use std::cmp::Ordering;

use crate::models::holding::{dedup_by_id, Holding};
use crate::models::table::{SortState, TableView, ViewLimit};

/// Builds the display rows for the holdings table.
pub struct ProjectionService;

impl ProjectionService {
    pub fn new() -> Self {
        Self
    }

    /// Order of operations is fixed: de-duplicate by id (first occurrence wins),
    /// then sort by short-term gain, then truncate. The sort is stable, so equal
    /// gains keep their de-duplicated order, and `Unsorted` is exactly that order.
    ///
    /// Gains are compared with `f64::total_cmp`: NaN sorts after every finite
    /// value in ascending order (negative NaN before them).
    #[must_use]
    pub fn project<'a>(&self, holdings: &'a [Holding], sort: SortState, limit: ViewLimit) -> TableView<'a> {
        let mut rows = dedup_by_id(holdings);
        let total = rows.len();

        match sort {
            SortState::Unsorted => {}
            SortState::Ascending => rows.sort_by(|a, b| compare_short_term(a, b)),
            SortState::Descending => rows.sort_by(|a, b| compare_short_term(b, a)),
        }

        if let ViewLimit::Preview(n) = limit {
            rows.truncate(n);
        }

        let has_more = rows.len() < total;
        tracing::debug!(total, shown = rows.len(), %sort, "projected holdings table");

        TableView {
            rows,
            total,
            has_more,
        }
    }
}

impl Default for ProjectionService {
    fn default() -> Self {
        Self::new()
    }
}

fn compare_short_term(a: &Holding, b: &Holding) -> Ordering {
    a.short_term_gain.gain.total_cmp(&b.short_term_gain.gain)
}
