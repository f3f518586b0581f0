use serde::{Deserialize, Serialize};

use super::holding::Holding;

/// Sort state of the holdings table's short-term gain column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortState {
    /// De-duplicated input order
    #[default]
    Unsorted,
    /// Smallest short-term gain first
    Ascending,
    /// Largest short-term gain first
    Descending,
}

impl SortState {
    /// Next state when the column header is activated:
    /// Unsorted → Ascending → Descending → Unsorted.
    #[must_use]
    pub fn advance(self) -> Self {
        match self {
            SortState::Unsorted => SortState::Ascending,
            SortState::Ascending => SortState::Descending,
            SortState::Descending => SortState::Unsorted,
        }
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self != SortState::Unsorted
    }
}

impl std::fmt::Display for SortState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortState::Unsorted => write!(f, "Unsorted"),
            SortState::Ascending => write!(f, "Ascending"),
            SortState::Descending => write!(f, "Descending"),
        }
    }
}

/// How many rows the table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewLimit {
    /// Only the first `n` rows
    Preview(usize),
    /// Every de-duplicated row
    All,
}

/// Rows ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<'a> {
    pub rows: Vec<&'a Holding>,

    /// Number of de-duplicated holdings before truncation
    pub total: usize,

    /// `true` when rows were cut off by the preview limit
    pub has_more: bool,
}
