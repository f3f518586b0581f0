use super::capital_gains::CapitalGainsSnapshot;
use super::harvest::HarvestResult;
use super::table::{SortState, TableView};

/// Figures for one capital-gains card ("Pre Harvesting" / "After Harvesting").
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GainsCard {
    /// Per-category profits and losses; `net()` gives the card's net row
    pub gains: CapitalGainsSnapshot,

    /// Realised total on the pre card, effective total on the post card
    pub total: f64,
}

/// Everything the presentation layer needs for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct HarvestingDashboard<'a> {
    pub pre: GainsCard,
    pub post: GainsCard,

    /// Raw calculator output the cards were built from
    pub result: HarvestResult,

    /// `Some(amount)` only when harvesting strictly lowers the total
    pub savings: Option<f64>,

    pub table: TableView<'a>,
    pub sort: SortState,

    /// Header checkbox state: non-empty portfolio with every id selected
    pub all_selected: bool,
}

/// Message shown when either retrieval fails.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load data. Please try again later.";

/// Message shown when loading finished without a gains snapshot.
pub const GAINS_MISSING_MESSAGE: &str = "Unable to load capital gains data";

/// Data-loading lifecycle of a harvesting session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A refresh is in flight
    Loading,
    /// Holdings and gains snapshot are both loaded
    Ready,
    /// The last refresh failed; the message is user-facing
    Failed(String),
}

impl LoadState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
