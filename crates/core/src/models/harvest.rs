use serde::{Deserialize, Serialize};

use super::capital_gains::{CapitalGainsCategory, CapitalGainsSnapshot};

/// Output of one harvesting evaluation. Derived fresh from the snapshot,
/// holdings and selection; never mutated afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HarvestResult {
    /// Realised capital gains before harvesting (snapshot only)
    pub pre_total: f64,

    /// Projected short-term profits after selling the selection
    pub st_profits: f64,
    /// Projected short-term losses after selling the selection
    pub st_losses: f64,
    /// Projected long-term profits after selling the selection
    pub lt_profits: f64,
    /// Projected long-term losses after selling the selection
    pub lt_losses: f64,

    /// Effective capital gains after harvesting
    pub post_total: f64,

    /// `true` only when harvesting strictly lowers the total
    pub show_savings: bool,

    /// `pre_total - post_total` when `show_savings`, otherwise 0
    pub savings: f64,
}

impl HarvestResult {
    /// The projected accumulators as a snapshot, for rendering the
    /// "after harvesting" card with the same shape as the "before" one.
    #[must_use]
    pub fn projected(&self) -> CapitalGainsSnapshot {
        CapitalGainsSnapshot::new(
            CapitalGainsCategory::new(self.st_profits, self.st_losses),
            CapitalGainsCategory::new(self.lt_profits, self.lt_losses),
        )
    }
}
