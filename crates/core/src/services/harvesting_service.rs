use crate::models::capital_gains::CapitalGainsSnapshot;
use crate::models::harvest::HarvestResult;
use crate::models::holding::{dedup_by_id, GainFigure, Holding};
use crate::models::selection::SelectionSet;

/// Projects realised gains after hypothetically selling the selected holdings.
pub struct HarvestingService;

impl HarvestingService {
    pub fn new() -> Self {
        Self
    }

    /// Project realised gains after hypothetically selling every selected holding.
    ///
    /// 1. `pre_total` = net short-term + net long-term of the snapshot alone.
    /// 2. Projected accumulators start from the snapshot's profits/losses.
    /// 3. Each selected holding (first occurrence per id, input order) adds its
    ///    positive gains to profits and the magnitude of its negative gains to
    ///    losses, per category. A gain of exactly zero is neutral and touches
    ///    neither accumulator.
    /// 4. Savings are shown only when the post total is strictly lower.
    ///
    /// Total: a missing snapshot yields the all-zero result, and an empty
    /// portfolio or selection just returns the snapshot figures.
    #[must_use]
    pub fn compute(
        &self,
        snapshot: Option<&CapitalGainsSnapshot>,
        holdings: &[Holding],
        selection: &SelectionSet,
    ) -> HarvestResult {
        let Some(snapshot) = snapshot else {
            return HarvestResult::default();
        };

        let pre_total = snapshot.realised_total();

        let mut projected = *snapshot;
        for holding in dedup_by_id(holdings) {
            if !selection.contains(&holding.id) {
                continue;
            }
            accumulate(&mut projected.short_term.profits, &mut projected.short_term.losses, &holding.short_term_gain);
            accumulate(&mut projected.long_term.profits, &mut projected.long_term.losses, &holding.long_term_gain);
        }

        let post_total = projected.realised_total();
        let show_savings = pre_total > post_total;
        let savings = if show_savings { pre_total - post_total } else { 0.0 };

        HarvestResult {
            pre_total,
            st_profits: projected.short_term.profits,
            st_losses: projected.short_term.losses,
            lt_profits: projected.long_term.profits,
            lt_losses: projected.long_term.losses,
            post_total,
            show_savings,
            savings,
        }
    }
}

impl Default for HarvestingService {
    fn default() -> Self {
        Self::new()
    }
}

fn accumulate(profits: &mut f64, losses: &mut f64, figure: &GainFigure) {
    if let Some(p) = figure.profit() {
        *profits += p;
    }
    if let Some(l) = figure.loss() {
        *losses += l;
    }
}
