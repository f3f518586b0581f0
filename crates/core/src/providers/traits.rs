use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::capital_gains::CapitalGainsSnapshot;
use crate::models::holding::Holding;

/// Source of the current portfolio: the holdings list and the realised
/// capital-gains snapshot for the period.
///
/// Both calls refer implicitly to "the current portfolio". Callers treat
/// the pair as one unit; a failure in either means nothing is loaded.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait PortfolioProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Ordered holdings, possibly with repeated ids.
    async fn fetch_holdings(&self) -> Result<Vec<Holding>, CoreError>;

    /// Already-realised gains for the period.
    async fn fetch_capital_gains(&self) -> Result<CapitalGainsSnapshot, CoreError>;
}
