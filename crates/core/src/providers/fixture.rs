use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::capital_gains::{CapitalGainsResponse, CapitalGainsSnapshot};
use crate::models::holding::Holding;
use super::traits::PortfolioProvider;

/// Provider serving a fixed portfolio from memory. Used for offline demos
/// and for loading exported API responses.
#[derive(Debug, Clone)]
pub struct StaticPortfolioProvider {
    holdings: Vec<Holding>,
    capital_gains: CapitalGainsSnapshot,
}

impl StaticPortfolioProvider {
    pub fn new(holdings: Vec<Holding>, capital_gains: CapitalGainsSnapshot) -> Self {
        Self {
            holdings,
            capital_gains,
        }
    }

    /// Build from raw API payloads: a holdings array and a
    /// `{"capitalGains": ...}` document.
    pub fn from_json(holdings_json: &str, capital_gains_json: &str) -> Result<Self, CoreError> {
        let holdings: Vec<Holding> = serde_json::from_str(holdings_json)?;
        let resp: CapitalGainsResponse = serde_json::from_str(capital_gains_json)?;
        Ok(Self::new(holdings, resp.capital_gains))
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PortfolioProvider for StaticPortfolioProvider {
    fn name(&self) -> &str {
        "Static"
    }

    async fn fetch_holdings(&self) -> Result<Vec<Holding>, CoreError> {
        Ok(self.holdings.clone())
    }

    async fn fetch_capital_gains(&self) -> Result<CapitalGainsSnapshot, CoreError> {
        Ok(self.capital_gains)
    }
}
