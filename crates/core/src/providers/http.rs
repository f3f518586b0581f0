use async_trait::async_trait;
use reqwest::Client;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::capital_gains::{CapitalGainsResponse, CapitalGainsSnapshot};
use crate::models::holding::Holding;
use crate::models::settings::Settings;
use super::traits::PortfolioProvider;

const PROVIDER_NAME: &str = "PortfolioApi";

/// JSON-over-HTTP portfolio API.
///
/// - `GET {base}/holdings` → array of holdings
/// - `GET {base}/capital-gains` → `{"capitalGains": {"stcg": .., "ltcg": ..}}`
pub struct HttpPortfolioProvider {
    client: Client,
    base_url: String,
}

impl HttpPortfolioProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, 30)
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_timeout(&settings.api_base_url, settings.request_timeout_secs)
    }

    #[cfg_attr(target_arch = "wasm32", allow(unused_variables))]
    fn with_timeout(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(timeout_secs));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Full URL for an endpoint path, e.g. `holdings`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, CoreError> {
        let url = self.endpoint(path);
        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Api {
                provider: PROVIDER_NAME.into(),
                message: format!("GET /{path} returned HTTP {status}"),
            });
        }

        resp.json().await.map_err(|e| CoreError::Api {
            provider: PROVIDER_NAME.into(),
            message: format!("Failed to parse /{path} response: {e}"),
        })
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PortfolioProvider for HttpPortfolioProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn fetch_holdings(&self) -> Result<Vec<Holding>, CoreError> {
        self.get_json("holdings").await
    }

    async fn fetch_capital_gains(&self) -> Result<CapitalGainsSnapshot, CoreError> {
        let resp: CapitalGainsResponse = self.get_json("capital-gains").await?;
        Ok(resp.capital_gains)
    }
}
