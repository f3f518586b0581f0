use serde::{Deserialize, Serialize};

/// Profits and losses within one tax category. Both fields are non-negative;
/// losses are stored as positive magnitudes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CapitalGainsCategory {
    pub profits: f64,
    pub losses: f64,
}

impl CapitalGainsCategory {
    pub fn new(profits: f64, losses: f64) -> Self {
        Self { profits, losses }
    }

    /// Net capital gains: `profits - losses`. May be negative.
    #[must_use]
    pub fn net(&self) -> f64 {
        self.profits - self.losses
    }
}

/// Already-realised gains for the period, split short-term / long-term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CapitalGainsSnapshot {
    #[serde(rename = "stcg")]
    pub short_term: CapitalGainsCategory,

    #[serde(rename = "ltcg")]
    pub long_term: CapitalGainsCategory,
}

impl CapitalGainsSnapshot {
    pub fn new(short_term: CapitalGainsCategory, long_term: CapitalGainsCategory) -> Self {
        Self {
            short_term,
            long_term,
        }
    }

    /// Sum of both categories' net gains.
    #[must_use]
    pub fn realised_total(&self) -> f64 {
        self.short_term.net() + self.long_term.net()
    }
}

/// Envelope the data source wraps the snapshot in: `{"capitalGains": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapitalGainsResponse {
    #[serde(rename = "capitalGains")]
    pub capital_gains: CapitalGainsSnapshot,
}
