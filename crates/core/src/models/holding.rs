use serde::{Deserialize, Serialize};

/// The `balance` half of a gain figure. The data source sends either a
/// number or a descriptive label; the calculator never looks at it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Balance {
    Amount(f64),
    Label(String),
}

impl Default for Balance {
    fn default() -> Self {
        Balance::Amount(0.0)
    }
}

impl std::fmt::Display for Balance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Balance::Amount(v) => write!(f, "{v}"),
            Balance::Label(s) => write!(f, "{s}"),
        }
    }
}

/// A precomputed short-term or long-term gain for a single holding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GainFigure {
    /// Already-realised quantity or placeholder text (opaque)
    #[serde(default)]
    pub balance: Balance,

    /// Signed amount: positive is a profit, negative a loss
    pub gain: f64,
}

impl GainFigure {
    pub fn new(balance: Balance, gain: f64) -> Self {
        Self { balance, gain }
    }

    /// A gain figure with a zero numeric balance.
    pub fn of(gain: f64) -> Self {
        Self {
            balance: Balance::default(),
            gain,
        }
    }

    /// The profit part of this figure (`gain` if strictly positive).
    #[must_use]
    pub fn profit(&self) -> Option<f64> {
        (self.gain > 0.0).then_some(self.gain)
    }

    /// The loss part of this figure as a positive number (`|gain|` if strictly negative).
    #[must_use]
    pub fn loss(&self) -> Option<f64> {
        (self.gain < 0.0).then(|| self.gain.abs())
    }
}

/// One row of the portfolio as delivered by the data source.
///
/// Field names on the wire follow the data source (`coin`, `coinName`,
/// `stcg`, ...); the Rust names describe what the values mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker / unique identifier within a snapshot (e.g. "BTC")
    #[serde(rename = "coin")]
    pub id: String,

    #[serde(rename = "coinName")]
    pub display_name: String,

    /// Logo URL
    #[serde(rename = "logo", default)]
    pub icon_ref: String,

    #[serde(rename = "currentPrice")]
    pub unit_price: f64,

    #[serde(rename = "totalHolding")]
    pub quantity_held: f64,

    #[serde(rename = "averageBuyPrice")]
    pub average_cost_basis: f64,

    #[serde(rename = "stcg")]
    pub short_term_gain: GainFigure,

    #[serde(rename = "ltcg")]
    pub long_term_gain: GainFigure,
}

impl Holding {
    /// Build a holding with the given gains and zeroed market data.
    /// Mostly useful for fixtures.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        short_term_gain: f64,
        long_term_gain: f64,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            icon_ref: String::new(),
            unit_price: 0.0,
            quantity_held: 0.0,
            average_cost_basis: 0.0,
            short_term_gain: GainFigure::of(short_term_gain),
            long_term_gain: GainFigure::of(long_term_gain),
        }
    }

    /// Set market data (price, quantity, average cost).
    pub fn with_position(mut self, unit_price: f64, quantity_held: f64, average_cost_basis: f64) -> Self {
        self.unit_price = unit_price;
        self.quantity_held = quantity_held;
        self.average_cost_basis = average_cost_basis;
        self
    }

    /// Total current value: quantity held × current unit price.
    #[must_use]
    pub fn current_value(&self) -> f64 {
        self.quantity_held * self.unit_price
    }
}

/// Drop repeated ids, keeping the first occurrence and the input order.
#[must_use]
pub fn dedup_by_id(holdings: &[Holding]) -> Vec<&Holding> {
    let mut seen = std::collections::HashSet::new();
    let mut unique = Vec::with_capacity(holdings.len());
    for holding in holdings {
        if seen.insert(holding.id.as_str()) {
            unique.push(holding);
        }
    }
    unique
}
