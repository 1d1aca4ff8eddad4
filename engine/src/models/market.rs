//! Market rate models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Qualitative supply or demand level at a market
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MarketLevel {
    Low,
    Medium,
    High,
}

/// One commodity's market snapshot
///
/// Supplied by the price feed; immutable once handed to the advice engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceObservation {
    /// Stable commodity identifier, e.g. "wheat"
    pub commodity_id: String,
    pub name: String,
    pub name_ur: String,
    /// Percent change versus the prior period; absent when unknown
    pub percent_change: Option<Decimal>,
    pub supply_level: Option<MarketLevel>,
    pub demand_level: Option<MarketLevel>,
}

impl PriceObservation {
    /// True when demand outstrips supply (high demand, low supply)
    pub fn is_scarce(&self) -> bool {
        self.demand_level == Some(MarketLevel::High) && self.supply_level == Some(MarketLevel::Low)
    }
}
