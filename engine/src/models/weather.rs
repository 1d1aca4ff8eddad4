//! Weather data models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Severity of a weather alert
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
}

/// An active weather alert issued for the region
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherAlert {
    pub id: String,
    pub severity: AlertSeverity,
    pub title: String,
    pub title_ur: String,
    pub description: String,
    pub description_ur: String,
    /// Commodity ids affected by this alert, in issue order
    pub affected_commodities: Vec<String>,
    pub recommended_actions: Vec<String>,
    pub recommended_actions_ur: Vec<String>,
}

/// A weather snapshot at a point in time
///
/// Supplied by the weather provider; read-only input to the advice engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub temperature_celsius: Decimal,
    /// Soil moisture in [0, 100]; absent when no sensor reading is available
    pub soil_moisture_percent: Option<Decimal>,
    pub active_alerts: Vec<WeatherAlert>,
}
