//! Validation helpers for externally supplied snapshots
//!
//! The advice engine itself is total over well-typed input; these checks
//! are for callers ingesting price or weather data from untrusted feeds.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::advice::{EXTREME_HEAT_CELSIUS, LOW_MOISTURE_PERCENT};
use crate::models::{PriceObservation, WeatherSnapshot};

/// Errors raised when a snapshot fails validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("commodity id must be non-empty lowercase ASCII")]
    InvalidCommodityId,

    #[error("soil moisture must be between 0 and 100 percent, got {0}")]
    SoilMoistureOutOfRange(Decimal),

    #[error("percent change {0} is outside the plausible range")]
    ImplausiblePercentChange(Decimal),
}

/// Largest percent move a feed is allowed to report in one period
const MAX_PERCENT_CHANGE: i64 = 1000;

/// Validate a commodity identifier (non-empty lowercase ASCII, `_` allowed)
pub fn validate_commodity_id(id: &str) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::InvalidCommodityId);
    }
    if !id.chars().all(|c| c.is_ascii_lowercase() || c == '_') {
        return Err(ValidationError::InvalidCommodityId);
    }
    Ok(())
}

/// Validate one price observation from a feed
pub fn validate_price_observation(obs: &PriceObservation) -> Result<(), ValidationError> {
    validate_commodity_id(&obs.commodity_id)?;
    if let Some(pct) = obs.percent_change {
        if pct.abs() > Decimal::from(MAX_PERCENT_CHANGE) {
            return Err(ValidationError::ImplausiblePercentChange(pct));
        }
    }
    Ok(())
}

/// Validate a weather snapshot from a provider
pub fn validate_weather_snapshot(weather: &WeatherSnapshot) -> Result<(), ValidationError> {
    if let Some(moisture) = weather.soil_moisture_percent {
        if moisture < Decimal::ZERO || moisture > Decimal::from(100) {
            return Err(ValidationError::SoilMoistureOutOfRange(moisture));
        }
    }
    Ok(())
}

/// Check if a temperature would trigger the extreme-heat advisory
pub fn is_extreme_heat(temperature_celsius: Decimal) -> bool {
    temperature_celsius > Decimal::from(EXTREME_HEAT_CELSIUS)
}

/// Check if a soil moisture reading would trigger the irrigation advisory
pub fn is_low_moisture(soil_moisture_percent: Decimal) -> bool {
    soil_moisture_percent < Decimal::from(LOW_MOISTURE_PERCENT)
}
