//! WebAssembly module for the AgriRate portal
//!
//! Provides client-side computation for:
//! - Advice generation from market and weather snapshots
//! - KhetBot canned responses
//! - Demo data for the offline preview mode

use chrono::Month;
use wasm_bindgen::prelude::*;

use agrirate_engine::advice::generate_advice;
use agrirate_engine::chatbot;
use agrirate_engine::fixtures;
use agrirate_engine::models::{PriceObservation, WeatherSnapshot};
use agrirate_engine::types::Language;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {}

fn parse_month(month: u32) -> Result<Month, String> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or_else(|| "month must be between 1 and 12".to_string())
}

// JsValue cannot be built off-wasm, so the fallible paths stay in plain
// Rust and the bindgen wrappers only translate errors at the boundary.
fn advice_json(prices_json: &str, weather_json: &str, month: u32) -> Result<String, String> {
    let prices: Vec<PriceObservation> =
        serde_json::from_str(prices_json).map_err(|e| format!("Invalid prices JSON: {}", e))?;

    let weather: Option<WeatherSnapshot> =
        if weather_json.trim().is_empty() || weather_json.trim() == "null" {
            None
        } else {
            Some(
                serde_json::from_str(weather_json)
                    .map_err(|e| format!("Invalid weather JSON: {}", e))?,
            )
        };

    let month = parse_month(month)?;
    let advice = generate_advice(&prices, weather.as_ref(), month);
    serde_json::to_string(&advice).map_err(|e| e.to_string())
}

fn demo_json(month: u32) -> Result<String, String> {
    let month = parse_month(month)?;
    let advice = generate_advice(
        &fixtures::sample_prices(),
        Some(&fixtures::sample_weather()),
        month,
    );
    serde_json::to_string(&advice).map_err(|e| e.to_string())
}

/// Generate advice from JSON-encoded snapshots
///
/// `weather_json` may be empty or `"null"` when no weather data is loaded.
/// `month` is 1-based (1 = January), matching JavaScript's
/// `Date.getMonth() + 1`. Returns the advice list as a JSON string.
#[wasm_bindgen]
pub fn generate_advice_json(
    prices_json: &str,
    weather_json: &str,
    month: u32,
) -> Result<String, JsValue> {
    advice_json(prices_json, weather_json, month).map_err(|e| JsValue::from_str(&e))
}

/// KhetBot reply for a free-text question
///
/// Unknown language codes fall back to English.
#[wasm_bindgen]
pub fn chatbot_reply(query: &str, language_code: &str) -> String {
    let language = Language::from_code(language_code).unwrap_or_default();
    chatbot::chatbot_reply(query, language)
}

/// Advice for the bundled demo snapshots (offline preview mode)
#[wasm_bindgen]
pub fn demo_advice_json(month: u32) -> Result<String, JsValue> {
    demo_json(month).map_err(|e| JsValue::from_str(&e))
}
