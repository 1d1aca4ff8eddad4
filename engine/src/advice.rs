//! Rule-based advice engine
//!
//! Maps market and weather snapshots to a priority-sorted list of farming
//! advice. Pure and synchronous: inputs are never mutated, there is no
//! hidden state, and the same inputs always produce the same output.

use chrono::{Datelike, Local, Month};
use rust_decimal::Decimal;

use crate::models::{
    Advice, AdviceCategory, AdvicePriority, AlertSeverity, PriceObservation, WeatherAlert,
    WeatherSnapshot,
};

/// Percent rise above which the sell recommendation fires (strict)
pub const SURGE_THRESHOLD_PERCENT: i64 = 15;
/// Percent fall below which the hold recommendation fires (strict)
pub const DROP_THRESHOLD_PERCENT: i64 = -10;
/// Temperature above which the extreme-heat advisory fires, Celsius (strict)
pub const EXTREME_HEAT_CELSIUS: i64 = 38;
/// Soil moisture below which the irrigation advisory fires, percent (strict)
pub const LOW_MOISTURE_PERCENT: i64 = 30;

/// Generate prioritized advice from market and weather snapshots
///
/// Rules are evaluated independently, so one commodity can trigger several
/// advices. Emission order is fixed: price rules (surge, drop, scarcity,
/// each in observation order), then weather rules (heat, soil moisture,
/// alerts in input order), then at most one seasonal advice for `month`.
/// The final list is stably sorted by priority, so equal priorities keep
/// that emission order.
pub fn generate_advice(
    prices: &[PriceObservation],
    weather: Option<&WeatherSnapshot>,
    month: Month,
) -> Vec<Advice> {
    let mut advices = Vec::new();

    for obs in prices {
        if let Some(pct) = obs.percent_change {
            if pct > Decimal::from(SURGE_THRESHOLD_PERCENT) {
                advices.push(surge_advice(obs, pct));
            }
        }
    }
    for obs in prices {
        if let Some(pct) = obs.percent_change {
            if pct < Decimal::from(DROP_THRESHOLD_PERCENT) {
                advices.push(drop_advice(obs, pct));
            }
        }
    }
    for obs in prices {
        if obs.is_scarce() {
            advices.push(scarcity_advice(obs));
        }
    }

    if let Some(weather) = weather {
        if weather.temperature_celsius > Decimal::from(EXTREME_HEAT_CELSIUS) {
            advices.push(heat_advice(weather.temperature_celsius));
        }
        if let Some(moisture) = weather.soil_moisture_percent {
            if moisture < Decimal::from(LOW_MOISTURE_PERCENT) {
                advices.push(moisture_advice(moisture));
            }
        }
        for alert in &weather.active_alerts {
            advices.push(alert_advice(alert));
        }
    }

    if let Some(seasonal) = seasonal_advice(month) {
        advices.push(seasonal);
    }

    tracing::debug!(advice_count = advices.len(), "advice rules evaluated");

    // Vec::sort_by_key is stable, so equal priorities keep emission order
    advices.sort_by_key(|a| a.priority.rank());
    advices
}

/// Generate advice for the current calendar month (local time)
pub fn generate_advice_now(
    prices: &[PriceObservation],
    weather: Option<&WeatherSnapshot>,
) -> Vec<Advice> {
    // chrono months are 1-based; try_from only fails outside 1..=12
    let month = Month::try_from(Local::now().month() as u8).unwrap_or(Month::January);
    generate_advice(prices, weather, month)
}

fn surge_advice(obs: &PriceObservation, pct: Decimal) -> Advice {
    Advice {
        id: format!("price-surge-{}", obs.commodity_id),
        category: AdviceCategory::Price,
        priority: AdvicePriority::High,
        title: format!("Good time to sell {}", obs.name),
        title_ur: format!("{} بیچنے کا اچھا وقت", obs.name_ur),
        description: format!(
            "The rate for {} has risen {}% over the last period. Selling now can lock in the gain.",
            obs.name, pct
        ),
        description_ur: format!(
            "{} کا ریٹ پچھلے عرصے میں {}% بڑھ گیا ہے۔ ابھی بیچنے سے اچھا منافع مل سکتا ہے۔",
            obs.name_ur, pct
        ),
        is_actionable: true,
        suggested_actions: vec![
            "Check market".to_string(),
            "Contact buyers".to_string(),
            "Transport to market".to_string(),
        ],
        suggested_actions_ur: vec![
            "منڈی کا ریٹ دیکھیں".to_string(),
            "خریداروں سے رابطہ کریں".to_string(),
            "مال منڈی پہنچائیں".to_string(),
        ],
    }
}

fn drop_advice(obs: &PriceObservation, pct: Decimal) -> Advice {
    let drop = -pct;
    Advice {
        id: format!("price-drop-{}", obs.commodity_id),
        category: AdviceCategory::Price,
        priority: AdvicePriority::Medium,
        title: format!("Price drop alert for {}", obs.name),
        title_ur: format!("{} کی قیمت میں کمی", obs.name_ur),
        description: format!(
            "The rate for {} is down {}% from the last period. Consider waiting before you sell.",
            obs.name, drop
        ),
        description_ur: format!(
            "{} کا ریٹ پچھلے عرصے سے {}% کم ہو گیا ہے۔ بیچنے سے پہلے انتظار کرنے کا سوچیں۔",
            obs.name_ur, drop
        ),
        is_actionable: true,
        suggested_actions: vec![
            "Wait for better prices".to_string(),
            "Check storage options".to_string(),
            "Monitor trends".to_string(),
        ],
        suggested_actions_ur: vec![
            "بہتر ریٹ کا انتظار کریں".to_string(),
            "ذخیرہ کرنے کا بندوبست دیکھیں".to_string(),
            "ریٹ پر نظر رکھیں".to_string(),
        ],
    }
}

fn scarcity_advice(obs: &PriceObservation) -> Advice {
    Advice {
        id: format!("scarcity-{}", obs.commodity_id),
        category: AdviceCategory::Price,
        priority: AdvicePriority::High,
        title: format!("High demand for {}", obs.name),
        title_ur: format!("{} کی مانگ زیادہ ہے", obs.name_ur),
        description: format!(
            "Demand for {} is high and supply is low. Rates are in your favour, sell as soon as you can.",
            obs.name
        ),
        description_ur: format!(
            "{} کی مانگ زیادہ اور رسد کم ہے۔ ریٹ آپ کے حق میں ہیں، جلد از جلد بیچیں۔",
            obs.name_ur
        ),
        is_actionable: true,
        suggested_actions: vec![
            "Sell immediately".to_string(),
            "Negotiate better prices".to_string(),
            "Contact multiple buyers".to_string(),
        ],
        suggested_actions_ur: vec![
            "فوری بیچیں".to_string(),
            "بہتر ریٹ کے لیے بات کریں".to_string(),
            "کئی خریداروں سے رابطہ کریں".to_string(),
        ],
    }
}

fn heat_advice(temperature: Decimal) -> Advice {
    Advice {
        id: "weather-extreme-heat".to_string(),
        category: AdviceCategory::Weather,
        priority: AdvicePriority::High,
        title: "Extreme heat warning".to_string(),
        title_ur: "شدید گرمی کی وارننگ".to_string(),
        description: format!(
            "Temperature has reached {} degrees Celsius. Crops are at risk of heat stress.",
            temperature
        ),
        description_ur: format!(
            "درجہ حرارت {} ڈگری سینٹی گریڈ تک پہنچ گیا ہے۔ فصلوں کو گرمی سے نقصان کا خطرہ ہے۔",
            temperature
        ),
        is_actionable: true,
        suggested_actions: vec![
            "Increase irrigation".to_string(),
            "Apply mulch".to_string(),
            "Provide shade".to_string(),
            "Spray water on leaves".to_string(),
        ],
        suggested_actions_ur: vec![
            "آبپاشی بڑھائیں".to_string(),
            "ملچ ڈالیں".to_string(),
            "سایہ فراہم کریں".to_string(),
            "پتوں پر پانی کا چھڑکاؤ کریں".to_string(),
        ],
    }
}

fn moisture_advice(moisture: Decimal) -> Advice {
    Advice {
        id: "weather-low-soil-moisture".to_string(),
        category: AdviceCategory::Weather,
        priority: AdvicePriority::High,
        title: "Low soil moisture".to_string(),
        title_ur: "زمین میں نمی کم ہے".to_string(),
        description: format!("Soil moisture is at {}%. Fields need irrigation soon.", moisture),
        description_ur: format!("زمین کی نمی {}% ہے۔ کھیتوں کو جلد پانی کی ضرورت ہے۔", moisture),
        is_actionable: true,
        suggested_actions: vec![
            "Start irrigation".to_string(),
            "Check irrigation system".to_string(),
            "Add organic matter".to_string(),
        ],
        suggested_actions_ur: vec![
            "آبپاشی شروع کریں".to_string(),
            "آبپاشی کا نظام چیک کریں".to_string(),
            "نامیاتی مادہ شامل کریں".to_string(),
        ],
    }
}

fn alert_advice(alert: &WeatherAlert) -> Advice {
    let priority = if alert.severity == AlertSeverity::High {
        AdvicePriority::High
    } else {
        AdvicePriority::Medium
    };
    let affected = alert.affected_commodities.join(", ");

    Advice {
        id: format!("weather-alert-{}", alert.id),
        category: AdviceCategory::Weather,
        priority,
        title: alert.title.clone(),
        title_ur: alert.title_ur.clone(),
        description: format!("{} Affected: {}", alert.description, affected),
        description_ur: format!("{} متاثرہ فصلیں: {}", alert.description_ur, affected),
        is_actionable: !alert.recommended_actions.is_empty(),
        suggested_actions: alert.recommended_actions.clone(),
        suggested_actions_ur: alert.recommended_actions_ur.clone(),
    }
}

/// Seasonal advice for the given month, if any
///
/// Only January, April and October carry a seasonal recommendation; every
/// other month yields none.
pub fn seasonal_advice(month: Month) -> Option<Advice> {
    match month {
        Month::January => Some(Advice {
            id: "seasonal-winter-care".to_string(),
            category: AdviceCategory::Seasonal,
            priority: AdvicePriority::Low,
            title: "Winter crop care".to_string(),
            title_ur: "سردیوں کی فصل کی دیکھ بھال".to_string(),
            description: "Protect wheat and other rabi crops from frost during the coldest weeks."
                .to_string(),
            description_ur: "سخت سردی کے دنوں میں گندم اور دیگر ربیع فصلوں کو کہرے سے بچائیں۔"
                .to_string(),
            is_actionable: false,
            suggested_actions: vec![],
            suggested_actions_ur: vec![],
        }),
        Month::April => Some(Advice {
            id: "seasonal-summer-prep".to_string(),
            category: AdviceCategory::Seasonal,
            priority: AdvicePriority::Low,
            title: "Prepare for summer crops".to_string(),
            title_ur: "گرمیوں کی فصل کی تیاری".to_string(),
            description: "Kharif sowing is close. Get your land and seed ready now.".to_string(),
            description_ur: "خریف کی بوائی قریب ہے۔ ابھی سے زمین اور بیج تیار کریں۔".to_string(),
            is_actionable: true,
            suggested_actions: vec![
                "Prepare land".to_string(),
                "Arrange seeds".to_string(),
                "Plan irrigation".to_string(),
            ],
            suggested_actions_ur: vec![
                "زمین تیار کریں".to_string(),
                "بیج کا بندوبست کریں".to_string(),
                "آبپاشی کی منصوبہ بندی کریں".to_string(),
            ],
        }),
        Month::October => Some(Advice {
            id: "seasonal-rabi-planting".to_string(),
            category: AdviceCategory::Seasonal,
            priority: AdvicePriority::Low,
            title: "Rabi planting season".to_string(),
            title_ur: "ربیع کی بوائی کا موسم".to_string(),
            description: "The rabi window is open. Sowing on time improves yield.".to_string(),
            description_ur: "ربیع کی بوائی کا وقت شروع ہے۔ وقت پر بوائی سے پیداوار بہتر ہوتی ہے۔"
                .to_string(),
            is_actionable: true,
            suggested_actions: vec![
                "Sow seeds".to_string(),
                "Apply base fertilizer".to_string(),
                "Prepare irrigation".to_string(),
            ],
            suggested_actions_ur: vec![
                "بیج بوئیں".to_string(),
                "بنیادی کھاد ڈالیں".to_string(),
                "آبپاشی تیار کریں".to_string(),
            ],
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn obs(id: &str, pct: Option<&str>) -> PriceObservation {
        PriceObservation {
            commodity_id: id.to_string(),
            name: id.to_string(),
            name_ur: id.to_string(),
            percent_change: pct.map(dec),
            supply_level: None,
            demand_level: None,
        }
    }

    #[test]
    fn test_surge_threshold_is_strict() {
        let at = generate_advice(&[obs("wheat", Some("15.0"))], None, Month::June);
        assert!(at.is_empty());

        let above = generate_advice(&[obs("wheat", Some("15.0001"))], None, Month::June);
        assert_eq!(above.len(), 1);
        assert_eq!(above[0].id, "price-surge-wheat");
        assert_eq!(above[0].priority, AdvicePriority::High);
    }

    #[test]
    fn test_drop_threshold_is_strict() {
        let at = generate_advice(&[obs("rice", Some("-10.0"))], None, Month::June);
        assert!(at.is_empty());

        let below = generate_advice(&[obs("rice", Some("-10.0001"))], None, Month::June);
        assert_eq!(below.len(), 1);
        assert_eq!(below[0].id, "price-drop-rice");
        assert_eq!(below[0].priority, AdvicePriority::Medium);
    }

    #[test]
    fn test_missing_percent_change_suppresses_price_rules() {
        let out = generate_advice(&[obs("wheat", None)], None, Month::June);
        assert!(out.is_empty());
    }

    #[test]
    fn test_seasonal_months() {
        assert!(seasonal_advice(Month::January).is_some());
        assert!(seasonal_advice(Month::April).is_some());
        assert!(seasonal_advice(Month::October).is_some());
        for month in [
            Month::February,
            Month::March,
            Month::May,
            Month::June,
            Month::July,
            Month::August,
            Month::September,
            Month::November,
            Month::December,
        ] {
            assert!(seasonal_advice(month).is_none(), "{:?}", month);
        }
    }

    #[test]
    fn test_winter_care_is_not_actionable() {
        let advice = seasonal_advice(Month::January).unwrap();
        assert!(!advice.is_actionable);
        assert!(advice.suggested_actions.is_empty());
        assert_eq!(advice.priority, AdvicePriority::Low);
    }

    #[test]
    fn test_moisture_description_interpolates_reading() {
        let weather = WeatherSnapshot {
            temperature_celsius: dec("25"),
            soil_moisture_percent: Some(dec("22")),
            active_alerts: vec![],
        };
        let out = generate_advice(&[], Some(&weather), Month::June);
        assert_eq!(out.len(), 1);
        assert!(out[0].description.contains("22%"));
        assert!(out[0].description_ur.contains("22%"));
    }
}
