//! Demo data used by the front end demo mode and the test suites
//!
//! Mirrors the mock commodity and weather feeds the portal ships with.

use rust_decimal::Decimal;

use crate::models::{
    AlertSeverity, MarketLevel, PriceObservation, WeatherAlert, WeatherSnapshot,
};

/// Sample market snapshot: wheat surging, rice falling, cotton scarce
pub fn sample_prices() -> Vec<PriceObservation> {
    vec![
        PriceObservation {
            commodity_id: "wheat".to_string(),
            name: "Wheat".to_string(),
            name_ur: "گندم".to_string(),
            percent_change: Some(Decimal::new(182, 1)), // 18.2
            supply_level: Some(MarketLevel::Medium),
            demand_level: Some(MarketLevel::High),
        },
        PriceObservation {
            commodity_id: "rice".to_string(),
            name: "Rice".to_string(),
            name_ur: "چاول".to_string(),
            percent_change: Some(Decimal::new(-124, 1)), // -12.4
            supply_level: Some(MarketLevel::High),
            demand_level: Some(MarketLevel::Medium),
        },
        PriceObservation {
            commodity_id: "cotton".to_string(),
            name: "Cotton".to_string(),
            name_ur: "کپاس".to_string(),
            percent_change: Some(Decimal::new(31, 1)), // 3.1
            supply_level: Some(MarketLevel::Low),
            demand_level: Some(MarketLevel::High),
        },
        PriceObservation {
            commodity_id: "sugarcane".to_string(),
            name: "Sugarcane".to_string(),
            name_ur: "گنا".to_string(),
            percent_change: None,
            supply_level: Some(MarketLevel::Medium),
            demand_level: Some(MarketLevel::Medium),
        },
    ]
}

/// Sample weather snapshot: hot, dry soil, one active heatwave alert
pub fn sample_weather() -> WeatherSnapshot {
    WeatherSnapshot {
        temperature_celsius: Decimal::new(405, 1), // 40.5
        soil_moisture_percent: Some(Decimal::from(24)),
        active_alerts: vec![WeatherAlert {
            id: "heatwave-01".to_string(),
            severity: AlertSeverity::High,
            title: "Heatwave expected this week".to_string(),
            title_ur: "اس ہفتے شدید گرمی کی لہر متوقع".to_string(),
            description: "Temperatures above 42 degrees are forecast for the next three days."
                .to_string(),
            description_ur: "اگلے تین دن درجہ حرارت 42 ڈگری سے اوپر رہنے کی پیش گوئی ہے۔"
                .to_string(),
            affected_commodities: vec!["wheat".to_string(), "cotton".to_string()],
            recommended_actions: vec![
                "Irrigate in the evening".to_string(),
                "Delay transplanting".to_string(),
            ],
            recommended_actions_ur: vec![
                "شام کو آبپاشی کریں".to_string(),
                "پنیری لگانا مؤخر کریں".to_string(),
            ],
        }],
    }
}
