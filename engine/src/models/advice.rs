//! Advice models produced by the rule engine

use serde::{Deserialize, Serialize};

/// Category of an advice item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AdviceCategory {
    Price,
    Weather,
    Seasonal,
}

/// Urgency classification used to order advice output
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AdvicePriority {
    High,
    Medium,
    Low,
}

impl AdvicePriority {
    /// Sort rank: high before medium before low
    pub fn rank(&self) -> u8 {
        match self {
            AdvicePriority::High => 0,
            AdvicePriority::Medium => 1,
            AdvicePriority::Low => 2,
        }
    }
}

impl std::fmt::Display for AdvicePriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdvicePriority::High => write!(f, "High"),
            AdvicePriority::Medium => write!(f, "Medium"),
            AdvicePriority::Low => write!(f, "Low"),
        }
    }
}

/// A single structured recommendation
///
/// `id` is deterministic for a given trigger, so repeated calls with the
/// same inputs produce identical output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Advice {
    pub id: String,
    pub category: AdviceCategory,
    pub priority: AdvicePriority,
    pub title: String,
    pub title_ur: String,
    pub description: String,
    pub description_ur: String,
    pub is_actionable: bool,
    /// Empty when the advice is not actionable
    pub suggested_actions: Vec<String>,
    pub suggested_actions_ur: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_rank_order() {
        assert!(AdvicePriority::High.rank() < AdvicePriority::Medium.rank());
        assert!(AdvicePriority::Medium.rank() < AdvicePriority::Low.rank());
    }

    #[test]
    fn test_priority_display() {
        assert_eq!(AdvicePriority::High.to_string(), "High");
        assert_eq!(AdvicePriority::Low.to_string(), "Low");
    }
}
