use serde::{Deserialize, Serialize};

use andes_shared::ADULT_AGE;

/// How adults of one purchase are placed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdultStrategy {
    /// Try a contiguous block in one row, then fall back to first-fit.
    #[default]
    Block,
    /// Each adult independently takes the first free seat of their class.
    FirstFit,
}

/// Order of the passenger list handed back to the caller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutputOrder {
    /// Purchase groups in first-seen order, adults before minors.
    #[default]
    Grouped,
    /// Same order as the incoming manifest.
    Manifest,
}

/// Tunables for one allocation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SeatingPolicy {
    pub adult_strategy: AdultStrategy,
    /// Largest row+column distance a minor may sit from a guardian. `None`
    /// always takes the closest free seat.
    pub minor_max_distance: Option<u32>,
    pub output_order: OutputOrder,
    pub adult_age: i32,
}

impl Default for SeatingPolicy {
    fn default() -> Self {
        Self {
            adult_strategy: AdultStrategy::Block,
            minor_max_distance: None,
            output_order: OutputOrder::Grouped,
            adult_age: ADULT_AGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_policy_fills_defaults() {
        let policy: SeatingPolicy = serde_json::from_str(r#"{"minor_max_distance": 2}"#).unwrap();

        assert_eq!(policy.minor_max_distance, Some(2));
        assert_eq!(policy.adult_strategy, AdultStrategy::Block);
        assert_eq!(policy.output_order, OutputOrder::Grouped);
        assert_eq!(policy.adult_age, 18);
    }

    #[test]
    fn test_strategy_names() {
        let strategy: AdultStrategy = serde_json::from_str("\"FIRST_FIT\"").unwrap();
        assert_eq!(strategy, AdultStrategy::FirstFit);
        assert_eq!(serde_json::to_string(&OutputOrder::Manifest).unwrap(), "\"MANIFEST\"");
    }
}
