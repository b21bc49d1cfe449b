//! InferenceScenario - One assumed matchup and the defense it implies

use crate::types::ElementalComposition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which matchup a scenario assumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioLabel {
    /// Our element dominates the opponent's
    Favorable,
    /// The opponent's element dominates ours
    Unfavorable,
    /// The opponent shares our composition
    Neutral,
}

impl fmt::Display for ScenarioLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioLabel::Favorable => f.write_str("favorable"),
            ScenarioLabel::Unfavorable => f.write_str("unfavorable"),
            ScenarioLabel::Neutral => f.write_str("neutral"),
        }
    }
}

/// Estimated opponent stats under one matchup assumption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceScenario {
    pub label: ScenarioLabel,
    /// Opponent defense without their mount
    pub estimated_defense: i64,
    /// Opponent composition assumed by this scenario
    pub opponent: ElementalComposition,
    /// Elemental multiplier used for the estimate
    pub attribute_bonus: f64,
}

impl InferenceScenario {
    /// Label of the assumed opponent composition, e.g. `Fire 10`
    pub fn opponent_label(&self) -> String {
        self.opponent.to_string()
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        format!(
            "{}: defense ~{} vs {} (element x{:.2})",
            self.label,
            self.estimated_defense,
            self.opponent_label(),
            self.attribute_bonus
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Element;

    #[test]
    fn test_summary() {
        let scenario = InferenceScenario {
            label: ScenarioLabel::Favorable,
            estimated_defense: 1514,
            opponent: ElementalComposition::single(Element::Fire),
            attribute_bonus: 1.5,
        };
        assert_eq!(scenario.opponent_label(), "Fire 10");
        assert_eq!(scenario.summary(), "favorable: defense ~1514 vs Fire 10 (element x1.50)");
    }
}
