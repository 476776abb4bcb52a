//! Decision Threshold
//!
//! The label is derived from the class-1 probability mass, never from a
//! second inference call. The 0.5 cut was implicit in the original
//! classifier library's default predict; it is explicit here.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DECISION_THRESHOLD;

// ============================================================================
// RISK LABEL
// ============================================================================

/// Binary classifier verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLabel {
    LowRisk,
    HighRisk,
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LowRisk => write!(f, "Low Risk"),
            Self::HighRisk => write!(f, "High Risk"),
        }
    }
}

// ============================================================================
// THRESHOLD
// ============================================================================

/// Probability cut for the HighRisk label
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionThreshold {
    value: f32,
}

impl DecisionThreshold {
    /// New threshold, clamped into [0, 1]
    pub fn new(value: f32) -> Self {
        Self {
            value: value.clamp(0.0, 1.0),
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// HighRisk iff probability >= threshold
    pub fn classify(&self, probability: f32) -> RiskLabel {
        if probability >= self.value {
            RiskLabel::HighRisk
        } else {
            RiskLabel::LowRisk
        }
    }
}

impl Default for DecisionThreshold {
    fn default() -> Self {
        Self::new(DEFAULT_DECISION_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold() {
        assert_eq!(DecisionThreshold::default().value(), 0.5);
    }

    #[test]
    fn test_boundary_is_high_risk() {
        let threshold = DecisionThreshold::default();
        assert_eq!(threshold.classify(0.5), RiskLabel::HighRisk);
        assert_eq!(threshold.classify(0.499_99), RiskLabel::LowRisk);
        assert_eq!(threshold.classify(1.0), RiskLabel::HighRisk);
        assert_eq!(threshold.classify(0.0), RiskLabel::LowRisk);
    }

    #[test]
    fn test_new_clamps() {
        assert_eq!(DecisionThreshold::new(1.5).value(), 1.0);
        assert_eq!(DecisionThreshold::new(-0.2).value(), 0.0);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(RiskLabel::HighRisk.to_string(), "High Risk");
        assert_eq!(RiskLabel::LowRisk.to_string(), "Low Risk");
    }
}
