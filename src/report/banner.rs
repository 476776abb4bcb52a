//! Summary Banner - On-Screen Verdict Data
//!
//! Same label and probability as the document, shaped for an interactive
//! view: a 0-100 gauge with the low/high color split at the 50 mark.

use serde::{Deserialize, Serialize};

use super::{format_percent, Emphasis};
use crate::model::{PredictionResult, RiskLabel};

/// Gauge mark separating low from high styling
pub const GAUGE_SPLIT: f32 = 50.0;

/// Verdict data for embedding in the interactive view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryBanner {
    pub label: RiskLabel,
    pub probability: f32,
    /// "87.25%"
    pub percent_text: String,
    /// Probability scaled to the 0-100 gauge
    pub gauge_value: f32,
    pub gauge_split: f32,
    pub emphasis: Emphasis,
    /// "Prediction: High Risk"
    pub headline: String,
}

/// Build banner data from a verdict
pub fn summary_banner(result: &PredictionResult) -> SummaryBanner {
    SummaryBanner {
        label: result.label,
        probability: result.probability,
        percent_text: format_percent(result.probability),
        gauge_value: result.probability * 100.0,
        gauge_split: GAUGE_SPLIT,
        emphasis: Emphasis::from(result.label),
        headline: format!("Prediction: {}", result.label),
    }
}
