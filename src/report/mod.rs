//! Report Module - Document And Banner Rendering
//!
//! Two presentations of the same verdict: a fixed-layout document the shell
//! offers for download, and banner data for the interactive view. Both are
//! rendered from the display answers computed once upstream, so they can
//! never drift apart.

pub mod banner;
pub mod document;

use serde::{Deserialize, Serialize};

use crate::model::RiskLabel;

// Re-export common types
pub use banner::{summary_banner, SummaryBanner, GAUGE_SPLIT};
pub use document::ReportDocument;

/// Styling intent for the verdict block; the shell picks actual widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Emphasis {
    /// HighRisk verdict, red-family styling
    High,
    /// LowRisk verdict, green-family styling
    Low,
}

impl Emphasis {
    /// Suggested color, a hint only
    pub fn color_hint(&self) -> &'static str {
        match self {
            Self::High => "#dc3545",
            Self::Low => "#28a745",
        }
    }
}

impl From<RiskLabel> for Emphasis {
    fn from(label: RiskLabel) -> Self {
        match label {
            RiskLabel::HighRisk => Self::High,
            RiskLabel::LowRisk => Self::Low,
        }
    }
}

/// Probability as a percentage with two decimal places
pub(crate) fn format_percent(probability: f32) -> String {
    format!("{:.2}%", probability * 100.0)
}
