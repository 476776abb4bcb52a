//! Report Document - Fixed-Layout Rendering
//!
//! Title block, one row per field ("Field Label: value"), highlighted
//! verdict block, disclaimer footer. Output is deterministic bytes for
//! identical inputs (the caller supplies the timestamp); delivery is the
//! shell's concern, this module only produces the rendered content.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::{format_percent, Emphasis};
use crate::constants::REPORT_FILE_NAME;
use crate::features::DisplayAnswer;
use crate::model::PredictionResult;

const REPORT_TITLE: &str = "Lung Cancer Risk Prediction Report";
const RULE_WIDTH: usize = 60;
const LABEL_WIDTH: usize = 24;

const DISCLAIMER: &str = "Disclaimer: This report is generated using an AI model and \
should not be treated as medical advice.\nPlease consult a certified healthcare provider.";

/// A rendered report, ready for download
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub subject_name: String,
    pub emphasis: Emphasis,
    pub generated_at: DateTime<Utc>,
    text: String,
}

impl ReportDocument {
    /// Render the fixed layout from display answers and the verdict
    ///
    /// `answers` are the human-readable form computed once upstream; this
    /// function never re-derives them from the encoded vector.
    pub fn render(
        subject_name: &str,
        answers: &[DisplayAnswer],
        result: &PredictionResult,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let emphasis = Emphasis::from(result.label);
        let rule = "=".repeat(RULE_WIDTH);

        let mut text = String::new();
        text.push_str(&rule);
        text.push('\n');
        text.push_str(&format!("  {}\n", REPORT_TITLE));
        text.push_str(&rule);
        text.push_str("\n\n");

        text.push_str(&format!("Name: {}\n", subject_name));
        text.push_str(&format!(
            "Generated: {}\n\n",
            generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        ));

        for answer in answers {
            let label = format!("{}:", answer.label);
            text.push_str(&format!("{:<width$} {}\n", label, answer.value, width = LABEL_WIDTH));
        }

        let marker = match emphasis {
            Emphasis::High => "[HIGH RISK]",
            Emphasis::Low => "[LOW RISK]",
        };
        text.push_str(&format!("\n{}\n", marker));
        text.push_str(&format!("Prediction: {}\n", result.label));
        text.push_str(&format!(
            "Prediction Confidence: {}\n",
            format_percent(result.probability)
        ));

        text.push_str(&format!("\n{}\n", "-".repeat(RULE_WIDTH)));
        text.push_str(DISCLAIMER);
        text.push('\n');

        Self {
            subject_name: subject_name.to_string(),
            emphasis,
            generated_at,
            text,
        }
    }

    pub fn as_text(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Document content without the timestamp line, for comparing runs
    pub fn body_text(&self) -> String {
        self.text
            .lines()
            .filter(|line| !line.starts_with("Generated: "))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Write the document under its deterministic artifact name
    ///
    /// The shell decides what to do with the path (offer for download,
    /// discard, ...). Returns the written path.
    pub fn write_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        let path = dir.join(REPORT_FILE_NAME);
        let mut file = std::fs::File::create(&path)?;
        file.write_all(self.as_bytes())?;
        file.flush()?;
        log::info!("Report written to {}", path.display());
        Ok(path)
    }
}

// ============================================================================
// TESTS
// ============================================================================
