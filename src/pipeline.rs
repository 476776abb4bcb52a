//! Screening Pipeline - One Submission End To End
//!
//! consent gate → encode → predict → format → append to history.
//! Fully synchronous; one submission is processed before the next is
//! accepted. The classifier is shared read-only across sessions, each
//! session owns its history.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ScreenError, ScreenResult};
use crate::features::{encode, RawAnswer};
use crate::history::{HistoryEntry, SessionHistory};
use crate::model::{Classifier, PredictionResult};
use crate::report::{summary_banner, ReportDocument, SummaryBanner};

/// One form submission from the shell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningRequest {
    pub subject_name: String,
    /// The explicit acknowledgment gate; nothing runs without it
    pub consent: bool,
    pub answers: Vec<RawAnswer>,
}

/// Everything the shell renders for one run
#[derive(Debug, Clone)]
pub struct ScreeningOutcome {
    pub result: PredictionResult,
    pub banner: SummaryBanner,
    pub document: ReportDocument,
}

/// The pipeline around a loaded classifier
pub struct ScreeningPipeline {
    classifier: Arc<dyn Classifier + Send + Sync>,
}

impl ScreeningPipeline {
    pub fn new(classifier: Arc<dyn Classifier + Send + Sync>) -> Self {
        Self { classifier }
    }

    /// Process one submission against the given session's history
    pub fn submit(
        &self,
        request: &ScreeningRequest,
        history: &mut SessionHistory,
    ) -> ScreenResult<ScreeningOutcome> {
        self.submit_at(request, history, Utc::now())
    }

    /// Same as `submit` with an explicit clock
    pub fn submit_at(
        &self,
        request: &ScreeningRequest,
        history: &mut SessionHistory,
        now: DateTime<Utc>,
    ) -> ScreenResult<ScreeningOutcome> {
        if !request.consent {
            log::warn!("Submission without consent acknowledgment rejected");
            return Err(ScreenError::ConsentRequired);
        }

        let vector = encode(&request.answers, self.classifier.feature_order())?;
        let result = self.classifier.predict(&vector)?;

        // Computed once; document and history share these exact strings
        let answers = vector.to_display()?;

        let document = ReportDocument::render(&request.subject_name, &answers, &result, now);
        let banner = summary_banner(&result);

        history.append(HistoryEntry {
            run: history.next_run(),
            subject_name: request.subject_name.clone(),
            answers,
            result: result.clone(),
            recorded_at: now,
        });

        log::info!(
            "Run #{}: {} ({})",
            history.len(),
            result.label,
            banner.percent_text
        );

        Ok(ScreeningOutcome {
            result,
            banner,
            document,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
