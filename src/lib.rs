//! Lung Risk Screening Core
//!
//! Input-normalization-and-report-generation pipeline around a pre-trained
//! binary classifier: raw form answers → feature vector → (label,
//! probability) → report document + on-screen banner, with a per-session
//! append-only run history.
//!
//! The presentation shell (widgets, page rendering, charting, download
//! delivery) is an external collaborator; this crate owns everything
//! between the raw answers and the rendered bytes.
//!
//! ## Structure
//! - `features/` - fixed 14-field layout, schema, encoder
//! - `model/` - classifier adapter (ONNX), explicit decision threshold
//! - `report/` - document and banner rendering
//! - `history` - caller-owned session run log
//! - `pipeline` - consent gate and the submission flow

pub mod constants;
pub mod error;
pub mod features;
pub mod history;
pub mod model;
pub mod pipeline;
pub mod report;

// Re-export the surface the shell works with
pub use error::{ScreenError, ScreenResult};
pub use features::{encode, DisplayAnswer, FeatureSchema, FeatureVector, RawAnswer, RawValue};
pub use history::{HistoryEntry, SessionHistory};
pub use model::{Classifier, DecisionThreshold, OnnxClassifier, PredictionResult, RiskLabel};
pub use pipeline::{ScreeningOutcome, ScreeningPipeline, ScreeningRequest};
pub use report::{summary_banner, Emphasis, ReportDocument, SummaryBanner};
