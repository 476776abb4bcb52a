//! Model Module - Classifier Adapter
//!
//! Wraps the opaque pre-trained artifact behind a typed predict+score
//! contract. Swap the backend by implementing `Classifier`; the threshold
//! stays explicit either way.

pub mod inference;
pub mod threshold;

// Re-export common types
pub use inference::{Classifier, ModelMetadata, OnnxClassifier, PredictionResult};
pub use threshold::{DecisionThreshold, RiskLabel};
