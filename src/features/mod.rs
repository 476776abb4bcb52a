//! Features Module - Schema And Encoding
//!
//! Converts raw form answers into the exact encoded vector the classifier
//! expects. The layout file is the single source of truth for field order;
//! the adapter's schema (loaded from the model's column sidecar) must hash-
//! match it or nothing runs.

pub mod encoder;
pub mod layout;
pub mod schema;
pub mod vector;


// Re-export common types
pub use encoder::{encode, RawAnswer, RawValue};
pub use layout::{FieldKind, FEATURE_COUNT, FEATURE_VERSION};
pub use schema::FeatureSchema;
pub use vector::{DisplayAnswer, FeatureVector};
