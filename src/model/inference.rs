//! Inference Engine - ONNX Runtime Integration
//!
//! Thin typed wrapper around the pre-trained artifact. The adapter does no
//! training and no feature engineering: it enforces the schema contract and
//! surfaces (label, probability) from a single inference call.
//!
//! Loading happens once at process start. A load failure means the system
//! refuses to serve predictions; there is no heuristic fallback.

use std::path::Path;

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::{ScreenError, ScreenResult};
use crate::features::{FeatureSchema, FeatureVector, FEATURE_COUNT};
use super::threshold::{DecisionThreshold, RiskLabel};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Classifier verdict for one submission, immutable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub label: RiskLabel,
    /// Probability mass of the HighRisk class, 0.0 - 1.0
    pub probability: f32,
    /// Threshold the label was derived with
    pub threshold: f32,
    /// Microseconds
    pub inference_time_us: u64,
}

/// Model metadata captured at load time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_path: String,
    pub features: usize,
    pub threshold: f32,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

// ============================================================================
// CLASSIFIER TRAIT
// ============================================================================

/// The predict+score contract the pipeline depends on
///
/// `feature_order` is the order the artifact was fit on; the encoder must
/// query it and conform, never assume.
pub trait Classifier {
    fn feature_order(&self) -> &FeatureSchema;
    fn predict(&self, vector: &FeatureVector) -> ScreenResult<PredictionResult>;
}

// ============================================================================
// ONNX IMPLEMENTATION
// ============================================================================

/// Pre-trained binary classifier behind an ONNX Runtime session
#[derive(Debug)]
pub struct OnnxClassifier {
    session: Mutex<Session>,
    schema: FeatureSchema,
    threshold: DecisionThreshold,
    metadata: ModelMetadata,
}

impl OnnxClassifier {
    /// Load the artifact and its column sidecar, once at startup
    ///
    /// Any failure here is fatal: the caller must refuse to serve rather
    /// than degrade silently.
    pub fn load(model_path: &Path, columns_path: &Path) -> ScreenResult<Self> {
        let schema = FeatureSchema::load(columns_path)?;

        if !schema.matches_layout() {
            log::error!(
                "Column sidecar {} does not match the builtin feature layout",
                columns_path.display()
            );
            return Err(ScreenError::SchemaMismatch {
                expected_version: crate::features::FEATURE_VERSION,
                expected_hash: crate::features::layout::layout_hash(),
                actual_version: schema.version(),
                actual_hash: schema.hash(),
            });
        }

        log::info!(
            "{} v{}: loading ONNX model from {}",
            crate::constants::APP_NAME,
            crate::constants::APP_VERSION,
            model_path.display()
        );

        if !model_path.exists() {
            return Err(ScreenError::ModelUnavailable(format!(
                "Model not found: {}",
                model_path.display()
            )));
        }

        let session = Session::builder()
            .map_err(|e| {
                ScreenError::ModelUnavailable(format!("Failed to create session builder: {}", e))
            })?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| {
                ScreenError::ModelUnavailable(format!("Failed to set optimization: {}", e))
            })?
            .commit_from_file(model_path)
            .map_err(|e| ScreenError::ModelUnavailable(format!("Failed to load model: {}", e)))?;

        log::info!("ONNX model loaded successfully");

        let threshold = DecisionThreshold::default();
        let metadata = ModelMetadata {
            model_path: model_path.display().to_string(),
            features: schema.len(),
            threshold: threshold.value(),
            loaded_at: chrono::Utc::now(),
        };

        Ok(Self {
            session: Mutex::new(session),
            schema,
            threshold,
            metadata,
        })
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }
}

impl Classifier for OnnxClassifier {
    fn feature_order(&self) -> &FeatureSchema {
        &self.schema
    }

    /// One inference call yields both label and probability, so the two can
    /// never disagree.
    fn predict(&self, vector: &FeatureVector) -> ScreenResult<PredictionResult> {
        self.schema.validate_vector(vector)?;

        let start_time = std::time::Instant::now();

        let input_array = Array2::<f32>::from_shape_vec(
            (1, FEATURE_COUNT),
            vector.as_slice().to_vec(),
        )
        .map_err(|e| ScreenError::ModelUnavailable(format!("Array error: {}", e)))?;

        let mut session = self.session.lock();

        // sklearn-converted binary classifiers expose a probability tensor;
        // prefer it by name, otherwise take the last declared output
        let output_name = session
            .outputs()
            .iter()
            .find(|o| o.name().contains("probab"))
            .or_else(|| session.outputs().last())
            .map(|o| o.name().to_string())
            .ok_or_else(|| ScreenError::ModelUnavailable("No output defined".to_string()))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| ScreenError::ModelUnavailable(format!("Tensor error: {}", e)))?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| ScreenError::ModelUnavailable(format!("Inference failed: {}", e)))?;

        let output = outputs
            .get(&output_name)
            .ok_or_else(|| ScreenError::ModelUnavailable("No output".to_string()))?;

        let output_tensor = output
            .try_extract_tensor::<f32>()
            .map_err(|e| ScreenError::ModelUnavailable(format!("Extract error: {}", e)))?;

        let data = output_tensor.1;

        // Batch of one: the row is [p_class0, p_class1]. A single-value
        // output is already the class-1 mass.
        let probability = match data.len() {
            0 => {
                return Err(ScreenError::ModelUnavailable(
                    "Empty probability output".to_string(),
                ))
            }
            1 => data[0],
            n => data[n - 1],
        }
        .clamp(0.0, 1.0);

        let inference_time = start_time.elapsed().as_micros() as u64;

        Ok(PredictionResult {
            label: self.threshold.classify(probability),
            probability,
            threshold: self.threshold.value(),
            inference_time_us: inference_time,
        })
    }
}

// ============================================================================
// TEST SUPPORT
// ============================================================================

/// Deterministic stand-in classifier for tests that have no ONNX artifact.
#[cfg(test)]
pub(crate) mod stub {
    use super::*;
    use crate::features::layout::{field_kind, FieldKind};

    pub struct StubClassifier {
        schema: FeatureSchema,
        threshold: DecisionThreshold,
    }

    impl StubClassifier {
        pub fn new() -> Self {
            Self {
                schema: FeatureSchema::canonical(),
                threshold: DecisionThreshold::default(),
            }
        }
    }

    impl Classifier for StubClassifier {
        fn feature_order(&self) -> &FeatureSchema {
            &self.schema
        }

        fn predict(&self, vector: &FeatureVector) -> ScreenResult<PredictionResult> {
            self.schema.validate_vector(vector)?;

            // Fraction of affirmative binary answers, age excluded
            let (mut flags, mut total) = (0.0f32, 0.0f32);
            for (name, value) in self.schema.names().iter().zip(vector.as_slice()) {
                if field_kind(name) != FieldKind::Age {
                    flags += value;
                    total += 1.0;
                }
            }
            let probability = if total > 0.0 { flags / total } else { 0.0 };

            Ok(PredictionResult {
                label: self.threshold.classify(probability),
                probability,
                threshold: self.threshold.value(),
                inference_time_us: 0,
            })
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
