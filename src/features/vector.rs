//! Feature Vector - Encoded Input For The Classifier
//!
//! **Versioned feature vector with schema stamp**
//!
//! Built once per submission by the encoder, immutable afterwards. Never
//! use raw `Vec<f32>` or `[f32; N]` for features, the stamp is what lets
//! the adapter catch encoder/model order disagreement.

use serde::{Deserialize, Serialize};

use super::layout::{self, FieldKind, FEATURE_COUNT};
use crate::error::{ScreenError, ScreenResult};

// ============================================================================
// VERSIONED FEATURE VECTOR
// ============================================================================

/// Encoded answers in the order of the schema they were built against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Feature layout version
    pub version: u8,
    /// CRC32 hash of the schema this vector conforms to
    pub layout_hash: u32,
    /// Feature values: age as-is, everything else 0/1
    pub values: [f32; FEATURE_COUNT],
}

impl FeatureVector {
    /// Construct with an explicit stamp (the encoder is the only producer
    /// in the normal pipeline)
    pub fn stamped(values: [f32; FEATURE_COUNT], version: u8, layout_hash: u32) -> Self {
        Self {
            version,
            layout_hash,
            values,
        }
    }

    /// Get value as array reference
    pub fn as_array(&self) -> &[f32; FEATURE_COUNT] {
        &self.values
    }

    /// Get values as slice
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Get value by index
    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    /// Get value by canonical field name
    pub fn get_by_name(&self, name: &str) -> Option<f32> {
        layout::feature_index(name).and_then(|i| self.get(i))
    }

    /// Is this vector stamped with the builtin canonical layout?
    pub fn matches_layout(&self) -> bool {
        self.version == layout::FEATURE_VERSION && self.layout_hash == layout::layout_hash()
    }

    /// Decode to the human-readable answers shown in the report and history
    ///
    /// Inverse of the categorical mapping: 1 → YES/MALE, 0 → NO/FEMALE,
    /// age echoed as an integer. Computed once per run so the document and
    /// the on-screen history always show identical strings.
    pub fn to_display(&self) -> ScreenResult<Vec<DisplayAnswer>> {
        if !self.matches_layout() {
            return Err(ScreenError::SchemaMismatch {
                expected_version: layout::FEATURE_VERSION,
                expected_hash: layout::layout_hash(),
                actual_version: self.version,
                actual_hash: self.layout_hash,
            });
        }

        let answers = layout::FEATURE_LAYOUT
            .iter()
            .zip(self.values.iter())
            .map(|(&name, &value)| {
                let rendered = match layout::field_kind(name) {
                    FieldKind::Age => format!("{}", value as i64),
                    FieldKind::Sex => {
                        if value >= 0.5 { "MALE" } else { "FEMALE" }.to_string()
                    }
                    FieldKind::YesNo => {
                        if value >= 0.5 { "YES" } else { "NO" }.to_string()
                    }
                };
                DisplayAnswer {
                    field: name.to_string(),
                    label: layout::display_label(name),
                    value: rendered,
                }
            })
            .collect();

        Ok(answers)
    }
}

// ============================================================================
// DISPLAY ANSWERS
// ============================================================================

/// One field rendered back into form vocabulary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayAnswer {
    /// Canonical field name ("YELLOW_FINGERS")
    pub field: String,
    /// Report label ("Yellow Fingers")
    pub label: String,
    /// "YES"/"NO"/"MALE"/"FEMALE" or the integer age
    pub value: String,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::layout::{layout_hash, FEATURE_VERSION};

    fn sample_values() -> [f32; FEATURE_COUNT] {
        let mut values = [0.0; FEATURE_COUNT];
        values[0] = 63.0; // AGE
        values[1] = 1.0; // GENDER = MALE
        values[2] = 1.0; // SMOKING = YES
        values
    }

    #[test]
    fn test_stamped_vector() {
        let vector = FeatureVector::stamped(sample_values(), FEATURE_VERSION, layout_hash());
        assert!(vector.matches_layout());
        assert_eq!(vector.get_by_name("AGE"), Some(63.0));
        assert_eq!(vector.get_by_name("SMOKING"), Some(1.0));
        assert_eq!(vector.get_by_name("nonexistent"), None);
    }

    #[test]
    fn test_to_display_decodes_categories() {
        let vector = FeatureVector::stamped(sample_values(), FEATURE_VERSION, layout_hash());
        let answers = vector.to_display().unwrap();

        assert_eq!(answers.len(), FEATURE_COUNT);
        assert_eq!(answers[0].label, "Age");
        assert_eq!(answers[0].value, "63");
        assert_eq!(answers[1].value, "MALE");
        assert_eq!(answers[2].value, "YES");
        assert_eq!(answers[3].value, "NO");

        // Raw 0/1 encoding must never leak into display values
        for answer in &answers[1..] {
            assert_ne!(answer.value, "0");
            assert_ne!(answer.value, "1");
        }
    }

    #[test]
    fn test_to_display_rejects_foreign_stamp() {
        let vector = FeatureVector::stamped(sample_values(), FEATURE_VERSION, 0xdeadbeef);
        let err = vector.to_display().unwrap_err();
        assert!(matches!(err, ScreenError::SchemaMismatch { .. }));
    }
}
