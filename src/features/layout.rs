//! Feature Layout - Centralized Feature Definition
//!
//! **CRITICAL: This file controls the feature schema**
//!
//! ## Rules (NEVER break these):
//! 1. Add field → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove field → increment FEATURE_VERSION
//!
//! The order below is the order the classifier artifact was fit on. The
//! adapter re-checks it against the column sidecar at load time; a mismatch
//! is a fatal configuration error, never a per-request condition.

use crc32fast::Hasher;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
/// MUST be incremented when layout changes
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Field names in exact order they appear in the vector
/// This is the SINGLE SOURCE OF TRUTH for feature layout
pub const FEATURE_LAYOUT: &[&str] = &[
    "AGE",                   // 0: integer, 1-100
    "GENDER",                // 1: MALE=1 / FEMALE=0
    "SMOKING",               // 2: YES=1 / NO=0
    "YELLOW_FINGERS",        // 3
    "ANXIETY",               // 4
    "CHRONIC_DISEASE",       // 5
    "FATIGUE",               // 6
    "ALLERGY",               // 7
    "WHEEZING",              // 8
    "ALCOHOL_CONSUMING",     // 9
    "COUGHING",              // 10
    "SHORTNESS_OF_BREATH",   // 11
    "SWALLOWING_DIFFICULTY", // 12
    "CHEST_PAIN",            // 13
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 14;

// ============================================================================
// FIELD KINDS
// ============================================================================

/// How a field encodes and decodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Integer in [AGE_MIN, AGE_MAX], passed through unchanged
    Age,
    /// MALE=1 / FEMALE=0
    Sex,
    /// YES=1 / NO=0
    YesNo,
}

/// Kind of a field by name (total over the layout; unknown names are YesNo
/// but never reach encoding, the encoder rejects them first)
pub fn field_kind(name: &str) -> FieldKind {
    match name {
        "AGE" => FieldKind::Age,
        "GENDER" => FieldKind::Sex,
        _ => FieldKind::YesNo,
    }
}

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// CRC32 over a feature-name list, version byte included
///
/// Used both for the builtin layout and for column sidecars loaded next to
/// the model artifact, so the two are directly comparable.
pub fn hash_names<S: AsRef<str>>(names: &[S]) -> u32 {
    let mut hasher = Hasher::new();

    hasher.update(&[FEATURE_VERSION]);

    for name in names {
        hasher.update(name.as_ref().as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

static LAYOUT_HASH: Lazy<u32> = Lazy::new(|| hash_names(FEATURE_LAYOUT));

/// Hash of the builtin layout (cached, inputs are const)
pub fn layout_hash() -> u32 {
    *LAYOUT_HASH
}

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

/// Get field index by name (O(n) but fields are few)
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

/// Get field name by index
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

/// Human-readable label for a field name
///
/// "YELLOW_FINGERS" → "Yellow Fingers", matching the report layout.
pub fn display_label(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_count() {
        assert_eq!(FEATURE_COUNT, 14);
        assert_eq!(FEATURE_LAYOUT.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_layout_hash_consistency() {
        assert_eq!(hash_names(FEATURE_LAYOUT), layout_hash());
        assert_ne!(layout_hash(), 0);
    }

    #[test]
    fn test_hash_is_order_sensitive() {
        let mut reversed: Vec<&str> = FEATURE_LAYOUT.to_vec();
        reversed.reverse();
        assert_ne!(hash_names(&reversed), layout_hash());
    }

    #[test]
    fn test_feature_index() {
        assert_eq!(feature_index("AGE"), Some(0));
        assert_eq!(feature_index("GENDER"), Some(1));
        assert_eq!(feature_index("CHEST_PAIN"), Some(13));
        assert_eq!(feature_index("nonexistent"), None);
    }

    #[test]
    fn test_feature_name() {
        assert_eq!(feature_name(0), Some("AGE"));
        assert_eq!(feature_name(13), Some("CHEST_PAIN"));
        assert_eq!(feature_name(100), None);
    }

    #[test]
    fn test_field_kind() {
        assert_eq!(field_kind("AGE"), FieldKind::Age);
        assert_eq!(field_kind("GENDER"), FieldKind::Sex);
        assert_eq!(field_kind("SMOKING"), FieldKind::YesNo);
        assert_eq!(field_kind("SWALLOWING_DIFFICULTY"), FieldKind::YesNo);
    }

    #[test]
    fn test_display_label() {
        assert_eq!(display_label("AGE"), "Age");
        assert_eq!(display_label("YELLOW_FINGERS"), "Yellow Fingers");
        assert_eq!(display_label("SHORTNESS_OF_BREATH"), "Shortness Of Breath");
    }
}
