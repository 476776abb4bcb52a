//! Feature Schema - The Order The Model Was Fit On
//!
//! The classifier artifact ships with a column sidecar (a JSON array of
//! field names). The encoder never assumes an order, it queries the
//! adapter's schema and reindexes to it; predict re-checks the stamp on
//! every vector. Column-order-by-convention is exactly the coupling this
//! type exists to remove.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::layout::{self, FEATURE_VERSION};
use super::vector::FeatureVector;
use crate::error::{ScreenError, ScreenResult};

/// Ordered feature-name list plus its hash stamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSchema {
    version: u8,
    hash: u32,
    names: Vec<String>,
}

impl FeatureSchema {
    /// Schema from an explicit name list
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        Self {
            version: FEATURE_VERSION,
            hash: layout::hash_names(names),
            names: names.iter().map(|n| n.as_ref().to_string()).collect(),
        }
    }

    /// The builtin canonical layout as a schema
    pub fn canonical() -> Self {
        Self::from_names(layout::FEATURE_LAYOUT)
    }

    /// Load a column sidecar (JSON string array) from disk
    pub fn load(path: &Path) -> ScreenResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            ScreenError::ModelUnavailable(format!(
                "Failed to read column sidecar {}: {}",
                path.display(),
                e
            ))
        })?;

        let names: Vec<String> = serde_json::from_str(&raw).map_err(|e| {
            ScreenError::ModelUnavailable(format!(
                "Column sidecar {} is not a JSON name array: {}",
                path.display(),
                e
            ))
        })?;

        log::info!("Loaded {} feature columns from {}", names.len(), path.display());

        Ok(Self::from_names(&names))
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn hash(&self) -> u32 {
        self.hash
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Does this schema match the builtin layout exactly (names and order)?
    pub fn matches_layout(&self) -> bool {
        self.hash == layout::layout_hash() && self.version == FEATURE_VERSION
    }

    /// Check a vector's stamp against this schema
    ///
    /// Disagreement is a programming/configuration defect, surfaced as
    /// `SchemaMismatch` rather than silently reordering columns.
    pub fn validate_vector(&self, vector: &FeatureVector) -> ScreenResult<()> {
        if vector.version != self.version || vector.layout_hash != self.hash {
            return Err(ScreenError::SchemaMismatch {
                expected_version: self.version,
                expected_hash: self.hash,
                actual_version: vector.version,
                actual_hash: vector.layout_hash,
            });
        }
        Ok(())
    }
}
