//! Error handling
//!
//! One taxonomy for the whole screening pipeline:
//! - `InvalidInput`: recoverable, the shell asks the user to correct the field
//! - `SchemaMismatch`: encoder/adapter disagreement, a configuration defect
//! - `ModelUnavailable`: artifact failed to load, fatal at startup
//! - `ConsentRequired`: submission reached the core without the consent gate
//!
//! No retries anywhere: every operation is a pure, fast, local computation.

pub type ScreenResult<T> = Result<T, ScreenError>;

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenError {
    /// Submission without an affirmed consent acknowledgment
    ConsentRequired,

    /// Raw form value outside its accepted domain
    InvalidInput { field: String, reason: String },

    /// Feature layout disagreement between encoder and classifier
    SchemaMismatch {
        expected_version: u8,
        expected_hash: u32,
        actual_version: u8,
        actual_hash: u32,
    },

    /// Model artifact missing, unreadable, or inference failed
    ModelUnavailable(String),
}

impl ScreenError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Input errors are the only user-recoverable failures
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::ConsentRequired
        )
    }
}

impl std::fmt::Display for ScreenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConsentRequired => {
                write!(f, "Consent must be acknowledged before a prediction can run")
            }
            Self::InvalidInput { field, reason } => {
                write!(f, "Invalid input for field '{}': {}", field, reason)
            }
            Self::SchemaMismatch {
                expected_version,
                expected_hash,
                actual_version,
                actual_hash,
            } => write!(
                f,
                "Feature schema mismatch: expected v{} (hash: {:08x}), got v{} (hash: {:08x})",
                expected_version, expected_hash, actual_version, actual_hash
            ),
            Self::ModelUnavailable(msg) => write!(f, "Model unavailable: {}", msg),
        }
    }
}

impl std::error::Error for ScreenError {}
