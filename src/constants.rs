//! Central Configuration Constants
//!
//! Single source of truth for screening defaults.
//! To change the decision threshold or display window, only edit this file.

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Lung Risk Screening Core";

/// Minimum accepted age on the screening form
pub const AGE_MIN: i64 = 1;

/// Maximum accepted age on the screening form
pub const AGE_MAX: i64 = 100;

/// Decision threshold for the HighRisk label
///
/// The original classifier left this implicit in its library default.
/// It is explicit here so a different model backend cannot silently shift it.
pub const DEFAULT_DECISION_THRESHOLD: f32 = 0.5;

/// How many past runs the shell displays (history itself is unbounded)
pub const HISTORY_DISPLAY_WINDOW: usize = 5;

/// Deterministic name of the downloadable report artifact
pub const REPORT_FILE_NAME: &str = "Lung_Cancer_Prediction_Report.txt";
