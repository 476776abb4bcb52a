//! Session History - Append-Only Run Log
//!
//! Owned by the caller's session context and passed into the pipeline,
//! never a process-wide singleton. One instance per session; the classifier
//! is the only thing sessions share, read-only. Created empty on session
//! start, dropped at session end, no persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::HISTORY_DISPLAY_WINDOW;
use crate::features::DisplayAnswer;
use crate::model::PredictionResult;

/// One past run, appended, never mutated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// 1-based submission order within the session ("Run #3")
    pub run: usize,
    pub subject_name: String,
    /// Human-readable answers, identical strings to the report document
    pub answers: Vec<DisplayAnswer>,
    pub result: PredictionResult,
    pub recorded_at: DateTime<Utc>,
}

/// In-memory run log, unbounded store, bounded display window
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SessionHistory {
    entries: Vec<HistoryEntry>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run number the next submission will get
    pub fn next_run(&self) -> usize {
        self.entries.len() + 1
    }

    /// Always succeeds, pure in-memory append
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// At most `n` entries, most-recent-first; does not mutate the store
    pub fn recent(&self, n: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().take(n).collect()
    }

    /// The shell's display window over the history
    pub fn recent_window(&self) -> Vec<&HistoryEntry> {
        self.recent(HISTORY_DISPLAY_WINDOW)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DecisionThreshold, RiskLabel};

    fn entry(run: usize) -> HistoryEntry {
        HistoryEntry {
            run,
            subject_name: format!("subject-{}", run),
            answers: Vec::new(),
            result: PredictionResult {
                label: RiskLabel::LowRisk,
                probability: 0.1,
                threshold: DecisionThreshold::default().value(),
                inference_time_us: 0,
            },
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn test_starts_empty() {
        let history = SessionHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.next_run(), 1);
        assert!(history.recent(5).is_empty());
    }

    #[test]
    fn test_recent_five_of_seven_most_recent_first() {
        let mut history = SessionHistory::new();
        for run in 1..=7 {
            history.append(entry(run));
        }

        let recent = history.recent(5);
        let runs: Vec<usize> = recent.iter().map(|e| e.run).collect();
        assert_eq!(runs, vec![7, 6, 5, 4, 3]);

        // Underlying store keeps everything in insertion order
        assert_eq!(history.len(), 7);
        let all: Vec<usize> = history.recent(100).iter().map(|e| e.run).collect();
        assert_eq!(all, vec![7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_recent_does_not_mutate() {
        let mut history = SessionHistory::new();
        for run in 1..=3 {
            history.append(entry(run));
        }

        let _ = history.recent(2);
        let _ = history.recent_window();
        assert_eq!(history.len(), 3);
        assert_eq!(history.next_run(), 4);
    }

    #[test]
    fn test_display_window_is_five() {
        let mut history = SessionHistory::new();
        for run in 1..=9 {
            history.append(entry(run));
        }
        assert_eq!(history.recent_window().len(), 5);
    }
}
