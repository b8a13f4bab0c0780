//! Learning store — append-only decision history and priority adjustment.
//!
//! Every decision the engine takes is recorded with its appraisal path and
//! outcome. When a new fear-signaling situation comes around, the store
//! scans that history and lowers the priority of an option that has gone
//! badly under fear before.
//!
//! The history is never evicted: it grows for the lifetime of the session.
//! That unbounded growth is deliberate and tested for — see the decision
//! notes in DESIGN.md before adding a cap.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::AppraisalPath;
use crate::config::LearningConfig;
use crate::types::{EmotionCategory, Outcome, ResponseOption, ScoreMap};

/// One recorded decision with its outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionHistoryEntry {
    /// The appraisal path that was active when the decision was made.
    pub path: AppraisalPath,
    /// The option the engine chose.
    pub chosen: ResponseOption,
    /// What came of it.
    pub outcome: Outcome,
    /// Wall-clock time of the decision.
    pub timestamp: DateTime<Utc>,
}

/// Append-only decision/outcome log plus the priority-adjustment function
/// consulted before every scoring pass.
#[derive(Debug, Clone)]
pub struct LearningStore {
    history: Vec<DecisionHistoryEntry>,
    learning_rate: f32,
}

impl LearningStore {
    /// Create an empty store.
    #[must_use]
    pub fn new(config: LearningConfig) -> Self {
        Self {
            history: Vec::new(),
            learning_rate: config.learning_rate,
        }
    }

    /// Fixed base priorities: A:5, B:7, C:3.
    #[must_use]
    pub fn base_priorities() -> ScoreMap {
        ScoreMap::new(5.0, 7.0, 3.0)
    }

    /// Produce the option list and history-adjusted priority map for the
    /// current appraisal path.
    ///
    /// Starts from the fixed base priorities. When the path signals fear,
    /// every past fear-signaling decision that chose Option C and ended
    /// negatively subtracts `learning_rate × 2` from Option C — cumulative
    /// across all matching entries, unbounded below.
    #[must_use]
    pub fn analyze(&self, path: &AppraisalPath) -> (Vec<ResponseOption>, ScoreMap) {
        let options = ResponseOption::ALL.to_vec();
        let mut priorities = Self::base_priorities();

        if path.signals(EmotionCategory::Fear) {
            let penalty = self.learning_rate * 2.0;
            let matches = self
                .history
                .iter()
                .filter(|entry| {
                    entry.path.signals(EmotionCategory::Fear)
                        && entry.chosen == ResponseOption::C
                        && entry.outcome == Outcome::Negative
                })
                .count();
            if matches > 0 {
                priorities.adjust(ResponseOption::C, -penalty * matches as f32);
                debug!(matches, penalty, "fear history penalty applied to Option C");
            }
        }

        (options, priorities)
    }

    /// Append a decision record with the current wall-clock timestamp.
    pub fn record(&mut self, path: AppraisalPath, chosen: ResponseOption, outcome: Outcome) {
        self.history.push(DecisionHistoryEntry {
            path,
            chosen,
            outcome,
            timestamp: Utc::now(),
        });
    }

    /// The full decision history, oldest first.
    #[must_use]
    pub fn history(&self) -> &[DecisionHistoryEntry] {
        &self.history
    }
}
