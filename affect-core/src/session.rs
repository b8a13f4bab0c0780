//! Session context — one appraisal pipeline instance per running session.
//!
//! A [`Session`] owns the emotion state and the learning store, so multiple
//! independent sessions can coexist without shared mutable state. Execution
//! is single-threaded and turn-based: one full pipeline pass (classify →
//! accumulate → decide → record → decay) completes before the next input is
//! accepted, and no step suspends or blocks.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::{self, AppraisalPath};
use crate::classifier;
use crate::config::AffectConfig;
use crate::decision;
use crate::emotion::{EmotionSnapshot, EmotionState};
use crate::learning::LearningStore;
use crate::types::{ResponseOption, ScoreMap, SessionId, StimulusCategory};

/// Everything the pipeline produced for one turn, for the collaborating
/// front end to render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnReport {
    /// Category the input classified to.
    pub category: StimulusCategory,
    /// The appraisal path looked up for that category.
    pub path: AppraisalPath,
    /// The option the decision engine chose.
    pub chosen: ResponseOption,
    /// The full score map behind the choice.
    pub scores: ScoreMap,
    /// Emotion intensities as the decision engine saw them (after this
    /// turn's accumulation, before this turn's decay).
    pub emotions: EmotionSnapshot,
}

/// A running appraisal session.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    emotions: EmotionState,
    learner: LearningStore,
}

impl Session {
    /// Create a session with zeroed emotion state and empty history.
    #[must_use]
    pub fn new(config: &AffectConfig) -> Self {
        let id = SessionId::new();
        info!(session = %id, "session created");
        Self {
            id,
            emotions: EmotionState::new(config.emotion.clone()),
            learner: LearningStore::new(config.learning.clone()),
        }
    }

    /// This session's identifier.
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Run one full pipeline pass over a line of input.
    pub fn run_turn(&mut self, text: &str) -> TurnReport {
        let category = classifier::classify(text);
        let path = catalog::lookup(category);

        self.emotions.accumulate(&path);
        let snapshot = self.emotions.snapshot();

        let (chosen, scores) =
            decision::decide(&ResponseOption::ALL, &path, &snapshot, &mut self.learner);

        // End of turn: intensities relax toward baseline.
        self.emotions.decay();

        info!(
            session = %self.id,
            category = %category,
            chosen = %chosen,
            "turn complete"
        );

        TurnReport {
            category,
            path,
            chosen,
            scores,
            emotions: snapshot,
        }
    }

    /// Read-only view of the current emotion intensities (post-decay).
    #[must_use]
    pub fn emotions(&self) -> EmotionSnapshot {
        self.emotions.snapshot()
    }

    /// The session's learning store.
    #[must_use]
    pub fn learner(&self) -> &LearningStore {
        &self.learner
    }
}
