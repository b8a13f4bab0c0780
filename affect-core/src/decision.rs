//! Decision fusion — emotion-conditioned option scoring and selection.
//!
//! Combines the learner's history-adjusted base priorities with adjustments
//! derived from the current appraisal path and emotion intensities, then
//! picks one option and reports the outcome back to the learner.
//!
//! The fear/override interaction is preserved exactly as shipped: a fear
//! signal costs Option C 3 points, and when accumulated fear intensity
//! exceeds 0.5 the override gives 2 of them back, for a net −1. Do not
//! collapse those two adjustments into one — observable score maps are part
//! of the contract.

use tracing::debug;

use crate::catalog::AppraisalPath;
use crate::emotion::EmotionSnapshot;
use crate::learning::LearningStore;
use crate::types::{EmotionCategory, Outcome, ResponseOption, ScoreMap};

/// Intensity above which the fear override activates.
const FEAR_OVERRIDE_THRESHOLD: f32 = 0.5;

/// Score one turn and choose a response option.
///
/// The caller-provided option list is superseded by the learner's analysis,
/// which also seeds the score map with history-adjusted base priorities.
/// Ties resolve to the earliest option in `{A, B, C}` order. The chosen
/// option and derived outcome are recorded in the learner before returning.
pub fn decide(
    options: &[ResponseOption],
    path: &AppraisalPath,
    emotions: &EmotionSnapshot,
    learner: &mut LearningStore,
) -> (ResponseOption, ScoreMap) {
    let (analyzed_options, mut scores) = learner.analyze(path);
    debug_assert_eq!(options.len(), analyzed_options.len());

    let mut override_active = false;

    if path.signals(EmotionCategory::Fear) {
        scores.adjust(ResponseOption::C, -3.0);
        if emotions.get(EmotionCategory::Fear) > FEAR_OVERRIDE_THRESHOLD {
            override_active = true;
        }
    }

    if path.signals(EmotionCategory::Joy) {
        scores.adjust(ResponseOption::B, 2.0);
    }

    if override_active && path.signals(EmotionCategory::Fear) {
        scores.adjust(ResponseOption::C, 2.0);
    }

    let chosen = scores.argmax();

    // Sample outcome policy: choosing B counts as positive, everything else
    // as neutral. Negative outcomes enter the history through external
    // feedback, not through this policy.
    let outcome = if chosen == ResponseOption::B {
        Outcome::Positive
    } else {
        Outcome::Neutral
    };
    learner.record(*path, chosen, outcome);

    debug!(chosen = %chosen, ?outcome, override_active, "decision made");
    (chosen, scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::config::{EmotionConfig, LearningConfig};
    use crate::emotion::EmotionState;
    use crate::types::StimulusCategory;

    fn learner() -> LearningStore {
        LearningStore::new(LearningConfig::default())
    }

    fn snapshot_with_fear(level: f32) -> EmotionSnapshot {
        let mut state = EmotionState::new(EmotionConfig::default());
        let path = catalog::lookup(StimulusCategory::ThreatImminent); // 1.02 per hit
        let mut accumulated = 0.0;
        while accumulated < level {
            state.accumulate(&path);
            accumulated += 1.02;
        }
        state.snapshot()
    }

    #[test]
    fn joy_path_boosts_option_b() {
        let mut learner = learner();
        let path = catalog::lookup(StimulusCategory::SocialPraise);
        let calm = EmotionState::new(EmotionConfig::default()).snapshot();

        let (chosen, scores) = decide(&ResponseOption::ALL, &path, &calm, &mut learner);
        assert_eq!(chosen, ResponseOption::B);
        assert_eq!(scores.get(ResponseOption::B), 9.0);
        assert_eq!(scores.get(ResponseOption::A), 5.0);
        assert_eq!(scores.get(ResponseOption::C), 3.0);
    }

    #[test]
    fn fear_path_without_override_penalizes_c_by_three() {
        let mut learner = learner();
        let path = catalog::lookup(StimulusCategory::ThreatImminent);
        let calm = EmotionState::new(EmotionConfig::default()).snapshot();

        let (chosen, scores) = decide(&ResponseOption::ALL, &path, &calm, &mut learner);
        assert_eq!(scores.get(ResponseOption::C), 0.0);
        assert_eq!(chosen, ResponseOption::B);
    }

    #[test]
    fn fear_override_nets_minus_one_for_c() {
        let mut learner = learner();
        let path = catalog::lookup(StimulusCategory::ThreatImminent);
        let afraid = snapshot_with_fear(1.0);

        let (_, scores) = decide(&ResponseOption::ALL, &path, &afraid, &mut learner);
        // Base 3, −3 fear, +2 override.
        assert_eq!(scores.get(ResponseOption::C), 2.0);
    }

    #[test]
    fn override_stacks_with_learning_penalty() {
        let mut learner = learner();
        let path = catalog::lookup(StimulusCategory::ThreatImminent);
        learner.record(path, ResponseOption::C, Outcome::Negative);
        let afraid = snapshot_with_fear(1.0);

        let (_, scores) = decide(&ResponseOption::ALL, &path, &afraid, &mut learner);
        // Base 3 − 0.2 learning − 3 fear + 2 override.
        assert!((scores.get(ResponseOption::C) - 1.8).abs() < 1e-4);
        assert!(scores.get(ResponseOption::C) < 3.0);
    }

    #[test]
    fn decision_is_recorded_with_derived_outcome() {
        let mut learner = learner();
        let joy_path = catalog::lookup(StimulusCategory::SocialPraise);
        let calm = EmotionState::new(EmotionConfig::default()).snapshot();

        let (chosen, _) = decide(&ResponseOption::ALL, &joy_path, &calm, &mut learner);
        assert_eq!(chosen, ResponseOption::B);

        let entry = learner.history().last().expect("entry recorded");
        assert_eq!(entry.chosen, ResponseOption::B);
        assert_eq!(entry.outcome, Outcome::Positive);
    }

    #[test]
    fn neutral_path_scores_stay_at_base() {
        let mut learner = learner();
        let neutral = catalog::lookup(StimulusCategory::NeutralStimulus);
        let calm = EmotionState::new(EmotionConfig::default()).snapshot();
        let (chosen, scores) = decide(&ResponseOption::ALL, &neutral, &calm, &mut learner);
        assert_eq!(chosen, ResponseOption::B);
        assert_eq!(scores, LearningStore::base_priorities());
    }
}
