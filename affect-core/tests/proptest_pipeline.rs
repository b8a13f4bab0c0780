//! Property-based tests for the appraisal pipeline.
//!
//! Uses `proptest` to verify the numeric and structural invariants under
//! random inputs: non-negative intensities, classifier totality and
//! determinism, decay idempotence, and tie-break ordering.

use proptest::prelude::*;

use affect_core::catalog;
use affect_core::classifier;
use affect_core::config::{AffectConfig, EmotionConfig};
use affect_core::emotion::EmotionState;
use affect_core::session::Session;
use affect_core::types::{EmotionCategory, ResponseOption, ScoreMap, StimulusCategory};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_category() -> impl Strategy<Value = StimulusCategory> {
    (0..StimulusCategory::ALL.len()).prop_map(|i| StimulusCategory::ALL[i])
}

// ---------------------------------------------------------------------------
// Property: intensities stay non-negative under any turn sequence
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn intensities_never_negative(inputs in proptest::collection::vec(".*", 0..40)) {
        let mut session = Session::new(&AffectConfig::default());
        for input in &inputs {
            session.run_turn(input);
            for (_, intensity) in session.emotions().iter() {
                prop_assert!(intensity >= 0.0);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property: decay at zero is idempotent
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn decay_at_zero_stays_zero(rounds in 1..50_usize) {
        let mut state = EmotionState::new(EmotionConfig::default());
        for _ in 0..rounds {
            state.decay();
        }
        for emotion in EmotionCategory::ALL {
            prop_assert_eq!(state.intensity(emotion), 0.0);
        }
    }
}

// ---------------------------------------------------------------------------
// Property: the classifier is total and deterministic
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn classifier_total_and_deterministic(text in ".*") {
        let first = classifier::classify(&text);
        let second = classifier::classify(&text);
        prop_assert_eq!(first, second);
        // Whatever comes out is a catalog key with a well-formed path.
        let path = catalog::lookup(first);
        if path.emotion.is_none() {
            prop_assert_eq!(first, StimulusCategory::NeutralStimulus);
        }
    }
}

// ---------------------------------------------------------------------------
// Property: accumulate for any category is the labeled magnitude exactly
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn accumulate_matches_label_magnitude(category in arb_category()) {
        let config = EmotionConfig::default();
        let multiplier = config.appraisal_intensity_multiplier;
        let mut state = EmotionState::new(config);
        let path = catalog::lookup(category);
        state.accumulate(&path);

        match path.emotion {
            Some(emotion) => {
                let expected = path.intensity.magnitude(multiplier);
                prop_assert!((state.intensity(emotion) - expected).abs() < 1e-5);
            }
            None => {
                for emotion in EmotionCategory::ALL {
                    prop_assert_eq!(state.intensity(emotion), 0.0);
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property: snapshots are equal across a no-op accumulate
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn noop_accumulate_preserves_snapshot(warmup in arb_category()) {
        let mut state = EmotionState::new(EmotionConfig::default());
        state.accumulate(&catalog::lookup(warmup));

        let before = state.snapshot();
        state.accumulate(&catalog::lookup(StimulusCategory::NeutralStimulus));
        prop_assert_eq!(state.snapshot(), before);
    }
}

// ---------------------------------------------------------------------------
// Property: argmax returns the earliest option achieving the maximum
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn argmax_is_earliest_maximum(a in -100.0..100.0f32, b in -100.0..100.0f32, c in -100.0..100.0f32) {
        let scores = ScoreMap::new(a, b, c);
        let chosen = scores.argmax();
        let max = scores.get(chosen);

        for (option, score) in scores.iter() {
            // Nothing scores strictly higher.
            prop_assert!(score <= max);
            // And nothing earlier ties the winner.
            if option.index() < chosen.index() {
                prop_assert!(score < max);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property: turn history grows by exactly one entry per turn
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn one_history_entry_per_turn(inputs in proptest::collection::vec(".*", 0..30)) {
        let mut session = Session::new(&AffectConfig::default());
        for (i, input) in inputs.iter().enumerate() {
            session.run_turn(input);
            prop_assert_eq!(session.learner().history().len(), i + 1);
        }
    }
}
