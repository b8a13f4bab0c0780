//! Emotion intensity engine — per-category accumulation and decay.
//!
//! One [`EmotionState`] per session, created with all intensities at zero.
//! It mutates through exactly two paths, once per turn each: `accumulate`
//! when the appraisal path triggers an emotion, and `decay` after the turn's
//! decision has been made. Intensities are floor-clamped at zero and have no
//! upper bound — repeated triggering accumulates without ceiling.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::AppraisalPath;
use crate::config::EmotionConfig;
use crate::types::EmotionCategory;

/// Mutable per-session emotion intensity vector.
#[derive(Debug, Clone)]
pub struct EmotionState {
    intensities: [f32; 8],
    config: EmotionConfig,
}

impl EmotionState {
    /// Create a fresh state with all intensities at zero.
    #[must_use]
    pub fn new(config: EmotionConfig) -> Self {
        Self {
            intensities: [0.0; 8],
            config,
        }
    }

    /// Current intensity of one emotion category.
    #[must_use]
    pub fn intensity(&self, emotion: EmotionCategory) -> f32 {
        self.intensities[emotion.index()]
    }

    /// Apply an appraisal path to the intensity vector.
    ///
    /// The neutral path (no emotion) is an explicit no-op, not an error.
    /// The added magnitude comes from the path's intensity label; the
    /// configured appraisal-intensity multiplier applies to the
    /// Medium/High/VeryHigh labels only.
    pub fn accumulate(&mut self, path: &AppraisalPath) {
        let Some(emotion) = path.emotion else {
            return;
        };
        let magnitude = path
            .intensity
            .magnitude(self.config.appraisal_intensity_multiplier);
        self.intensities[emotion.index()] += magnitude;
        debug!(
            emotion = %emotion,
            magnitude,
            level = self.intensities[emotion.index()],
            "intensity accumulated"
        );
    }

    /// Decay every non-zero intensity by its per-category rate, clamping
    /// at zero. Called once per turn, after the decision.
    pub fn decay(&mut self) {
        for emotion in EmotionCategory::ALL {
            let level = &mut self.intensities[emotion.index()];
            if *level > 0.0 {
                *level = (*level - self.config.decay_rates.rate(emotion)).max(0.0);
            }
        }
    }

    /// Read-only copy of the current intensity vector.
    #[must_use]
    pub fn snapshot(&self) -> EmotionSnapshot {
        EmotionSnapshot(self.intensities)
    }
}

/// Immutable copy of an emotion intensity vector, taken at one point in a
/// session. What the decision engine and turn reports consume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionSnapshot([f32; 8]);

impl EmotionSnapshot {
    /// Intensity of one emotion category at snapshot time.
    #[must_use]
    pub fn get(&self, emotion: EmotionCategory) -> f32 {
        self.0[emotion.index()]
    }

    /// Iterate `(category, intensity)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (EmotionCategory, f32)> + '_ {
        EmotionCategory::ALL.into_iter().map(|e| (e, self.get(e)))
    }
}
