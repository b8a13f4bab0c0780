//! Configuration for the affect pipeline.
//!
//! Loadable from TOML; every field has a documented default so an empty
//! config is a valid config.

use serde::{Deserialize, Serialize};

use crate::types::EmotionCategory;

/// Top-level pipeline configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AffectConfig {
    /// Emotion intensity dynamics.
    #[serde(default)]
    pub emotion: EmotionConfig,
    /// Decision-history learning.
    #[serde(default)]
    pub learning: LearningConfig,
}

impl AffectConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `AffectError::Config` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        toml::from_str(toml_str).map_err(|e| crate::AffectError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

/// Emotion intensity accumulation and decay settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionConfig {
    /// Per-category decay subtracted each turn from non-zero intensities.
    #[serde(default)]
    pub decay_rates: DecayRates,
    /// Multiplier applied to the Medium/High/VeryHigh intensity labels.
    #[serde(default = "default_multiplier")]
    pub appraisal_intensity_multiplier: f32,
}

impl Default for EmotionConfig {
    fn default() -> Self {
        Self {
            decay_rates: DecayRates::default(),
            appraisal_intensity_multiplier: 1.2,
        }
    }
}

/// Per-emotion decay rates. Uniform 0.01 by default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct DecayRates {
    #[serde(default = "default_decay")]
    pub joy: f32,
    #[serde(default = "default_decay")]
    pub sadness: f32,
    #[serde(default = "default_decay")]
    pub anger: f32,
    #[serde(default = "default_decay")]
    pub fear: f32,
    #[serde(default = "default_decay")]
    pub trust: f32,
    #[serde(default = "default_decay")]
    pub disgust: f32,
    #[serde(default = "default_decay")]
    pub anticipation: f32,
    #[serde(default = "default_decay")]
    pub surprise: f32,
}

impl DecayRates {
    /// Decay rate for one emotion category.
    #[must_use]
    pub fn rate(&self, emotion: EmotionCategory) -> f32 {
        match emotion {
            EmotionCategory::Joy => self.joy,
            EmotionCategory::Sadness => self.sadness,
            EmotionCategory::Anger => self.anger,
            EmotionCategory::Fear => self.fear,
            EmotionCategory::Trust => self.trust,
            EmotionCategory::Disgust => self.disgust,
            EmotionCategory::Anticipation => self.anticipation,
            EmotionCategory::Surprise => self.surprise,
        }
    }
}

impl Default for DecayRates {
    fn default() -> Self {
        Self {
            joy: 0.01,
            sadness: 0.01,
            anger: 0.01,
            fear: 0.01,
            trust: 0.01,
            disgust: 0.01,
            anticipation: 0.01,
            surprise: 0.01,
        }
    }
}

/// Learning settings for the decision-history store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningConfig {
    /// Scale of the per-entry priority penalty derived from past negative
    /// outcomes.
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f32,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
        }
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_multiplier() -> f32 {
    1.2
}
fn default_decay() -> f32 {
    0.01
}
fn default_learning_rate() -> f32 {
    0.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = AffectConfig::from_toml("").expect("empty config");
        assert!((config.emotion.appraisal_intensity_multiplier - 1.2).abs() < 1e-6);
        assert!((config.emotion.decay_rates.fear - 0.01).abs() < 1e-6);
        assert!((config.learning.learning_rate - 0.1).abs() < 1e-6);
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config = AffectConfig::from_toml(
            r#"
            [emotion]
            appraisal_intensity_multiplier = 2.0

            [emotion.decay_rates]
            fear = 0.05
            "#,
        )
        .expect("partial config");
        assert!((config.emotion.appraisal_intensity_multiplier - 2.0).abs() < 1e-6);
        assert!((config.emotion.decay_rates.fear - 0.05).abs() < 1e-6);
        assert!((config.emotion.decay_rates.joy - 0.01).abs() < 1e-6);
        assert!((config.learning.learning_rate - 0.1).abs() < 1e-6);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let err = AffectConfig::from_toml("emotion = 3").expect_err("not a table");
        assert!(matches!(err, crate::AffectError::Config(_)));
    }
}
