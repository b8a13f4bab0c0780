//! # Affect Core Library
//!
//! A three-stage appraisal pipeline for turn-based conversational agents:
//!
//! 1. **Classifier** — deterministic keyword rules map free-form input to
//!    one of a closed set of stimulus categories.
//! 2. **Emotion engine** — each category's fixed appraisal path accumulates
//!    intensity on one of the eight Plutchik primaries, decaying once per
//!    turn.
//! 3. **Decision fusion** — history-adjusted option priorities combine with
//!    emotion-conditioned adjustments to pick a response option, and the
//!    outcome feeds back into the learner.
//!
//! A [`Session`] ties the three stages together and owns all mutable state,
//! so independent sessions never share anything. Execution is fully
//! synchronous and single-threaded; one turn runs to completion before the
//! next is accepted.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod decision;
pub mod emotion;
pub mod error;
pub mod learning;
pub mod session;
pub mod types;

pub use catalog::AppraisalPath;
pub use config::AffectConfig;
pub use emotion::{EmotionSnapshot, EmotionState};
pub use error::AffectError;
pub use learning::{DecisionHistoryEntry, LearningStore};
pub use session::{Session, TurnReport};
pub use types::*;
