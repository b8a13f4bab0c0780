//! Pathway catalog — the fixed stimulus-category → appraisal-path table.
//!
//! The catalog is a total mapping: every [`StimulusCategory`] has exactly one
//! [`AppraisalPath`], enforced by the exhaustive `match` in [`lookup`]. There
//! is no failure path; a category the classifier can emit is by construction
//! a category the catalog defines.

use serde::{Deserialize, Serialize};

use crate::types::{
    Arousal, EmotionCategory, Expression, IntensityLabel, Relevance, StimulusCategory, Valence,
};

/// The fixed six-field appraisal tuple associated with a stimulus category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AppraisalPath {
    /// Appraised valence.
    pub valence: Valence,
    /// What the stimulus is relevant to.
    pub relevance: Relevance,
    /// Physiological arousal level.
    pub physiological: Arousal,
    /// Outward expression tag.
    pub expression: Expression,
    /// Triggered Plutchik primary, or `None` for the neutral path.
    pub emotion: Option<EmotionCategory>,
    /// Coarse magnitude of the emotional response.
    pub intensity: IntensityLabel,
}

impl AppraisalPath {
    /// Whether this path signals the given emotion.
    #[must_use]
    pub fn signals(&self, emotion: EmotionCategory) -> bool {
        self.emotion == Some(emotion)
    }
}

/// Look up the appraisal path for a stimulus category.
///
/// Pure and total: no state, no failure.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn lookup(category: StimulusCategory) -> AppraisalPath {
    use EmotionCategory as E;
    use StimulusCategory as S;

    match category {
        S::PositiveStimulus => AppraisalPath {
            valence: Valence::Positive,
            relevance: Relevance::Goal,
            physiological: Arousal::Low,
            expression: Expression::Smile,
            emotion: Some(E::Joy),
            intensity: IntensityLabel::Medium,
        },
        S::NegativeStimulusThreat => AppraisalPath {
            valence: Valence::Negative,
            relevance: Relevance::Threat,
            physiological: Arousal::High,
            expression: Expression::Frown,
            emotion: Some(E::Fear),
            intensity: IntensityLabel::High,
        },
        S::SocialPositiveFeedback => AppraisalPath {
            valence: Valence::Positive,
            relevance: Relevance::Social,
            physiological: Arousal::Low,
            expression: Expression::SmileNod,
            emotion: Some(E::Trust),
            intensity: IntensityLabel::Medium,
        },
        S::SocialNegativeFeedback => AppraisalPath {
            valence: Valence::Negative,
            relevance: Relevance::Social,
            physiological: Arousal::Medium,
            expression: Expression::FrownShakeHead,
            emotion: Some(E::Sadness),
            intensity: IntensityLabel::Medium,
        },
        S::NeutralStimulus => AppraisalPath {
            valence: Valence::Neutral,
            relevance: Relevance::None,
            physiological: Arousal::None,
            expression: Expression::Neutral,
            emotion: None,
            intensity: IntensityLabel::None,
        },
        S::IntellectualStimulus => AppraisalPath {
            valence: Valence::Neutral,
            relevance: Relevance::Cognitive,
            physiological: Arousal::Low,
            expression: Expression::Thinking,
            emotion: Some(E::Anticipation),
            intensity: IntensityLabel::Low,
        },
        S::AestheticPositive => AppraisalPath {
            valence: Valence::Positive,
            relevance: Relevance::Aesthetic,
            physiological: Arousal::Medium,
            expression: Expression::Appreciation,
            emotion: Some(E::Joy),
            intensity: IntensityLabel::Medium,
        },
        S::MoralViolation => AppraisalPath {
            valence: Valence::Negative,
            relevance: Relevance::Moral,
            physiological: Arousal::High,
            expression: Expression::AngerFrown,
            emotion: Some(E::Anger),
            intensity: IntensityLabel::High,
        },
        S::Fear => AppraisalPath {
            valence: Valence::Negative,
            relevance: Relevance::Threat,
            physiological: Arousal::VeryHigh,
            expression: Expression::EyesWidenMouthOpen,
            emotion: Some(E::Fear),
            intensity: IntensityLabel::VeryHigh,
        },
        S::Sadness => AppraisalPath {
            valence: Valence::Negative,
            relevance: Relevance::Loss,
            physiological: Arousal::Low,
            expression: Expression::SadFace,
            emotion: Some(E::Sadness),
            intensity: IntensityLabel::Medium,
        },
        S::Joy => AppraisalPath {
            valence: Valence::Positive,
            relevance: Relevance::GoalAchieved,
            physiological: Arousal::Medium,
            expression: Expression::WideSmileLaugh,
            emotion: Some(E::Joy),
            intensity: IntensityLabel::High,
        },
        S::Anger => AppraisalPath {
            valence: Valence::Negative,
            relevance: Relevance::OffensiveAgent,
            physiological: Arousal::High,
            expression: Expression::FrownClenchedJaw,
            emotion: Some(E::Anger),
            intensity: IntensityLabel::High,
        },
        S::Disgust => AppraisalPath {
            valence: Valence::Negative,
            relevance: Relevance::OffensiveObject,
            physiological: Arousal::Medium,
            expression: Expression::NoseWrinkleLipCurl,
            emotion: Some(E::Disgust),
            intensity: IntensityLabel::Medium,
        },
        S::Surprise => AppraisalPath {
            valence: Valence::Neutral,
            relevance: Relevance::UnexpectedEvent,
            physiological: Arousal::MediumHigh,
            expression: Expression::EyebrowsRaisedMouthOpenSlightly,
            emotion: Some(E::Surprise),
            intensity: IntensityLabel::Medium,
        },
        S::Trust => AppraisalPath {
            valence: Valence::Positive,
            relevance: Relevance::SocialBond,
            physiological: Arousal::Low,
            expression: Expression::WarmSmileEyeContact,
            emotion: Some(E::Trust),
            intensity: IntensityLabel::Medium,
        },
        S::Anticipation => AppraisalPath {
            valence: Valence::Neutral,
            relevance: Relevance::FutureEvent,
            physiological: Arousal::Medium,
            expression: Expression::AttentiveLook,
            emotion: Some(E::Anticipation),
            intensity: IntensityLabel::Medium,
        },
        S::SadNews => AppraisalPath {
            valence: Valence::Negative,
            relevance: Relevance::Loss,
            physiological: Arousal::Low,
            expression: Expression::SadFaceTears,
            emotion: Some(E::Sadness),
            intensity: IntensityLabel::High,
        },
        S::GoodNews => AppraisalPath {
            valence: Valence::Positive,
            relevance: Relevance::GoalAchieved,
            physiological: Arousal::Medium,
            expression: Expression::BrightSmileExcited,
            emotion: Some(E::Joy),
            intensity: IntensityLabel::High,
        },
        S::ThreatImminent => AppraisalPath {
            valence: Valence::Negative,
            relevance: Relevance::ImminentDanger,
            physiological: Arousal::VeryHigh,
            expression: Expression::PanickedLook,
            emotion: Some(E::Fear),
            intensity: IntensityLabel::VeryHigh,
        },
        S::Insult => AppraisalPath {
            valence: Valence::Negative,
            relevance: Relevance::SocialOffense,
            physiological: Arousal::MediumHigh,
            expression: Expression::FrownGlare,
            emotion: Some(E::Anger),
            intensity: IntensityLabel::MediumHigh,
        },
        S::SocialPraise => AppraisalPath {
            valence: Valence::Positive,
            relevance: Relevance::SocialApproval,
            physiological: Arousal::Low,
            expression: Expression::SmileNodApprovingly,
            emotion: Some(E::Joy),
            intensity: IntensityLabel::Medium,
        },
        S::SocialRejection => AppraisalPath {
            valence: Valence::Negative,
            relevance: Relevance::SocialDisapproval,
            physiological: Arousal::Medium,
            expression: Expression::SadFaceAvoidEyeContact,
            emotion: Some(E::Sadness),
            intensity: IntensityLabel::Medium,
        },
        S::Unfairness => AppraisalPath {
            valence: Valence::Negative,
            relevance: Relevance::MoralViolation,
            physiological: Arousal::MediumHigh,
            expression: Expression::FrownDisapproval,
            emotion: Some(E::Anger),
            intensity: IntensityLabel::MediumHigh,
        },
        S::Betrayal => AppraisalPath {
            valence: Valence::Negative,
            relevance: Relevance::SocialBetrayal,
            physiological: Arousal::High,
            expression: Expression::SadAngerMixed,
            emotion: Some(E::Anger),
            intensity: IntensityLabel::High,
        },
        S::Disappointment => AppraisalPath {
            valence: Valence::Negative,
            relevance: Relevance::UnmetExpectation,
            physiological: Arousal::Low,
            expression: Expression::SadFaceSlight,
            emotion: Some(E::Sadness),
            intensity: IntensityLabel::Low,
        },
        S::Challenge => AppraisalPath {
            valence: Valence::Neutral,
            relevance: Relevance::TaskDifficulty,
            physiological: Arousal::Medium,
            expression: Expression::Concentration,
            emotion: Some(E::Anticipation),
            intensity: IntensityLabel::Medium,
        },
        S::Confusion => AppraisalPath {
            valence: Valence::Negative,
            relevance: Relevance::Uncertainty,
            physiological: Arousal::LowMedium,
            expression: Expression::ConfusedLook,
            emotion: Some(E::Fear),
            intensity: IntensityLabel::Low,
        },
        S::Boredom => AppraisalPath {
            valence: Valence::Negative,
            relevance: Relevance::LackOfStimulation,
            physiological: Arousal::VeryLow,
            expression: Expression::ListlessLookYawn,
            emotion: Some(E::Disgust),
            intensity: IntensityLabel::Low,
        },
        S::Overload => AppraisalPath {
            valence: Valence::Negative,
            relevance: Relevance::ProcessingLimitExceeded,
            physiological: Arousal::High,
            expression: Expression::StressedLook,
            emotion: Some(E::Fear),
            intensity: IntensityLabel::High,
        },
        S::Frustration => AppraisalPath {
            valence: Valence::Negative,
            relevance: Relevance::GoalBlockage,
            physiological: Arousal::MediumHigh,
            expression: Expression::FrownClenchedFist,
            emotion: Some(E::Anger),
            intensity: IntensityLabel::MediumHigh,
        },
        S::SocialConnection => AppraisalPath {
            valence: Valence::Positive,
            relevance: Relevance::SocialBonding,
            physiological: Arousal::Low,
            expression: Expression::WarmSmileRelaxed,
            emotion: Some(E::Trust),
            intensity: IntensityLabel::Medium,
        },
        S::Achievement => AppraisalPath {
            valence: Valence::Positive,
            relevance: Relevance::GoalAchieved,
            physiological: Arousal::Medium,
            expression: Expression::ProudSmile,
            emotion: Some(E::Joy),
            intensity: IntensityLabel::Medium,
        },
        S::Curiosity => AppraisalPath {
            valence: Valence::Neutral,
            relevance: Relevance::NewInformation,
            physiological: Arousal::Medium,
            expression: Expression::InterestedLook,
            emotion: Some(E::Anticipation),
            intensity: IntensityLabel::Medium,
        },
        S::Humor => AppraisalPath {
            valence: Valence::Positive,
            relevance: Relevance::Funny,
            physiological: Arousal::Medium,
            expression: Expression::SmileLaugh,
            emotion: Some(E::Joy),
            intensity: IntensityLabel::Medium,
        },
        S::ChallengeMet => AppraisalPath {
            valence: Valence::Positive,
            relevance: Relevance::TaskCompleted,
            physiological: Arousal::LowMedium,
            expression: Expression::SatisfiedSmile,
            emotion: Some(E::Joy),
            intensity: IntensityLabel::Medium,
        },
        S::SocialCue => AppraisalPath {
            valence: Valence::Positive,
            relevance: Relevance::SocialInteraction,
            physiological: Arousal::Low,
            expression: Expression::NeutralNod,
            emotion: Some(E::Trust),
            intensity: IntensityLabel::Low,
        },
        S::Reassurance => AppraisalPath {
            valence: Valence::Positive,
            relevance: Relevance::ThreatRemoved,
            physiological: Arousal::Lowered,
            expression: Expression::ReliefSmile,
            emotion: Some(E::Joy),
            intensity: IntensityLabel::Medium,
        },
        S::Comfort => AppraisalPath {
            valence: Valence::Positive,
            relevance: Relevance::Wellbeing,
            physiological: Arousal::VeryLow,
            expression: Expression::RelaxedSmile,
            emotion: Some(E::Joy),
            intensity: IntensityLabel::Low,
        },
        S::Gratitude => AppraisalPath {
            valence: Valence::Positive,
            relevance: Relevance::BenefitReceived,
            physiological: Arousal::Low,
            expression: Expression::GratefulSmile,
            emotion: Some(E::Trust),
            intensity: IntensityLabel::Medium,
        },
    }
}
