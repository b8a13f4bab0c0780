//! Core type definitions for the affect pipeline.
//!
//! Every vocabulary here is closed: stimulus categories, appraisal tags, and
//! response options are fixed at build time, which is what lets the catalog
//! lookup be total and the classifier be contractually exhaustive.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Unique identifier for one running appraisal session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Stimulus categories
// ---------------------------------------------------------------------------

/// A recognized situational class — the key into the pathway catalog.
///
/// The set is closed: the classifier can only ever emit one of these, and
/// the catalog has an appraisal path for every one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StimulusCategory {
    /// Generic positive input (group default before refinement).
    PositiveStimulus,
    /// Generic threat input (group default before refinement).
    NegativeStimulusThreat,
    /// Civic / institutional topics.
    SocialPositiveFeedback,
    /// Negative social feedback.
    SocialNegativeFeedback,
    /// Nothing matched — the classifier's total fallback.
    NeutralStimulus,
    /// Thought-provoking input.
    IntellectualStimulus,
    /// Music, art, beauty.
    AestheticPositive,
    /// Witnessed injustice (group default before refinement).
    MoralViolation,
    /// Explicit fear stimulus (horror / dark fiction route here too).
    Fear,
    /// Explicit sadness stimulus (group default before refinement).
    Sadness,
    /// Explicit joy stimulus.
    Joy,
    /// Provocation.
    Anger,
    /// Something offensive.
    Disgust,
    /// Unexpected event.
    Surprise,
    /// Positive social bond.
    Trust,
    /// Upcoming event.
    Anticipation,
    /// Bad news received.
    SadNews,
    /// Good news received.
    GoodNews,
    /// Imminent danger.
    ThreatImminent,
    /// Social offense directed at the agent.
    Insult,
    /// Praise or approval.
    SocialPraise,
    /// Social disapproval.
    SocialRejection,
    /// Perceived unfairness.
    Unfairness,
    /// Broken trust.
    Betrayal,
    /// Unmet expectation.
    Disappointment,
    /// Difficult task ahead.
    Challenge,
    /// Uncertainty about the situation.
    Confusion,
    /// Lack of stimulation.
    Boredom,
    /// Processing limit exceeded.
    Overload,
    /// Blocked goal.
    Frustration,
    /// Social bonding moment.
    SocialConnection,
    /// Goal achieved.
    Achievement,
    /// New information to explore.
    Curiosity,
    /// Something funny.
    Humor,
    /// Challenge overcome.
    ChallengeMet,
    /// Greeting or other baseline social interaction.
    SocialCue,
    /// Threat removed.
    Reassurance,
    /// Wellbeing and relaxation.
    Comfort,
    /// Benefit received.
    Gratitude,
}

impl StimulusCategory {
    /// Canonical snake_case key for this category, as it appears in logs
    /// and turn reports.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::PositiveStimulus => "positive_stimulus",
            Self::NegativeStimulusThreat => "negative_stimulus_threat",
            Self::SocialPositiveFeedback => "social_positive_feedback",
            Self::SocialNegativeFeedback => "social_negative_feedback",
            Self::NeutralStimulus => "neutral_stimulus",
            Self::IntellectualStimulus => "intellectual_stimulus",
            Self::AestheticPositive => "aesthetic_positive",
            Self::MoralViolation => "moral_violation",
            Self::Fear => "stimulus_fear",
            Self::Sadness => "stimulus_sadness",
            Self::Joy => "stimulus_joy",
            Self::Anger => "stimulus_anger",
            Self::Disgust => "stimulus_disgust",
            Self::Surprise => "stimulus_surprise",
            Self::Trust => "stimulus_trust",
            Self::Anticipation => "stimulus_anticipation",
            Self::SadNews => "stimulus_sad_news",
            Self::GoodNews => "stimulus_good_news",
            Self::ThreatImminent => "stimulus_threat_imminent",
            Self::Insult => "stimulus_insult",
            Self::SocialPraise => "stimulus_social_praise",
            Self::SocialRejection => "stimulus_social_rejection",
            Self::Unfairness => "stimulus_unfairness",
            Self::Betrayal => "stimulus_betrayal",
            Self::Disappointment => "stimulus_disappointment",
            Self::Challenge => "stimulus_challenge",
            Self::Confusion => "stimulus_confusion",
            Self::Boredom => "stimulus_boredom",
            Self::Overload => "stimulus_overload",
            Self::Frustration => "stimulus_frustration",
            Self::SocialConnection => "stimulus_social_connection",
            Self::Achievement => "stimulus_achievement",
            Self::Curiosity => "stimulus_curiosity",
            Self::Humor => "stimulus_humor",
            Self::ChallengeMet => "stimulus_challenge_met",
            Self::SocialCue => "stimulus_social_cue",
            Self::Reassurance => "stimulus_reassurance",
            Self::Comfort => "stimulus_comfort",
            Self::Gratitude => "stimulus_gratitude",
        }
    }

    /// Every defined category, in catalog order. Used by totality tests.
    pub const ALL: [Self; 39] = [
        Self::PositiveStimulus,
        Self::NegativeStimulusThreat,
        Self::SocialPositiveFeedback,
        Self::SocialNegativeFeedback,
        Self::NeutralStimulus,
        Self::IntellectualStimulus,
        Self::AestheticPositive,
        Self::MoralViolation,
        Self::Fear,
        Self::Sadness,
        Self::Joy,
        Self::Anger,
        Self::Disgust,
        Self::Surprise,
        Self::Trust,
        Self::Anticipation,
        Self::SadNews,
        Self::GoodNews,
        Self::ThreatImminent,
        Self::Insult,
        Self::SocialPraise,
        Self::SocialRejection,
        Self::Unfairness,
        Self::Betrayal,
        Self::Disappointment,
        Self::Challenge,
        Self::Confusion,
        Self::Boredom,
        Self::Overload,
        Self::Frustration,
        Self::SocialConnection,
        Self::Achievement,
        Self::Curiosity,
        Self::Humor,
        Self::ChallengeMet,
        Self::SocialCue,
        Self::Reassurance,
        Self::Comfort,
        Self::Gratitude,
    ];
}

impl fmt::Display for StimulusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// Emotion model — Plutchik primaries
// ---------------------------------------------------------------------------

/// One of the eight Plutchik primary emotions.
///
/// These are the axes of the per-session intensity vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionCategory {
    /// Joy.
    Joy,
    /// Sadness.
    Sadness,
    /// Anger.
    Anger,
    /// Fear.
    Fear,
    /// Trust.
    Trust,
    /// Disgust.
    Disgust,
    /// Anticipation.
    Anticipation,
    /// Surprise.
    Surprise,
}

impl EmotionCategory {
    /// All eight categories in canonical order.
    pub const ALL: [Self; 8] = [
        Self::Joy,
        Self::Sadness,
        Self::Anger,
        Self::Fear,
        Self::Trust,
        Self::Disgust,
        Self::Anticipation,
        Self::Surprise,
    ];

    /// Stable index into the intensity vector.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Joy => 0,
            Self::Sadness => 1,
            Self::Anger => 2,
            Self::Fear => 3,
            Self::Trust => 4,
            Self::Disgust => 5,
            Self::Anticipation => 6,
            Self::Surprise => 7,
        }
    }
}

impl fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Joy => "JOY",
            Self::Sadness => "SADNESS",
            Self::Anger => "ANGER",
            Self::Fear => "FEAR",
            Self::Trust => "TRUST",
            Self::Disgust => "DISGUST",
            Self::Anticipation => "ANTICIPATION",
            Self::Surprise => "SURPRISE",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Appraisal vocabularies
// ---------------------------------------------------------------------------

/// Appraised valence of a stimulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Valence {
    /// Positive valence.
    Positive,
    /// Negative valence.
    Negative,
    /// Neutral valence.
    Neutral,
}

/// What the stimulus is relevant to — the appraisal's "why it matters" tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Relevance {
    Goal,
    GoalAchieved,
    GoalBlockage,
    Threat,
    ThreatRemoved,
    ImminentDanger,
    Social,
    SocialBond,
    SocialBonding,
    SocialInteraction,
    SocialApproval,
    SocialDisapproval,
    SocialOffense,
    SocialBetrayal,
    Moral,
    MoralViolation,
    Loss,
    UnmetExpectation,
    UnexpectedEvent,
    FutureEvent,
    Cognitive,
    NewInformation,
    Uncertainty,
    TaskDifficulty,
    TaskCompleted,
    LackOfStimulation,
    ProcessingLimitExceeded,
    OffensiveAgent,
    OffensiveObject,
    Aesthetic,
    Funny,
    Wellbeing,
    BenefitReceived,
    None,
}

/// Physiological arousal level tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Arousal {
    None,
    VeryLow,
    Low,
    LowMedium,
    Medium,
    MediumHigh,
    High,
    VeryHigh,
    /// Arousal actively dropping (reassurance after a threat).
    Lowered,
}

/// Outward expression tag associated with an appraisal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Expression {
    Neutral,
    NeutralNod,
    Smile,
    SmileNod,
    SmileNodApprovingly,
    SmileLaugh,
    WideSmileLaugh,
    WarmSmileEyeContact,
    WarmSmileRelaxed,
    BrightSmileExcited,
    ProudSmile,
    SatisfiedSmile,
    ReliefSmile,
    RelaxedSmile,
    GratefulSmile,
    Appreciation,
    Thinking,
    Concentration,
    AttentiveLook,
    InterestedLook,
    ConfusedLook,
    ListlessLookYawn,
    StressedLook,
    PanickedLook,
    EyesWidenMouthOpen,
    EyebrowsRaisedMouthOpenSlightly,
    Frown,
    FrownShakeHead,
    FrownGlare,
    FrownDisapproval,
    FrownClenchedJaw,
    FrownClenchedFist,
    AngerFrown,
    NoseWrinkleLipCurl,
    SadFace,
    SadFaceSlight,
    SadFaceTears,
    SadFaceAvoidEyeContact,
    SadAngerMixed,
}

/// Coarse magnitude tag attached to an appraisal path.
///
/// Converted to a numeric base value by the emotion state engine; see
/// [`IntensityLabel::magnitude`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum IntensityLabel {
    None,
    VeryLow,
    Low,
    Medium,
    MediumHigh,
    High,
    VeryHigh,
}

impl IntensityLabel {
    /// Resolve this label to a numeric intensity contribution.
    ///
    /// `multiplier` applies only to the Medium/High/VeryHigh labels.
    /// `None` and `MediumHigh` contribute nothing — the magnitude table has
    /// never mapped them, and downstream behavior depends on that.
    #[must_use]
    pub fn magnitude(self, multiplier: f32) -> f32 {
        match self {
            Self::VeryLow => 0.1,
            Self::Low => 0.2,
            Self::Medium => 0.35 * multiplier,
            Self::High => 0.6 * multiplier,
            Self::VeryHigh => 0.85 * multiplier,
            Self::None | Self::MediumHigh => 0.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Decision vocabulary
// ---------------------------------------------------------------------------

/// One of the three response options the decision engine chooses between.
///
/// The declaration order is the tie-break order: when two options score
/// equally, the earlier one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseOption {
    /// Option A.
    A,
    /// Option B.
    B,
    /// Option C.
    C,
}

impl ResponseOption {
    /// All options in tie-break order.
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    /// Stable index into a score map.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
        }
    }
}

impl fmt::Display for ResponseOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::A => "Option A",
            Self::B => "Option B",
            Self::C => "Option C",
        };
        f.write_str(name)
    }
}

/// Recorded outcome of a past decision, fed back into the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Went well.
    Positive,
    /// Neither good nor bad.
    Neutral,
    /// Went badly.
    Negative,
}

/// Per-option numeric priority scores, recomputed every turn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreMap([f32; 3]);

impl ScoreMap {
    /// Create a score map with all options at zero.
    #[must_use]
    pub fn zero() -> Self {
        Self([0.0; 3])
    }

    /// Create a score map from explicit per-option values.
    #[must_use]
    pub fn new(a: f32, b: f32, c: f32) -> Self {
        Self([a, b, c])
    }

    /// Current score for an option.
    #[must_use]
    pub fn get(&self, option: ResponseOption) -> f32 {
        self.0[option.index()]
    }

    /// Add a (possibly negative) adjustment to an option's score.
    pub fn adjust(&mut self, option: ResponseOption, delta: f32) {
        self.0[option.index()] += delta;
    }

    /// Highest-scoring option. Ties resolve to the earliest option in
    /// [`ResponseOption::ALL`] order; the strict comparison guarantees that.
    #[must_use]
    pub fn argmax(&self) -> ResponseOption {
        let mut best = ResponseOption::A;
        for option in ResponseOption::ALL {
            if OrderedFloat(self.get(option)) > OrderedFloat(self.get(best)) {
                best = option;
            }
        }
        best
    }

    /// Iterate `(option, score)` pairs in tie-break order.
    pub fn iter(&self) -> impl Iterator<Item = (ResponseOption, f32)> + '_ {
        ResponseOption::ALL.into_iter().map(|o| (o, self.get(o)))
    }
}
