//! Keyword classifier — free-form text → stimulus category.
//!
//! The classifier is an ordered decision list expressed as data: a fixed
//! sequence of rule groups, each with a trigger keyword set, a default
//! category, and ordered refinement rules. The first group whose trigger set
//! matches wins; within it, the first matching refinement wins, falling back
//! to the group default. Group order is load-bearing — keyword sets overlap
//! across groups ("challenge" appears in both the positive and cognitive
//! groups) and earlier groups take precedence.
//!
//! The classifier is total: input that matches nothing classifies as
//! [`StimulusCategory::NeutralStimulus`].

use tracing::debug;

use crate::types::StimulusCategory;

/// A refinement rule inside a group: first match wins.
#[derive(Debug)]
struct Refinement {
    keywords: &'static [&'static str],
    category: StimulusCategory,
}

/// One precedence group of the decision list.
#[derive(Debug)]
struct RuleGroup {
    /// Any substring match here selects this group.
    trigger: &'static [&'static str],
    /// Category when no refinement matches.
    default: StimulusCategory,
    /// Ordered refinements; overlapping keyword sets are expected and the
    /// earliest match is the contract.
    refinements: &'static [Refinement],
}

/// The full ordered decision list. Keyword lists are reproduced exactly from
/// the pathway design; do not sort, dedupe, or "clean up" entries.
static GROUPS: &[RuleGroup] = &[
    // 1. Positive / approval
    RuleGroup {
        trigger: &[
            "excellent",
            "good job",
            "doing well",
            "validated",
            "praise",
            "thank you",
            "joyful",
            "won an award",
            "surprise party",
            "good news",
            "social praise",
            "challenge met",
            "social connection",
            "achievement",
            "humor",
            "comfort",
            "gratitude",
            "reassurance",
        ],
        default: StimulusCategory::PositiveStimulus,
        refinements: &[
            Refinement {
                keywords: &[
                    "excellent",
                    "good job",
                    "doing well",
                    "validated",
                    "praise",
                    "social praise",
                    "thank you",
                    "gratitude",
                ],
                category: StimulusCategory::SocialPraise,
            },
            Refinement {
                keywords: &["joyful", "won award", "good news"],
                category: StimulusCategory::GoodNews,
            },
            Refinement {
                keywords: &["surprise party", "surprise"],
                category: StimulusCategory::Surprise,
            },
            Refinement {
                keywords: &["challenge met"],
                category: StimulusCategory::ChallengeMet,
            },
            Refinement {
                keywords: &["social connection"],
                category: StimulusCategory::SocialConnection,
            },
            Refinement {
                keywords: &["achievement"],
                category: StimulusCategory::Achievement,
            },
            Refinement {
                keywords: &["humor"],
                category: StimulusCategory::Humor,
            },
            Refinement {
                keywords: &["comfort"],
                category: StimulusCategory::Comfort,
            },
            Refinement {
                keywords: &["reassurance"],
                category: StimulusCategory::Reassurance,
            },
        ],
    },
    // 2. Threat / fear
    RuleGroup {
        trigger: &[
            "scary",
            "threat",
            "danger",
            "fear",
            "scared",
            "afraid",
            "threat imminent",
            "overload",
            "confusion",
        ],
        default: StimulusCategory::NegativeStimulusThreat,
        refinements: &[
            Refinement {
                keywords: &[
                    "scary threat",
                    "threat imminent",
                    "danger",
                    "threat",
                    "fear",
                    "afraid",
                ],
                category: StimulusCategory::ThreatImminent,
            },
            Refinement {
                keywords: &["confusion"],
                category: StimulusCategory::Confusion,
            },
            Refinement {
                keywords: &["overload"],
                category: StimulusCategory::Overload,
            },
        ],
    },
    // 3. Loss / sadness
    RuleGroup {
        trigger: &[
            "sad",
            "loss",
            "disappointed",
            "sad news",
            "betrayal",
            "social rejection",
            "boredom",
            "disappointment",
        ],
        default: StimulusCategory::Sadness,
        refinements: &[
            Refinement {
                keywords: &["sad news", "loss", "sad"],
                category: StimulusCategory::SadNews,
            },
            Refinement {
                keywords: &["betrayal"],
                category: StimulusCategory::Betrayal,
            },
            Refinement {
                keywords: &["social rejection"],
                category: StimulusCategory::SocialRejection,
            },
            Refinement {
                keywords: &["boredom"],
                category: StimulusCategory::Boredom,
            },
            Refinement {
                keywords: &["disappointment", "disappointed"],
                category: StimulusCategory::Disappointment,
            },
        ],
    },
    // 4. Anger / disgust / unfairness
    RuleGroup {
        trigger: &[
            "angry",
            "insult",
            "unfair",
            "frustrated",
            "anger",
            "disgust",
            "disgusting",
            "moral violation",
            "stimulus_anger",
            "stimulus_disgust",
            "unfairness",
            "frustration",
        ],
        default: StimulusCategory::MoralViolation,
        refinements: &[
            Refinement {
                keywords: &["angry", "insult", "anger", "stimulus_anger"],
                category: StimulusCategory::Insult,
            },
            Refinement {
                keywords: &["unfair", "unfairness", "moral violation"],
                category: StimulusCategory::Unfairness,
            },
            Refinement {
                keywords: &["disgust", "disgusting", "stimulus_disgust"],
                category: StimulusCategory::Disgust,
            },
            Refinement {
                keywords: &["frustrated", "frustration"],
                category: StimulusCategory::Frustration,
            },
        ],
    },
    // 5. Cognitive / curiosity
    RuleGroup {
        trigger: &["interesting", "question", "intellectual", "curious", "challenge"],
        default: StimulusCategory::IntellectualStimulus,
        refinements: &[
            Refinement {
                keywords: &["interesting question", "question", "intellectual"],
                category: StimulusCategory::IntellectualStimulus,
            },
            Refinement {
                keywords: &["curious", "curiosity"],
                category: StimulusCategory::Curiosity,
            },
            Refinement {
                keywords: &["challenge"],
                category: StimulusCategory::Challenge,
            },
        ],
    },
    // 6. Aesthetic
    RuleGroup {
        trigger: &["mozart", "music", "aesthetic", "beautiful", "art", "song"],
        default: StimulusCategory::AestheticPositive,
        refinements: &[],
    },
    // 7. Civic / legal
    RuleGroup {
        trigger: &[
            "constitution",
            "law",
            "government",
            "justice",
            "liberty",
            "tranquility",
            "welfare",
        ],
        default: StimulusCategory::SocialPositiveFeedback,
        refinements: &[],
    },
    // 8. Religious / scriptural
    RuleGroup {
        trigger: &[
            "bible",
            "king james version",
            "genesis",
            "exodus",
            "psalms",
            "gospels",
            "revelation",
            "christian",
        ],
        default: StimulusCategory::IntellectualStimulus,
        refinements: &[],
    },
    // 9. Horror / dark fiction
    RuleGroup {
        trigger: &[
            "tell-tale heart",
            "edgar allan poe",
            "horror",
            "dark",
            "disturbing",
            "unsettling",
            "madness",
            "murder",
            "fearful",
            "vulture eye",
        ],
        default: StimulusCategory::Fear,
        refinements: &[],
    },
    // 10. Greeting
    RuleGroup {
        trigger: &["hello", "hi", "greetings", "how are you", "cadence", "gemini"],
        default: StimulusCategory::SocialCue,
        refinements: &[],
    },
];

/// Classify free-form input text into exactly one stimulus category.
///
/// Matching is case-insensitive substring search. Deterministic: the same
/// text always yields the same category.
#[must_use]
pub fn classify(text: &str) -> StimulusCategory {
    let lower = text.to_lowercase();

    for group in GROUPS {
        if !group.trigger.iter().any(|k| lower.contains(k)) {
            continue;
        }
        let category = group
            .refinements
            .iter()
            .find(|r| r.keywords.iter().any(|k| lower.contains(k)))
            .map_or(group.default, |r| r.category);
        debug!(category = %category, "stimulus classified");
        return category;
    }

    debug!("no keyword match, neutral stimulus");
    StimulusCategory::NeutralStimulus
}
