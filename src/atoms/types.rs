// ── RecoMate Atoms: Pure Data Types ────────────────────────────────────────
// All plain struct/enum definitions with no I/O and no side effects.
// Wire names mirror the persisted document layout, so every struct here
// round-trips through serde_json unchanged.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// ── Classification buckets ─────────────────────────────────────────────────

/// Coarse sentiment bucket derived from the compound sentiment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Positive,
    Negative,
    Neutral,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Positive => "positive",
            Mood::Negative => "negative",
            Mood::Neutral => "neutral",
        }
    }
}

/// Delivery-style bucket derived from the negative/positive score fractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Angry,
    Polite,
    Casual,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Angry => "angry",
            Tone::Polite => "polite",
            Tone::Casual => "casual",
        }
    }
}

/// Discrete conversational purpose label driving response routing.
/// The fixed candidate set handed to the zero-shot classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Feedback,
    Question,
    Statement,
    ComplexQuery,
    Recommendation,
}

impl Intent {
    pub const ALL: [Intent; 6] = [
        Intent::Greeting,
        Intent::Feedback,
        Intent::Question,
        Intent::Statement,
        Intent::ComplexQuery,
        Intent::Recommendation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Feedback => "feedback",
            Intent::Question => "question",
            Intent::Statement => "statement",
            Intent::ComplexQuery => "complex_query",
            Intent::Recommendation => "recommendation",
        }
    }
}

/// Recommendation domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Book,
    Movie,
    Music,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Book => "book",
            Category::Movie => "movie",
            Category::Music => "music",
        }
    }
}

/// Per-catalog-item mood classification used to match items to user mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Neutral,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Neutral => "neutral",
        }
    }

    /// "happy" → "Happy", for the trailing `Emotion:` template line.
    pub fn capitalized(&self) -> &'static str {
        match self {
            Emotion::Happy => "Happy",
            Emotion::Sad => "Sad",
            Emotion::Neutral => "Neutral",
        }
    }

    /// Mood → emotion tag mapping used when entering the selector.
    pub fn from_mood(mood: Mood) -> Emotion {
        match mood {
            Mood::Positive => Emotion::Happy,
            Mood::Negative => Emotion::Sad,
            Mood::Neutral => Emotion::Neutral,
        }
    }
}

// ── Sentiment scores ───────────────────────────────────────────────────────

/// Raw output of the sentiment scorer: a normalized compound score plus the
/// fraction of tokens that matched the positive / negative lexicons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScores {
    pub compound: f64,
    pub positive: f64,
    pub negative: f64,
}

// ── Per-user state ─────────────────────────────────────────────────────────

/// One chat exchange. Immutable once appended; lifetime bounded by the
/// 20-entry sliding window on `UserProfile::chat_history`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub user: String,
    pub bot: String,
    pub mood: Mood,
    pub tone: Tone,
    pub timestamp: String,
    /// User text truncated to 50 chars (with `...` appended when longer).
    pub topic: String,
    pub intent: Intent,
}

/// Liked / disliked / category preference sets. Stored as JSON arrays;
/// modeled as ordered sets so membership tests are exact and repeated
/// feedback on the same title stays idempotent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub liked: BTreeSet<String>,
    #[serde(default)]
    pub disliked: BTreeSet<String>,
    #[serde(default)]
    pub categories: BTreeSet<String>,
}

/// The per-user document. Created from the default scaffold on first
/// contact, mutated once per turn, written back whole.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub chat_history: Vec<ChatTurn>,
    #[serde(default)]
    pub preferences: Preferences,
    /// Anti-repeat memory: category name → titles already shown, insertion
    /// order, not deduplicated.
    #[serde(default)]
    pub previously_recommended: BTreeMap<String, Vec<String>>,
}

// ── Shared analytics log ───────────────────────────────────────────────────

/// One entry of the shared behavior log, appended per classified query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRecord {
    pub query: String,
    pub intent: Intent,
    pub mood: Mood,
    pub tone: Tone,
    pub timestamp: String,
}

/// The single shared analytics document, keyed `shared_data` in the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BehaviorLog {
    #[serde(default)]
    pub queries: Vec<QueryRecord>,
}
