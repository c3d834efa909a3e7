// ── RecoMate Atoms: Constants ──────────────────────────────────────────────
// Fixed response text, keyword decision tables, and the static knowledge
// base. All user-facing English text lives here so the engine modules stay
// free of string literals.

use super::types::{Category, Intent};

// ── Validation / welcome text ──────────────────────────────────────────────

pub const INVALID_QUERY_REPLY: &str = "Sorry, your query seems unclear or contains repetitive text. Please ask for a specific recommendation, like a book, movie, or music!";

pub const WELCOME_NEW_USER: &str = "Welcome to RecoMate! I'm here to recommend books, movies, and music. What would you like a recommendation for? \u{1F60A}";

pub const WELCOME_RETURNING_USER: &str = "Welcome back to RecoMate! Ready for some great recommendations? \u{1F917}";

// ── Canned replies, one pool per routing branch ────────────────────────────
// Pools are arrays so a branch can grow variants without touching the
// routing code; selection is a uniform pick.

pub const GREETING_REPLIES: &[&str] =
    &["Hey there! What recommendation can I find for you today? \u{1F60A}"];

pub const QUESTION_REPLIES: &[&str] = &[
    "That's an interesting question! I can help with recommendations\u{2014}would you like a book, movie, or music suggestion? \u{1F60A}",
];

pub const STATEMENT_REPLIES: &[&str] =
    &["Thanks for sharing! How about a recommendation to explore something new? \u{1F917}"];

pub const FEEDBACK_REPLIES: &[&str] =
    &["Thanks for your feedback! It helps me improve. \u{1F60A}"];

pub const PROFANITY_REPLIES: &[&str] = &[
    "Let's keep things friendly! Try asking for a book, movie, or music recommendation. \u{1F60A}",
];

pub const NEGATIVE_MOOD_REPLIES: &[&str] = &[
    "I'm sorry you're feeling down. How about a recommendation to cheer you up? \u{1F60A}",
];

pub const COMPLEX_QUERY_REPLIES: &[&str] = &[
    "That sounds like a complex topic! I'm best at recommending books, movies, and music\u{2014}would you like a suggestion? \u{1F60A}",
];

/// Canned pool for a classified intent. Recommendation has no pool — that
/// branch always runs the selector.
pub fn replies_for_intent(intent: Intent) -> &'static [&'static str] {
    match intent {
        Intent::Greeting => GREETING_REPLIES,
        Intent::Question => QUESTION_REPLIES,
        Intent::Feedback => FEEDBACK_REPLIES,
        Intent::ComplexQuery => COMPLEX_QUERY_REPLIES,
        Intent::Statement | Intent::Recommendation => STATEMENT_REPLIES,
    }
}

// ── Tone / mood wrappers ───────────────────────────────────────────────────

pub const ANGRY_PREFIX: &str = "I'm sorry if I upset you! ";
pub const POLITE_PREFIX: &str = "Thank you for your kind words! ";
pub const CHEER_UP_SUFFIX: &str = " How about a fun recommendation? \u{1F60A}";

// ── Profanity denylist ─────────────────────────────────────────────────────
// Matched as whole words, case-insensitive.

pub const PROFANITY_DENYLIST: &[&str] = &["fuck", "shit", "damn", "bitch", "asshole"];

// ── Intent override keywords ───────────────────────────────────────────────
// Any of these anywhere in the (English-normalized) message forces the
// recommendation intent, regardless of the classifier output. The set is
// multi-language: English, French, Hindi.

pub const RECOMMENDATION_KEYWORDS: &[&str] = &[
    "recommend",
    "recommander",
    "recommend a",
    "suggest",
    "\u{905}\u{928}\u{941}\u{936}\u{902}\u{938}\u{93E}", // अनुशंसा
    "\u{938}\u{941}\u{91D}\u{93E}\u{935}",               // सुझाव
];

// ── Category decision table ────────────────────────────────────────────────
// Checked in order; the first category whose keyword set matches wins.
// When nothing matches the selector falls back to Book — a latent quirk
// kept for compatibility, see DESIGN.md.

pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Book,
        &["book", "livre", "\u{92A}\u{941}\u{938}\u{94D}\u{924}\u{915}"], // पुस्तक
    ),
    (
        Category::Movie,
        &["movie", "film", "\u{92B}\u{93F}\u{932}\u{94D}\u{92E}"], // फिल्म
    ),
    (
        Category::Music,
        &["music", "song", "\u{938}\u{902}\u{917}\u{940}\u{924}"], // संगीत
    ),
];

// ── Static knowledge base ──────────────────────────────────────────────────
// Consulted only for greeting/question intents; the first key that is a
// substring of the message supplies the answer. Plain substring match —
// order matters, so keep more specific phrasings first.

pub const KNOWLEDGE_BASE: &[(&str, &str)] = &[
    ("what is the capital of france", "The capital of France is Paris."),
    (
        "how to stay productive",
        "Try using the Pomodoro technique: work for 25 minutes, then take a 5-minute break.",
    ),
    (
        "tell me a joke",
        "Why did the computer go to school? Because it wanted to improve its *byte*!",
    ),
    (
        "who is elon musk",
        "Elon Musk is a billionaire entrepreneur, CEO of Tesla, SpaceX, and xAI, known for his work in electric vehicles, space travel, and AI.",
    ),
    (
        "what is python",
        "Python is a high-level, interpreted programming language known for its readability and versatility, widely used in web development, data science, and AI.",
    ),
    (
        "how does gravity work",
        "Gravity is a fundamental force that attracts objects towards each other, proportional to their mass and inversely proportional to the distance squared.",
    ),
    (
        "what is the weather like",
        "I don't have real-time weather data, but I can explain weather patterns or recommend indoor activities!",
    ),
    (
        "what is ai",
        "Artificial Intelligence (AI) refers to computer systems that perform tasks requiring human intelligence, like learning or problem-solving.",
    ),
    (
        "how to cook pasta",
        "Boil water with a pinch of salt, add pasta, cook for 8-12 minutes until al dente, then drain and serve with sauce.",
    ),
    (
        "what is the meaning of life",
        "The meaning of life varies for everyone! Many find it in pursuing personal purpose or happiness.",
    ),
    (
        "what is machine learning",
        "Machine learning is a subset of AI where computers learn from data to make predictions without explicit programming.",
    ),
    (
        "what is the largest planet",
        "Jupiter is the largest planet in our solar system, with a diameter of about 139,820 kilometers.",
    ),
    (
        "hello",
        "Hey there! How can I assist you today? Maybe a book, movie, or music recommendation? \u{1F60A}",
    ),
    (
        "how are you",
        "I'm great! Thanks for asking. Is there anything I can help you with?",
    ),
];

// ── History window ─────────────────────────────────────────────────────────

/// Sliding-window cap on `chat_history`: oldest entries drop on overflow.
pub const CHAT_HISTORY_CAP: usize = 20;

/// Topic field truncation length.
pub const TOPIC_MAX_CHARS: usize = 50;

/// Validation cap on message word count.
pub const MAX_MESSAGE_WORDS: usize = 50;
