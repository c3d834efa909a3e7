// RecoMate Engine — Sentiment / Tone / Profanity Analyzer
//
// Lexicon-based affective scoring over the English-normalized message.
// No ML model required — pure heuristics, sub-millisecond latency.
//
// Pipeline: tokens → valence per token (with negation flip) →
//   compound = s / sqrt(s² + 15)   (bounded to (-1, 1))
//   mood     = positive > 0.1, negative < -0.1, else neutral
//   tone     = angry if neg fraction > 0.3, else polite if pos > 0.3,
//              else casual (angry wins when both hold)

use crate::atoms::constants::PROFANITY_DENYLIST;
use crate::atoms::types::{Mood, SentimentScores, Tone};
use regex::Regex;
use std::sync::LazyLock;

// ── Lexicons ───────────────────────────────────────────────────────────────

/// Positive markers → +1 valence.
const POSITIVE_MARKERS: &[&str] = &[
    "thank", "thanks", "awesome", "great", "perfect", "love", "amazing",
    "excellent", "wonderful", "fantastic", "brilliant", "beautiful", "happy",
    "glad", "appreciate", "helpful", "nice", "good", "impressive", "superb",
    "outstanding", "delighted", "pleased", "excited", "fun", "enjoy", "best",
    "kind", "cool", "like",
];

/// Negative markers → -1 valence.
const NEGATIVE_MARKERS: &[&str] = &[
    "frustrated", "annoying", "broken", "terrible", "hate", "awful",
    "horrible", "worst", "angry", "disappointing", "failed", "sad", "upset",
    "stuck", "confused", "wrong", "impossible", "disaster", "nightmare",
    "pain", "suffer", "struggling", "helpless", "furious", "rage",
    "disgusting", "pathetic", "useless", "waste", "bad", "boring", "depressed",
    "lonely", "miserable", "unhappy", "cry",
];

/// Tokens that flip the valence of the marker that follows them.
const NEGATORS: &[&str] = &["not", "no", "never", "dont", "don't", "isnt", "isn't", "cant", "can't"];

/// Compound-score normalization constant (keeps short messages from
/// saturating at ±1).
const NORMALIZATION_ALPHA: f64 = 15.0;

static PROFANITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"(?i)\b({})\b", PROFANITY_DENYLIST.join("|"));
    Regex::new(&pattern).expect("profanity pattern is static and valid")
});

// ── Scoring ────────────────────────────────────────────────────────────────

/// Score a message: compound in (-1, 1) plus positive/negative token
/// fractions over the whole token count.
pub fn score(message: &str) -> SentimentScores {
    let tokens: Vec<String> = message
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'').to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.is_empty() {
        return SentimentScores { compound: 0.0, positive: 0.0, negative: 0.0 };
    }

    let mut sum = 0.0_f64;
    let mut pos_hits = 0usize;
    let mut neg_hits = 0usize;

    for (i, token) in tokens.iter().enumerate() {
        let mut valence = if POSITIVE_MARKERS.contains(&token.as_str()) {
            1.0
        } else if NEGATIVE_MARKERS.contains(&token.as_str()) {
            -1.0
        } else {
            continue;
        };

        // "not good" scores like "bad"
        if i > 0 && NEGATORS.contains(&tokens[i - 1].as_str()) {
            valence = -valence;
        }

        sum += valence;
        if valence > 0.0 {
            pos_hits += 1;
        } else {
            neg_hits += 1;
        }
    }

    let total = tokens.len() as f64;
    SentimentScores {
        compound: sum / (sum * sum + NORMALIZATION_ALPHA).sqrt(),
        positive: pos_hits as f64 / total,
        negative: neg_hits as f64 / total,
    }
}

/// Compound score → coarse mood bucket.
pub fn mood_of(scores: &SentimentScores) -> Mood {
    if scores.compound > 0.1 {
        Mood::Positive
    } else if scores.compound < -0.1 {
        Mood::Negative
    } else {
        Mood::Neutral
    }
}

/// Score fractions → delivery tone. The angry check runs first, so a
/// message that clears both thresholds reads as angry.
pub fn tone_of(scores: &SentimentScores) -> Tone {
    if scores.negative > 0.3 {
        Tone::Angry
    } else if scores.positive > 0.3 {
        Tone::Polite
    } else {
        Tone::Casual
    }
}

/// Whole-word, case-insensitive denylist check.
pub fn contains_profanity(message: &str) -> bool {
    PROFANITY_RE.is_match(message)
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_message_is_positive_and_polite() {
        let s = score("i love this amazing book");
        assert!(s.compound > 0.1, "compound {} should exceed 0.1", s.compound);
        assert_eq!(mood_of(&s), Mood::Positive);
        assert_eq!(tone_of(&s), Tone::Polite);
    }

    #[test]
    fn negative_message_is_negative_and_angry() {
        let s = score("i hate this terrible awful thing");
        assert!(s.compound < -0.1);
        assert_eq!(mood_of(&s), Mood::Negative);
        assert_eq!(tone_of(&s), Tone::Angry);
    }

    #[test]
    fn plain_request_is_neutral_casual() {
        let s = score("recommend a book with a 4.5 rating");
        assert_eq!(mood_of(&s), Mood::Neutral);
        assert_eq!(tone_of(&s), Tone::Casual);
    }

    #[test]
    fn angry_wins_when_both_fractions_clear() {
        let s = score("love great hate awful");
        assert!(s.positive > 0.3 && s.negative > 0.3);
        assert_eq!(tone_of(&s), Tone::Angry);
    }

    #[test]
    fn negation_flips_valence() {
        let s = score("not good at all");
        assert!(s.compound < 0.0, "negated positive should score negative");
    }

    #[test]
    fn profanity_whole_word_only() {
        assert!(contains_profanity("what the fuck is this"));
        assert!(contains_profanity("DAMN it"));
        // substring inside a longer word does not match
        assert!(!contains_profanity("the shittake mushroom"));
        assert!(!contains_profanity("a scunthorpe problem"));
    }
}
