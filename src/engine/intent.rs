// RecoMate Engine — Intent Classifier
//
// Two stages:
//   1. A zero-shot classifier ranks the fixed candidate label set. The
//      model sits behind `IntentModel` so a remote classifier can be
//      swapped in; the built-in implementation is keyword-scored —
//      fast and deterministic.
//   2. Deterministic overrides: recommendation keywords force the
//      recommendation intent (beats everything, including length), then
//      long non-greeting messages become complex_query.
//
// Model failures are request-fatal — no degraded guess is attempted.

use crate::atoms::constants::RECOMMENDATION_KEYWORDS;
use crate::atoms::error::ServiceResult;
use crate::atoms::types::Intent;
use async_trait::async_trait;

// ── Model seam ─────────────────────────────────────────────────────────────

/// Zero-shot classification over `Intent::ALL`. Implementations return the
/// top-ranked label only; confidence never leaves the model.
#[async_trait]
pub trait IntentModel: Send + Sync {
    async fn classify(&self, message: &str) -> ServiceResult<Intent>;
}

// ── Built-in keyword model ─────────────────────────────────────────────────

/// Keyword-scored stand-in for a hosted zero-shot model. Scores each
/// candidate label from surface cues and returns the max; ties resolve in
/// `Intent::ALL` order.
pub struct KeywordIntentModel;

#[async_trait]
impl IntentModel for KeywordIntentModel {
    async fn classify(&self, message: &str) -> ServiceResult<Intent> {
        Ok(rank(message))
    }
}

fn rank(message: &str) -> Intent {
    let m = message.to_lowercase();
    let words = m.split_whitespace().count();

    let mut best = Intent::Statement;
    let mut best_score = 0.0_f32;

    for intent in Intent::ALL {
        let score = label_score(&m, words, intent);
        if score > best_score {
            best = intent;
            best_score = score;
        }
    }
    best
}

fn label_score(m: &str, words: usize, intent: Intent) -> f32 {
    match intent {
        Intent::Greeting => {
            let mut s = 0.0;
            if starts_with_any(m, &["hello", "hi ", "hey", "good morning", "good evening", "good afternoon"])
                || m == "hi"
            {
                s += 0.8;
            }
            if contains_any(m, &["how are you", "nice to meet"]) {
                s += 0.4;
            }
            s
        }
        Intent::Feedback => {
            let mut s = 0.0;
            if contains_any(m, &["thank", "thanks", "feedback", "loved it", "liked it", "well done", "good job"]) {
                s += 0.6;
            }
            s
        }
        Intent::Question => {
            let mut s = 0.0;
            if starts_with_any(m, &["what", "who", "when", "where", "why", "how", "is ", "are ", "can ", "do ", "does "]) {
                s += 0.5;
            }
            if m.contains('?') {
                s += 0.3;
            }
            s
        }
        Intent::Recommendation => {
            let mut s = 0.0;
            if contains_any(m, &["recommend", "suggest", "suggestion", "pick me", "what should i read", "what should i watch", "what should i listen"]) {
                s += 0.9;
            }
            s
        }
        Intent::ComplexQuery => {
            // Length alone is a weak cue; the hard override in `classify`
            // is what actually routes long messages here.
            if words > 12 { 0.2 } else { 0.0 }
        }
        // Fallback label: always in the running with a floor score.
        Intent::Statement => 0.1,
    }
}

fn starts_with_any(s: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|p| s.starts_with(p))
}

fn contains_any(s: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| s.contains(t))
}

// ── Override stage ─────────────────────────────────────────────────────────

/// Classify with the model, then apply the deterministic overrides in
/// order. A long message that also carries a recommendation keyword is
/// still routed to recommendation.
pub async fn classify(model: &dyn IntentModel, message: &str) -> ServiceResult<Intent> {
    let mut intent = model.classify(message).await?;

    if RECOMMENDATION_KEYWORDS.iter().any(|k| message.contains(k)) {
        intent = Intent::Recommendation;
    }

    if !matches!(intent, Intent::Greeting | Intent::Recommendation)
        && message.split_whitespace().count() > 5
    {
        intent = Intent::ComplexQuery;
    }

    Ok(intent)
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
