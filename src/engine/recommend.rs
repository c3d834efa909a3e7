// RecoMate Engine — Recommendation Selector
//
// The core algorithm: category inference, exclusion filtering, rating-tier
// fallback, anti-repeat reset, response templating. Pure over its inputs
// apart from mutating the caller's profile (anti-repeat memory).
//
// Tier order is load-bearing:
//   exclusions → emotion filter → rating tiers → book sanitation →
//   anti-repeat reset → uniform pick
// and the rating tier-2 dead end terminates *before* the reset — a user
// who exhausted a rating band gets the "no results" message, never a
// reset. Kept as specified.

use crate::atoms::types::{Category, Emotion, UserProfile};
use crate::engine::catalog::{fmt_rating, Catalog, CatalogEntry};
use log::info;
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

use crate::atoms::constants::CATEGORY_KEYWORDS;

static RATING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\.?\d*)\s*rating").expect("static pattern"));

// ── Request parsing ────────────────────────────────────────────────────────

/// Decision table over the multi-language keyword sets, checked in
/// book → movie → music order. No match falls back to Book (latent quirk
/// preserved for compatibility — see DESIGN.md).
pub fn infer_category(message: &str) -> Category {
    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|k| message.contains(k)) {
            return *category;
        }
    }
    Category::Book
}

/// Extract an optional requested rating threshold, e.g. "4.5 rating".
pub fn parse_requested_rating(message: &str) -> Option<f64> {
    RATING_RE
        .captures(message)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

// ── Selector ───────────────────────────────────────────────────────────────

/// Run the full selection pipeline for one message. Always produces a
/// user-visible string; dead ends (empty catalog, rating band exhausted,
/// nothing left after reset) are messages, not errors.
pub fn recommend<R: Rng>(
    catalog: &Catalog,
    profile: &mut UserProfile,
    message: &str,
    requested_rating: Option<f64>,
    emotion: Emotion,
    rng: &mut R,
) -> String {
    let category = infer_category(message);
    match category {
        Category::Book => pick(&catalog.books, profile, category, requested_rating, emotion, rng),
        Category::Movie => pick(&catalog.movies, profile, category, requested_rating, emotion, rng),
        Category::Music => pick(&catalog.tracks, profile, category, requested_rating, emotion, rng),
    }
}

fn pick<T: CatalogEntry, R: Rng>(
    items: &[T],
    profile: &mut UserProfile,
    category: Category,
    requested_rating: Option<f64>,
    emotion: Emotion,
    rng: &mut R,
) -> String {
    if items.is_empty() {
        return "Sorry, I don't have recommendations for that category yet. Try asking for a book, movie, or music!".to_string();
    }

    let shown: Vec<String> = profile
        .previously_recommended
        .get(category.as_str())
        .cloned()
        .unwrap_or_default();

    // Exclusion set = disliked ∪ already shown in this category.
    let mut available: Vec<&T> = items
        .iter()
        .filter(|r| {
            r.emotion() == emotion
                && !profile.preferences.disliked.contains(r.title())
                && !shown.iter().any(|t| t.as_str() == r.title())
        })
        .collect();

    // Rating tiers, only when the user asked for one.
    if let Some(requested) = requested_rating {
        let tier1: Vec<&T> = available
            .iter()
            .copied()
            .filter(|r| r.rating() >= requested)
            .collect();
        if !tier1.is_empty() {
            available = tier1;
        } else {
            let relaxed = (requested - 0.5).max(0.0);
            available.retain(|r| r.rating() >= relaxed);
            if available.is_empty() {
                // Terminal: the anti-repeat reset is never attempted from here.
                return format!(
                    "No {} {}s found with a rating of {} or higher. Try a lower rating or a different category!",
                    emotion.as_str(),
                    category.as_str(),
                    fmt_rating(requested),
                );
            }
        }
    }

    // Data-quality guard for books: titles lost upstream surface as "nan".
    if category == Category::Book {
        available.retain(|r| is_clean_title(r.title()));
    }

    // Anti-repeat reset: drop the already-shown exclusion and retry.
    if available.is_empty() {
        profile
            .previously_recommended
            .entry(category.as_str().to_string())
            .or_default()
            .clear();
        info!("[recommend] Anti-repeat reset for category {}", category.as_str());

        available = items
            .iter()
            .filter(|r| {
                r.emotion() == emotion && !profile.preferences.disliked.contains(r.title())
            })
            .collect();
        if category == Category::Book {
            available.retain(|r| is_clean_title(r.title()));
        }
    }

    if available.is_empty() {
        return format!(
            "I've run out of {} {} recommendations. Try another category or emotion!",
            emotion.as_str(),
            category.as_str(),
        );
    }

    // Uniform pick over the survivors.
    let chosen = available[rng.gen_range(0..available.len())];
    profile
        .previously_recommended
        .entry(category.as_str().to_string())
        .or_default()
        .push(chosen.title().to_string());

    info!(
        "[recommend] {} pick: '{}' ({} candidates)",
        category.as_str(),
        chosen.title(),
        available.len()
    );
    chosen.describe()
}

fn is_clean_title(title: &str) -> bool {
    !title.is_empty() && !title.eq_ignore_ascii_case("nan")
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
