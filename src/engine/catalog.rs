// RecoMate Engine — Catalog
//
// Read-only, process-lifetime-immutable item records, one typed shape per
// category. Extraction and cleaning from tabular sources happen upstream;
// this module only deserializes already-typed records from JSON files and
// derives the valence emotion tag for tracks.
//
// Identity key is the category-specific title field.

use crate::atoms::error::ServiceResult;
use crate::atoms::types::Emotion;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ── Records ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    /// Rendered verbatim in the `Category:` line (e.g. `['Fantasy']`).
    pub category_tags: String,
    pub summary: String,
    pub year: i32,
    pub rating: f64,
    pub emotion: Emotion,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub director: String,
    pub genres: String,
    pub description: String,
    pub year: i32,
    pub rating: f64,
    pub emotion: Emotion,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackRecord {
    pub name: String,
    pub artists: String,
    pub year: i32,
    /// Musical positiveness in [0, 1]; the emotion tag derives from it.
    pub valence: f64,
}

impl TrackRecord {
    pub fn emotion(&self) -> Emotion {
        emotion_from_valence(self.valence)
    }
}

/// Valence → emotion tag: below 0.3 sad, above 0.7 happy, else neutral.
pub fn emotion_from_valence(valence: f64) -> Emotion {
    if valence < 0.3 {
        Emotion::Sad
    } else if valence > 0.7 {
        Emotion::Happy
    } else {
        Emotion::Neutral
    }
}

// ── Uniform view for the selector ──────────────────────────────────────────

/// What the selector needs from any record: identity, emotion tag, rating,
/// and the formatted multi-line description.
pub trait CatalogEntry {
    fn title(&self) -> &str;
    fn emotion(&self) -> Emotion;
    /// Tracks carry no rating; they report 0.0 so any requested rating
    /// above 0.5 filters them out.
    fn rating(&self) -> f64;
    fn describe(&self) -> String;
}

impl CatalogEntry for BookRecord {
    fn title(&self) -> &str {
        &self.title
    }
    fn emotion(&self) -> Emotion {
        self.emotion
    }
    fn rating(&self) -> f64 {
        self.rating
    }
    fn describe(&self) -> String {
        format!(
            "I recommend '{}' by {} ({}, Rating: {}).\nCategory: {}\nSummary: {}\nEmotion: {}",
            self.title,
            self.author,
            self.year,
            fmt_rating(self.rating),
            self.category_tags,
            self.summary,
            self.emotion.capitalized(),
        )
    }
}

impl CatalogEntry for MovieRecord {
    fn title(&self) -> &str {
        &self.title
    }
    fn emotion(&self) -> Emotion {
        self.emotion
    }
    fn rating(&self) -> f64 {
        self.rating
    }
    fn describe(&self) -> String {
        format!(
            "I recommend '{}' directed by {} ({}, Rating: {}).\nGenres: {}\nDescription: {}\nEmotion: {}",
            self.title,
            self.director,
            self.year,
            fmt_rating(self.rating),
            self.genres,
            self.description,
            self.emotion.capitalized(),
        )
    }
}

impl CatalogEntry for TrackRecord {
    fn title(&self) -> &str {
        &self.name
    }
    fn emotion(&self) -> Emotion {
        emotion_from_valence(self.valence)
    }
    fn rating(&self) -> f64 {
        0.0
    }
    fn describe(&self) -> String {
        let emotion = self.emotion();
        format!(
            "I recommend '{}' by {} ({}, Valence: {}).\nEmotion: {}",
            self.name,
            self.artists,
            self.year,
            emotion.as_str(),
            emotion.capitalized(),
        )
    }
}

/// Render a rating the way the templates expect: whole numbers keep one
/// decimal place (`4.0`, not `4`).
pub fn fmt_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{rating:.1}")
    } else {
        format!("{rating}")
    }
}

// ── Catalog ────────────────────────────────────────────────────────────────

/// All three category lists, supplied once at process start.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub books: Vec<BookRecord>,
    pub movies: Vec<MovieRecord>,
    pub tracks: Vec<TrackRecord>,
}

impl Catalog {
    pub fn new(books: Vec<BookRecord>, movies: Vec<MovieRecord>, tracks: Vec<TrackRecord>) -> Self {
        Catalog { books, movies, tracks }
    }

    /// Load `books.json` / `movies.json` / `tracks.json` from a directory.
    /// A missing or unreadable file yields an empty category (the selector
    /// answers those with its fixed no-catalog message), matching the
    /// degrade-don't-crash contract of the upstream loaders.
    pub fn load_dir(dir: &Path) -> ServiceResult<Catalog> {
        let catalog = Catalog {
            books: load_list(&dir.join("books.json")),
            movies: load_list(&dir.join("movies.json")),
            tracks: load_list(&dir.join("tracks.json")),
        };
        info!(
            "[catalog] Loaded {} books, {} movies, {} tracks",
            catalog.books.len(),
            catalog.movies.len(),
            catalog.tracks.len()
        );
        Ok(catalog)
    }
}

fn load_list<T: serde::de::DeserializeOwned>(path: &Path) -> Vec<T> {
    match std::fs::read_to_string(path) {
        Ok(raw) => match serde_json::from_str(&raw) {
            Ok(list) => list,
            Err(e) => {
                warn!("[catalog] Failed to parse {:?}: {} — category left empty", path, e);
                Vec::new()
            }
        },
        Err(e) => {
            warn!("[catalog] Failed to read {:?}: {} — category left empty", path, e);
            Vec::new()
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valence_boundaries_are_exclusive() {
        assert_eq!(emotion_from_valence(0.1), Emotion::Sad);
        assert_eq!(emotion_from_valence(0.3), Emotion::Neutral);
        assert_eq!(emotion_from_valence(0.7), Emotion::Neutral);
        assert_eq!(emotion_from_valence(0.71), Emotion::Happy);
    }

    #[test]
    fn rating_formats_with_trailing_decimal() {
        assert_eq!(fmt_rating(4.0), "4.0");
        assert_eq!(fmt_rating(4.5), "4.5");
        assert_eq!(fmt_rating(4.28), "4.28");
    }

    #[test]
    fn book_description_quotes_title() {
        let book = BookRecord {
            title: "The Hobbit".into(),
            author: "J.R.R. Tolkien".into(),
            category_tags: "['Fantasy', 'Adventure']".into(),
            summary: "A story about The Hobbit.".into(),
            year: 1937,
            rating: 4.25,
            emotion: Emotion::Neutral,
        };
        let text = book.describe();
        assert!(text.starts_with("I recommend 'The Hobbit' by J.R.R. Tolkien (1937, Rating: 4.25)."));
        assert!(text.contains("Emotion: Neutral"));
    }

    #[test]
    fn track_description_has_no_rating_line() {
        let track = TrackRecord {
            name: "Here Comes the Sun".into(),
            artists: "The Beatles".into(),
            year: 1969,
            valence: 0.9,
        };
        let text = track.describe();
        assert!(text.contains("Valence: happy"));
        assert!(!text.contains("Rating:"));
    }
}
