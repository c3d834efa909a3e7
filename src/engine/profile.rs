// RecoMate Engine — User State Manager
//
// Per-user read-modify-write discipline:
//   • The scaffold merge is a pure function `(stored JSON, email) → profile`
//     — no process-wide cache, no mutable globals.
//   • `push_turn` enforces the 20-entry sliding window.
//   • `UserLocks` serializes whole turns per user id, so two concurrent
//     requests from the same user cannot drop each other's update.

use crate::atoms::constants::{CHAT_HISTORY_CAP, TOPIC_MAX_CHARS};
use crate::atoms::types::{ChatTurn, UserProfile};
use log::warn;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

// ── Scaffold merge ─────────────────────────────────────────────────────────

/// Build the working profile for a turn. A stored document wins wholesale;
/// absence (or an unreadable document) yields the default scaffold carrying
/// the resolved email and empty anti-repeat slots for every category.
pub fn merge(stored: Option<serde_json::Value>, email: &str) -> UserProfile {
    if let Some(doc) = stored {
        match serde_json::from_value::<UserProfile>(doc) {
            Ok(profile) => return profile,
            Err(e) => warn!("[profile] Stored document unreadable, rebuilding scaffold: {e}"),
        }
    }
    scaffold(email)
}

/// The first-contact default document.
pub fn scaffold(email: &str) -> UserProfile {
    let mut profile = UserProfile {
        email: email.to_string(),
        ..UserProfile::default()
    };
    for category in ["book", "movie", "music"] {
        profile.previously_recommended.insert(category.to_string(), Vec::new());
    }
    profile
}

// ── Turn append ────────────────────────────────────────────────────────────

/// Append one turn and keep only the most recent `CHAT_HISTORY_CAP`.
pub fn push_turn(profile: &mut UserProfile, turn: ChatTurn) {
    profile.chat_history.push(turn);
    let len = profile.chat_history.len();
    if len > CHAT_HISTORY_CAP {
        profile.chat_history.drain(..len - CHAT_HISTORY_CAP);
    }
}

/// Topic field: the user text truncated to 50 chars, `...` appended when
/// longer.
pub fn topic_of(message: &str) -> String {
    let chars: Vec<char> = message.chars().collect();
    if chars.len() > TOPIC_MAX_CHARS {
        let truncated: String = chars[..TOPIC_MAX_CHARS].iter().collect();
        format!("{truncated}...")
    } else {
        message.to_string()
    }
}

// ── Per-user write serialization ───────────────────────────────────────────

/// Registry of per-user-id async locks. A turn holds its user's lock from
/// profile load to final write, so same-user requests serialize while
/// different users proceed in parallel. Entries are small and never
/// reclaimed; user-id cardinality bounds the map.
#[derive(Default)]
pub struct UserLocks {
    inner: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl UserLocks {
    pub fn lock_for(&self, user_id: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut map = self.inner.lock();
        map.entry(user_id.to_string())
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
            .clone()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
