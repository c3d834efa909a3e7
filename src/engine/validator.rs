// RecoMate Engine — Input Validator
//
// Pure verdict over the raw message: oversized, non-alphanumeric, or
// repetition-malformed input is rejected before any downstream stage runs.
// Same message in, same verdict out — no state, no I/O.

use crate::atoms::constants::MAX_MESSAGE_WORDS;

/// Why a message was rejected. Carried for logging only; the user always
/// sees the same canned apology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Oversized,
    NonAlphanumeric,
    Malformed,
}

/// Full validation verdict. `None` means the message may proceed.
pub fn check(message: &str) -> Option<RejectReason> {
    if message.split_whitespace().count() > MAX_MESSAGE_WORDS {
        return Some(RejectReason::Oversized);
    }
    if !message.chars().any(|c| c.is_alphanumeric()) {
        return Some(RejectReason::NonAlphanumeric);
    }
    if is_malformed(message) {
        return Some(RejectReason::Malformed);
    }
    None
}

/// Repetition heuristics: four or more identical consecutive words, or any
/// word longer than 5 chars containing a run of 5+ identical characters.
pub fn is_malformed(message: &str) -> bool {
    let words: Vec<&str> = message.split_whitespace().collect();

    if words.len() > 3 {
        for window in words.windows(4) {
            if window[0] == window[1] && window[1] == window[2] && window[2] == window[3] {
                return true;
            }
        }
    }

    words
        .iter()
        .any(|w| w.chars().count() > 5 && has_char_run(w, 5))
}

/// True when `word` contains `min_run` or more identical consecutive chars.
/// (The regex crate has no backreferences, so this is a plain scan.)
fn has_char_run(word: &str, min_run: usize) -> bool {
    let mut run = 0usize;
    let mut prev: Option<char> = None;
    for c in word.chars() {
        if Some(c) == prev {
            run += 1;
        } else {
            run = 1;
            prev = Some(c);
        }
        if run >= min_run {
            return true;
        }
    }
    false
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
