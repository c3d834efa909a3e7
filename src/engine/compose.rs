// RecoMate Engine — Response Composer
//
// Tone-based wrapping of the routed response. Exactly one wrapper applies:
// angry wins over polite, and the cheer-up nudge only fires for the
// casual/negative combination. The nudge also lands when the routed reply
// *was* the negative-mood canned message — matching source behavior, where
// the guard compares against a pseudo-label the classifier never emits.

use crate::atoms::constants::{ANGRY_PREFIX, CHEER_UP_SUFFIX, POLITE_PREFIX};
use crate::atoms::types::{Mood, Tone};

pub fn apply_tone(response: String, tone: Tone, mood: Mood) -> String {
    match tone {
        Tone::Angry => format!("{ANGRY_PREFIX}{response}"),
        Tone::Polite => format!("{POLITE_PREFIX}{response}"),
        Tone::Casual if mood == Mood::Negative => format!("{response}{CHEER_UP_SUFFIX}"),
        Tone::Casual => response,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angry_prepends_apology() {
        let out = apply_tone("Here.".into(), Tone::Angry, Mood::Negative);
        assert!(out.starts_with("I'm sorry if I upset you! "));
        // angry suppresses the nudge
        assert!(!out.contains("fun recommendation"));
    }

    #[test]
    fn polite_prepends_thanks() {
        let out = apply_tone("Here.".into(), Tone::Polite, Mood::Positive);
        assert!(out.starts_with("Thank you for your kind words! "));
    }

    #[test]
    fn negative_casual_appends_nudge() {
        let out = apply_tone("Here.".into(), Tone::Casual, Mood::Negative);
        assert!(out.ends_with("How about a fun recommendation? \u{1F60A}"));
    }

    #[test]
    fn neutral_casual_is_untouched() {
        assert_eq!(apply_tone("Here.".into(), Tone::Casual, Mood::Neutral), "Here.");
    }
}
