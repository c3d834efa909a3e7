// RecoMate Engine — Message-Processing Pipeline
//
// Control flow per request:
//   validator → (on pass) inbound translation → sentiment/tone/profanity →
//   intent → behavior log → knowledge lookup | selector | canned reply →
//   composer → outbound translation → profile persist.
//
// Dependency rule (one-way): engine modules never import from server/.
// The server layer is a thin HTTP mapping over `Engine::handle_chat` and
// `Engine::handle_feedback`.

pub mod catalog;
pub mod compose;
pub mod identity;
pub mod intent;
pub mod profile;
pub mod recommend;
pub mod sentiment;
pub mod store;
pub mod translate;
pub mod validator;

use crate::atoms::constants::{
    replies_for_intent, INVALID_QUERY_REPLY, KNOWLEDGE_BASE, NEGATIVE_MOOD_REPLIES,
    PROFANITY_REPLIES, WELCOME_NEW_USER, WELCOME_RETURNING_USER,
};
use crate::atoms::error::ServiceResult;
use crate::atoms::types::{ChatTurn, Emotion, Intent, Mood, QueryRecord, Tone, UserProfile};
use self::catalog::Catalog;
use self::identity::{IdentityProvider, ANONYMOUS};
use self::intent::IntentModel;
use self::store::DocStore;
use self::translate::TranslationService;
use log::{info, warn};
use rand::Rng;
use regex::Regex;
use std::sync::Arc;
use std::sync::LazyLock;

static QUOTED_TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'([^']+)'").expect("static pattern"));

// ── Engine ─────────────────────────────────────────────────────────────────

pub struct Engine {
    store: Arc<DocStore>,
    catalog: Catalog,
    translator: TranslationService,
    intent_model: Box<dyn IntentModel>,
    identity: Box<dyn IdentityProvider>,
    user_locks: profile::UserLocks,
}

/// What a chat turn hands back to the transport layer.
#[derive(Debug)]
pub struct ChatOutcome {
    pub response: String,
    pub chat_history: Vec<ChatTurn>,
    pub is_translating: bool,
}

/// Feedback endpoint outcome; `InvalidFormat` maps to a 400.
#[derive(Debug, PartialEq, Eq)]
pub enum FeedbackOutcome {
    Recorded,
    InvalidFormat,
}

impl Engine {
    pub fn new(
        store: Arc<DocStore>,
        catalog: Catalog,
        translator: TranslationService,
        intent_model: Box<dyn IntentModel>,
        identity: Box<dyn IdentityProvider>,
    ) -> Self {
        Engine {
            store,
            catalog,
            translator,
            intent_model,
            identity,
            user_locks: profile::UserLocks::default(),
        }
    }

    // ── Chat turn ──────────────────────────────────────────────────────

    pub async fn handle_chat(
        &self,
        message: &str,
        language: &str,
        user_id: &str,
    ) -> ServiceResult<ChatOutcome> {
        let user_message = message.to_lowercase();
        info!("[engine] Received user input: {user_message:?}");

        // Hold this user's lock for the whole read-modify-write turn.
        let lock = self.user_locks.lock_for(user_id);
        let _guard = lock.lock().await;

        let email = self.resolve_email(user_id).await;
        let stored = self.store.get_user_doc(user_id)?;
        let mut profile = profile::merge(stored, &email);
        let is_new_user = profile.chat_history.is_empty();

        // Empty message: welcome variant, history untouched.
        if user_message.trim().is_empty() {
            let response = if is_new_user { WELCOME_NEW_USER } else { WELCOME_RETURNING_USER };
            return Ok(ChatOutcome {
                response: response.to_string(),
                chat_history: profile.chat_history,
                is_translating: false,
            });
        }

        // Validation: record the apology turn, skip all downstream stages.
        if let Some(reason) = validator::check(&user_message) {
            info!("[engine] Rejected input ({reason:?})");
            return self
                .reject_turn(user_id, language, user_message, profile)
                .await;
        }

        // Inbound translation to English.
        let original_message = user_message.clone();
        let is_translating = language != "en";
        let user_message = if is_translating {
            self.translator
                .translate(&user_message, language, "en")
                .await
                .to_lowercase()
        } else {
            user_message
        };

        // Sentiment, tone, profanity.
        let scores = sentiment::score(&user_message);
        let mood = sentiment::mood_of(&scores);
        let tone = sentiment::tone_of(&scores);
        let has_profanity = sentiment::contains_profanity(&user_message);

        // Intent — model failure is request-fatal.
        let intent = intent::classify(self.intent_model.as_ref(), &user_message).await?;
        info!("[engine] mood={} tone={} intent={}", mood.as_str(), tone.as_str(), intent.as_str());

        // Shared analytics log (single-writer append).
        self.store.append_behavior_query(QueryRecord {
            query: user_message.clone(),
            intent,
            mood,
            tone,
            timestamp: now(),
        })?;

        // Knowledge base is only consulted for greetings and questions.
        let knowledge = if matches!(intent, Intent::Greeting | Intent::Question) {
            knowledge_answer(&user_message)
        } else {
            None
        };

        // Routing. Profanity beats everything, including a knowledge hit.
        let response = if has_profanity {
            pick_reply(PROFANITY_REPLIES)
        } else if let Some(answer) = knowledge {
            answer.to_string()
        } else if intent == Intent::Recommendation {
            let requested = recommend::parse_requested_rating(&user_message);
            let emotion = Emotion::from_mood(mood);
            let mut rng = rand::thread_rng();
            recommend::recommend(
                &self.catalog,
                &mut profile,
                &user_message,
                requested,
                emotion,
                &mut rng,
            )
        } else if intent == Intent::ComplexQuery {
            pick_reply(crate::atoms::constants::COMPLEX_QUERY_REPLIES)
        } else if mood == Mood::Negative {
            pick_reply(NEGATIVE_MOOD_REPLIES)
        } else {
            pick_reply(replies_for_intent(intent))
        };

        // Compose: tone wrapping, then outbound translation.
        let response = compose::apply_tone(response, tone, mood);
        let response = if is_translating {
            self.translator.translate(&response, "en", language).await
        } else {
            response
        };

        // Persist the turn.
        profile::push_turn(
            &mut profile,
            ChatTurn {
                user: original_message.clone(),
                bot: response.clone(),
                mood,
                tone,
                timestamp: now(),
                topic: profile::topic_of(&original_message),
                intent,
            },
        );
        self.persist(user_id, &profile)?;

        info!("[engine] Reply: {response:?}");
        Ok(ChatOutcome {
            response,
            chat_history: profile.chat_history,
            is_translating,
        })
    }

    /// The validation-reject turn: apology recorded untranslated, reply
    /// translated, no analysis stages run.
    async fn reject_turn(
        &self,
        user_id: &str,
        language: &str,
        user_message: String,
        mut profile: UserProfile,
    ) -> ServiceResult<ChatOutcome> {
        let response = INVALID_QUERY_REPLY.to_string();
        profile::push_turn(
            &mut profile,
            ChatTurn {
                user: user_message,
                bot: response.clone(),
                mood: Mood::Neutral,
                tone: Tone::Casual,
                timestamp: now(),
                topic: "Invalid query".to_string(),
                intent: Intent::Statement,
            },
        );
        self.persist(user_id, &profile)?;

        let response = if language != "en" {
            self.translator.translate(&response, "en", language).await
        } else {
            response
        };
        Ok(ChatOutcome {
            response,
            chat_history: profile.chat_history,
            is_translating: false,
        })
    }

    // ── Feedback ───────────────────────────────────────────────────────

    /// Record like/dislike for the title quoted inside a previously
    /// returned recommendation string. The quote-delimited contract is
    /// kept for wire compatibility.
    pub async fn handle_feedback(
        &self,
        user_id: &str,
        recommendation: &str,
        rating: &str,
    ) -> ServiceResult<FeedbackOutcome> {
        let Some(title) = QUOTED_TITLE_RE
            .captures(recommendation)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
        else {
            return Ok(FeedbackOutcome::InvalidFormat);
        };

        let lock = self.user_locks.lock_for(user_id);
        let _guard = lock.lock().await;

        let stored = self.store.get_user_doc(user_id)?;
        let mut profile = profile::merge(stored, ANONYMOUS);

        match rating {
            "like" => {
                profile.preferences.liked.insert(title);
            }
            "dislike" => {
                profile.preferences.disliked.insert(title);
            }
            other => {
                // Unknown rating values are accepted and ignored, matching
                // the permissive wire contract.
                warn!("[engine] Ignoring unknown feedback rating {other:?}");
            }
        }

        self.persist(user_id, &profile)?;
        Ok(FeedbackOutcome::Recorded)
    }

    // ── Helpers ────────────────────────────────────────────────────────

    async fn resolve_email(&self, user_id: &str) -> String {
        if user_id == ANONYMOUS {
            return ANONYMOUS.to_string();
        }
        match self.identity.email_for(user_id).await {
            Ok(email) => email,
            Err(e) => {
                warn!("[engine] Identity lookup failed for {user_id}: {e} — degrading to anonymous");
                ANONYMOUS.to_string()
            }
        }
    }

    fn persist(&self, user_id: &str, profile: &UserProfile) -> ServiceResult<()> {
        let doc = serde_json::to_value(profile)?;
        self.store.set_user_doc(user_id, &doc)
    }
}

// ── Free helpers ───────────────────────────────────────────────────────────

/// First knowledge-base entry whose key is a substring of the message.
pub fn knowledge_answer(message: &str) -> Option<&'static str> {
    KNOWLEDGE_BASE
        .iter()
        .find(|(key, _)| message.contains(key))
        .map(|(_, answer)| *answer)
}

/// Uniform pick from a canned-reply pool.
fn pick_reply(pool: &[&str]) -> String {
    let mut rng = rand::thread_rng();
    pool[rng.gen_range(0..pool.len())].to_string()
}

fn now() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
