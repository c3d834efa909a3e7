// RecoMate — end-to-end pipeline tests.
//
// Everything runs against an in-memory document store, the keyword intent
// model, and an echo translation backend, so every assertion is about the
// pipeline's own behavior, not a collaborator's.

use async_trait::async_trait;
use http_body_util::BodyExt;
use recomate::atoms::error::ServiceResult;
use recomate::atoms::types::Emotion;
use recomate::engine::catalog::{BookRecord, Catalog};
use recomate::engine::identity::AnonymousIdentity;
use recomate::engine::intent::KeywordIntentModel;
use recomate::engine::store::DocStore;
use recomate::engine::translate::{Translate, TranslationService};
use recomate::engine::{Engine, FeedbackOutcome};
use recomate::server;
use std::sync::Arc;

// ── Fixtures ───────────────────────────────────────────────────────────────

/// Deterministic stand-in for the translation collaborator: tags the text
/// with the destination language.
struct EchoTranslator;

#[async_trait]
impl Translate for EchoTranslator {
    async fn translate(&self, text: &str, _src: &str, dest: &str) -> ServiceResult<String> {
        Ok(format!("{text} [{dest}]"))
    }
}

fn book(title: &str, rating: f64, emotion: Emotion) -> BookRecord {
    BookRecord {
        title: title.into(),
        author: "Test Author".into(),
        category_tags: "['Fiction']".into(),
        summary: format!("A story about {title}."),
        year: 2001,
        rating,
        emotion,
    }
}

fn engine_with(catalog: Catalog) -> (Engine, Arc<DocStore>) {
    let store = Arc::new(DocStore::open_in_memory().expect("in-memory store"));
    let translator = TranslationService::new(store.clone(), Box::new(EchoTranslator));
    let engine = Engine::new(
        store.clone(),
        catalog,
        translator,
        Box::new(KeywordIntentModel),
        Box::new(AnonymousIdentity),
    );
    (engine, store)
}

fn neutral_books() -> Catalog {
    Catalog::new(
        vec![
            book("Almost There", 4.1, Emotion::Neutral),
            book("Too Low", 3.2, Emotion::Neutral),
        ],
        Vec::new(),
        Vec::new(),
    )
}

// ── Welcome variants ───────────────────────────────────────────────────────

#[tokio::test]
async fn empty_message_welcome_tracks_history() {
    let (engine, _) = engine_with(neutral_books());

    let first = engine.handle_chat("", "en", "u1").await.expect("chat");
    assert!(first.response.starts_with("Welcome to RecoMate!"), "got: {}", first.response);
    assert!(first.chat_history.is_empty());

    engine.handle_chat("note number one", "en", "u1").await.expect("chat");

    let back = engine.handle_chat("   ", "en", "u1").await.expect("chat");
    assert!(back.response.starts_with("Welcome back to RecoMate!"), "got: {}", back.response);
    // the welcome turn itself is never recorded
    assert_eq!(back.chat_history.len(), 1);
}

// ── Validation ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn malformed_input_records_invalid_query_turn() {
    let (engine, store) = engine_with(neutral_books());
    let out = engine
        .handle_chat("book book book book please", "en", "u1")
        .await
        .expect("chat");

    assert!(out.response.starts_with("Sorry, your query seems unclear"));
    let last = out.chat_history.last().expect("recorded turn");
    assert_eq!(last.topic, "Invalid query");
    assert_eq!(last.user, "book book book book please");

    // rejected input never reaches the behavior log
    assert!(store.behavior_log().expect("log").queries.is_empty());
}

// ── History window ─────────────────────────────────────────────────────────

#[tokio::test]
async fn chat_history_is_a_twenty_turn_window() {
    let (engine, _) = engine_with(neutral_books());

    let mut last = None;
    for n in 1..=25 {
        let out = engine
            .handle_chat(&format!("note number {n}"), "en", "u1")
            .await
            .expect("chat");
        if n == 5 {
            assert_eq!(out.chat_history.len(), 5, "short histories are not padded");
        }
        last = Some(out);
    }

    let history = last.expect("turns ran").chat_history;
    assert_eq!(history.len(), 20);
    assert_eq!(history[0].user, "note number 6");
    assert_eq!(history[19].user, "note number 25");
}

// ── Recommendation flow ────────────────────────────────────────────────────

#[tokio::test]
async fn disliked_titles_are_never_served() {
    let (engine, _) = engine_with(neutral_books());

    let rec = "I recommend 'Too Low' by Test Author (2001, Rating: 3.2).";
    let out = engine.handle_feedback("u1", rec, "dislike").await.expect("feedback");
    assert_eq!(out, FeedbackOutcome::Recorded);

    for _ in 0..6 {
        let out = engine.handle_chat("recommend a book", "en", "u1").await.expect("chat");
        assert!(
            !out.response.contains("'Too Low'"),
            "disliked title served: {}",
            out.response
        );
    }
}

#[tokio::test]
async fn rating_tier2_falls_back_within_half_point() {
    let (engine, _) = engine_with(neutral_books());
    let out = engine
        .handle_chat("recommend a book with 4.5 rating", "en", "u1")
        .await
        .expect("chat");
    assert!(out.response.contains("'Almost There'"), "got: {}", out.response);
}

#[tokio::test]
async fn rating_tier2_empty_is_terminal_message() {
    let catalog = Catalog::new(vec![book("Too Low", 3.2, Emotion::Neutral)], Vec::new(), Vec::new());
    let (engine, _) = engine_with(catalog);
    let out = engine
        .handle_chat("recommend a book with 4.5 rating", "en", "u1")
        .await
        .expect("chat");
    assert_eq!(
        out.response,
        "No neutral books found with a rating of 4.5 or higher. Try a lower rating or a different category!"
    );
}

#[tokio::test]
async fn exhausted_category_resets_instead_of_giving_up() {
    let (engine, _) = engine_with(neutral_books());

    let mut seen = Vec::new();
    for _ in 0..3 {
        let out = engine.handle_chat("recommend a book", "en", "u1").await.expect("chat");
        assert!(
            out.response.starts_with("I recommend '"),
            "expected a pick every turn, got: {}",
            out.response
        );
        seen.push(out.response);
    }
    // two distinct items, three turns: the third pick repeats one of the
    // first two thanks to the anti-repeat reset
    assert!(seen[2].contains("'Almost There'") || seen[2].contains("'Too Low'"));
}

#[tokio::test]
async fn profanity_beats_recommendation_keyword() {
    let (engine, _) = engine_with(neutral_books());
    let out = engine
        .handle_chat("recommend a damn book", "en", "u1")
        .await
        .expect("chat");
    assert!(
        out.response.starts_with("Let's keep things friendly!"),
        "got: {}",
        out.response
    );
}

// ── Knowledge base & canned routing ────────────────────────────────────────

#[tokio::test]
async fn greeting_hits_knowledge_base() {
    let (engine, _) = engine_with(Catalog::default());
    let out = engine.handle_chat("hello", "en", "u1").await.expect("chat");
    assert!(out.response.contains("How can I assist you today"), "got: {}", out.response);
}

#[tokio::test]
async fn behavior_log_collects_classified_queries() {
    let (engine, store) = engine_with(neutral_books());
    engine.handle_chat("hello", "en", "u1").await.expect("chat");
    engine.handle_chat("recommend a book", "en", "u2").await.expect("chat");
    // empty and rejected messages do not log
    engine.handle_chat("", "en", "u1").await.expect("chat");
    engine.handle_chat("???", "en", "u1").await.expect("chat");

    let log = store.behavior_log().expect("log");
    let queries: Vec<&str> = log.queries.iter().map(|q| q.query.as_str()).collect();
    assert_eq!(queries, vec!["hello", "recommend a book"]);
}

// ── Translation ────────────────────────────────────────────────────────────

#[tokio::test]
async fn non_english_turn_translates_both_ways() {
    let (engine, _) = engine_with(neutral_books());
    let out = engine
        .handle_chat("bonjour mes amis", "fr", "u1")
        .await
        .expect("chat");
    assert!(out.is_translating);
    // outbound pass through the echo backend tags the reply
    assert!(out.response.ends_with("[fr]"), "got: {}", out.response);
}

// ── Feedback ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn feedback_like_is_persisted() {
    let (engine, store) = engine_with(neutral_books());
    let rec = "I recommend 'Almost There' by Test Author (2001, Rating: 4.1).";
    engine.handle_feedback("u1", rec, "like").await.expect("feedback");

    let doc = store.get_user_doc("u1").expect("read").expect("doc exists");
    let liked = doc["preferences"]["liked"].as_array().expect("liked array");
    assert_eq!(liked, &vec![serde_json::json!("Almost There")]);
}

#[tokio::test]
async fn feedback_without_quoted_title_is_invalid() {
    let (engine, _) = engine_with(neutral_books());
    let out = engine
        .handle_feedback("u1", "no quoted title here", "like")
        .await
        .expect("feedback");
    assert_eq!(out, FeedbackOutcome::InvalidFormat);
}

// ── HTTP layer ─────────────────────────────────────────────────────────────

mod http {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> axum::Router {
        let (engine, _) = engine_with(neutral_books());
        server::router(Arc::new(engine))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.expect("body").to_bytes();
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn liveness() {
        let res = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).expect("req"))
            .await
            .expect("response");
        assert_eq!(res.status(), StatusCode::OK);
        let bytes = res.into_body().collect().await.expect("body").to_bytes();
        assert_eq!(&bytes[..], b"Welcome to RecoMate!");
    }

    #[tokio::test]
    async fn chat_round_trip() {
        let req = Request::builder()
            .method("POST")
            .uri("/chat")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"message": "recommend a book", "user_id": "u1"}"#))
            .expect("req");
        let res = app().oneshot(req).await.expect("response");
        assert_eq!(res.status(), StatusCode::OK);

        let json = body_json(res).await;
        assert!(json["response"].as_str().expect("response").starts_with("I recommend '"));
        assert_eq!(json["is_translating"], serde_json::json!(false));
        assert_eq!(json["chat_history"].as_array().expect("history").len(), 1);
    }

    #[tokio::test]
    async fn malformed_json_is_400() {
        let req = Request::builder()
            .method("POST")
            .uri("/chat")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .expect("req");
        let res = app().oneshot(req).await.expect("response");
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let json = body_json(res).await;
        assert_eq!(json["error"], serde_json::json!("Invalid JSON format"));
    }

    #[tokio::test]
    async fn feedback_format_guard_is_400() {
        let req = Request::builder()
            .method("POST")
            .uri("/feedback")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"user_id": "u1", "recommendation": "no title", "rating": "like"}"#,
            ))
            .expect("req");
        let res = app().oneshot(req).await.expect("response");
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let json = body_json(res).await;
        assert_eq!(json["error"], serde_json::json!("Invalid recommendation format"));
    }
}
