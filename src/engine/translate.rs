// RecoMate Engine — Translation
//
// `Translate` is the seam to the external translation collaborator; the
// built-in backend speaks the LibreTranslate wire format over reqwest.
// `TranslationService` wraps any backend with the durable cache:
//
//   hit  → stored value, zero external calls
//   miss → call backend; success is persisted before returning;
//          failure is logged and the original text passes through,
//          uncached, never surfaced to the user.
//
// src == dest pass-through is allowed and still cacheable.

use crate::atoms::error::ServiceResult;
use crate::engine::store::DocStore;
use async_trait::async_trait;
use log::{info, warn};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

// ── Backend seam ───────────────────────────────────────────────────────────

#[async_trait]
pub trait Translate: Send + Sync {
    async fn translate(&self, text: &str, src: &str, dest: &str) -> ServiceResult<String>;
}

// ── HTTP backend ───────────────────────────────────────────────────────────

/// LibreTranslate-compatible client: `POST {base}/translate` with
/// `{q, source, target, format}` returning `{translatedText}`.
pub struct HttpTranslator {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct TranslateReply {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl HttpTranslator {
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpTranslator {
            client: Client::builder()
                .connect_timeout(Duration::from_secs(10))
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl Translate for HttpTranslator {
    async fn translate(&self, text: &str, src: &str, dest: &str) -> ServiceResult<String> {
        let url = format!("{}/translate", self.base_url.trim_end_matches('/'));
        let reply: TranslateReply = self
            .client
            .post(&url)
            .json(&json!({
                "q": text,
                "source": src,
                "target": dest,
                "format": "text",
            }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(reply.translated_text)
    }
}

// ── Cached service ─────────────────────────────────────────────────────────

pub struct TranslationService {
    store: Arc<DocStore>,
    backend: Box<dyn Translate>,
}

impl TranslationService {
    pub fn new(store: Arc<DocStore>, backend: Box<dyn Translate>) -> Self {
        TranslationService { store, backend }
    }

    /// Translate with memoization. Infallible by design: every failure
    /// path (backend or store) degrades to the input text.
    pub async fn translate(&self, text: &str, src: &str, dest: &str) -> String {
        match self.store.get_translation(text, src, dest) {
            Ok(Some(cached)) => return cached,
            Ok(None) => {}
            Err(e) => warn!("[translate] Cache read failed: {e}"),
        }

        match self.backend.translate(text, src, dest).await {
            Ok(translated) => {
                if let Err(e) = self.store.set_translation(text, src, dest, &translated) {
                    warn!("[translate] Cache write failed: {e}");
                }
                info!("[translate] '{text}' {src}→{dest}: '{translated}'");
                translated
            }
            Err(e) => {
                // Degrade in place; the failure is not cached, so the next
                // identical request retries the backend.
                warn!("[translate] Translation error ({src}→{dest}): {e}");
                text.to_string()
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::error::ServiceError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts backend invocations; fails when `fail` is set.
    struct CountingBackend {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait]
    impl Translate for CountingBackend {
        async fn translate(&self, text: &str, _src: &str, dest: &str) -> ServiceResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ServiceError::Other("backend down".into()));
            }
            Ok(format!("{text}-{dest}"))
        }
    }

    fn service(fail: bool) -> (TranslationService, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let store = Arc::new(DocStore::open_in_memory().expect("store"));
        let backend = Box::new(CountingBackend { calls: calls.clone(), fail });
        (TranslationService::new(store, backend), calls)
    }

    #[tokio::test]
    async fn second_call_hits_cache() {
        let (svc, calls) = service(false);
        assert_eq!(svc.translate("hello", "en", "fr").await, "hello-fr");
        assert_eq!(svc.translate("hello", "en", "fr").await, "hello-fr");
        assert_eq!(calls.load(Ordering::SeqCst), 1, "second call must not hit the backend");
    }

    #[tokio::test]
    async fn failure_degrades_and_is_not_cached() {
        let (svc, calls) = service(true);
        assert_eq!(svc.translate("hello", "en", "fr").await, "hello");
        assert_eq!(svc.translate("hello", "en", "fr").await, "hello");
        // both calls reached the backend — failures are never memoized
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn passthrough_pair_is_cacheable() {
        let (svc, calls) = service(false);
        assert_eq!(svc.translate("hello", "en", "en").await, "hello-en");
        assert_eq!(svc.translate("hello", "en", "en").await, "hello-en");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
