// ── RecoMate Atoms: Error Types ────────────────────────────────────────────
// Single canonical error enum for the service, built with `thiserror`.
//
// Design rules:
//   • Variants are coarse-grained by domain (I/O, DB, Network, Model…).
//   • The `#[from]` attribute wires std/external error conversions automatically.
//   • Translation failures never reach this enum — they degrade in place
//     (the untranslated text is used); only request-fatal failures do.

use thiserror::Error;

// ── Primary error enum ─────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Filesystem or OS-level I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization / deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP / network failure (reqwest layer).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// SQLite / rusqlite document-store failure.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// External model collaborator failure (intent classifier, sentiment
    /// scorer). Request-fatal: the turn is answered with a 500.
    #[error("Model error: {model}: {message}")]
    Model { model: String, message: String },

    /// Service configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catch-all for errors that do not yet have a dedicated variant.
    /// Prefer adding a specific variant over using this in new code.
    #[error("{0}")]
    Other(String),
}

// ── Convenience constructors ───────────────────────────────────────────────

impl ServiceError {
    /// Create a model-collaborator error with name and message.
    pub fn model(model: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Model { model: model.into(), message: message.into() }
    }
}

// ── Bridge: String → ServiceError ──────────────────────────────────────────
// Allows `?` on helpers that report plain-string failures.

impl From<String> for ServiceError {
    fn from(s: String) -> Self {
        ServiceError::Other(s)
    }
}

impl From<&str> for ServiceError {
    fn from(s: &str) -> Self {
        ServiceError::Other(s.to_string())
    }
}

// ── Convenience alias ──────────────────────────────────────────────────────

/// All engine operations return this type. The server layer converts to an
/// HTTP 500 with the Display text in the `details` field.
pub type ServiceResult<T> = Result<T, ServiceError>;
