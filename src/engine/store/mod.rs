// RecoMate Engine — Document Store
// Persists the per-user documents, the shared behavior log, and the
// translation cache in SQLite via rusqlite.
//
// The contract upward is document-store shaped: JSON documents fetched and
// replaced whole by key. Callers never see SQL.
//
// Module layout:
//   schema        — table creation, run at open
//   users         — per-user profile document get/set
//   behavior      — shared analytics document, single-writer append
//   translations  — (text, src, dest) → translated memoization

use crate::atoms::error::ServiceResult;
use log::info;
use parking_lot::Mutex;
use rusqlite::Connection;
use std::path::Path;

mod behavior;
mod schema;
mod translations;
mod users;

/// Thread-safe store wrapper. One connection, serialized by the mutex —
/// every read-modify-write helper in the submodules runs under a single
/// lock acquisition, so whole-document updates cannot interleave.
pub struct DocStore {
    conn: Mutex<Connection>,
}

impl DocStore {
    /// Open (or create) the database at `path` and initialize tables.
    pub fn open(path: &Path) -> ServiceResult<Self> {
        info!("[store] Opening document store at {:?}", path);
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;").ok();
        schema::run_migrations(&conn)?;
        Ok(DocStore { conn: Mutex::new(conn) })
    }

    /// In-memory store for tests: full schema, no file.
    pub fn open_in_memory() -> ServiceResult<Self> {
        let conn = Connection::open_in_memory()?;
        schema::run_migrations(&conn)?;
        Ok(DocStore { conn: Mutex::new(conn) })
    }
}
