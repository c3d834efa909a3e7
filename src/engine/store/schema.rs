// RecoMate Engine — Store Schema
// All tables are idempotently created at open. Documents are stored as
// JSON text; only the translation cache is relational (its key is a
// three-column tuple).

use crate::atoms::error::ServiceResult;
use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> ServiceResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS user_docs (
            user_id TEXT PRIMARY KEY,
            doc     TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS shared_docs (
            key TEXT PRIMARY KEY,
            doc TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS translation_cache (
            text       TEXT NOT NULL,
            src        TEXT NOT NULL,
            dest       TEXT NOT NULL,
            translated TEXT NOT NULL,
            PRIMARY KEY (text, src, dest)
        );
        ",
    )?;
    Ok(())
}
