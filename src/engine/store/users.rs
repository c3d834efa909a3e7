use crate::atoms::error::ServiceResult;
use rusqlite::params;

use super::DocStore;

impl DocStore {
    // ── Per-user profile documents ─────────────────────────────────────

    /// Fetch the stored document for a user, if any. Returned as raw JSON
    /// so the scaffold merge stays a pure function over it.
    pub fn get_user_doc(&self, user_id: &str) -> ServiceResult<Option<serde_json::Value>> {
        let conn = self.conn.lock();
        let result = conn.query_row(
            "SELECT doc FROM user_docs WHERE user_id = ?1",
            params![user_id],
            |row| row.get::<_, String>(0),
        );
        match result {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the whole document for a user.
    pub fn set_user_doc(&self, user_id: &str, doc: &serde_json::Value) -> ServiceResult<()> {
        let raw = serde_json::to_string(doc)?;
        let conn = self.conn.lock();
        conn.execute(
            "INSERT OR REPLACE INTO user_docs (user_id, doc) VALUES (?1, ?2)",
            params![user_id, raw],
        )?;
        Ok(())
    }
}
