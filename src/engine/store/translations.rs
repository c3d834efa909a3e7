use crate::atoms::error::ServiceResult;
use rusqlite::params;

use super::DocStore;

impl DocStore {
    // ── Translation cache ──────────────────────────────────────────────
    // Write-once per (text, src, dest) key; entries are never invalidated
    // and survive restarts. Two concurrent misses may both translate and
    // the second write wins — benign, both results should be equal.

    pub fn get_translation(&self, text: &str, src: &str, dest: &str) -> ServiceResult<Option<String>> {
        let conn = self.conn.lock();
        let result = conn.query_row(
            "SELECT translated FROM translation_cache WHERE text = ?1 AND src = ?2 AND dest = ?3",
            params![text, src, dest],
            |row| row.get::<_, String>(0),
        );
        match result {
            Ok(translated) => Ok(Some(translated)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn set_translation(&self, text: &str, src: &str, dest: &str, translated: &str) -> ServiceResult<()> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT OR REPLACE INTO translation_cache (text, src, dest, translated) VALUES (?1, ?2, ?3, ?4)",
            params![text, src, dest, translated],
        )?;
        Ok(())
    }
}
