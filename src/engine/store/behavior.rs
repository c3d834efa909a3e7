use crate::atoms::error::ServiceResult;
use crate::atoms::types::{BehaviorLog, QueryRecord};
use rusqlite::params;

use super::DocStore;

/// Key of the single shared analytics document.
const SHARED_KEY: &str = "shared_data";

impl DocStore {
    // ── Shared behavior log ────────────────────────────────────────────
    // The whole-document read-modify-write happens inside one lock
    // acquisition, so concurrent appends across users serialize instead
    // of overwriting each other.

    /// Append one classified query to the shared log and write it back.
    pub fn append_behavior_query(&self, record: QueryRecord) -> ServiceResult<()> {
        let conn = self.conn.lock();

        let existing = conn.query_row(
            "SELECT doc FROM shared_docs WHERE key = ?1",
            params![SHARED_KEY],
            |row| row.get::<_, String>(0),
        );
        let mut log: BehaviorLog = match existing {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(rusqlite::Error::QueryReturnedNoRows) => BehaviorLog::default(),
            Err(e) => return Err(e.into()),
        };

        log.queries.push(record);

        let raw = serde_json::to_string(&log)?;
        conn.execute(
            "INSERT OR REPLACE INTO shared_docs (key, doc) VALUES (?1, ?2)",
            params![SHARED_KEY, raw],
        )?;
        Ok(())
    }

    /// Read the whole shared log (analytics / tests).
    pub fn behavior_log(&self) -> ServiceResult<BehaviorLog> {
        let conn = self.conn.lock();
        let result = conn.query_row(
            "SELECT doc FROM shared_docs WHERE key = ?1",
            params![SHARED_KEY],
            |row| row.get::<_, String>(0),
        );
        match result {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(BehaviorLog::default()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::types::{Intent, Mood, Tone};

    fn record(query: &str) -> QueryRecord {
        QueryRecord {
            query: query.into(),
            intent: Intent::Statement,
            mood: Mood::Neutral,
            tone: Tone::Casual,
            timestamp: "2026-01-01 00:00:00".into(),
        }
    }

    #[test]
    fn append_preserves_prior_entries() {
        let store = DocStore::open_in_memory().expect("in-memory store");
        store.append_behavior_query(record("first")).expect("append");
        store.append_behavior_query(record("second")).expect("append");

        let log = store.behavior_log().expect("read");
        let queries: Vec<&str> = log.queries.iter().map(|q| q.query.as_str()).collect();
        assert_eq!(queries, vec!["first", "second"]);
    }

    #[test]
    fn empty_log_reads_as_default() {
        let store = DocStore::open_in_memory().expect("in-memory store");
        assert!(store.behavior_log().expect("read").queries.is_empty());
    }
}
