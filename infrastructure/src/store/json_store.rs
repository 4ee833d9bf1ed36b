//! JSON file session store
//!
//! One pretty-printed JSON file per session, named `<id>.json`, in a
//! flat sessions directory. Listing scans the directory and sorts by
//! creation time, newest first; unreadable files are skipped with a
//! warning rather than failing the whole listing.

use async_trait::async_trait;
use roundtable_application::{SessionStore, StoreError};
use roundtable_domain::{Session, SessionSummary};
use std::path::{Path, PathBuf};
use tracing::warn;

/// File-backed session store
pub struct JsonSessionStore {
    dir: PathBuf,
}

impl JsonSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory the sessions live in
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    fn read_session(path: &Path) -> Result<Session, StoreError> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }
}

#[async_trait]
impl SessionStore for JsonSessionStore {
    async fn save(&self, session: &Session) -> Result<String, StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        let data = serde_json::to_string_pretty(session)?;
        std::fs::write(self.path_for(&session.id), data)?;
        Ok(session.id.clone())
    }

    async fn list(&self) -> Result<Vec<SessionSummary>, StoreError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut summaries = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            match Self::read_session(&path) {
                Ok(session) => summaries.push(session.summary()),
                Err(error) => {
                    warn!("Skipping unreadable session file {}: {error}", path.display());
                }
            }
        }

        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(summaries)
    }

    async fn load(&self, id: &str) -> Result<Session, StoreError> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Self::read_session(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roundtable_domain::{ConsensusArtifact, DiscussionState, Role, Topic};

    fn session(id: &str, topic: &str) -> Session {
        let mut state = DiscussionState::new(Topic::new(topic));
        state.begin();
        state.record(Role::Moderator, "Framing statement").unwrap();
        state.complete(ConsensusArtifact::new("The panel agrees."));
        Session::snapshot(id, &state)
    }

    #[tokio::test]
    async fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSessionStore::new(dir.path());

        let original = session("sess-1", "Is X true?");
        let id = store.save(&original).await.unwrap();
        assert_eq!(id, "sess-1");

        let loaded = store.load(&id).await.unwrap();
        assert_eq!(loaded, original);
    }

    #[tokio::test]
    async fn test_load_missing_session_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSessionStore::new(dir.path());

        let error = store.load("missing").await.unwrap_err();
        assert!(matches!(error, StoreError::NotFound(id) if id == "missing"));
    }

    #[tokio::test]
    async fn test_list_sorted_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSessionStore::new(dir.path());

        let mut older = session("older", "First topic");
        older.created_at = older.created_at - chrono::Duration::hours(1);
        store.save(&older).await.unwrap();
        store.save(&session("newer", "Second topic")).await.unwrap();

        let summaries = store.list().await.unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, "newer");
        assert_eq!(summaries[1].id, "older");
    }

    #[tokio::test]
    async fn test_list_skips_unreadable_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSessionStore::new(dir.path());

        store.save(&session("good", "Topic")).await.unwrap();
        std::fs::write(dir.path().join("corrupt.json"), "not json").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let summaries = store.list().await.unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].id, "good");
    }

    #[tokio::test]
    async fn test_list_on_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSessionStore::new(dir.path().join("never-created"));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_overwrites_same_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSessionStore::new(dir.path());

        store.save(&session("sess-1", "First")).await.unwrap();
        store.save(&session("sess-1", "Second")).await.unwrap();

        let loaded = store.load("sess-1").await.unwrap();
        assert_eq!(loaded.topic, "Second");
        assert_eq!(store.list().await.unwrap().len(), 1);
    }
}
