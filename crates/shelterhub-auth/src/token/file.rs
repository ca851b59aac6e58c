//! Durable file-backed token store.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::warn;

use shelterhub_core::config::auth::AuthConfig;
use shelterhub_core::result::AppResult;
use shelterhub_core::traits::TokenStore;
use shelterhub_core::types::Session;

/// Token store persisted as a small JSON document.
///
/// The document holds at most the two keys `"access"` and `"refresh"`,
/// mirroring the origin-scoped key-value layout web clients of the same
/// backend use. Persistence across restarts is the point: navigation
/// after a reload must not re-trigger login while a valid token exists.
///
/// A missing file is an empty session. A corrupt file is treated the same
/// way — unauthenticated is the safe reading of unreadable credentials.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Create a store backed by `path`. The file and its parent
    /// directories are created lazily on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the configured token-file path.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.token_file)
    }

    async fn read(&self) -> AppResult<Session> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(session) => Ok(session),
                Err(e) => {
                    warn!(path = %self.path.display(), error = %e, "Corrupt token file, treating as logged out");
                    Ok(Session::empty())
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Session::empty()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, session: &Session) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(session)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn get(&self) -> AppResult<Session> {
        self.read().await
    }

    async fn set_access(&self, access: &str) -> AppResult<()> {
        let mut session = self.read().await?;
        session.access = Some(access.to_string());
        self.write(&session).await
    }

    async fn set_session(&self, access: &str, refresh: &str) -> AppResult<()> {
        self.write(&Session::new(access, refresh)).await
    }

    async fn clear(&self) -> AppResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileTokenStore {
        FileTokenStore::new(dir.path().join("session/tokens.json"))
    }

    #[tokio::test]
    async fn test_missing_file_is_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.get().await.unwrap().is_anonymous());
    }

    #[tokio::test]
    async fn test_session_survives_a_new_store_instance() {
        let dir = tempfile::tempdir().unwrap();
        store_in(&dir).set_session("A", "R").await.unwrap();

        let reopened = store_in(&dir);
        let session = reopened.get().await.unwrap();
        assert_eq!(session.access.as_deref(), Some("A"));
        assert_eq!(session.refresh.as_deref(), Some("R"));
    }

    #[tokio::test]
    async fn test_set_access_preserves_refresh_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.set_session("old", "R").await.unwrap();
        store.set_access("new").await.unwrap();

        let session = store_in(&dir).get().await.unwrap();
        assert_eq!(session.access.as_deref(), Some("new"));
        assert_eq!(session.refresh.as_deref(), Some("R"));
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.set_session("A", "R").await.unwrap();
        store.clear().await.unwrap();
        store.clear().await.unwrap();
        assert!(store.get().await.unwrap().is_anonymous());
    }

    #[tokio::test]
    async fn test_corrupt_file_reads_as_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");
        tokio::fs::write(&path, b"{ not json").await.unwrap();

        let store = FileTokenStore::new(&path);
        assert!(store.get().await.unwrap().is_anonymous());
    }
}
