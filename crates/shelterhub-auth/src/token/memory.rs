//! In-memory token store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use shelterhub_core::result::AppResult;
use shelterhub_core::traits::TokenStore;
use shelterhub_core::types::Session;

/// Process-local token store.
///
/// Credentials vanish with the process, so a host using this store
/// re-triggers login after every restart. Tests inject it wherever the
/// durable store would otherwise touch disk.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    session: RwLock<Session>,
}

impl MemoryTokenStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with the given session.
    pub fn with_session(session: Session) -> Self {
        Self {
            session: RwLock::new(session),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get(&self) -> AppResult<Session> {
        Ok(self.session.read().await.clone())
    }

    async fn set_access(&self, access: &str) -> AppResult<()> {
        self.session.write().await.access = Some(access.to_string());
        Ok(())
    }

    async fn set_session(&self, access: &str, refresh: &str) -> AppResult<()> {
        *self.session.write().await = Session::new(access, refresh);
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        *self.session.write().await = Session::empty();
        Ok(())
    }
}
