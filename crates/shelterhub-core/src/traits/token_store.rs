//! Token store trait — the exclusive owner of persisted credentials.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::Session;

/// Sole owner of the [`Session`] credential pair.
///
/// All reads and writes of persisted tokens go through this trait. It is a
/// dumb key-value surface: no validation happens here. Durable
/// implementations survive process restarts so that navigation after a
/// reload does not re-trigger login while a valid token exists.
#[async_trait]
pub trait TokenStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the current persisted tokens; absent fields are `None`.
    async fn get(&self) -> AppResult<Session>;

    /// Overwrite the access token only. Used after a refresh.
    async fn set_access(&self, access: &str) -> AppResult<()>;

    /// Overwrite both tokens. Used after login.
    async fn set_session(&self, access: &str, refresh: &str) -> AppResult<()>;

    /// Remove both tokens. Used on logout or irrecoverable refresh failure.
    async fn clear(&self) -> AppResult<()>;
}
