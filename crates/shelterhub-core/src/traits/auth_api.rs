//! Traits over the auth-related REST endpoints the guard depends on.

use async_trait::async_trait;

use crate::result::AppResult;

/// Exchanges a refresh token for a new access token.
///
/// Implemented by the API client against `POST /api/token/refresh/`.
/// A success response without an access token is an error, not an empty
/// success.
#[async_trait]
pub trait TokenRefresher: Send + Sync + std::fmt::Debug + 'static {
    /// Return the new access token on success.
    async fn refresh_access_token(&self, refresh_token: &str) -> AppResult<String>;
}

/// Fetches the role labels of the current authenticated identity.
///
/// Implemented by the API client against `GET /api/user/roles/`. Labels
/// are returned raw; the evaluator decides what they mean.
#[async_trait]
pub trait RolesProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Return the server-reported role labels, possibly empty.
    async fn fetch_roles(&self) -> AppResult<Vec<String>>;
}
