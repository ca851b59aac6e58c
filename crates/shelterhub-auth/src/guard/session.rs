//! Session guard — authentication with on-demand token refresh.

use std::sync::Arc;

use tracing::{debug, warn};

use shelterhub_core::result::AppResult;
use shelterhub_core::traits::{TokenRefresher, TokenStore};

use crate::jwt::decode_claims;

/// Terminal verdict of an authentication check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    /// The session carries a usable access token.
    Authorized,
    /// No usable access token exists and none could be obtained.
    Unauthorized,
}

/// Decides, for the current session, whether the caller is authenticated,
/// refreshing the access token when it is stale.
///
/// One check performs at most one refresh attempt, and a check that finds
/// a fresh access token performs no network call at all. Refresh happens
/// only on demand at a navigation check; there is no background timer
/// renewing tokens ahead of expiry.
#[derive(Debug, Clone)]
pub struct SessionGuard {
    tokens: Arc<dyn TokenStore>,
    refresher: Arc<dyn TokenRefresher>,
    leeway_seconds: i64,
}

impl SessionGuard {
    /// Create a guard over the given store and refresher with no
    /// clock-skew leeway.
    pub fn new(tokens: Arc<dyn TokenStore>, refresher: Arc<dyn TokenRefresher>) -> Self {
        Self {
            tokens,
            refresher,
            leeway_seconds: 0,
        }
    }

    /// Set the clock-skew leeway applied to expiry comparisons.
    pub fn with_leeway(mut self, leeway_seconds: i64) -> Self {
        self.leeway_seconds = leeway_seconds;
        self
    }

    /// Run one authentication check.
    ///
    /// Never panics and never propagates an error: every failure path —
    /// missing tokens, unreadable payload, rejected refresh, storage I/O —
    /// resolves to [`AuthState::Unauthorized`].
    pub async fn check_authorization(&self) -> AuthState {
        match self.evaluate().await {
            Ok(state) => state,
            Err(e) => {
                warn!(error = %e, "Authentication check failed");
                AuthState::Unauthorized
            }
        }
    }

    async fn evaluate(&self) -> AppResult<AuthState> {
        let session = self.tokens.get().await?;

        let Some(access) = session.access else {
            debug!("No access token present");
            return Ok(AuthState::Unauthorized);
        };

        match decode_claims(&access) {
            Ok(claims) if !claims.is_expired(self.leeway_seconds) => Ok(AuthState::Authorized),
            Ok(_) => {
                debug!("Access token expired, attempting refresh");
                self.refresh().await
            }
            Err(e) => {
                // An unreadable payload gets the same treatment as an
                // expired one: one refresh attempt, then give up.
                debug!(error = %e, "Unreadable access token, attempting refresh");
                self.refresh().await
            }
        }
    }

    async fn refresh(&self) -> AppResult<AuthState> {
        // Re-read the store rather than reusing the session captured
        // before the expiry check; the refresh token must be current at
        // the moment it is used.
        let session = self.tokens.get().await?;

        let Some(refresh) = session.refresh else {
            debug!("No refresh token present");
            return Ok(AuthState::Unauthorized);
        };

        match self.refresher.refresh_access_token(&refresh).await {
            Ok(access) => {
                self.tokens.set_access(&access).await?;
                debug!("Access token refreshed");
                Ok(AuthState::Authorized)
            }
            Err(e) => {
                warn!(error = %e, "Token refresh failed");
                Ok(AuthState::Unauthorized)
            }
        }
    }
}
