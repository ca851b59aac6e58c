//! Authentication endpoints.

use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::info;

use shelterhub_core::error::AppError;
use shelterhub_core::result::AppResult;
use shelterhub_core::traits::TokenRefresher;
use shelterhub_entity::user::Registration;

use crate::client::ApiClient;

/// The access/refresh pair issued on login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access: String,
    /// Long-lived refresh token.
    pub refresh: String,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RefreshRequest<'a> {
    refresh: &'a str,
}

#[derive(Debug, Deserialize)]
struct RefreshResponse {
    #[serde(default)]
    access: Option<String>,
}

/// Authentication API client.
#[derive(Debug)]
pub struct AuthApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    /// Register a new account via `POST /api/user/register/`.
    ///
    /// Registration does not log the account in; the caller navigates to
    /// login afterwards.
    pub async fn register(&self, registration: &Registration) -> AppResult<()> {
        let builder = self
            .client
            .request(Method::POST, "/api/user/register/")
            .await?
            .json(registration);
        let response = self.client.send(builder).await?;
        ApiClient::handle_empty(response).await
    }

    /// Obtain a token pair via `POST /api/token/` and persist it.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<TokenPair> {
        let builder = self
            .client
            .request(Method::POST, "/api/token/")
            .await?
            .json(&LoginRequest { username, password });
        let response = self.client.send(builder).await?;
        let pair: TokenPair = ApiClient::handle_response(response).await?;

        self.client
            .tokens()
            .set_session(&pair.access, &pair.refresh)
            .await?;
        info!(username, "Logged in");
        Ok(pair)
    }

    /// Exchange a refresh token via `POST /api/token/refresh/`.
    ///
    /// A 200 with no `access` field in the body is a failure — a refresh
    /// that "succeeds" without producing a credential must not count as
    /// success.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<String> {
        let builder = self
            .client
            .request(Method::POST, "/api/token/refresh/")
            .await?
            .json(&RefreshRequest {
                refresh: refresh_token,
            });
        let response = self.client.send(builder).await?;
        let body: RefreshResponse = ApiClient::handle_response(response).await?;

        body.access
            .ok_or_else(|| AppError::external_service("Refresh response missing access token"))
    }

    /// Drop the persisted credentials.
    pub async fn logout(&self) -> AppResult<()> {
        self.client.tokens().clear().await?;
        info!("Logged out");
        Ok(())
    }
}

#[async_trait]
impl TokenRefresher for ApiClient {
    async fn refresh_access_token(&self, refresh_token: &str) -> AppResult<String> {
        self.auth().refresh(refresh_token).await
    }
}
