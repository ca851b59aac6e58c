//! HTTP client for the backend REST API.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use url::Url;

use shelterhub_core::config::api::ApiConfig;
use shelterhub_core::error::AppError;
use shelterhub_core::result::AppResult;
use shelterhub_core::traits::TokenStore;

use crate::animals::AnimalsApi;
use crate::auth::AuthApi;
use crate::choices::ChoicesApi;
use crate::finance::FinanceApi;
use crate::messages::MessagesApi;
use crate::news::NewsApi;
use crate::notes::NotesApi;
use crate::profiles::ProfilesApi;
use crate::roles::RolesApi;
use crate::users::UsersApi;

/// HTTP client for the ShelterHub API.
///
/// Holds the connection pool, the configured base URL, and the injected
/// token store. Cloning is cheap; all accessors borrow.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a client from configuration.
    ///
    /// The per-request timeout applies to every call made through this
    /// client, including the guard's refresh and role fetches — a timed
    /// out call surfaces as an error and the guard's fail-closed contracts
    /// take it from there.
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenStore>) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {e}")))?;

        let base_url = Url::parse(&config.base_url)
            .map_err(|e| AppError::configuration(format!("Invalid API base URL: {e}")))?;

        Ok(Self {
            http,
            base_url,
            tokens,
        })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The injected token store.
    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    // ── API accessors ────────────────────────────────────────────────

    /// Authentication endpoints (register, login, refresh, logout).
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: self }
    }

    /// Role labels of the current identity.
    pub fn roles(&self) -> RolesApi<'_> {
        RolesApi { client: self }
    }

    /// Animal registry.
    pub fn animals(&self) -> AnimalsApi<'_> {
        AnimalsApi { client: self }
    }

    /// News feed.
    pub fn news(&self) -> NewsApi<'_> {
        NewsApi { client: self }
    }

    /// Internal message-board posts.
    pub fn notes(&self) -> NotesApi<'_> {
        NotesApi { client: self }
    }

    /// Direct messages.
    pub fn messages(&self) -> MessagesApi<'_> {
        MessagesApi { client: self }
    }

    /// Volunteer profiles.
    pub fn profiles(&self) -> ProfilesApi<'_> {
        ProfilesApi { client: self }
    }

    /// User administration.
    pub fn users(&self) -> UsersApi<'_> {
        UsersApi { client: self }
    }

    /// Donations, expenses, and funds.
    pub fn finance(&self) -> FinanceApi<'_> {
        FinanceApi { client: self }
    }

    /// Server-defined choice lists.
    pub fn choices(&self) -> ChoicesApi<'_> {
        ChoicesApi { client: self }
    }

    // ── Internal helpers ─────────────────────────────────────────────

    pub(crate) fn url(&self, path: &str) -> AppResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| AppError::internal(format!("Invalid API path '{path}': {e}")))
    }

    /// Build a request with the bearer header attached.
    ///
    /// The store is read immediately before each request rather than once
    /// at construction, so a token refreshed by a concurrent guard check
    /// is picked up instead of a stale copy.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
    ) -> AppResult<reqwest::RequestBuilder> {
        let url = self.url(path)?;
        let mut builder = self.http.request(method, url);

        let session = self.tokens.get().await?;
        if let Some(access) = session.access {
            builder = builder.bearer_auth(access);
        }

        Ok(builder)
    }

    pub(crate) async fn send(&self, builder: reqwest::RequestBuilder) -> AppResult<reqwest::Response> {
        builder
            .send()
            .await
            .map_err(|e| AppError::external_service(format!("Request failed: {e}")))
    }

    /// Map a response to a typed body, or to an [`AppError`] carrying the
    /// status category.
    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> AppResult<T> {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| AppError::serialization(format!("Malformed response body: {e}")))
        } else {
            Err(Self::status_error(status, response).await)
        }
    }

    /// Like [`Self::handle_response`] for endpoints whose success body is
    /// empty or irrelevant (deletes, status patches).
    pub(crate) async fn handle_empty(response: reqwest::Response) -> AppResult<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::status_error(status, response).await)
        }
    }

    async fn status_error(status: reqwest::StatusCode, response: reqwest::Response) -> AppError {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        match status.as_u16() {
            401 => AppError::authentication(format!("API error ({status}): {message}")),
            403 => AppError::authorization(format!("API error ({status}): {message}")),
            404 => AppError::not_found(format!("API error ({status}): {message}")),
            _ => AppError::external_service(format!("API error ({status}): {message}")),
        }
    }
}
