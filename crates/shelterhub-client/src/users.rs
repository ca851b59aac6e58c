//! User administration endpoints.

use reqwest::Method;
use serde::Serialize;

use shelterhub_core::result::AppResult;

use crate::client::ApiClient;

#[derive(Debug, Serialize)]
struct StatusUpdate<'a> {
    status: &'a str,
}

/// Users API client.
#[derive(Debug)]
pub struct UsersApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl<'a> UsersApi<'a> {
    /// Change a user's status via `PATCH /api/users/{id}/`.
    pub async fn set_status(&self, id: i64, status: &str) -> AppResult<()> {
        let builder = self
            .client
            .request(Method::PATCH, &format!("/api/users/{id}/"))
            .await?
            .json(&StatusUpdate { status });
        let response = self.client.send(builder).await?;
        ApiClient::handle_empty(response).await
    }

    /// Remove an account via `DELETE /api/users/{id}/`.
    pub async fn remove(&self, id: i64) -> AppResult<()> {
        let builder = self
            .client
            .request(Method::DELETE, &format!("/api/users/{id}/"))
            .await?;
        let response = self.client.send(builder).await?;
        ApiClient::handle_empty(response).await
    }
}
