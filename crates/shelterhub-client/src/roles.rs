//! Role labels of the current identity.

use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;

use shelterhub_core::result::AppResult;
use shelterhub_core::traits::RolesProvider;

use crate::client::ApiClient;

#[derive(Debug, Deserialize)]
struct RolesResponse {
    /// Absent field treated as an empty set.
    #[serde(default)]
    roles: Vec<String>,
}

/// Roles API client.
#[derive(Debug)]
pub struct RolesApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl<'a> RolesApi<'a> {
    /// Fetch the raw role labels via `GET /api/user/roles/`.
    pub async fn fetch(&self) -> AppResult<Vec<String>> {
        let builder = self.client.request(Method::GET, "/api/user/roles/").await?;
        let response = self.client.send(builder).await?;
        let body: RolesResponse = ApiClient::handle_response(response).await?;
        Ok(body.roles)
    }
}

#[async_trait]
impl RolesProvider for ApiClient {
    async fn fetch_roles(&self) -> AppResult<Vec<String>> {
        self.roles().fetch().await
    }
}
