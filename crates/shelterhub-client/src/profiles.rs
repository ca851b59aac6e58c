//! Volunteer profile endpoints.

use reqwest::Method;

use shelterhub_core::result::AppResult;
use shelterhub_entity::profile::{ProfileUpdate, VolunteerProfile};

use crate::client::ApiClient;

/// Volunteer profiles API client.
#[derive(Debug)]
pub struct ProfilesApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl<'a> ProfilesApi<'a> {
    /// Fetch the caller's own profile via `GET /api/volunteer-profile/`.
    pub async fn own(&self) -> AppResult<VolunteerProfile> {
        let builder = self
            .client
            .request(Method::GET, "/api/volunteer-profile/")
            .await?;
        let response = self.client.send(builder).await?;
        ApiClient::handle_response(response).await
    }

    /// Update the caller's own profile via `PATCH /api/volunteer-profile/`.
    pub async fn update_own(&self, update: &ProfileUpdate) -> AppResult<VolunteerProfile> {
        let builder = self
            .client
            .request(Method::PATCH, "/api/volunteer-profile/")
            .await?
            .json(update);
        let response = self.client.send(builder).await?;
        ApiClient::handle_response(response).await
    }

    /// Fetch the full roster via `GET /api/volunteer-profiles/`.
    pub async fn roster(&self) -> AppResult<Vec<VolunteerProfile>> {
        let builder = self
            .client
            .request(Method::GET, "/api/volunteer-profiles/")
            .await?;
        let response = self.client.send(builder).await?;
        ApiClient::handle_response(response).await
    }
}
