//! Server-defined choice lists.
//!
//! Status and category labels are owned by the server; forms fetch the
//! valid values instead of hard-coding them.

use reqwest::Method;
use serde::Deserialize;

use shelterhub_core::result::AppResult;

use crate::client::ApiClient;

#[derive(Debug, Deserialize)]
struct ChoicesResponse {
    #[serde(default)]
    choices: Vec<String>,
}

/// Choice-list API client.
#[derive(Debug)]
pub struct ChoicesApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl<'a> ChoicesApi<'a> {
    /// Valid news categories via `GET /api/choices/news-types/`.
    pub async fn news_types(&self) -> AppResult<Vec<String>> {
        self.fetch("/api/choices/news-types/", &[]).await
    }

    /// Valid animal statuses via `GET /api/choices/animal-status/`.
    pub async fn animal_statuses(&self) -> AppResult<Vec<String>> {
        self.fetch("/api/choices/animal-status/", &[]).await
    }

    /// Valid user statuses via `GET /api/choices/user-status/`.
    pub async fn user_statuses(&self) -> AppResult<Vec<String>> {
        self.fetch("/api/choices/user-status/", &[]).await
    }

    /// Valid values for the next unresolved taxonomic rank via
    /// `GET /api/choices/taxonomic/`.
    ///
    /// `selected` carries the ranks already chosen as `(rank, value)`
    /// query pairs; the server answers with the children of the deepest
    /// selected rank, always including `"Other"`.
    pub async fn taxonomic(&self, selected: &[(&str, &str)]) -> AppResult<Vec<String>> {
        self.fetch("/api/choices/taxonomic/", selected).await
    }

    async fn fetch(&self, path: &str, query: &[(&str, &str)]) -> AppResult<Vec<String>> {
        let mut builder = self.client.request(Method::GET, path).await?;
        if !query.is_empty() {
            builder = builder.query(query);
        }
        let response = self.client.send(builder).await?;
        let body: ChoicesResponse = ApiClient::handle_response(response).await?;
        Ok(body.choices)
    }
}
