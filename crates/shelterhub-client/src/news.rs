//! News feed endpoints.

use reqwest::Method;

use shelterhub_core::result::AppResult;
use shelterhub_entity::news::{NewNews, News};

use crate::client::ApiClient;

/// News API client.
#[derive(Debug)]
pub struct NewsApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl<'a> NewsApi<'a> {
    /// List news items via `GET /api/news/`.
    pub async fn list(&self) -> AppResult<Vec<News>> {
        let builder = self.client.request(Method::GET, "/api/news/").await?;
        let response = self.client.send(builder).await?;
        ApiClient::handle_response(response).await
    }

    /// Publish a news item via `POST /api/news/`.
    pub async fn create(&self, news: &NewNews) -> AppResult<News> {
        let builder = self
            .client
            .request(Method::POST, "/api/news/")
            .await?
            .json(news);
        let response = self.client.send(builder).await?;
        ApiClient::handle_response(response).await
    }

    /// Replace a news item via `PUT /api/news/{id}/`.
    pub async fn update(&self, id: i64, news: &NewNews) -> AppResult<News> {
        let builder = self
            .client
            .request(Method::PUT, &format!("/api/news/{id}/"))
            .await?
            .json(news);
        let response = self.client.send(builder).await?;
        ApiClient::handle_response(response).await
    }

    /// Remove a news item via `DELETE /api/news/{id}/`.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let builder = self
            .client
            .request(Method::DELETE, &format!("/api/news/{id}/"))
            .await?;
        let response = self.client.send(builder).await?;
        ApiClient::handle_empty(response).await
    }
}
