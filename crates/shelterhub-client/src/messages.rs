//! Direct message endpoints.

use reqwest::Method;

use shelterhub_core::result::AppResult;
use shelterhub_entity::message::{Message, NewMessage};

use crate::client::ApiClient;

/// Direct messages API client.
#[derive(Debug)]
pub struct MessagesApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl<'a> MessagesApi<'a> {
    /// List the caller's sent and received messages via `GET /api/messages/`.
    pub async fn list(&self) -> AppResult<Vec<Message>> {
        let builder = self.client.request(Method::GET, "/api/messages/").await?;
        let response = self.client.send(builder).await?;
        ApiClient::handle_response(response).await
    }

    /// Send a message via `POST /api/messages/`.
    pub async fn send(&self, message: &NewMessage) -> AppResult<Message> {
        let builder = self
            .client
            .request(Method::POST, "/api/messages/")
            .await?
            .json(message);
        let response = self.client.send(builder).await?;
        ApiClient::handle_response(response).await
    }

    /// Delete a message via `DELETE /api/messages/{id}/`.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let builder = self
            .client
            .request(Method::DELETE, &format!("/api/messages/{id}/"))
            .await?;
        let response = self.client.send(builder).await?;
        ApiClient::handle_empty(response).await
    }
}
