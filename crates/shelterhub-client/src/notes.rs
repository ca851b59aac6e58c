//! Internal message-board endpoints.

use reqwest::Method;

use shelterhub_core::result::AppResult;
use shelterhub_entity::note::{NewNote, Note};

use crate::client::ApiClient;

/// Message-board API client.
#[derive(Debug)]
pub struct NotesApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl<'a> NotesApi<'a> {
    /// List board posts via `GET /api/notes/`.
    ///
    /// The server returns every post the caller may see; board-level
    /// visibility filtering for the tabs happens client-side through
    /// [`Note::visible_to`].
    pub async fn list(&self) -> AppResult<Vec<Note>> {
        let builder = self.client.request(Method::GET, "/api/notes/").await?;
        let response = self.client.send(builder).await?;
        ApiClient::handle_response(response).await
    }

    /// Create a board post via `POST /api/notes/`.
    pub async fn create(&self, note: &NewNote) -> AppResult<Note> {
        let builder = self
            .client
            .request(Method::POST, "/api/notes/")
            .await?
            .json(note);
        let response = self.client.send(builder).await?;
        ApiClient::handle_response(response).await
    }

    /// Delete a board post via `DELETE /api/notes/{id}/`.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let builder = self
            .client
            .request(Method::DELETE, &format!("/api/notes/{id}/"))
            .await?;
        let response = self.client.send(builder).await?;
        ApiClient::handle_empty(response).await
    }
}
