//! Animal registry endpoints.

use reqwest::Method;

use shelterhub_core::result::AppResult;
use shelterhub_entity::animal::{Animal, NewAnimal};

use crate::client::ApiClient;

/// Animals API client.
#[derive(Debug)]
pub struct AnimalsApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl<'a> AnimalsApi<'a> {
    /// List the registry via `GET /api/animals/`.
    pub async fn list(&self) -> AppResult<Vec<Animal>> {
        let builder = self.client.request(Method::GET, "/api/animals/").await?;
        let response = self.client.send(builder).await?;
        ApiClient::handle_response(response).await
    }

    /// Fetch one animal via `GET /api/animals/{id}/`.
    pub async fn get(&self, id: i64) -> AppResult<Animal> {
        let builder = self
            .client
            .request(Method::GET, &format!("/api/animals/{id}/"))
            .await?;
        let response = self.client.send(builder).await?;
        ApiClient::handle_response(response).await
    }

    /// Register an animal via `POST /api/animals/`.
    pub async fn create(&self, animal: &NewAnimal) -> AppResult<Animal> {
        let builder = self
            .client
            .request(Method::POST, "/api/animals/")
            .await?
            .json(animal);
        let response = self.client.send(builder).await?;
        ApiClient::handle_response(response).await
    }

    /// Replace an animal via `PUT /api/animals/{id}/`.
    pub async fn update(&self, id: i64, animal: &NewAnimal) -> AppResult<Animal> {
        let builder = self
            .client
            .request(Method::PUT, &format!("/api/animals/{id}/"))
            .await?
            .json(animal);
        let response = self.client.send(builder).await?;
        ApiClient::handle_response(response).await
    }

    /// Remove an animal via `DELETE /api/animals/{id}/`.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let builder = self
            .client
            .request(Method::DELETE, &format!("/api/animals/{id}/"))
            .await?;
        let response = self.client.send(builder).await?;
        ApiClient::handle_empty(response).await
    }
}
