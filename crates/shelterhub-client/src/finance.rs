//! Donation, expense, and funds endpoints.

use reqwest::Method;

use shelterhub_core::result::AppResult;
use shelterhub_entity::finance::{AvailableFunds, Donation, Expense, NewDonation, NewExpense};

use crate::client::ApiClient;

/// Finance API client.
#[derive(Debug)]
pub struct FinanceApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl<'a> FinanceApi<'a> {
    /// List donations via `GET /api/donations/`.
    pub async fn donations(&self) -> AppResult<Vec<Donation>> {
        let builder = self.client.request(Method::GET, "/api/donations/").await?;
        let response = self.client.send(builder).await?;
        ApiClient::handle_response(response).await
    }

    /// Record a donation via `POST /api/donations/`.
    ///
    /// The donations endpoint is the one public mutation: the marketing
    /// site posts here without a bearer token.
    pub async fn donate(&self, donation: &NewDonation) -> AppResult<Donation> {
        let builder = self
            .client
            .request(Method::POST, "/api/donations/")
            .await?
            .json(donation);
        let response = self.client.send(builder).await?;
        ApiClient::handle_response(response).await
    }

    /// List expenses via `GET /api/expenses/`.
    pub async fn expenses(&self) -> AppResult<Vec<Expense>> {
        let builder = self.client.request(Method::GET, "/api/expenses/").await?;
        let response = self.client.send(builder).await?;
        ApiClient::handle_response(response).await
    }

    /// Record an expense via `POST /api/expenses/`.
    pub async fn record_expense(&self, expense: &NewExpense) -> AppResult<Expense> {
        let builder = self
            .client
            .request(Method::POST, "/api/expenses/")
            .await?
            .json(expense);
        let response = self.client.send(builder).await?;
        ApiClient::handle_response(response).await
    }

    /// Current balance via `GET /api/funds/`.
    pub async fn available_funds(&self) -> AppResult<AvailableFunds> {
        let builder = self.client.request(Method::GET, "/api/funds/").await?;
        let response = self.client.send(builder).await?;
        ApiClient::handle_response(response).await
    }
}
