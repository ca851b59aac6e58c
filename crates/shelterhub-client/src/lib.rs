//! # shelterhub-client
//!
//! Typed `reqwest` client for the ShelterHub backend REST API. One
//! accessor struct per resource group; every request re-reads the token
//! store and attaches `Authorization: Bearer …` when an access token is
//! present.
//!
//! [`ApiClient`] also implements the guard-facing traits
//! [`shelterhub_core::traits::TokenRefresher`] and
//! [`shelterhub_core::traits::RolesProvider`], so the same client that
//! serves the screens backs the session guard.

pub mod animals;
pub mod auth;
pub mod choices;
pub mod client;
pub mod finance;
pub mod messages;
pub mod news;
pub mod notes;
pub mod profiles;
pub mod roles;
pub mod users;

pub use auth::TokenPair;
pub use client::ApiClient;
