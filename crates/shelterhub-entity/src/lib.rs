//! # shelterhub-entity
//!
//! Domain entity models for the ShelterHub client layer. Every struct in
//! this crate mirrors a payload of the backend REST API on the wire; all
//! entities derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod animal;
pub mod finance;
pub mod message;
pub mod news;
pub mod note;
pub mod profile;
pub mod user;
