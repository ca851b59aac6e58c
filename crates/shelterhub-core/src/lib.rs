//! # shelterhub-core
//!
//! Core crate for the ShelterHub client layer. Contains traits,
//! configuration schemas, the persisted session type, logging setup,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other ShelterHub crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
