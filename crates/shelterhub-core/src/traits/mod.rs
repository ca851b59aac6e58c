//! Cross-crate trait seams.
//!
//! The guard crate consumes these traits; the client crate (and test
//! fakes) implement them. Keeping the seams here lets every consumer be
//! constructor-injected instead of reaching for ambient globals.

pub mod auth_api;
pub mod token_store;

pub use auth_api::{RolesProvider, TokenRefresher};
pub use token_store::TokenStore;
