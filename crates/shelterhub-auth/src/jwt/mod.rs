//! Local JWT payload inspection.

pub mod claims;

pub use claims::{GuardClaims, decode_claims};
