//! Role-based route authorization.

pub mod evaluator;
pub mod requirement;

pub use evaluator::{Access, RoleAuthorizer};
pub use requirement::RouteRequirement;
