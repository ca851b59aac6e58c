//! # shelterhub-auth
//!
//! The session-and-authorization guard every protected screen depends on:
//! token stores, local JWT expiry inspection, the session guard state
//! machine, the role authorization evaluator, and the route enforcement
//! shim that turns their verdicts into render decisions.
//!
//! Every failure path inside this crate resolves to a deny-shaped value
//! (`Unauthorized`, `Denied`, or a redirect); nothing here panics or
//! propagates an error past its boundary.

pub mod guard;
pub mod jwt;
pub mod rbac;
pub mod routes;
pub mod token;

pub use guard::route::{RenderDecision, RouteCheck, RouteGuard};
pub use guard::session::{AuthState, SessionGuard};
pub use rbac::evaluator::{Access, RoleAuthorizer};
pub use rbac::requirement::RouteRequirement;
pub use routes::{ProtectedRoute, RouteTable};
pub use token::file::FileTokenStore;
pub use token::memory::MemoryTokenStore;
