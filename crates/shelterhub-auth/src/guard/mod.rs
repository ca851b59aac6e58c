//! Session guard and route enforcement.

pub mod route;
pub mod session;

pub use route::{RenderDecision, RouteCheck, RouteGuard};
pub use session::{AuthState, SessionGuard};
