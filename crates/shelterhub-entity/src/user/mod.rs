//! User accounts and the role taxonomy.

pub mod model;
pub mod role;

pub use model::{Registration, UserSummary};
pub use role::{Role, RoleSet};
