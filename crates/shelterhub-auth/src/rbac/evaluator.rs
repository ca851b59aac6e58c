//! Role authorization evaluation — fail closed, never fail open.

use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, warn};

use shelterhub_core::traits::RolesProvider;
use shelterhub_entity::user::{Role, RoleSet};

use super::requirement::RouteRequirement;

/// Terminal verdict of a role authorization check.
///
/// The transient "check still in flight" state is the pending future
/// itself; callers that need to render something while waiting observe it
/// through the route shim's loading decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The identity may enter the guarded view.
    Allowed,
    /// The identity may not enter the guarded view.
    Denied,
}

/// Decides whether the current identity may enter a view guarded by a
/// [`RouteRequirement`].
///
/// Roles are observed fresh from the provider on every check with a
/// nonempty requirement; nothing is cached across checks, so a server-side
/// role change takes effect on the next navigation.
#[derive(Debug, Clone)]
pub struct RoleAuthorizer {
    roles: Arc<dyn RolesProvider>,
}

impl RoleAuthorizer {
    /// Create an evaluator over the given provider.
    pub fn new(roles: Arc<dyn RolesProvider>) -> Self {
        Self { roles }
    }

    /// Evaluate `requirement` for the current identity.
    ///
    /// An empty requirement is allowed immediately, without touching the
    /// provider. Any provider failure, an empty role set, and an empty
    /// intersection all deny: ambiguity never grants access.
    pub async fn authorize(&self, requirement: &RouteRequirement) -> Access {
        if requirement.is_empty() {
            return Access::Allowed;
        }

        let labels = match self.roles.fetch_roles().await {
            Ok(labels) => labels,
            Err(e) => {
                warn!(error = %e, "Role fetch failed, denying access");
                return Access::Denied;
            }
        };

        let held = parse_labels(&labels);
        if held.is_empty() {
            debug!("Identity holds no recognized roles");
            return Access::Denied;
        }

        if held.intersects(requirement) {
            Access::Allowed
        } else {
            debug!(held = ?held, "No role satisfies the route requirement");
            Access::Denied
        }
    }
}

/// Parse server-reported labels into a [`RoleSet`], dropping anything the
/// taxonomy does not know. An identity holding only unknown labels ends up
/// with an empty set and is denied downstream.
fn parse_labels(labels: &[String]) -> RoleSet {
    let mut held = RoleSet::new();
    for label in labels {
        match Role::from_str(label) {
            Ok(role) => held.insert(role),
            Err(_) => debug!(label = %label, "Ignoring unrecognized role label"),
        }
    }
    held
}
