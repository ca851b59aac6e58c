//! The protected route table.

use shelterhub_entity::user::Role;

use crate::rbac::requirement::RouteRequirement;

/// One protected route and the roles permitted to enter it.
#[derive(Debug, Clone)]
pub struct ProtectedRoute {
    /// Route path as the navigation layer knows it.
    pub path: String,
    /// Roles permitted to enter; empty means any authenticated identity.
    pub requirement: RouteRequirement,
}

/// Ordered registry of protected routes.
///
/// Registration happens once at startup; lookups never mutate.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<ProtectedRoute>,
}

impl RouteTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a protected route. Registering the same path again
    /// replaces its requirement.
    pub fn register(&mut self, path: impl Into<String>, requirement: RouteRequirement) {
        let path = path.into();
        if let Some(existing) = self.routes.iter_mut().find(|route| route.path == path) {
            existing.requirement = requirement;
        } else {
            self.routes.push(ProtectedRoute { path, requirement });
        }
    }

    /// The requirement registered for `path`, if the path is protected.
    pub fn requirement_for(&self, path: &str) -> Option<&RouteRequirement> {
        self.routes
            .iter()
            .find(|route| route.path == path)
            .map(|route| &route.requirement)
    }

    /// Iterate over the registered routes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ProtectedRoute> {
        self.routes.iter()
    }

    /// The dashboard route table of the shelter application.
    ///
    /// Staff-management, board, and financial views are role-gated; the
    /// remaining dashboard views only require authentication.
    pub fn dashboard() -> Self {
        let mut table = Self::new();
        table.register("/dashboard/overview", RouteRequirement::any_authenticated());
        table.register("/dashboard/animals", RouteRequirement::any_authenticated());
        table.register("/dashboard/hr", RouteRequirement::of([Role::Ceo, Role::Hr]));
        table.register(
            "/dashboard/board",
            RouteRequirement::of([Role::Ceo, Role::Board]),
        );
        table.register(
            "/dashboard/volunteers",
            RouteRequirement::of([Role::Ceo, Role::Hr]),
        );
        table.register("/dashboard/messages", RouteRequirement::any_authenticated());
        table.register(
            "/dashboard/analytics",
            RouteRequirement::of([Role::Ceo, Role::Board]),
        );
        table.register("/dashboard/profile", RouteRequirement::any_authenticated());
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let table = RouteTable::dashboard();
        let hr = table.requirement_for("/dashboard/hr").unwrap();
        assert!(hr.permits(&Role::Hr));
        assert!(!hr.permits(&Role::Volunteer));
        assert!(table.requirement_for("/dashboard/overview").unwrap().is_empty());
        assert!(table.requirement_for("/public").is_none());
    }

    #[test]
    fn test_reregistering_replaces() {
        let mut table = RouteTable::new();
        table.register("/dashboard/news", RouteRequirement::any_authenticated());
        table.register("/dashboard/news", RouteRequirement::of([Role::Ceo]));
        let req = table.requirement_for("/dashboard/news").unwrap();
        assert_eq!(req.len(), 1);
        assert!(req.permits(&Role::Ceo));
    }
}
