//! Route enforcement shim — composes the session guard and the role
//! evaluator around a protected view.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use shelterhub_core::config::auth::AuthConfig;

use crate::rbac::evaluator::{Access, RoleAuthorizer};
use crate::rbac::requirement::RouteRequirement;

use super::session::{AuthState, SessionGuard};

/// What the rendering layer should do with a protected view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderDecision {
    /// A check is still in flight; render a non-committal placeholder,
    /// not the protected content and not a redirect.
    ShowLoading,
    /// Render the protected view.
    ShowView,
    /// Navigate to the given route instead of rendering the view.
    RedirectTo(String),
}

/// Wraps a protected view: authentication first, then role authorization,
/// each failure translated into a redirect.
///
/// An unauthenticated caller is sent to the login route. An authenticated
/// caller who fails the role check is sent to the landing route instead —
/// they ARE logged in, merely not permitted here, and bouncing them to
/// login would log a real session out of the UI.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    session: Arc<SessionGuard>,
    authorizer: Arc<RoleAuthorizer>,
    login_route: String,
    home_route: String,
}

impl RouteGuard {
    /// Create a guard with the default redirect destinations.
    pub fn new(session: Arc<SessionGuard>, authorizer: Arc<RoleAuthorizer>) -> Self {
        Self::with_destinations(session, authorizer, &AuthConfig::default())
    }

    /// Create a guard with the configured redirect destinations.
    pub fn with_destinations(
        session: Arc<SessionGuard>,
        authorizer: Arc<RoleAuthorizer>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            session,
            authorizer,
            login_route: config.login_route.clone(),
            home_route: config.home_route.clone(),
        }
    }

    /// Evaluate the guard for one navigation and return the terminal
    /// decision.
    ///
    /// Authentication strictly precedes authorization: no role fetch is
    /// issued — and so no role information can leak — until the session
    /// guard has resolved `Authorized`.
    pub async fn resolve(&self, requirement: &RouteRequirement) -> RenderDecision {
        match self.session.check_authorization().await {
            AuthState::Unauthorized => RenderDecision::RedirectTo(self.login_route.clone()),
            AuthState::Authorized => match self.authorizer.authorize(requirement).await {
                Access::Allowed => RenderDecision::ShowView,
                Access::Denied => RenderDecision::RedirectTo(self.home_route.clone()),
            },
        }
    }

    /// Start the guard evaluation for a mounting view and return a handle
    /// observing it.
    ///
    /// The handle reads [`RenderDecision::ShowLoading`] until the check
    /// resolves. Dropping the handle — the view unmounted mid-check —
    /// makes the in-flight result undeliverable; the evaluation completes
    /// but its decision is discarded rather than applied to a dead view.
    pub fn enforce(&self, requirement: RouteRequirement) -> RouteCheck {
        let (tx, rx) = watch::channel(RenderDecision::ShowLoading);
        let guard = self.clone();

        tokio::spawn(async move {
            let decision = guard.resolve(&requirement).await;
            if tx.send(decision).is_err() {
                debug!("View unmounted mid-check, discarding decision");
            }
        });

        RouteCheck { rx }
    }
}

/// Live observation of one in-flight guard evaluation.
#[derive(Debug)]
pub struct RouteCheck {
    rx: watch::Receiver<RenderDecision>,
}

impl RouteCheck {
    /// The current decision, without waiting.
    pub fn decision(&self) -> RenderDecision {
        self.rx.borrow().clone()
    }

    /// Wait for the terminal decision.
    pub async fn resolved(&mut self) -> RenderDecision {
        while matches!(*self.rx.borrow(), RenderDecision::ShowLoading) {
            if self.rx.changed().await.is_err() {
                break;
            }
        }
        self.rx.borrow().clone()
    }
}
