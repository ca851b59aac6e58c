//! Integration tests for the session guard, role evaluator, and route
//! enforcement shim, run against injected fakes.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;

use shelterhub_auth::{
    Access, AuthState, MemoryTokenStore, RenderDecision, RoleAuthorizer, RouteGuard,
    RouteRequirement, SessionGuard,
};
use shelterhub_core::AppError;
use shelterhub_core::result::AppResult;
use shelterhub_core::traits::{RolesProvider, TokenRefresher, TokenStore};
use shelterhub_core::types::Session;
use shelterhub_entity::user::Role;

#[derive(Serialize)]
struct TestClaims {
    exp: i64,
    user_id: i64,
}

/// Issue a token the way the backend would; the guard never checks the
/// signature, only the payload.
fn token_expiring_in(seconds: i64) -> String {
    let claims = TestClaims {
        exp: Utc::now().timestamp() + seconds,
        user_id: 7,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"backend-secret"),
    )
    .unwrap()
}

/// Refresh endpoint fake: answers with the configured token or rejects.
#[derive(Debug)]
struct FakeRefresher {
    new_access: Option<String>,
    calls: AtomicUsize,
}

impl FakeRefresher {
    fn succeeding(new_access: &str) -> Self {
        Self {
            new_access: Some(new_access.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            new_access: None,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenRefresher for FakeRefresher {
    async fn refresh_access_token(&self, _refresh_token: &str) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.new_access
            .clone()
            .ok_or_else(|| AppError::authentication("Refresh token rejected"))
    }
}

/// Roles endpoint fake: answers with the configured labels or errors.
#[derive(Debug)]
struct FakeRoles {
    labels: Option<Vec<String>>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl FakeRoles {
    fn reporting(labels: &[&str]) -> Self {
        Self {
            labels: Some(labels.iter().map(|s| s.to_string()).collect()),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            labels: None,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RolesProvider for FakeRoles {
    async fn fetch_roles(&self) -> AppResult<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.labels
            .clone()
            .ok_or_else(|| AppError::external_service("Role fetch timed out"))
    }
}

fn guard_over(store: Arc<dyn TokenStore>, refresher: Arc<FakeRefresher>) -> SessionGuard {
    SessionGuard::new(store, refresher)
}

// ── Session guard ────────────────────────────────────────────────────

#[tokio::test]
async fn missing_tokens_resolve_unauthorized_without_network() {
    let store = Arc::new(MemoryTokenStore::new());
    let refresher = Arc::new(FakeRefresher::succeeding("unused"));
    let guard = guard_over(store, Arc::clone(&refresher));

    assert_eq!(guard.check_authorization().await, AuthState::Unauthorized);
    assert_eq!(refresher.calls(), 0);
}

#[tokio::test]
async fn expired_access_refreshes_and_stores_the_new_token() {
    let store = Arc::new(MemoryTokenStore::with_session(Session::new(
        token_expiring_in(-60),
        "refresh-token",
    )));
    let refresher = Arc::new(FakeRefresher::succeeding("NEWTOK"));
    let guard = guard_over(Arc::clone(&store) as Arc<dyn TokenStore>, Arc::clone(&refresher));

    assert_eq!(guard.check_authorization().await, AuthState::Authorized);
    assert_eq!(refresher.calls(), 1);

    let session = store.get().await.unwrap();
    assert_eq!(session.access.as_deref(), Some("NEWTOK"));
    assert_eq!(session.refresh.as_deref(), Some("refresh-token"));
}

#[tokio::test]
async fn rejected_refresh_leaves_the_store_untouched() {
    let expired = token_expiring_in(-60);
    let store = Arc::new(MemoryTokenStore::with_session(Session::new(
        expired.clone(),
        "stale-refresh",
    )));
    let refresher = Arc::new(FakeRefresher::failing());
    let guard = guard_over(Arc::clone(&store) as Arc<dyn TokenStore>, Arc::clone(&refresher));

    assert_eq!(guard.check_authorization().await, AuthState::Unauthorized);
    assert_eq!(refresher.calls(), 1);

    // No partial mutation: the prior (expired) credentials remain.
    let session = store.get().await.unwrap();
    assert_eq!(session.access.as_deref(), Some(expired.as_str()));
    assert_eq!(session.refresh.as_deref(), Some("stale-refresh"));
}

#[tokio::test]
async fn expired_access_without_refresh_token_is_unauthorized() {
    let store = Arc::new(MemoryTokenStore::with_session(Session {
        access: Some(token_expiring_in(-60)),
        refresh: None,
    }));
    let refresher = Arc::new(FakeRefresher::succeeding("unused"));
    let guard = guard_over(store, Arc::clone(&refresher));

    assert_eq!(guard.check_authorization().await, AuthState::Unauthorized);
    assert_eq!(refresher.calls(), 0);
}

#[tokio::test]
async fn unreadable_token_takes_the_refresh_path() {
    let store = Arc::new(MemoryTokenStore::with_session(Session::new(
        "garbage-not-a-jwt",
        "refresh-token",
    )));
    let refresher = Arc::new(FakeRefresher::succeeding("NEWTOK"));
    let guard = guard_over(Arc::clone(&store) as Arc<dyn TokenStore>, Arc::clone(&refresher));

    assert_eq!(guard.check_authorization().await, AuthState::Authorized);
    assert_eq!(refresher.calls(), 1);
    assert_eq!(store.get().await.unwrap().access.as_deref(), Some("NEWTOK"));
}

#[tokio::test]
async fn fresh_token_checks_are_idempotent_and_offline() {
    let store = Arc::new(MemoryTokenStore::with_session(Session::new(
        token_expiring_in(3600),
        "refresh-token",
    )));
    let refresher = Arc::new(FakeRefresher::succeeding("unused"));
    let guard = guard_over(store, Arc::clone(&refresher));

    assert_eq!(guard.check_authorization().await, AuthState::Authorized);
    assert_eq!(guard.check_authorization().await, AuthState::Authorized);
    assert_eq!(refresher.calls(), 0);
}

// ── Role evaluator ───────────────────────────────────────────────────

#[tokio::test]
async fn empty_requirement_allows_without_a_role_fetch() {
    let roles = Arc::new(FakeRoles::failing());
    let authorizer = RoleAuthorizer::new(Arc::clone(&roles) as Arc<dyn RolesProvider>);

    let verdict = authorizer
        .authorize(&RouteRequirement::any_authenticated())
        .await;

    assert_eq!(verdict, Access::Allowed);
    assert_eq!(roles.calls(), 0);
}

#[tokio::test]
async fn intersection_decides_access() {
    let requirement = RouteRequirement::of([Role::Ceo, Role::Hr]);

    let volunteer = RoleAuthorizer::new(Arc::new(FakeRoles::reporting(&["volunteer"])));
    assert_eq!(volunteer.authorize(&requirement).await, Access::Denied);

    let hr = RoleAuthorizer::new(Arc::new(FakeRoles::reporting(&["hr", "caregiver"])));
    assert_eq!(hr.authorize(&requirement).await, Access::Allowed);
}

#[tokio::test]
async fn empty_role_set_is_denied() {
    let authorizer = RoleAuthorizer::new(Arc::new(FakeRoles::reporting(&[])));
    let verdict = authorizer
        .authorize(&RouteRequirement::of([Role::Ceo]))
        .await;
    assert_eq!(verdict, Access::Denied);
}

#[tokio::test]
async fn unknown_labels_count_for_nothing() {
    let authorizer = RoleAuthorizer::new(Arc::new(FakeRoles::reporting(&["superuser"])));
    let verdict = authorizer
        .authorize(&RouteRequirement::of([Role::Ceo]))
        .await;
    assert_eq!(verdict, Access::Denied);
}

#[tokio::test]
async fn fetch_failure_fails_closed() {
    let authorizer = RoleAuthorizer::new(Arc::new(FakeRoles::failing()));
    let verdict = authorizer
        .authorize(&RouteRequirement::of([Role::Ceo]))
        .await;
    assert_eq!(verdict, Access::Denied);
}

// ── Route enforcement shim ───────────────────────────────────────────

fn route_guard(
    session: Session,
    refresher: Arc<FakeRefresher>,
    roles: Arc<FakeRoles>,
) -> Arc<RouteGuard> {
    let store = Arc::new(MemoryTokenStore::with_session(session));
    let session_guard = Arc::new(SessionGuard::new(store, refresher));
    let authorizer = Arc::new(RoleAuthorizer::new(roles as Arc<dyn RolesProvider>));
    Arc::new(RouteGuard::new(session_guard, authorizer))
}

#[tokio::test]
async fn unauthenticated_navigation_redirects_to_login_without_role_fetch() {
    let roles = Arc::new(FakeRoles::reporting(&["ceo"]));
    let guard = route_guard(
        Session::empty(),
        Arc::new(FakeRefresher::failing()),
        Arc::clone(&roles),
    );

    let decision = guard.resolve(&RouteRequirement::of([Role::Ceo])).await;

    assert_eq!(decision, RenderDecision::RedirectTo("/login".to_string()));
    // Authorization is never evaluated before authentication succeeds.
    assert_eq!(roles.calls(), 0);
}

#[tokio::test]
async fn denied_role_redirects_to_the_landing_page_not_login() {
    let guard = route_guard(
        Session::new(token_expiring_in(3600), "r"),
        Arc::new(FakeRefresher::failing()),
        Arc::new(FakeRoles::reporting(&["volunteer"])),
    );

    let decision = guard.resolve(&RouteRequirement::of([Role::Ceo])).await;

    assert_eq!(
        decision,
        RenderDecision::RedirectTo("/dashboard/overview".to_string())
    );
}

#[tokio::test]
async fn permitted_role_shows_the_view() {
    let guard = route_guard(
        Session::new(token_expiring_in(3600), "r"),
        Arc::new(FakeRefresher::failing()),
        Arc::new(FakeRoles::reporting(&["hr", "volunteer"])),
    );

    let decision = guard
        .resolve(&RouteRequirement::of([Role::Ceo, Role::Hr]))
        .await;

    assert_eq!(decision, RenderDecision::ShowView);
}

#[tokio::test]
async fn enforce_reports_loading_until_the_check_lands() {
    let roles =
        Arc::new(FakeRoles::reporting(&["hr"]).with_delay(Duration::from_millis(50)));
    let guard = route_guard(
        Session::new(token_expiring_in(3600), "r"),
        Arc::new(FakeRefresher::failing()),
        roles,
    );

    let mut check = guard.enforce(RouteRequirement::of([Role::Hr]));
    assert_eq!(check.decision(), RenderDecision::ShowLoading);
    assert_eq!(check.resolved().await, RenderDecision::ShowView);
}

#[tokio::test]
async fn dropping_the_check_discards_the_inflight_result() {
    let roles =
        Arc::new(FakeRoles::reporting(&["hr"]).with_delay(Duration::from_millis(20)));
    let guard = route_guard(
        Session::new(token_expiring_in(3600), "r"),
        Arc::new(FakeRefresher::failing()),
        Arc::clone(&roles),
    );

    let check = guard.enforce(RouteRequirement::of([Role::Hr]));
    drop(check);

    // The in-flight evaluation completes without anywhere to deliver to;
    // nothing panics and the fetch still ran exactly once.
    tokio::time::sleep(Duration::from_millis(60)).await;
    assert_eq!(roles.calls(), 1);
}
