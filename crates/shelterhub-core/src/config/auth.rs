//! Session-guard and credential-storage configuration.

use serde::{Deserialize, Serialize};

/// Settings for the session guard and the durable token store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Path of the durable token store file.
    #[serde(default = "default_token_file")]
    pub token_file: String,
    /// Clock-skew leeway in seconds when comparing the `exp` claim.
    #[serde(default)]
    pub leeway_seconds: i64,
    /// Route an unauthenticated caller is redirected to.
    #[serde(default = "default_login_route")]
    pub login_route: String,
    /// Landing route reachable by any authenticated identity; the redirect
    /// target when a role check denies access.
    #[serde(default = "default_home_route")]
    pub home_route: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_file: default_token_file(),
            leeway_seconds: 0,
            login_route: default_login_route(),
            home_route: default_home_route(),
        }
    }
}

fn default_token_file() -> String {
    "data/session/tokens.json".to_string()
}

fn default_login_route() -> String {
    "/login".to_string()
}

fn default_home_route() -> String {
    "/dashboard/overview".to_string()
}
