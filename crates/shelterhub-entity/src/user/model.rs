//! User account models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user as embedded in rosters and message payloads.
///
/// `roles` carries the server's raw group labels; parsing them into
/// [`super::Role`] is the authorization layer's concern, so an account with
/// an unrecognized label still deserializes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    /// Account identifier.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Raw role labels as reported by the server.
    #[serde(default)]
    pub roles: Vec<String>,
    /// When the account was created.
    pub date_joined: DateTime<Utc>,
}

/// Payload for `POST /api/user/register/`.
///
/// Profile fields are optional; the server creates the volunteer profile
/// alongside the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    /// Desired login name.
    pub username: String,
    /// Plaintext password, transported over TLS and never stored here.
    pub password: String,
    /// Contact email.
    pub email: String,
    /// Short biography for the volunteer profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Free-form hobbies line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hobbies: Option<String>,
    /// Home town.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub town: Option<String>,
    /// Avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
