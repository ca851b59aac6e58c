//! Volunteer profile models.

use serde::{Deserialize, Serialize};

use crate::user::UserSummary;

/// A volunteer's profile as served by the roster and profile endpoints.
///
/// `status` stays a plain string: the server owns the choice list and
/// exposes it through `GET /api/choices/user-status/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolunteerProfile {
    /// The owning account.
    pub user: UserSummary,
    /// Short biography.
    #[serde(default)]
    pub bio: String,
    /// Free-form hobbies line.
    #[serde(default)]
    pub hobbies: String,
    /// Home town.
    #[serde(default)]
    pub town: String,
    /// Avatar image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Volunteer status label (server-defined choice).
    #[serde(default)]
    pub status: String,
}

/// Partial update for `PATCH /api/volunteer-profile/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// New biography, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// New hobbies line, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hobbies: Option<String>,
    /// New home town, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub town: Option<String>,
    /// New avatar URL, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
