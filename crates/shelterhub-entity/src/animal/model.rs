//! Animal registry models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::taxonomy::TaxonomicRank;

/// A registry animal as served by `/api/animals/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animal {
    /// Registry identifier.
    pub id: i64,
    /// Given name.
    pub name: String,
    /// Taxonomic classification; the wire field is named `type`.
    #[serde(rename = "type")]
    pub taxonomy: TaxonomicRank,
    /// Status label (server-defined choice).
    pub status: String,
    /// Username of the assigned caregiver, if any.
    #[serde(default)]
    pub caregiver: Option<String>,
    /// When the animal entered the registry.
    pub date_added: DateTime<Utc>,
    /// Whether a curator flagged the record for review.
    #[serde(default)]
    pub needs_review: bool,
}

/// Payload for creating or replacing a registry animal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAnimal {
    /// Given name.
    pub name: String,
    /// Taxonomic classification; the wire field is named `type`.
    #[serde(rename = "type")]
    pub taxonomy: TaxonomicRank,
    /// Status label.
    pub status: String,
    /// Username of the assigned caregiver, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caregiver: Option<String>,
    /// Whether the record needs curator review.
    #[serde(default)]
    pub needs_review: bool,
}
