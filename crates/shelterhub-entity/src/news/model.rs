//! News feed models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A news item as served by `/api/news/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct News {
    /// News identifier.
    pub id: i64,
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Publication timestamp.
    pub date_posted: DateTime<Utc>,
    /// News category label (server-defined choice); wire field `type`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Linked registry animal, if the item is about one.
    #[serde(default)]
    pub animal: Option<i64>,
    /// Author username.
    #[serde(default)]
    pub author: Option<String>,
}

/// Payload for publishing a news item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNews {
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
    /// News category label; wire field `type`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Linked registry animal, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animal: Option<i64>,
}
