//! Message-board post models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::board::Board;

/// A post on the internal message board, served by `/api/notes/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    /// Post identifier.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Author username.
    pub author: String,
    /// Boards the post appears on.
    #[serde(default)]
    pub boards: Vec<Board>,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Whether this post is visible to an identity holding `roles`.
    pub fn visible_to(&self, roles: &crate::user::RoleSet) -> bool {
        self.boards.iter().any(|board| board.permits(roles))
    }
}

/// Payload for creating a board post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNote {
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Boards the post should appear on.
    pub boards: Vec<Board>,
}
