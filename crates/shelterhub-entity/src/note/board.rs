//! Message-board labels and their relationship to roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::user::{Role, RoleSet};

/// A department board on the internal message board.
///
/// Board labels and role labels diverge by pluralization: the role is
/// `"volunteer"` while the board is `"volunteers"`. Stored posts exist
/// with both spellings, so parsing accepts the singular alias while
/// serialization always emits the canonical plural label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Board {
    /// CEO announcements.
    #[serde(rename = "ceo")]
    Ceo,
    /// HR staff board.
    #[serde(rename = "hr")]
    Hr,
    /// Board-member board.
    #[serde(rename = "board")]
    Board,
    /// Volunteer board.
    #[serde(rename = "volunteers", alias = "volunteer")]
    Volunteers,
    /// Posts visible to every authenticated identity.
    #[serde(rename = "all")]
    All,
}

impl Board {
    /// Canonical board label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ceo => "ceo",
            Self::Hr => "hr",
            Self::Board => "board",
            Self::Volunteers => "volunteers",
            Self::All => "all",
        }
    }

    /// Human-readable tab name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ceo => "CEO",
            Self::Hr => "HR Staff",
            Self::Board => "Board Members",
            Self::Volunteers => "Volunteers",
            Self::All => "All Messages",
        }
    }

    /// Whether an identity holding `roles` may view this board.
    ///
    /// The role↔board mapping is this single lookup: the shared board is
    /// open to everyone, the CEO sees every board, and the volunteer role
    /// maps to the plural-named volunteer board.
    pub fn permits(&self, roles: &RoleSet) -> bool {
        if roles.contains(&Role::Ceo) {
            return true;
        }
        match self {
            Self::All => true,
            Self::Ceo => false,
            Self::Hr => roles.contains(&Role::Hr),
            Self::Board => roles.contains(&Role::Board),
            Self::Volunteers => roles.contains(&Role::Volunteer),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Board {
    type Err = shelterhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ceo" => Ok(Self::Ceo),
            "hr" => Ok(Self::Hr),
            "board" => Ok(Self::Board),
            "volunteers" | "volunteer" => Ok(Self::Volunteers),
            "all" => Ok(Self::All),
            _ => Err(shelterhub_core::AppError::validation(format!(
                "Invalid board: '{s}'. Expected one of: ceo, hr, board, volunteers, all"
            ))),
        }
    }
}
