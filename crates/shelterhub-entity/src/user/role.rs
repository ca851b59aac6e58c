//! Role enumeration and role sets.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Roles the backend assigns to an authenticated identity.
///
/// Labels match the server's group names exactly, including the space in
/// `"head caregiver"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Organization lead; passes every role gate.
    #[serde(rename = "ceo")]
    Ceo,
    /// Human-resources staff.
    #[serde(rename = "hr")]
    Hr,
    /// Board member.
    #[serde(rename = "board")]
    Board,
    /// Lead animal caregiver.
    #[serde(rename = "head caregiver")]
    HeadCaregiver,
    /// Animal caregiver.
    #[serde(rename = "caregiver")]
    Caregiver,
    /// Registered volunteer.
    #[serde(rename = "volunteer")]
    Volunteer,
}

impl Role {
    /// Return the role as its server-side label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ceo => "ceo",
            Self::Hr => "hr",
            Self::Board => "board",
            Self::HeadCaregiver => "head caregiver",
            Self::Caregiver => "caregiver",
            Self::Volunteer => "volunteer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = shelterhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ceo" => Ok(Self::Ceo),
            "hr" => Ok(Self::Hr),
            "board" => Ok(Self::Board),
            "head caregiver" => Ok(Self::HeadCaregiver),
            "caregiver" => Ok(Self::Caregiver),
            "volunteer" => Ok(Self::Volunteer),
            _ => Err(shelterhub_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: ceo, hr, board, head caregiver, caregiver, volunteer"
            ))),
        }
    }
}

/// The set of roles held by an identity at evaluation time.
///
/// Observed fresh per authorization check; never cached across checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSet(BTreeSet<Role>);

impl RoleSet {
    /// An empty role set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from anything yielding roles.
    pub fn from_roles<I: IntoIterator<Item = Role>>(roles: I) -> Self {
        Self(roles.into_iter().collect())
    }

    /// Add a role to the set.
    pub fn insert(&mut self, role: Role) {
        self.0.insert(role);
    }

    /// Whether the identity holds the given role.
    pub fn contains(&self, role: &Role) -> bool {
        self.0.contains(role)
    }

    /// Whether the identity holds no roles at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of roles held.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set shares at least one role with `other`.
    pub fn intersects<'a, I: IntoIterator<Item = &'a Role>>(&self, other: I) -> bool {
        other.into_iter().any(|role| self.0.contains(role))
    }

    /// Iterate over the held roles in label order.
    pub fn iter(&self) -> impl Iterator<Item = &Role> {
        self.0.iter()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        Self::from_roles(iter)
    }
}
