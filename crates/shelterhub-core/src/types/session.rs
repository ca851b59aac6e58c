//! The persisted credential pair.

use serde::{Deserialize, Serialize};

/// The access/refresh token pair owned by the token store.
///
/// Created on login, mutated on refresh (access token replaced), destroyed
/// on logout or unrecoverable auth failure. An absent access token always
/// means "unauthenticated" — no caller may treat a missing token as valid.
///
/// The wire/storage keys are `"access"` and `"refresh"`, matching the
/// origin-scoped key-value layout the backend's web clients use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Short-lived bearer credential, absent when logged out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,
    /// Longer-lived credential exchanged for new access tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<String>,
}

impl Session {
    /// A session holding both credentials.
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            access: Some(access.into()),
            refresh: Some(refresh.into()),
        }
    }

    /// A session with no credentials at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether this session carries no access token.
    pub fn is_anonymous(&self) -> bool {
        self.access.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keys() {
        let session = Session::new("a.b.c", "r.s.t");
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["access"], "a.b.c");
        assert_eq!(json["refresh"], "r.s.t");
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let json = serde_json::to_string(&Session::empty()).unwrap();
        assert_eq!(json, "{}");
        let parsed: Session = serde_json::from_str("{}").unwrap();
        assert!(parsed.is_anonymous());
        assert!(parsed.refresh.is_none());
    }
}
