//! Claims this layer reads out of an access token without the network.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use shelterhub_core::error::AppError;

/// The subset of JWT claims the guard inspects.
///
/// The token is opaque to this layer except for `exp`. Signature
/// verification is the server's job — the signing secret never reaches a
/// client, so the payload is decoded with signature validation disabled
/// and the result is used only to schedule a refresh, never to grant
/// anything the server would not re-check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardClaims {
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Subject the token was issued for, when the server includes it.
    #[serde(default)]
    pub user_id: Option<i64>,
}

impl GuardClaims {
    /// Whether the token is past its expiry, with `leeway_seconds` of
    /// clock-skew tolerance. A token whose `exp` is strictly in the past
    /// is unusable for authorization.
    pub fn is_expired(&self, leeway_seconds: i64) -> bool {
        self.exp + leeway_seconds < Utc::now().timestamp()
    }
}

/// Decode the payload of `token` locally.
///
/// Expiry is NOT validated here — the caller compares `exp` itself so an
/// expired token can route into the refresh path instead of surfacing as
/// a decode error. An unparseable payload is an error the caller must
/// treat the same as "expired".
pub fn decode_claims(token: &str) -> Result<GuardClaims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;

    let data = decode::<GuardClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map_err(|e| AppError::authentication(format!("Unreadable token payload: {e}")))?;

    Ok(data.claims)
}
