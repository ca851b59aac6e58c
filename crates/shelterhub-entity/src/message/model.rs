//! Direct message models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::UserSummary;

/// A direct message between two users, served by `/api/messages/`.
///
/// The list endpoint only ever returns messages the caller sent or
/// received; there is no global mailbox.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Message identifier.
    pub id: i64,
    /// Sender username.
    pub sender: String,
    /// Receiving account.
    pub receiver: UserSummary,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
    /// When the message was sent.
    pub timestamp: DateTime<Utc>,
}

/// Payload for sending a direct message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMessage {
    /// Receiving account id.
    pub receiver: i64,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
}
