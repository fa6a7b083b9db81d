//! Message entity - a unit of direct communication

use chrono::{DateTime, Utc};

use crate::value_objects::{MessageId, UserId};

/// Direct message between two contacts
///
/// Rows are append-only; the read flag is the single mutable bit and only
/// ever moves from unread to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub text: String,
    pub sent_at: DateTime<Utc>,
    pub is_read: bool,
}

/// A message joined with its sender's display name, for conversation views
#[derive(Debug, Clone)]
pub struct ConversationMessage {
    pub message: Message,
    pub sender_name: String,
}
