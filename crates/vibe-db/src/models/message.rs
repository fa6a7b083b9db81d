//! Message database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the messages table
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub text: String,
    pub sent_at: DateTime<Utc>,
    pub is_read: bool,
}

/// Joined row for conversation views: message plus sender name parts
#[derive(Debug, Clone, FromRow)]
pub struct ConversationMessageModel {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub text: String,
    pub sent_at: DateTime<Utc>,
    pub is_read: bool,
    pub sender_first_name: String,
    pub sender_last_name: String,
}
