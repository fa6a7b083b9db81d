//! Friend request database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the friend_requests table
#[derive(Debug, Clone, FromRow)]
pub struct FriendRequestModel {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub status: String,
    pub sent_at: DateTime<Utc>,
}

/// Joined row for the incoming-requests listing: request plus sender profile
///
/// Sender columns are aliased with a `sender_` prefix in the query.
#[derive(Debug, Clone, FromRow)]
pub struct IncomingRequestModel {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub status: String,
    pub sent_at: DateTime<Utc>,
    pub sender_first_name: String,
    pub sender_last_name: String,
    pub sender_email: String,
    pub sender_phone: Option<String>,
    pub sender_vibe_code: String,
    pub sender_bio: String,
    pub sender_profile_image: String,
    pub sender_profile_border: String,
    pub sender_vibe_tags: String,
    pub sender_main_vibe: String,
    pub sender_name_changed_at: Option<DateTime<Utc>>,
    pub sender_created_at: DateTime<Utc>,
}
