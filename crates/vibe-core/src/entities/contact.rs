//! Contact entity - one direction of a mirrored contact edge

use chrono::{DateTime, Utc};

use crate::entities::User;
use crate::value_objects::UserId;

/// A directed "is contact of" edge
///
/// Edges are always created in mirrored pairs; a lone direction never exists
/// in steady state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub user_id: UserId,
    pub contact_id: UserId,
    pub added_at: DateTime<Utc>,
}

/// A contact joined with conversation state, for the contacts listing
#[derive(Debug, Clone)]
pub struct ContactOverview {
    /// The contact's user record
    pub user: User,
    /// Text of the most recent message in either direction, if any
    pub last_message: Option<String>,
    /// Timestamp of that message
    pub last_message_at: Option<DateTime<Utc>>,
    /// Messages from this contact the owner has not read yet
    pub unread_count: i64,
}
