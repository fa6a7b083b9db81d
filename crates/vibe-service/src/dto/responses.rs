//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. IDs serialize
//! as JSON numbers. Optional timestamps serialize as empty strings when
//! absent so clients never see nulls.

use chrono::{DateTime, Utc};
use serde::Serialize;

use vibe_core::value_objects::{MessageId, RequestId, UserId};

// ============================================================================
// Status Response
// ============================================================================

/// Liveness banner for the root endpoint
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Generic acknowledgement with a human-readable message
#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub message: String,
}

impl AckResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response: bearer token plus the user's profile
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

/// Envelope for endpoints returning a single user
#[derive(Debug, Serialize)]
pub struct UserEnvelope {
    pub user: UserResponse,
}

// ============================================================================
// User Responses
// ============================================================================

/// Full profile view of a user
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub vibe_code: String,
    pub bio: String,
    pub profile_image: String,
    pub profile_border: String,
    pub vibe_tags: String,
    pub main_vibe: String,
    /// RFC 3339 timestamp, or empty when the name was never changed
    pub name_changed_at: String,
}

// ============================================================================
// Friend Request Responses
// ============================================================================

/// A pending incoming friend request with the sender's card
#[derive(Debug, Clone, Serialize)]
pub struct FriendRequestResponse {
    pub id: RequestId,
    pub sender_id: UserId,
    pub sender_name: String,
    pub vibe_code: String,
    pub profile_image: String,
    pub profile_border: String,
    pub bio: String,
    pub sent_at: DateTime<Utc>,
}

/// Envelope for the incoming-requests listing
#[derive(Debug, Serialize)]
pub struct FriendRequestsResponse {
    pub requests: Vec<FriendRequestResponse>,
}

/// Outcome of sending a friend request
#[derive(Debug, Serialize)]
pub struct FriendRequestOutcome {
    pub message: String,
    pub auto_accepted: bool,
}

// ============================================================================
// Contact Responses
// ============================================================================

/// One contact row with conversation preview
#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub id: UserId,
    pub name: String,
    pub vibe_code: String,
    pub profile_image: String,
    pub profile_border: String,
    pub last_msg: String,
    /// RFC 3339 timestamp, or empty when no message was exchanged yet
    pub last_time: String,
    pub unread: i64,
}

/// Envelope for the contacts listing
#[derive(Debug, Serialize)]
pub struct ContactsResponse {
    pub contacts: Vec<ContactResponse>,
}

// ============================================================================
// Message Responses
// ============================================================================

/// One message in a conversation view
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: MessageId,
    pub sender_id: UserId,
    pub text: String,
    pub sent_at: DateTime<Utc>,
    pub is_me: bool,
    pub sender_name: String,
}

/// Envelope for a conversation listing
#[derive(Debug, Serialize)]
pub struct MessagesResponse {
    pub messages: Vec<MessageResponse>,
}
