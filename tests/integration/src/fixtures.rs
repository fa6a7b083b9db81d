//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            first_name: "Test".to_string(),
            last_name: format!("User{suffix}"),
            email: format!("test{suffix}@example.com"),
            phone: None,
            password: "TestPass123!".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
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
    pub name_changed_at: String,
}

/// Envelope for endpoints returning a single user
#[derive(Debug, Deserialize)]
pub struct UserEnvelope {
    pub user: UserResponse,
}

/// Profile update request; omitted fields stay untouched
#[derive(Debug, Default, Serialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vibe_tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_vibe: Option<String>,
}

/// Friend request by vibe code
#[derive(Debug, Serialize)]
pub struct SendFriendRequest {
    pub vibe_code: String,
}

/// Accept or decline a pending friend request
#[derive(Debug, Serialize)]
pub struct RespondFriendRequest {
    pub request_id: i64,
    pub action: String,
}

/// Outcome of sending a friend request
#[derive(Debug, Deserialize)]
pub struct FriendRequestOutcome {
    pub message: String,
    pub auto_accepted: bool,
}

/// One pending incoming friend request
#[derive(Debug, Deserialize)]
pub struct FriendRequestItem {
    pub id: i64,
    pub sender_id: i64,
    pub sender_name: String,
    pub vibe_code: String,
    pub profile_image: String,
    pub profile_border: String,
    pub bio: String,
    pub sent_at: String,
}

/// Incoming friend requests listing
#[derive(Debug, Deserialize)]
pub struct FriendRequestsResponse {
    pub requests: Vec<FriendRequestItem>,
}

/// One contact row with conversation preview
#[derive(Debug, Deserialize)]
pub struct ContactItem {
    pub id: i64,
    pub name: String,
    pub vibe_code: String,
    pub profile_image: String,
    pub profile_border: String,
    pub last_msg: String,
    pub last_time: String,
    pub unread: i64,
}

/// Contacts listing
#[derive(Debug, Deserialize)]
pub struct ContactsResponse {
    pub contacts: Vec<ContactItem>,
}

/// Send a direct message
#[derive(Debug, Serialize)]
pub struct SendMessageRequest {
    pub receiver_id: i64,
    pub text: String,
}

/// One message in a conversation view
#[derive(Debug, Deserialize)]
pub struct MessageItem {
    pub id: i64,
    pub sender_id: i64,
    pub text: String,
    pub sent_at: String,
    pub is_me: bool,
    pub sender_name: String,
}

/// Conversation listing
#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<MessageItem>,
}

/// Generic acknowledgement
#[derive(Debug, Deserialize)]
pub struct AckResponse {
    pub message: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
