//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Validation here covers only structural limits; business rules (password
//! strength, email shape, empty messages) live in the services so their
//! domain error codes reach clients.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: String,

    #[validate(length(max = 100, message = "Last name must be at most 100 characters"))]
    pub last_name: String,

    #[validate(length(max = 255, message = "Email must be at most 255 characters"))]
    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    #[validate(length(max = 128, message = "Password must be at most 128 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(max = 255, message = "Email must be at most 255 characters"))]
    pub email: String,

    pub password: String,
}

// ============================================================================
// Profile Requests
// ============================================================================

/// Partial profile update; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "Display name must be 1-100 characters"))]
    pub display_name: Option<String>,

    #[validate(length(max = 1000, message = "Bio must be at most 1000 characters"))]
    pub bio: Option<String>,

    pub profile_image: Option<String>,

    #[validate(length(max = 100, message = "Profile border must be at most 100 characters"))]
    pub profile_border: Option<String>,

    #[validate(length(max = 500, message = "Vibe tags must be at most 500 characters"))]
    pub vibe_tags: Option<String>,

    #[validate(length(max = 100, message = "Main vibe must be at most 100 characters"))]
    pub main_vibe: Option<String>,
}

impl UpdateProfileRequest {
    /// True when no field was supplied at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none()
            && self.bio.is_none()
            && self.profile_image.is_none()
            && self.profile_border.is_none()
            && self.vibe_tags.is_none()
            && self.main_vibe.is_none()
    }
}

// ============================================================================
// Friend Requests
// ============================================================================

/// Send a friend request by vibe code
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendFriendRequest {
    #[validate(length(min = 1, max = 64, message = "Vibe code must be 1-64 characters"))]
    pub vibe_code: String,
}

/// Resolve a pending friend request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RespondFriendRequest {
    pub request_id: i64,
    /// "accept" or "decline"
    pub action: String,
}

// ============================================================================
// Message Requests
// ============================================================================

/// Send a direct message to a contact
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendMessageRequest {
    pub receiver_id: i64,

    #[validate(length(max = 5000, message = "Message must be at most 5000 characters"))]
    pub text: String,
}
