//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the users table
///
/// The password hash is never selected into this model; login fetches it
/// through a dedicated scalar query.
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub vibe_code: String,
    pub bio: String,
    pub profile_image: String,
    pub profile_border: String,
    pub vibe_tags: String,
    pub main_vibe: String,
    pub name_changed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
