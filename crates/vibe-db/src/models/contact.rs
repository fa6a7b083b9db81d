//! Contact database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Joined row for the contacts listing: contact profile plus conversation state
#[derive(Debug, Clone, FromRow)]
pub struct ContactOverviewModel {
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
    pub last_message: Option<String>,
    pub last_message_at: Option<DateTime<Utc>>,
    pub unread_count: i64,
}
