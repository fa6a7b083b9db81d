//! User entity - identity and profile record

use chrono::{DateTime, Utc};

use crate::value_objects::{UserId, VibeCode};

/// Border theme applied when a user never picked one
pub const DEFAULT_PROFILE_BORDER: &str = "glow_purple";

/// Days a display name stays locked after a change
pub const NAME_LOCK_DAYS: i64 = 30;

/// User entity
///
/// The password hash deliberately lives outside this type; it is fetched
/// separately by the login path and never travels with profile data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub vibe_code: VibeCode,
    pub bio: String,
    pub profile_image: String,
    pub profile_border: String,
    pub vibe_tags: String,
    pub main_vibe: String,
    pub name_changed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Full display name: "First Last", trimmed when the last name is empty
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Border theme, falling back to the default when unset
    pub fn profile_border_or_default(&self) -> &str {
        if self.profile_border.is_empty() {
            DEFAULT_PROFILE_BORDER
        } else {
            &self.profile_border
        }
    }

    /// Days remaining on the name-change lock, or None when a change is allowed
    ///
    /// The lock starts at the last recorded name change and runs for
    /// [`NAME_LOCK_DAYS`] whole days.
    pub fn name_lock_remaining_days(&self, now: DateTime<Utc>) -> Option<i64> {
        let changed_at = self.name_changed_at?;
        let elapsed = (now - changed_at).num_days();
        if elapsed < NAME_LOCK_DAYS {
            Some(NAME_LOCK_DAYS - elapsed)
        } else {
            None
        }
    }
}

/// Fields required to insert a user row; the store assigns id and timestamps
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub vibe_code: VibeCode,
}

/// Split a display name into (first, last)
///
/// The first whitespace-delimited token becomes the first name, the remainder
/// (possibly empty) the last name.
pub fn split_display_name(display_name: &str) -> (String, String) {
    let trimmed = display_name.trim();
    match trimmed.split_once(' ') {
        Some((first, rest)) => (first.to_string(), rest.trim_start().to_string()),
        None => (trimmed.to_string(), String::new()),
    }
}
