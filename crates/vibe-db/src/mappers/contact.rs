//! Contact overview model mapper

use vibe_core::entities::{ContactOverview, User};
use vibe_core::value_objects::{UserId, VibeCode};

use crate::models::ContactOverviewModel;

/// Convert a joined contacts-listing row to its entity
impl From<ContactOverviewModel> for ContactOverview {
    fn from(model: ContactOverviewModel) -> Self {
        let user = User {
            id: UserId::new(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            phone: model.phone,
            vibe_code: VibeCode::new(model.vibe_code),
            bio: model.bio,
            profile_image: model.profile_image,
            profile_border: model.profile_border,
            vibe_tags: model.vibe_tags,
            main_vibe: model.main_vibe,
            name_changed_at: model.name_changed_at,
            created_at: model.created_at,
        };

        ContactOverview {
            user,
            last_message: model.last_message,
            last_message_at: model.last_message_at,
            unread_count: model.unread_count,
        }
    }
}
