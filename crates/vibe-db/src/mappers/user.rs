//! User entity <-> model mapper

use vibe_core::entities::User;
use vibe_core::value_objects::{UserId, VibeCode};

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
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
        }
    }
}
