//! Profile service
//!
//! Handles partial profile updates, including the display-name change flow
//! with its 30-day lock and vibe code regeneration.

use chrono::Utc;
use tracing::{info, instrument};

use vibe_core::entities::{split_display_name, User};
use vibe_core::error::DomainError;

use crate::dto::{UpdateProfileRequest, UserEnvelope, UserResponse};

use super::codes::unique_vibe_code;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply a partial profile update to the current user
    ///
    /// A display-name change resets the vibe code and starts the name lock.
    /// An empty update is a no-op that returns the unchanged profile.
    #[instrument(skip(self, current, request), fields(user_id = %current.id))]
    pub async fn update_profile(
        &self,
        current: User,
        request: UpdateProfileRequest,
    ) -> ServiceResult<UserEnvelope> {
        if request.is_empty() {
            return Ok(UserEnvelope {
                user: UserResponse::from(&current),
            });
        }

        let mut user = current;

        if let Some(display_name) = request.display_name {
            let now = Utc::now();
            if let Some(days_remaining) = user.name_lock_remaining_days(now) {
                return Err(ServiceError::Domain(DomainError::NameLocked {
                    days_remaining,
                }));
            }

            let (first_name, last_name) = split_display_name(&display_name);
            let vibe_code = unique_vibe_code(
                self.ctx.user_repo(),
                &first_name,
                &last_name,
                Some(user.id),
            )
            .await?;

            info!(user_id = %user.id, new_code = %vibe_code, "Display name changed");

            user.first_name = first_name;
            user.last_name = last_name;
            user.vibe_code = vibe_code;
            user.name_changed_at = Some(now);
        }

        if let Some(bio) = request.bio {
            user.bio = bio;
        }
        if let Some(profile_image) = request.profile_image {
            user.profile_image = profile_image;
        }
        if let Some(profile_border) = request.profile_border {
            user.profile_border = profile_border;
        }
        if let Some(vibe_tags) = request.vibe_tags {
            user.vibe_tags = vibe_tags;
        }
        if let Some(main_vibe) = request.main_vibe {
            user.main_vibe = main_vibe;
        }

        self.ctx.user_repo().update_profile(&user).await?;

        Ok(UserEnvelope {
            user: UserResponse::from(&user),
        })
    }
}
