//! Profile handlers

use axum::{extract::State, Json};
use vibe_service::{ProfileService, UpdateProfileRequest, UserEnvelope};

use crate::extractors::{CurrentUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Apply a partial profile update
///
/// PUT /profile
pub async fn update_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<UserEnvelope>> {
    let service = ProfileService::new(state.service_context());
    let response = service.update_profile(user, request).await?;
    Ok(Json(response))
}
