//! Authentication handlers
//!
//! Endpoints for user registration, login, and the current-user lookup.

use axum::{extract::State, Json};
use vibe_service::{
    AuthResponse, AuthService, LoginRequest, RegisterRequest, UserEnvelope, UserResponse,
};

use crate::extractors::{CurrentUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Register a new user
///
/// POST /register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Json(response))
}

/// Login with email and password
///
/// POST /login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Get the authenticated user's own profile
///
/// GET /me
pub async fn me(CurrentUser(user): CurrentUser) -> Json<UserEnvelope> {
    Json(UserEnvelope {
        user: UserResponse::from(&user),
    })
}
