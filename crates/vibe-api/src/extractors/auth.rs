//! Authentication extractor
//!
//! Resolves the bearer token from the Authorization header to the full
//! current user row.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use vibe_core::entities::User;
use vibe_service::AuthService;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from the bearer token
///
/// Carries the full user row so handlers never re-fetch the caller.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        // Decode the token and resolve its subject to a user
        let service = AuthService::new(app_state.service_context());
        let user = service.authenticate(bearer.token()).await.map_err(|e| {
            tracing::warn!(error = %e, "Authentication failed");
            ApiError::Service(e)
        })?;

        Ok(CurrentUser(user))
    }
}
