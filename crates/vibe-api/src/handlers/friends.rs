//! Friend request handlers

use axum::{extract::State, Json};
use vibe_service::{
    AckResponse, FriendRequestOutcome, FriendRequestsResponse, FriendService, RespondFriendRequest,
    SendFriendRequest,
};

use crate::extractors::{CurrentUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Send a friend request by vibe code
///
/// POST /friends/request
pub async fn send_request(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidatedJson(request): ValidatedJson<SendFriendRequest>,
) -> ApiResult<Json<FriendRequestOutcome>> {
    let service = FriendService::new(state.service_context());
    let response = service.send_request(&user, request).await?;
    Ok(Json(response))
}

/// List pending incoming friend requests
///
/// GET /friends/requests
pub async fn list_requests(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<FriendRequestsResponse>> {
    let service = FriendService::new(state.service_context());
    let response = service.list_incoming(&user).await?;
    Ok(Json(response))
}

/// Accept or decline a pending friend request
///
/// POST /friends/respond
pub async fn respond(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidatedJson(request): ValidatedJson<RespondFriendRequest>,
) -> ApiResult<Json<AckResponse>> {
    let service = FriendService::new(state.service_context());
    let response = service.respond(&user, request).await?;
    Ok(Json(response))
}
