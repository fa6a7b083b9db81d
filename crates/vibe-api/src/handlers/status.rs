//! Liveness handler

use axum::Json;
use vibe_service::StatusResponse;

/// Liveness banner
///
/// GET /
pub async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "VibeRevive API is running 🚀".to_string(),
    })
}
