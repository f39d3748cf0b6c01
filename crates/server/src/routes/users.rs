use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use service::auth::domain::AuthUser;

use crate::routes::auth::ServerState;

/// GET /users/:id — 200 public user or 404; lookup errors look like absence
pub async fn get_user(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AuthUser>, (StatusCode, Json<serde_json::Value>)> {
    match state.credentials.get_user_by_id(id).await {
        Some(user) => Ok(Json(user)),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "user not found"})),
        )),
    }
}
