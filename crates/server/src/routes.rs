pub mod auth;
pub mod users;

use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use common::types::Health;

pub use auth::ServerState;

async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/users/:id", get(users::get_user))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
