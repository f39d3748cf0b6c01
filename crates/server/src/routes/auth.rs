use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use sea_orm::DatabaseConnection;

use service::auth::domain::{AuthUser, LoginInput, RegisterInput};
use service::auth::repo::seaorm::SeaOrmUserRepository;
use service::auth::CredentialService;

use crate::errors::ApiAuthError;

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub credentials: Arc<CredentialService<SeaOrmUserRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmUserRepository { db: db.clone() });
        Self { db, credentials: Arc::new(CredentialService::new(repo)) }
    }
}

/// POST /auth/register — 200 public user, 400 validation, 409 duplicate
pub async fn register(
    State(state): State<ServerState>,
    Json(input): Json<RegisterInput>,
) -> Result<Json<AuthUser>, ApiAuthError> {
    let user = state.credentials.register(input).await?;
    Ok(Json(user))
}

/// POST /auth/login — 200 public user, 400 validation, 401 invalid credentials.
/// Session establishment is the caller's concern; no cookie or token is issued.
pub async fn login(
    State(state): State<ServerState>,
    Json(input): Json<LoginInput>,
) -> Result<Json<AuthUser>, ApiAuthError> {
    let user = state.credentials.authenticate(input).await?;
    Ok(Json(user))
}
