use std::{env, net::SocketAddr};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, ServerState};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Resolve the bind address from the loaded config, or from env vars with
/// the same fallbacks as `ServerConfig::default`.
fn load_bind_addr(server: Option<configs::ServerConfig>) -> anyhow::Result<SocketAddr> {
    let (host, port) = match server {
        Some(s) => (s.host, s.port),
        None => {
            let fallback = configs::ServerConfig::default();
            let host = env::var("SERVER_HOST").unwrap_or(fallback.host);
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(fallback.port);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    // One config load drives both the DB pool and the bind address
    let cfg = configs::AppConfig::load_and_validate().ok();

    let db = match &cfg {
        Some(cfg) => models::db::connect_with_config(&cfg.database).await?,
        None => models::db::connect().await?,
    };

    let state = ServerState::new(db);

    let cors = build_cors();
    let app: Router = routes::build_router(cors, state);

    let addr = load_bind_addr(cfg.map(|c| c.server))?;
    info!(%addr, "starting dashboard server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
