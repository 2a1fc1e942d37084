use std::{env, net::SocketAddr};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use migration::MigratorTrait;
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

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Connect to the store, run migrations, and seed the catalog, then build
/// the ready-to-serve router. Callers bind a listener only after this
/// completes, so traffic never observes a half-initialized store.
pub async fn init_app() -> anyhow::Result<Router> {
    let db = models::db::connect().await?;
    migration::Migrator::up(&db, None).await?;
    service::seed::seed_initial_products(&db).await?;

    let state = ServerState { db };
    Ok(routes::build_router(state, build_cors()))
}

/// Public entry: initialize the app, then bind and serve HTTP.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let app = init_app().await?;

    let addr = load_bind_addr()?;
    info!(%addr, "starting invotrac server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
