use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::{self, AppState};
use service::{CustomerStore, MapStore};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Assemble the router around an in-memory store.
pub fn build_app() -> Router {
    let store: Arc<dyn CustomerStore> = MapStore::new();
    routes::build_router(AppState::new(store), build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Serve `app` on an already-bound listener until Ctrl+C.
pub async fn serve(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Public entry: build the app and run the HTTP server on the configured address
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = cfg.server.bind_addr()?;
    let app = build_app();

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    serve(listener, app).await
}
