//! HTTP host for the web view
//!
//! - `GET /api/records?q=` full or filtered table plus status line
//! - `GET /health`
//! - everything else from the built web bundle, when configured

use std::{path::Path, sync::Arc, time::Duration};

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
};
use tracing::{error, info};

pub mod routes;

use crate::{error::Result, sheets::RecordSource};
use routes::{health_handler, records_handler};

pub struct ServerState<S> {
    pub source: S,
    pub sort_on_load: bool,
}

impl<S: RecordSource> ServerState<S> {
    pub fn new(source: S, sort_on_load: bool) -> Arc<Self> {
        Arc::new(Self {
            source,
            sort_on_load,
        })
    }
}

pub fn router<S: RecordSource + 'static>(state: Arc<ServerState<S>>, static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/api/records", get(records_handler::<S>))
        .route("/health", get(health_handler))
        .layer(cors)
        .with_state(state);

    match static_dir {
        Some(dir) => {
            let index = ServeFile::new(dir.join("index.html"));
            app.fallback_service(ServeDir::new(dir).fallback(index))
        }
        None => app,
    }
}

pub async fn start_server<S: RecordSource + 'static>(
    state: Arc<ServerState<S>>,
    address: &str,
    static_dir: Option<&Path>,
) -> Result<()> {
    let app = router(state, static_dir);

    info!("Binding to {address}");
    let listener = TcpListener::bind(address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
