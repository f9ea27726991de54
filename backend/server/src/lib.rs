//! Documentation of the DSEC-Lab dark web monitoring demo.
//!
//!
//!
//! # General Infrastructure
//! - A handful of static marketing pages served straight from the templates directory
//! - Frontend assets under `/static`
//! - One JSON search endpoint that answers with **fake** leaked credentials
//! - Any origin may call the API, credentials and all
//!
//!
//!
//! # Search
//!
//! **Goal**: Show what a breach lookup would feel like without touching any real breach data.
//!
//! - Query is trimmed, empty queries are rejected with a 400
//! - Query is classified as an email or a domain, see [`classify`]
//! - Twenty records are drawn from a static catalog, see [`generator`]
//! - Response carries the query, its type, the match count, the records and a timestamp
//!
//!
//!
//! # Notes
//!
//! ## Randomness
//! All searches share one seeded generator behind a lock. Setting `RUST_SEED` makes a fresh
//! process replay the exact same sequence of results, handy for demos and screenshots.
//!
//! ## Breach dates
//! Dates are picked independently of the breach source, so "Equifax 2017" can show up with a
//! 2008 date. This is what the demo has always done.
//!
//!
//!
//! # Setup
//!
//! Run the server from the `backend` directory so the default template/static paths resolve.
//! ```sh
//! RUST_LOG=info cargo run
//! ```
//!
//! Environment.
//! - `RUST_PORT`: listen port, default `8000`
//! - `TEMPLATES_DIR`: html pages, default `templates`
//! - `STATIC_DIR`: frontend assets, default `static`
//! - `RUST_SEED`: optional generator seed
//!
//! Try it.
//! ```sh
//! curl -X POST localhost:8000/api/search -H 'content-type: application/json' -d '{"query":"test@example.com"}'
//! ```
use std::{path::Path, sync::Arc, time::Duration};

use axum::{
    Router,
    routing::{get, post},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

pub mod classify;
pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod routes;
pub mod state;
pub mod utils;

use error::AppError;
use routes::{PAGES, health_handler, search_handler};
use state::AppState;

pub async fn start_server() -> Result<(), AppError> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new()?;

    info!("Starting server...");
    let app = app(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");

    Ok(())
}

pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .max_age(Duration::from_secs(10 * 60));

    let templates = Path::new(&state.config.templates_dir);

    let mut router = Router::new()
        .route("/api/search", post(search_handler))
        .route("/health", get(health_handler));

    for (route, template) in PAGES {
        router = router.route_service(route, ServeFile::new(templates.join(template)));
    }

    router
        .nest_service("/static", ServeDir::new(&state.config.static_dir))
        .layer(cors)
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install signal handler: {e}");
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
