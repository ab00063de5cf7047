mod routes;
mod controllers;
mod services;
mod models;
mod api_docs;
mod shared_state;
mod config;
mod error;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::models::export::Dataset;
use crate::routes::app_router;
use crate::shared_state::{AppState, SharedState};

const CONFIG_PATH: &str = "config.json";

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() {
    // 1. Load configuration
    let (config, load_error) = match Config::load(CONFIG_PATH) {
        Ok(c) => (c, None),
        Err(e) if e.is_not_found() => (Config::default(), Some(e)),
        Err(e) => {
            init_tracing("info");
            error!("Failed to load {}: {}", CONFIG_PATH, e);
            return;
        }
    };
    init_tracing(&config.logging.level);
    if let Some(e) = load_error {
        warn!("{}; using defaults", e);
    }

    // 2. Build repositories once and share them with every handler
    let state = AppState::from_config(&config);
    for dataset in Dataset::ALL {
        info!("Dataset {}: {} records", dataset, state.repositories.record_count(dataset));
    }

    // 3. Start Axum HTTP server
    let addr = config.server.socket_addr();
    let app = app_router(SharedState::new(state, config));

    info!("API Server listening on http://{}", addr);
    info!("Scalar UI: http://{}/scalar", addr);

    if let Err(e) = axum_server::bind(addr).serve(app.into_make_service()).await {
        error!("HTTP server error: {}", e);
    }
}
