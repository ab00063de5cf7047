use std::sync::Arc;

use axum::extract::FromRef;

use crate::config::Config;
use crate::services::exporter::Exporter;
use crate::services::repository::Repositories;

#[derive(Clone, Debug)]
pub struct AppState {
    /// Built once at start-up; only the annotation log mutates afterwards
    pub repositories: Arc<Repositories>,
    pub exporter: Exporter,
}

impl AppState {
    pub fn new(repositories: Repositories, exporter: Exporter) -> Self {
        Self {
            repositories: Arc::new(repositories),
            exporter,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Repositories::seeded(),
            Exporter::new(config.export.filename_prefix.clone()),
        )
    }
}

/// Router state. Handlers extract `State<AppState>` or `State<Config>`.
#[derive(Clone, Debug)]
pub struct SharedState {
    pub app: AppState,
    pub config: Config,
}

impl SharedState {
    pub fn new(app: AppState, config: Config) -> Self {
        Self { app, config }
    }
}

impl FromRef<SharedState> for AppState {
    fn from_ref(shared: &SharedState) -> Self {
        shared.app.clone()
    }
}

impl FromRef<SharedState> for Config {
    fn from_ref(shared: &SharedState) -> Self {
        shared.config.clone()
    }
}
