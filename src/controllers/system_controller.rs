use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::{Config, ServerConfig};
use crate::models::export::Dataset;

#[derive(Debug, Serialize, ToSchema)]
pub struct SystemInfo {
    pub version: String,
    pub server: ServerConfig,
    pub export_filename_prefix: String,
    pub datasets: Vec<Dataset>,
    pub formats: Vec<String>,
}

/// GET /api/sistema
/// Running configuration and the exportable datasets
#[utoipa::path(
    get,
    path = "/api/sistema",
    responses(
        (status = 200, description = "System information", body = SystemInfo)
    )
)]
pub async fn get_system_info(State(config): State<Config>) -> Json<SystemInfo> {
    Json(SystemInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        server: config.server,
        export_filename_prefix: config.export.filename_prefix,
        datasets: Dataset::ALL.to_vec(),
        formats: ["csv", "json", "md"].map(String::from).to_vec(),
    })
}
