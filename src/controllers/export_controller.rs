use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::ApiError;
use crate::shared_state::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExportQuery {
    /// `csv` (default), `json` or `md`
    pub formato: Option<String>,
    /// `energia` (default), `transmissao`, `solar`, `eolica` or `relatorios`
    pub dados: Option<String>,
}

/// GET /api/export
/// Download a dataset
///
/// Returns the selected dataset as an attachment. CSV is `;`-separated,
/// JSON is wrapped in a `{title, exportedAt, data}` envelope and Markdown
/// renders a table with a record count.
#[utoipa::path(
    get,
    path = "/api/export",
    params(ExportQuery),
    responses(
        (status = 200, description = "File download", body = String),
        (status = 400, description = "Unknown dataset or format"),
        (status = 404, description = "Dataset is empty")
    )
)]
pub async fn export_dataset(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, ApiError> {
    let format = query.formato.as_deref().unwrap_or("csv");
    let dataset = query.dados.as_deref().unwrap_or("energia");

    let payload = state.exporter.export(&state.repositories, format, dataset)?;
    let disposition = payload.content_disposition();
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, payload.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        payload.body,
    )
        .into_response())
}
