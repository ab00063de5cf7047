use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::ApiError;
use crate::models::transmission::TransmissionLine;
use crate::services::filter::Filters;
use crate::services::repository::Repository;
use crate::shared_state::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TransmissionQuery {
    /// `linhas` (default), `intercambios` or `summary`
    pub tipo: Option<String>,
    /// `operando`, `manutencao`, `alerta` or any part of them
    pub status: Option<String>,
    pub regiao: Option<String>,
}

/// GET /api/transmissao
/// Transmission lines, interchanges between subsystems, or their summary
#[utoipa::path(
    get,
    path = "/api/transmissao",
    params(TransmissionQuery),
    responses(
        (status = 200, description = "Lines matching the filters, or the series selected by `tipo`", body = Vec<TransmissionLine>)
    )
)]
pub async fn list_transmission(
    State(state): State<AppState>,
    Query(query): Query<TransmissionQuery>,
) -> Response {
    let repo = &state.repositories.transmission;
    match query.tipo.as_deref() {
        Some("intercambios") => Json(repo.interchanges()).into_response(),
        Some("summary") => Json(repo.summary()).into_response(),
        _ => {
            let filters = Filters::new()
                .with_opt("status", query.status.as_deref())
                .with_opt("regiao", query.regiao.as_deref());
            Json(repo.find_all(&filters)).into_response()
        }
    }
}

/// GET /api/transmissao/{id}
#[utoipa::path(
    get,
    path = "/api/transmissao/{id}",
    params(("id" = u32, Path, description = "Line id")),
    responses(
        (status = 200, description = "Transmission line", body = TransmissionLine),
        (status = 404, description = "Line not found")
    )
)]
pub async fn get_transmission_line(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<TransmissionLine>, ApiError> {
    let repo = &state.repositories.transmission;
    repo.find_by_id(&id).map(Json).ok_or_else(|| ApiError::NotFound {
        entity: repo.entity_name(),
        id: id.to_string(),
    })
}
