use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::models::reports::{Annotation, NewAnnotation, Report};
use crate::services::filter::Filters;
use crate::services::repository::Repository;
use crate::shared_state::AppState;

const ADD_ANNOTATION: &str = "anotacao";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportQuery {
    /// `lista` (default), `kpis`, `anotacoes` or `summary`
    pub tipo: Option<String>,
    /// Report type: `diario`, `semanal`, `mensal`, `especial` or `all`
    pub filter: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReportActionRequest {
    /// Only `anotacao` is supported
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// GET /api/relatorios
/// Report catalog, KPI cards, annotations or summary
#[utoipa::path(
    get,
    path = "/api/relatorios",
    params(ReportQuery),
    responses(
        (status = 200, description = "Reports of the selected type, or the data selected by `tipo`", body = Vec<Report>)
    )
)]
pub async fn list_reports(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Response {
    let repo = &state.repositories.reports;
    match query.tipo.as_deref() {
        Some("kpis") => Json(repo.kpis()).into_response(),
        Some("anotacoes") => Json(repo.annotations()).into_response(),
        Some("summary") => Json(repo.summary()).into_response(),
        _ => {
            let filters = Filters::new().with_opt("type", query.filter.as_deref());
            Json(repo.find_all(&filters)).into_response()
        }
    }
}

/// GET /api/relatorios/{id}
#[utoipa::path(
    get,
    path = "/api/relatorios/{id}",
    params(("id" = u32, Path, description = "Report id")),
    responses(
        (status = 200, description = "Report", body = Report),
        (status = 404, description = "Report not found")
    )
)]
pub async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Report>, ApiError> {
    let repo = &state.repositories.reports;
    repo.find_by_id(&id).map(Json).ok_or_else(|| ApiError::NotFound {
        entity: repo.entity_name(),
        id: id.to_string(),
    })
}

/// POST /api/relatorios
/// Add an annotation
///
/// Annotations are kept in memory and numbered from 1 in creation order.
#[utoipa::path(
    post,
    path = "/api/relatorios",
    request_body = ReportActionRequest,
    responses(
        (status = 201, description = "Annotation created", body = Annotation),
        (status = 400, description = "Unsupported action or malformed body")
    )
)]
pub async fn post_report_action(
    State(state): State<AppState>,
    body: Result<Json<ReportActionRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = body?;
    if request.action != ADD_ANNOTATION {
        return Err(ApiError::InvalidAction(request.action));
    }
    let annotation = state.repositories.reports.add_annotation(NewAnnotation {
        title: request.title,
        content: request.content,
    });
    Ok((StatusCode::CREATED, Json(annotation)).into_response())
}
