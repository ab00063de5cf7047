use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::ApiError;
use crate::models::plants::SolarPlant;
use crate::services::filter::Filters;
use crate::services::repository::Repository;
use crate::shared_state::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PlantQuery {
    /// `solar` (default) or `eolica`
    pub fonte: Option<String>,
    /// `lista` (default), `geracao` or `summary`
    pub tipo: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PlantSourceQuery {
    /// `solar` (default) or `eolica`
    pub fonte: Option<String>,
}

fn is_wind(fonte: Option<&str>) -> bool {
    fonte == Some("eolica")
}

/// GET /api/usinas
/// Solar plants or wind farms
///
/// `tipo=geracao` returns the fleet generation curve of the selected source
/// (irradiance for solar, wind speed for wind).
#[utoipa::path(
    get,
    path = "/api/usinas",
    params(PlantQuery),
    responses(
        (status = 200, description = "Plants of the selected source, or the series selected by `tipo`", body = Vec<SolarPlant>)
    )
)]
pub async fn list_plants(
    State(state): State<AppState>,
    Query(query): Query<PlantQuery>,
) -> Response {
    let repos = &state.repositories;
    let filters = Filters::new().with_opt("status", query.status.as_deref());
    let wind = is_wind(query.fonte.as_deref());

    match (query.tipo.as_deref(), wind) {
        (Some("geracao"), true) => Json(repos.wind.generation_by_wind()).into_response(),
        (Some("geracao"), false) => Json(repos.solar.daily_generation()).into_response(),
        (Some("summary"), true) => Json(repos.wind.summary()).into_response(),
        (Some("summary"), false) => Json(repos.solar.summary()).into_response(),
        (_, true) => Json(repos.wind.find_all(&filters)).into_response(),
        (_, false) => Json(repos.solar.find_all(&filters)).into_response(),
    }
}

/// GET /api/usinas/{id}
#[utoipa::path(
    get,
    path = "/api/usinas/{id}",
    params(("id" = u32, Path, description = "Plant id"), PlantSourceQuery),
    responses(
        (status = 200, description = "Solar plant or wind farm", body = SolarPlant),
        (status = 404, description = "Plant not found")
    )
)]
pub async fn get_plant(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Query(query): Query<PlantSourceQuery>,
) -> Result<Response, ApiError> {
    let repos = &state.repositories;
    let (entity, found) = if is_wind(query.fonte.as_deref()) {
        let farm = repos.wind.find_by_id(&id).map(|farm| Json(farm).into_response());
        (repos.wind.entity_name(), farm)
    } else {
        let plant = repos.solar.find_by_id(&id).map(|plant| Json(plant).into_response());
        (repos.solar.entity_name(), plant)
    };
    found.ok_or_else(|| ApiError::NotFound {
        entity,
        id: id.to_string(),
    })
}
