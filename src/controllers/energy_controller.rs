use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::models::energy::GenerationReading;
use crate::services::filter::Filters;
use crate::services::repository::Repository;
use crate::shared_state::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EnergyQuery {
    /// `geracao` (default), `matriz`, `demanda`, `consumo` or `summary`
    pub tipo: Option<String>,
    /// Narrows hourly readings by time label, e.g. `12`
    pub hora: Option<String>,
}

/// GET /api/energia
/// Generation and consumption data
///
/// Without `tipo` (or with `tipo=geracao`) returns the hourly generation per
/// source. The other selectors return the energy mix, the weekly demand
/// curve, consumption per region or the aggregated summary.
#[utoipa::path(
    get,
    path = "/api/energia",
    params(EnergyQuery),
    responses(
        (status = 200, description = "Hourly generation, or the series selected by `tipo`", body = Vec<GenerationReading>)
    )
)]
pub async fn get_energy(
    State(state): State<AppState>,
    Query(query): Query<EnergyQuery>,
) -> Response {
    let repo = &state.repositories.energy;
    match query.tipo.as_deref() {
        Some("matriz") => Json(repo.energy_mix()).into_response(),
        Some("demanda") => Json(repo.weekly_demand()).into_response(),
        Some("consumo") => Json(repo.regional_consumption()).into_response(),
        Some("summary") => Json(repo.summary()).into_response(),
        _ => {
            let filters = Filters::new().with_opt("hora", query.hora.as_deref());
            Json(repo.find_all(&filters)).into_response()
        }
    }
}
