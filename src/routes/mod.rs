pub mod api_routes;

use axum::{response::Html, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_scalar::Scalar;

use crate::api_docs::ApiDoc;
use crate::shared_state::SharedState;

/// Full application: `/api/*`, the Scalar UI, request tracing and CORS for
/// the browser dashboards.
pub fn app_router(shared: SharedState) -> Router {
    Router::new()
        .nest("/api", api_routes::api_routes(shared))
        .route("/scalar", get(|| async {
            Html(Scalar::new(ApiDoc::openapi()).to_html())
        }))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
