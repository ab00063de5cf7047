use axum::{routing::get, Router};

use crate::controllers::{
    energy_controller::get_energy,
    export_controller::export_dataset,
    plant_controller::{get_plant, list_plants},
    report_controller::{get_report, list_reports, post_report_action},
    system_controller::get_system_info,
    transmission_controller::{get_transmission_line, list_transmission},
};
use crate::shared_state::SharedState;

/// Build the `/api/*` sub-router.
/// Handlers extract `State<AppState>` and/or `State<Config>` via
/// `FromRef<SharedState>`.
pub fn api_routes(shared: SharedState) -> Router {
    Router::new()
        .route("/energia",          get(get_energy))
        .route("/transmissao",      get(list_transmission))
        .route("/transmissao/{id}", get(get_transmission_line))
        .route("/usinas",           get(list_plants))
        .route("/usinas/{id}",      get(get_plant))
        .route("/relatorios",       get(list_reports).post(post_report_action))
        .route("/relatorios/{id}",  get(get_report))
        .route("/export",           get(export_dataset))
        .route("/sistema",          get(get_system_info))
        .with_state(shared)
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::routes::app_router;
    use crate::shared_state::{AppState, SharedState};

    fn app() -> axum::Router {
        let config = Config::default();
        app_router(SharedState::new(AppState::from_config(&config), config))
    }

    async fn get(app: axum::Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_json(app: axum::Router, uri: &str, body: Value) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_energy_defaults_to_hourly_generation() {
        let response = get(app(), "/api/energia").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body.as_array().unwrap().len(), 12);
        assert_eq!(body[0]["hora"], "00:00");
    }

    #[tokio::test]
    async fn test_energy_summary() {
        let body = json_body(get(app(), "/api/energia?tipo=summary").await).await;
        assert_eq!(body, json!({
            "totalGeracao": 94500,
            "totalCapacidade": 224000,
            "fatorCarga": 42.2,
            "fontes": 6
        }));
    }

    #[tokio::test]
    async fn test_transmission_filters_from_query() {
        let body = json_body(get(app(), "/api/transmissao?status=MANUT").await).await;
        let lines = body.as_array().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["status"], "manutencao");

        let body = json_body(get(app(), "/api/transmissao?status=all&regiao=sul").await).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_transmission_summary_and_lookup() {
        let body = json_body(get(app(), "/api/transmissao?tipo=summary").await).await;
        assert_eq!(body["alerta"], 1);
        assert_eq!(body["total"], 8);

        let response = get(app(), "/api/transmissao/2").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["nome"], "Itaipu - SE Foz");

        let response = get(app(), "/api/transmissao/99").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(json_body(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_plants_by_source() {
        let body = json_body(get(app(), "/api/usinas?fonte=eolica&tipo=summary").await).await;
        assert_eq!(body["totalTurbinas"], 724);

        let body = json_body(get(app(), "/api/usinas?status=manutencao").await).await;
        assert_eq!(body[0]["nome"], "Janauba Solar");

        let body = json_body(get(app(), "/api/usinas/5?fonte=eolica").await).await;
        assert_eq!(body["nome"], "Parque Ventos do Araripe");
    }

    #[tokio::test]
    async fn test_annotations_round_trip() {
        let app = app();
        let response = post_json(
            app.clone(),
            "/api/relatorios",
            json!({ "action": "anotacao", "title": "Pico", "content": "Demanda acima da media" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = json_body(response).await;
        assert_eq!(created["id"], 1);
        assert_eq!(created["title"], "Pico");
        assert!(created["createdAt"].is_string());

        let second = json_body(post_json(app.clone(), "/api/relatorios", json!({ "action": "anotacao" })).await).await;
        assert_eq!(second["id"], 2);

        let listed = json_body(get(app.clone(), "/api/relatorios?tipo=anotacoes").await).await;
        assert_eq!(listed.as_array().unwrap().len(), 2);

        let summary = json_body(get(app, "/api/relatorios?tipo=summary").await).await;
        assert_eq!(summary["totalAnotacoes"], 2);
    }

    #[tokio::test]
    async fn test_invalid_report_action() {
        let response = post_json(app(), "/api/relatorios", json!({ "action": "apagar" })).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_report_body_answers_json_error() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/relatorios")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{ not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["error"].is_string());

        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/relatorios")
                    .body(Body::from(r#"{"action":"anotacao"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_energy_hour_filter_matches_label_text() {
        let body = json_body(get(app(), "/api/energia?hora=08").await).await;
        let hours: Vec<_> = body.as_array().unwrap().iter().map(|r| r["hora"].clone()).collect();
        assert_eq!(hours, vec![json!("08:00")]);

        let body = json_body(get(app(), "/api/energia?hora=2.0").await).await;
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reports_filter_by_type() {
        let body = json_body(get(app(), "/api/relatorios?filter=mensal").await).await;
        assert_eq!(body.as_array().unwrap().len(), 4);

        let body = json_body(get(app(), "/api/relatorios?filter=all").await).await;
        assert_eq!(body.as_array().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_export_download_headers() {
        let response = get(app(), "/api/export?formato=json&dados=solar").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json; charset=utf-8"
        );
        let disposition = response.headers()[header::CONTENT_DISPOSITION].to_str().unwrap().to_string();
        assert!(disposition.starts_with("attachment; filename=\"ons_solar_"));
        assert!(disposition.ends_with(".json\""));

        let body = json_body(response).await;
        assert_eq!(body["title"], "Usinas Solares");
        assert_eq!(body["data"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_export_defaults_to_energy_csv() {
        let response = get(app(), "/api/export").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv; charset=utf-8");
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.starts_with("hora;hidro;eolica;solar;termica;biomassa\n00:00;42000"));
    }

    #[tokio::test]
    async fn test_export_client_errors() {
        let response = get(app(), "/api/export?formato=csv&dados=doesnotexist").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["error"].as_str().unwrap().contains("doesnotexist"));

        let response = get(app(), "/api/export?formato=pdf").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_system_info_lists_datasets() {
        let body = json_body(get(app(), "/api/sistema").await).await;
        assert_eq!(body["datasets"].as_array().unwrap().len(), 5);
        assert_eq!(body["export_filename_prefix"], "ons");
    }

    #[tokio::test]
    async fn test_scalar_ui_is_served() {
        let response = get(app(), "/scalar").await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
