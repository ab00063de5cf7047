use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

use crate::models::export::ExportError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Export(ExportError::UnknownDataset(_) | ExportError::UnknownFormat(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Export(ExportError::NothingToExport(_)) => StatusCode::NOT_FOUND,
            ApiError::Export(ExportError::Serialization(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidAction(_) | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("{}", self);
        } else {
            warn!("{}", self);
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
