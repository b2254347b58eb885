use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ReportError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown column `{column}` for table {table}")]
    UnknownColumn { table: &'static str, column: String },

    #[error("integrity violation in table {table}: {message}")]
    Integrity { table: &'static str, message: String },
}

/// Error envelope returned by the report API.
#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

impl IntoResponse for ReportError {
    fn into_response(self) -> axum::response::Response {
        // The caller only learns that the artifact could not be served.
        let body = ApiErrorResponse {
            error: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
