use crate::{ReportError, router::ReportApiState};
use axum::{Json, extract::State};
use serde_json::Value;
use std::path::Path;
use tracing::warn;

/// Read and parse one artifact. Nothing is cached between requests.
async fn read_artifact(path: &Path) -> Result<Value, ReportError> {
    let bytes = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

async fn serve_artifact(path: &Path) -> Result<Json<Value>, ReportError> {
    read_artifact(path)
        .await
        .map(Json)
        .inspect_err(|e| warn!(path = %path.display(), error = %e, "failed to serve artifact"))
}

/// GET /json1 -> three most used material resources.
pub async fn top_resources_handler(
    State(state): State<ReportApiState>,
) -> Result<Json<Value>, ReportError> {
    serve_artifact(&state.artifacts.top_resources).await
}

/// GET /json2 -> average salary by department.
pub async fn average_salary_handler(
    State(state): State<ReportApiState>,
) -> Result<Json<Value>, ReportError> {
    serve_artifact(&state.artifacts.average_salary).await
}

/// GET /json3 -> cost by department.
pub async fn department_cost_handler(
    State(state): State<ReportApiState>,
) -> Result<Json<Value>, ReportError> {
    serve_artifact(&state.artifacts.department_cost).await
}
