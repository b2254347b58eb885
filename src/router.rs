use crate::config::ArtifactPaths;
use crate::handlers::artifacts::{
    average_salary_handler, department_cost_handler, top_resources_handler,
};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Shared, read-only state of the report API.
#[derive(Clone)]
pub struct ReportApiState {
    pub artifacts: Arc<ArtifactPaths>,
}

impl ReportApiState {
    pub fn new(artifacts: ArtifactPaths) -> Self {
        Self {
            artifacts: Arc::new(artifacts),
        }
    }
}

pub fn report_router(state: ReportApiState) -> Router {
    Router::new()
        .route("/json1", get(top_resources_handler))
        .route("/json2", get(average_salary_handler))
        .route("/json3", get(department_cost_handler))
        .with_state(state)
}
