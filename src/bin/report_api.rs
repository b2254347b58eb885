use mimalloc::MiMalloc;
use staff_reports::router::{ReportApiState, report_router};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = staff_reports::Config::load()?;
    staff_reports::logging::init(&cfg.basic.loglevel);

    let artifacts = cfg.api.artifacts.clone();
    info!(
        top_resources = %artifacts.top_resources.display(),
        average_salary = %artifacts.average_salary.display(),
        department_cost = %artifacts.department_cost.display(),
        "serving report artifacts"
    );

    let app = report_router(ReportApiState::new(artifacts));

    let listener = TcpListener::bind(cfg.api.listen_addr.as_str()).await?;
    info!("HTTP server listening on {}", cfg.api.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
