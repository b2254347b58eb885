use mimalloc::MiMalloc;
use staff_reports::db::Storage;
use staff_reports::service::{csv_loader, report_printer, reports::Reports};
use tracing::info;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = staff_reports::Config::load()?;
    staff_reports::logging::init(&cfg.basic.loglevel);

    info!(
        database_url = %cfg.basic.database_url,
        csv_dir = %cfg.ingest.csv_dir.display(),
        loglevel = %cfg.basic.loglevel
    );

    // Connection or schema failures abort the run.
    let storage = Storage::connect(&cfg.basic.database_url).await?;
    storage.init_schema().await?;
    info!("tables created");

    csv_loader::load_all(&storage, &cfg.ingest.csv_dir).await;

    let reports = Reports::new(&storage);
    let mut stdout = std::io::stdout().lock();
    report_printer::print_all(&reports, &mut stdout).await?;

    storage.close().await;
    Ok(())
}
