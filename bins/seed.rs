//! Reset the database to the reference catalogue.

use anyhow::Context;
use dotenvy::dotenv;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use service::fixtures::seed_reference_catalog;
use service::repo::SeaOrmCatalog;
use tracing::{error, info};

async fn seed() -> anyhow::Result<()> {
    let cfg = configs::AppConfig::load_or_env().context("load configuration")?;
    let db = connect_with_config(&DatabaseConfig::from(&cfg.database)).await?;
    migration::Migrator::up(&db, None).await.context("apply migrations")?;

    let catalog = SeaOrmCatalog::new(db);
    // 先清空旧数据（产品在前，供应商外键为 RESTRICT）
    catalog.clear().await?;
    info!(service = "seed", event = "cleared", "existing suppliers and products removed");

    let report = seed_reference_catalog(&catalog, &catalog).await?;
    info!(
        service = "seed",
        event = "done",
        suppliers = report.suppliers,
        products = report.products,
        "database seeding completed"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    match seed().await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!(service = "seed", event = "failed", error = %e, "error seeding database");
            std::process::ExitCode::FAILURE
        }
    }
}
