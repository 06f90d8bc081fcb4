//! Offline population script: seeds the catalogue with the sample data and
//! prints everything stored afterward.

use std::sync::Arc;

use tracing::{error, info};

use rango_core::services::SeedService;
use rango_infrastructure::database::connection;
use rango_infrastructure::{PgCategoryRepository, PgPageRepository};
use rango_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    rango_shared::telemetry::init_telemetry("rango-populate");

    println!("Starting Rango population script");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to Database
    info!("Connecting to database at {}...", config.database.url);
    let pool = connection::create_pool(&config.database.url, config.database.max_connections).await?;
    info!("Database connection established.");

    // Apply schema migrations
    sqlx::migrate!("../../migrations").run(&pool).await?;

    // Seed the catalogue
    let category_repo = Arc::new(PgCategoryRepository::new(pool.clone()));
    let page_repo = Arc::new(PgPageRepository::new(pool));
    let seeder = SeedService::new(category_repo, page_repo);

    seeder.seed().await?;

    // Print out the categories and pages that are now stored
    for line in seeder.listing().await? {
        println!("{}", line);
    }

    Ok(())
}
