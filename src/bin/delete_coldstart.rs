use sqlx::postgres::PgPoolOptions;
use tracing::info;

use feed_coldstart_tools::config::Config;
use feed_coldstart_tools::services::ColdstartService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if it exists (ignore errors if not found)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url())
        .await?;

    let service = ColdstartService::new(pool);
    let deleted = service.clear().await?;

    println!("Deleted {} records from feed_coldstart", deleted);

    Ok(())
}
