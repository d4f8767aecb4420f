// Remove duplicate user_settings rows, keeping the last row of each group
// Usage: cargo run --bin dedupe_user_settings [-- --dry-run]

use anyhow::Context;
use clap::Parser;
use tracing::info;
use user_admin_tools::services::dedupe::find_and_delete_duplicates;
use user_admin_tools::services::MySqlSettingsStore;
use user_admin_tools::{database, logging, Config};

#[derive(Parser, Debug)]
#[command(author, version, about = "Delete duplicate user settings", long_about = None)]
struct Args {
    /// Log what would be deleted without deleting anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenv::dotenv().ok();
    logging::init();

    let config = Config::from_env()?;
    let pool = database::create_pool(&config.database_url)
        .await
        .context("failed to connect to database")?;
    info!("Successfully connected to the database");

    let store = MySqlSettingsStore::new(pool);
    find_and_delete_duplicates(&store, args.dry_run)
        .await
        .context("failed to find and delete duplicates")?;

    Ok(())
}
