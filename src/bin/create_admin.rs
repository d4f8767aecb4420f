// Grant site admin privileges to an existing user
// Usage: cargo run --bin create_admin -- <email>

use anyhow::Context;
use clap::Parser;
use user_admin_tools::services::admin_grant::grant_site_admin;
use user_admin_tools::services::MySqlUserStore;
use user_admin_tools::{database, logging, Config};

#[derive(Parser, Debug)]
#[command(author, version, about = "Add a user to the site admin group", long_about = None)]
struct Args {
    /// Email of the user to promote
    email: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenv::dotenv().ok();
    logging::init();

    let config = Config::from_env()?;
    let pool = database::create_pool(&config.database_url)
        .await
        .context("failed to open database")?;
    let store = MySqlUserStore::new(pool);

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    grant_site_admin(&store, args.email.trim(), &mut input, &mut output)
        .await
        .context("failed to grant admin privileges")?;

    Ok(())
}
