// Reset a user's password, selecting the user by ID or email
// Usage: cargo run --bin change_password -- --email <email> --password <password>

use anyhow::Context;
use clap::Parser;
use user_admin_tools::services::password_reset::{reset_password, PasswordResetRequest};
use user_admin_tools::services::MySqlUserStore;
use user_admin_tools::{database, logging, Config};

#[derive(Parser, Debug)]
#[command(author, version, about = "Reset a user's password by user ID or email", long_about = None)]
struct Args {
    /// User ID of the account (0 counts as not given)
    #[arg(long)]
    user_id: Option<i64>,

    /// Email of the account
    #[arg(long)]
    email: Option<String>,

    /// New password
    #[arg(long)]
    password: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let request = PasswordResetRequest::new(args.user_id, args.email, args.password)?;

    dotenv::dotenv().ok();
    logging::init();

    let config = Config::from_env()?;
    let pool = database::create_pool(&config.database_url)
        .await
        .context("Error connecting to database")?;
    let store = MySqlUserStore::new(pool);

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    reset_password(
        &store,
        &request,
        config.bcrypt_cost,
        &mut input,
        &mut output,
    )
    .await
    .context("Password update failed")?;

    Ok(())
}
