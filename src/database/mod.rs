use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use crate::error::AdminError;

pub type DatabasePool = MySqlPool;

// One statement is in flight at a time.
const MAX_CONNECTIONS: u32 = 2;

pub async fn create_pool(database_url: &str) -> Result<DatabasePool, AdminError> {
    // The MySQL driver negotiates TLS when the URL carries `ssl-mode=required`
    // (or `verify_ca` / `verify_identity`). Default is `preferred`.
    let pool = MySqlPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await?;

    ping(&pool).await?;

    if database_url.contains("ssl-mode=") {
        tracing::debug!("Database connection uses an explicit ssl-mode");
    } else if !is_local(database_url) {
        tracing::warn!(
            "Connecting to remote database without explicit ssl-mode. Consider adding ssl-mode=required"
        );
    }

    Ok(pool)
}

pub async fn ping(pool: &DatabasePool) -> Result<(), AdminError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

fn is_local(database_url: &str) -> bool {
    database_url.contains("localhost")
        || database_url.contains("127.0.0.1")
        || database_url.contains("socket=")
}
