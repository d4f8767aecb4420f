use std::env;

use crate::error::AdminError;

pub const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub bcrypt_cost: u32,
}

impl Config {
    /// Reads `DSN` (falling back to `DATABASE_URL`) and `BCRYPT_COST`.
    /// Call `dotenv::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, AdminError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AdminError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DSN")
            .filter(|v| !v.trim().is_empty())
            .or_else(|| lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()))
            .ok_or_else(|| {
                AdminError::Config("DSN environment variable is not set".to_string())
            })?;

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(raw) => parse_cost(&raw)?,
            None => bcrypt::DEFAULT_COST,
        };

        Ok(Self {
            database_url,
            bcrypt_cost,
        })
    }
}

fn parse_cost(raw: &str) -> Result<u32, AdminError> {
    let cost: u32 = raw
        .trim()
        .parse()
        .map_err(|_| AdminError::Config(format!("BCRYPT_COST is not a number: {}", raw)))?;
    if !(4..=31).contains(&cost) {
        return Err(AdminError::Config(format!(
            "BCRYPT_COST must be between 4 and 31, got {}",
            cost
        )));
    }
    Ok(cost)
}
