use thiserror::Error;

/// Errors surfaced by the admin tools library. Binaries wrap these in `anyhow`.
#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("User not found: {0}")]
    UserNotFound(String),
    #[error("Site admin user group not found")]
    AdminGroupNotFound,
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
