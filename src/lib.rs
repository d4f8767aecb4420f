// Library root - shared by the admin binaries and tests

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod utils;

pub use config::Config;
pub use error::AdminError;
