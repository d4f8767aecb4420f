pub mod admin_grant;
pub mod dedupe;
pub mod password_reset;
pub mod settings_store;
pub mod user_store;

pub use settings_store::{MySqlSettingsStore, SettingsStore};
pub use user_store::{MySqlUserStore, UserStore};
