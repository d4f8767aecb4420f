//! Row types for the user account tables, plus the lookup used to pick a user.

pub mod user;
pub mod user_setting;

pub use user::{User, UserLookup};
pub use user_setting::{UserSetting, UserSettingKey};
