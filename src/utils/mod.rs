pub mod password;
pub mod prompt;
