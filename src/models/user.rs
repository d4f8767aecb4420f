use std::fmt;

use crate::error::AdminError;

/// Integer primary key of the `users` table.
pub type UserId = i64;

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    pub user_id: UserId,
    pub username: String,
}

/// How an operator selects the account to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLookup {
    ById(UserId),
    ByEmail(String),
}

impl UserLookup {
    /// Exactly one of `user_id` / `email` must be present. A non-positive ID or
    /// a blank email counts as absent.
    pub fn from_parts(user_id: Option<UserId>, email: Option<String>) -> Result<Self, AdminError> {
        let user_id = user_id.filter(|id| *id > 0);
        let email = email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());

        match (user_id, email) {
            (Some(id), None) => Ok(UserLookup::ById(id)),
            (None, Some(email)) => Ok(UserLookup::ByEmail(email)),
            _ => Err(AdminError::InvalidArguments(
                "Please provide either a user ID or an email, but not both.".to_string(),
            )),
        }
    }
}

impl fmt::Display for UserLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserLookup::ById(id) => write!(f, "user_id {}", id),
            UserLookup::ByEmail(email) => write!(f, "email {}", email),
        }
    }
}
