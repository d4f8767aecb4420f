//! Access to `users`, `user_groups` and `user_user_groups`.

use async_trait::async_trait;

use crate::database::DatabasePool;
use crate::error::AdminError;
use crate::models::user::UserId;
use crate::models::{User, UserLookup};

/// `role_id` of the site administrator role.
pub const ROLE_ID_SITE_ADMIN: i64 = 1;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_username(&self, lookup: &UserLookup) -> Result<Option<String>, AdminError>;

    /// Returns the affected-row count.
    async fn update_password(
        &self,
        lookup: &UserLookup,
        password_hash: &str,
    ) -> Result<u64, AdminError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AdminError>;

    /// The context-free group carrying the site admin role.
    async fn find_site_admin_group(&self) -> Result<Option<i64>, AdminError>;

    async fn is_group_member(&self, user_id: UserId, user_group_id: i64)
        -> Result<bool, AdminError>;

    async fn add_group_member(&self, user_id: UserId, user_group_id: i64)
        -> Result<(), AdminError>;
}

pub struct MySqlUserStore {
    pool: DatabasePool,
}

impl MySqlUserStore {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for MySqlUserStore {
    async fn find_username(&self, lookup: &UserLookup) -> Result<Option<String>, AdminError> {
        let username = match lookup {
            UserLookup::ById(user_id) => {
                sqlx::query_scalar::<_, String>("SELECT username FROM users WHERE user_id = ?")
                    .bind(user_id)
                    .fetch_optional(&self.pool)
                    .await?
            }
            UserLookup::ByEmail(email) => {
                sqlx::query_scalar::<_, String>("SELECT username FROM users WHERE email = ?")
                    .bind(email)
                    .fetch_optional(&self.pool)
                    .await?
            }
        };
        Ok(username)
    }

    async fn update_password(
        &self,
        lookup: &UserLookup,
        password_hash: &str,
    ) -> Result<u64, AdminError> {
        let result = match lookup {
            UserLookup::ById(user_id) => {
                sqlx::query("UPDATE users SET password = ? WHERE user_id = ?")
                    .bind(password_hash)
                    .bind(user_id)
                    .execute(&self.pool)
                    .await?
            }
            UserLookup::ByEmail(email) => {
                sqlx::query("UPDATE users SET password = ? WHERE email = ?")
                    .bind(password_hash)
                    .bind(email)
                    .execute(&self.pool)
                    .await?
            }
        };
        Ok(result.rows_affected())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AdminError> {
        let user = sqlx::query_as::<_, User>("SELECT user_id, username FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_site_admin_group(&self) -> Result<Option<i64>, AdminError> {
        let group_id = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT user_group_id FROM user_groups
            WHERE (context_id = 0 OR context_id IS NULL) AND role_id = ?
            ORDER BY user_group_id
            LIMIT 1
            "#,
        )
        .bind(ROLE_ID_SITE_ADMIN)
        .fetch_optional(&self.pool)
        .await?;
        Ok(group_id)
    }

    async fn is_group_member(
        &self,
        user_id: UserId,
        user_group_id: i64,
    ) -> Result<bool, AdminError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM user_user_groups WHERE user_id = ? AND user_group_id = ?",
        )
        .bind(user_id)
        .bind(user_group_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    async fn add_group_member(
        &self,
        user_id: UserId,
        user_group_id: i64,
    ) -> Result<(), AdminError> {
        sqlx::query("INSERT INTO user_user_groups (user_id, user_group_id) VALUES (?, ?)")
            .bind(user_id)
            .bind(user_group_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
