//! Access to the `user_settings` table.

use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::{MySql, QueryBuilder};

use crate::database::DatabasePool;
use crate::error::AdminError;
use crate::models::UserSetting;

/// Ordering defines which row of a duplicate group counts as "last".
pub const SELECT_ALL_SETTINGS_SQL: &str = "SELECT user_id, locale, setting_name, assoc_type, assoc_id, setting_value, setting_type \
     FROM user_settings \
     ORDER BY user_id, locale, setting_name, assoc_type, assoc_id";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Every setting row, in `SELECT_ALL_SETTINGS_SQL` order.
    async fn fetch_all(&self) -> Result<Vec<UserSetting>, AdminError>;

    /// Removes one row matching every identity column plus the value.
    /// Returns the affected-row count.
    async fn delete_exact(&self, setting: &UserSetting) -> Result<u64, AdminError>;
}

pub struct MySqlSettingsStore {
    pool: DatabasePool,
}

impl MySqlSettingsStore {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsStore for MySqlSettingsStore {
    async fn fetch_all(&self) -> Result<Vec<UserSetting>, AdminError> {
        let mut rows = sqlx::query_as::<_, UserSetting>(SELECT_ALL_SETTINGS_SQL).fetch(&self.pool);

        let mut settings = Vec::new();
        while let Some(setting) = rows.try_next().await? {
            settings.push(setting);
        }
        Ok(settings)
    }

    async fn delete_exact(&self, setting: &UserSetting) -> Result<u64, AdminError> {
        let mut query_builder = delete_query(setting);
        let result = query_builder.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}

/// Builds the null-aware delete for one row. Absent values become `IS NULL`,
/// since `column = NULL` never matches. String columns are cast to
/// binary so case or trailing-space variants under a `_ci` collation do not match.
/// `LIMIT 1` keeps fully identical duplicates from taking the retained row
/// with them.
pub fn delete_query(setting: &UserSetting) -> QueryBuilder<'_, MySql> {
    let mut query_builder: QueryBuilder<'_, MySql> =
        QueryBuilder::new("DELETE FROM user_settings WHERE user_id = ");
    query_builder.push_bind(setting.user_id);
    query_builder.push(" AND CAST(locale AS BINARY) = ");
    query_builder.push_bind(setting.locale.as_str());
    query_builder.push(" AND CAST(setting_name AS BINARY) = ");
    query_builder.push_bind(setting.setting_name.as_str());

    push_nullable(&mut query_builder, "assoc_type", setting.assoc_type, false);
    push_nullable(&mut query_builder, "assoc_id", setting.assoc_id, false);
    push_nullable(
        &mut query_builder,
        "setting_value",
        setting.setting_value.as_deref(),
        true,
    );

    query_builder.push(" LIMIT 1");
    query_builder
}

fn push_nullable<'args, T>(
    query_builder: &mut QueryBuilder<'args, MySql>,
    column: &str,
    value: Option<T>,
    binary: bool,
) where
    T: 'args + Send + sqlx::Encode<'args, MySql> + sqlx::Type<MySql>,
{
    query_builder.push(" AND ");
    match value {
        Some(value) => {
            if binary {
                query_builder.push(format!("CAST({} AS BINARY)", column));
            } else {
                query_builder.push(column);
            }
            query_builder.push(" = ").push_bind(value);
        }
        None => {
            query_builder.push(column).push(" IS NULL");
        }
    }
}
