use super::user::UserId;

/// One row of `user_settings`.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UserSetting {
    pub user_id: UserId,
    pub locale: String,
    pub setting_name: String,
    pub assoc_type: Option<i64>,
    pub assoc_id: Option<i64>,
    pub setting_value: Option<String>,
    pub setting_type: String,
}

/// Logical identity of a setting. Null association fields stay `None`, so a
/// null `assoc_type` never collides with an explicit `0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserSettingKey {
    pub user_id: UserId,
    pub locale: String,
    pub setting_name: String,
    pub assoc_type: Option<i64>,
    pub assoc_id: Option<i64>,
}

impl UserSetting {
    pub fn key(&self) -> UserSettingKey {
        UserSettingKey {
            user_id: self.user_id,
            locale: self.locale.clone(),
            setting_name: self.setting_name.clone(),
            assoc_type: self.assoc_type,
            assoc_id: self.assoc_id,
        }
    }

    /// Value for log lines: at most `max_chars` characters, then `...`.
    pub fn truncated_value(&self, max_chars: usize) -> String {
        let value = self.setting_value.as_deref().unwrap_or("");
        match value.char_indices().nth(max_chars) {
            Some((cut, _)) => format!("{}...", &value[..cut]),
            None => value.to_string(),
        }
    }
}
