// Test helpers: in-memory stores standing in for MySQL, plus row builders

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use user_admin_tools::models::user::UserId;
use user_admin_tools::models::{User, UserLookup, UserSetting};
use user_admin_tools::services::{SettingsStore, UserStore};
use user_admin_tools::AdminError;

pub fn setting(
    user_id: i64,
    setting_name: &str,
    assoc_type: Option<i64>,
    assoc_id: Option<i64>,
    value: Option<&str>,
) -> UserSetting {
    UserSetting {
        user_id,
        locale: "en".to_string(),
        setting_name: setting_name.to_string(),
        assoc_type,
        assoc_id,
        setting_value: value.map(str::to_string),
        setting_type: "string".to_string(),
    }
}

/// Mirrors `ORDER BY user_id, locale, setting_name, assoc_type, assoc_id`:
/// NULLs sort first, ties keep insertion order.
fn fetch_order(a: &UserSetting, b: &UserSetting) -> std::cmp::Ordering {
    (a.user_id, &a.locale, &a.setting_name, a.assoc_type, a.assoc_id).cmp(&(
        b.user_id,
        &b.locale,
        &b.setting_name,
        b.assoc_type,
        b.assoc_id,
    ))
}

/// Same predicate as the null-aware SQL delete.
fn matches_delete_filter(row: &UserSetting, target: &UserSetting) -> bool {
    row.user_id == target.user_id
        && row.locale == target.locale
        && row.setting_name == target.setting_name
        && row.assoc_type == target.assoc_type
        && row.assoc_id == target.assoc_id
        && row.setting_value == target.setting_value
}

pub struct InMemorySettingsStore {
    rows: Mutex<Vec<UserSetting>>,
    snapshot: Option<Vec<UserSetting>>,
    delete_calls: AtomicUsize,
}

impl InMemorySettingsStore {
    pub fn new(rows: Vec<UserSetting>) -> Self {
        Self {
            rows: Mutex::new(rows),
            snapshot: None,
            delete_calls: AtomicUsize::new(0),
        }
    }

    /// `fetch_all` returns `snapshot` while deletes apply to `rows`, as if
    /// rows had been removed out-of-band after the read.
    pub fn with_stale_snapshot(rows: Vec<UserSetting>, snapshot: Vec<UserSetting>) -> Self {
        Self {
            rows: Mutex::new(rows),
            snapshot: Some(snapshot),
            delete_calls: AtomicUsize::new(0),
        }
    }

    pub fn rows(&self) -> Vec<UserSetting> {
        self.rows.lock().unwrap().clone()
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn fetch_all(&self) -> Result<Vec<UserSetting>, AdminError> {
        let mut rows = match &self.snapshot {
            Some(snapshot) => snapshot.clone(),
            None => self.rows.lock().unwrap().clone(),
        };
        rows.sort_by(fetch_order);
        Ok(rows)
    }

    async fn delete_exact(&self, setting: &UserSetting) -> Result<u64, AdminError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        match rows.iter().position(|row| matches_delete_filter(row, setting)) {
            Some(index) => {
                rows.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TestUser {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Default)]
pub struct InMemoryUserStore {
    pub users: Mutex<Vec<TestUser>>,
    pub admin_group: Option<i64>,
    pub memberships: Mutex<Vec<(UserId, i64)>>,
}

impl InMemoryUserStore {
    pub fn with_users(users: &[(UserId, &str, &str)]) -> Self {
        let users = users
            .iter()
            .map(|(user_id, username, email)| TestUser {
                user_id: *user_id,
                username: username.to_string(),
                email: email.to_string(),
                password: "old-hash".to_string(),
            })
            .collect();
        Self {
            users: Mutex::new(users),
            admin_group: Some(1),
            memberships: Mutex::new(Vec::new()),
        }
    }

    pub fn password_of(&self, user_id: UserId) -> String {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.user_id == user_id)
            .map(|u| u.password.clone())
            .unwrap_or_default()
    }

    fn matches(user: &TestUser, lookup: &UserLookup) -> bool {
        match lookup {
            UserLookup::ById(id) => user.user_id == *id,
            UserLookup::ByEmail(email) => user.email == *email,
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_username(&self, lookup: &UserLookup) -> Result<Option<String>, AdminError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| Self::matches(u, lookup))
            .map(|u| u.username.clone()))
    }

    async fn update_password(
        &self,
        lookup: &UserLookup,
        password_hash: &str,
    ) -> Result<u64, AdminError> {
        let mut updated = 0;
        for user in self.users.lock().unwrap().iter_mut() {
            if Self::matches(user, lookup) {
                user.password = password_hash.to_string();
                updated += 1;
            }
        }
        Ok(updated)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AdminError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .map(|u| User {
                user_id: u.user_id,
                username: u.username.clone(),
            }))
    }

    async fn find_site_admin_group(&self) -> Result<Option<i64>, AdminError> {
        Ok(self.admin_group)
    }

    async fn is_group_member(
        &self,
        user_id: UserId,
        user_group_id: i64,
    ) -> Result<bool, AdminError> {
        Ok(self
            .memberships
            .lock()
            .unwrap()
            .contains(&(user_id, user_group_id)))
    }

    async fn add_group_member(
        &self,
        user_id: UserId,
        user_group_id: i64,
    ) -> Result<(), AdminError> {
        self.memberships
            .lock()
            .unwrap()
            .push((user_id, user_group_id));
        Ok(())
    }
}

/// Deterministic pseudo-random rows with many collisions.
pub fn generated_settings(count: usize, seed: u64) -> Vec<UserSetting> {
    let mut state = seed;
    let mut next = move |modulo: u64| {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) % modulo
    };

    (0..count)
        .map(|i| {
            let assoc = match next(3) {
                0 => None,
                1 => Some(0),
                _ => Some(256),
            };
            let value = match next(4) {
                0 => None,
                n => Some(format!("v{}", n)),
            };
            UserSetting {
                user_id: next(4) as i64 + 1,
                locale: if next(2) == 0 { "en".into() } else { "fr_CA".into() },
                setting_name: ["theme", "bio", "signature"][next(3) as usize].to_string(),
                assoc_type: assoc,
                assoc_id: assoc.map(|_| next(2) as i64),
                setting_value: value,
                setting_type: format!("t{}", i % 2),
            }
        })
        .collect()
}
