//! Duplicate `user_settings` resolution: group rows by identity key, keep the
//! last row of each group in fetch order, delete the rest.

use std::collections::HashMap;

use tracing::{error, info, warn};

use crate::error::AdminError;
use crate::models::{UserSetting, UserSettingKey};
use crate::services::settings_store::SettingsStore;

/// Setting values are cut to this many characters in log output.
pub const LOG_VALUE_MAX_CHARS: usize = 100;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DedupeSummary {
    pub records_scanned: usize,
    pub duplicate_groups: usize,
    pub deletions_attempted: usize,
    pub rows_deleted: u64,
    pub zero_row_deletions: usize,
    pub failed_deletions: usize,
}

/// Groups settings by identity key. Groups come out in order of first
/// appearance and members keep their arrival order.
pub fn group_by_key(settings: Vec<UserSetting>) -> Vec<Vec<UserSetting>> {
    let mut index: HashMap<UserSettingKey, usize> = HashMap::new();
    let mut groups: Vec<Vec<UserSetting>> = Vec::new();

    for setting in settings {
        let key = setting.key();
        match index.get(&key) {
            Some(&position) => groups[position].push(setting),
            None => {
                index.insert(key, groups.len());
                groups.push(vec![setting]);
            }
        }
    }

    groups
}

/// Every member of a group except the last.
pub fn redundant_members(group: &[UserSetting]) -> &[UserSetting] {
    match group.split_last() {
        Some((_, rest)) => rest,
        None => &[],
    }
}

/// Fetches every setting and deletes all but the last row of each duplicate
/// group. Only the fetch can fail the run; failed deletes are logged and
/// skipped. With `dry_run` nothing is deleted.
pub async fn find_and_delete_duplicates(
    store: &dyn SettingsStore,
    dry_run: bool,
) -> Result<DedupeSummary, AdminError> {
    let settings = store.fetch_all().await?;
    let mut summary = DedupeSummary {
        records_scanned: settings.len(),
        ..DedupeSummary::default()
    };
    info!("Fetched {} user settings", summary.records_scanned);

    for group in group_by_key(settings) {
        let to_delete = redundant_members(&group);
        if to_delete.is_empty() {
            continue;
        }
        summary.duplicate_groups += 1;

        let first = &group[0];
        info!(
            user_id = first.user_id,
            locale = %first.locale,
            setting_name = %first.setting_name,
            "Found {} duplicates for user_id {}, setting_name {}. Deleting {} of them.",
            group.len(),
            first.user_id,
            first.setting_name,
            to_delete.len()
        );

        for setting in to_delete {
            summary.deletions_attempted += 1;
            log_deletion(setting, dry_run);
            if dry_run {
                continue;
            }

            match store.delete_exact(setting).await {
                Ok(0) => {
                    summary.zero_row_deletions += 1;
                    warn!(
                        user_id = setting.user_id,
                        setting_name = %setting.setting_name,
                        "Delete statement affected 0 rows"
                    );
                }
                Ok(rows) => {
                    summary.rows_deleted += rows;
                    info!("Deleted {} rows", rows);
                }
                Err(e) => {
                    summary.failed_deletions += 1;
                    error!(
                        user_id = setting.user_id,
                        setting_name = %setting.setting_name,
                        "Failed to delete user setting: {}",
                        e
                    );
                }
            }
        }
    }

    info!(
        groups = summary.duplicate_groups,
        attempted = summary.deletions_attempted,
        deleted = summary.rows_deleted,
        zero_rows = summary.zero_row_deletions,
        failed = summary.failed_deletions,
        "Duplicate settings pass finished"
    );

    Ok(summary)
}

fn log_deletion(setting: &UserSetting, dry_run: bool) {
    let verb = if dry_run { "Would delete" } else { "Deleting" };
    info!(
        "{} record with user_id={}, locale={}, setting_name={}, assoc_type={:?}, assoc_id={:?}, setting_value (truncated)='{}'",
        verb,
        setting.user_id,
        setting.locale,
        setting.setting_name,
        setting.assoc_type,
        setting.assoc_id,
        setting.truncated_value(LOG_VALUE_MAX_CHARS)
    );
}
