use std::io::{BufRead, Write};

use tracing::info;

use crate::error::AdminError;
use crate::services::user_store::UserStore;
use crate::utils::prompt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminGrantOutcome {
    Granted,
    AlreadyAdmin,
    Aborted,
}

/// Adds the user with `email` to the site admin group after confirmation.
pub async fn grant_site_admin<R, W>(
    store: &dyn UserStore,
    email: &str,
    input: &mut R,
    output: &mut W,
) -> Result<AdminGrantOutcome, AdminError>
where
    R: BufRead,
    W: Write,
{
    let user_group_id = store
        .find_site_admin_group()
        .await?
        .ok_or(AdminError::AdminGroupNotFound)?;

    let user = store
        .find_user_by_email(email)
        .await?
        .ok_or_else(|| AdminError::UserNotFound(format!("email {}", email)))?;

    if store.is_group_member(user.user_id, user_group_id).await? {
        writeln!(
            output,
            "User {} (ID: {}) is already an admin.",
            user.username, user.user_id
        )?;
        return Ok(AdminGrantOutcome::AlreadyAdmin);
    }

    writeln!(output, "Found user: {} (ID: {})", user.username, user.user_id)?;
    let confirmed = prompt::confirm(
        input,
        output,
        "Are you sure you want to give this user admin privileges? (y/N): ",
    )?;
    if !confirmed {
        writeln!(output, "Aborted.")?;
        return Ok(AdminGrantOutcome::Aborted);
    }

    store.add_group_member(user.user_id, user_group_id).await?;
    info!(
        user_id = user.user_id,
        user_group_id, "Added user to site admin group"
    );
    writeln!(output, "Admin privileges granted successfully.")?;
    Ok(AdminGrantOutcome::Granted)
}
