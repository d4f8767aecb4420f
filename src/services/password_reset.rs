use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::error::AdminError;
use crate::models::user::UserId;
use crate::models::UserLookup;
use crate::services::user_store::UserStore;
use crate::utils::{password, prompt};

/// Validated input of a password change.
#[derive(Debug, Clone)]
pub struct PasswordResetRequest {
    pub lookup: UserLookup,
    pub new_password: String,
}

impl PasswordResetRequest {
    pub fn new(
        user_id: Option<UserId>,
        email: Option<String>,
        new_password: String,
    ) -> Result<Self, AdminError> {
        let lookup = UserLookup::from_parts(user_id, email)?;
        password::validate_new_password(&new_password)?;
        Ok(Self {
            lookup,
            new_password,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordResetOutcome {
    Updated,
    Cancelled,
}

pub async fn reset_password<R, W>(
    store: &dyn UserStore,
    request: &PasswordResetRequest,
    bcrypt_cost: u32,
    input: &mut R,
    output: &mut W,
) -> Result<PasswordResetOutcome, AdminError>
where
    R: BufRead,
    W: Write,
{
    let username = store
        .find_username(&request.lookup)
        .await?
        .ok_or_else(|| AdminError::UserNotFound(request.lookup.to_string()))?;

    let question = format!(
        "Found user with username '{}'. Do you want to update the password? (y/n): ",
        username
    );
    if !prompt::confirm_exact(input, output, &question)? {
        writeln!(output, "Password update cancelled.")?;
        return Ok(PasswordResetOutcome::Cancelled);
    }

    let hash = password::hash_password(&request.new_password, bcrypt_cost)?;
    let updated = store.update_password(&request.lookup, &hash).await?;
    if updated == 0 {
        warn!(user = %username, "Password update affected 0 rows");
    } else {
        info!(user = %username, "Password hash replaced");
    }

    writeln!(output, "Password updated successfully.")?;
    Ok(PasswordResetOutcome::Updated)
}
