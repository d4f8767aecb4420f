use bcrypt::Version;

use crate::error::AdminError;

pub fn validate_new_password(password: &str) -> Result<(), AdminError> {
    if password.is_empty() {
        return Err(AdminError::InvalidArguments(
            "Please provide a password.".to_string(),
        ));
    }
    Ok(())
}

/// bcrypt hash in the `$2a$` form already stored in `users.password`.
pub fn hash_password(password: &str, cost: u32) -> Result<String, AdminError> {
    let parts = bcrypt::hash_with_result(password, cost)?;
    Ok(parts.format_for_version(Version::TwoA))
}
