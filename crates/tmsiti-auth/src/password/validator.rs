//! Rules for new admin credentials.

use tmsiti_core::config::AuthConfig;
use tmsiti_core::error::AppError;

/// Shortest accepted username, after trimming.
pub const USERNAME_MIN: usize = 3;
/// Longest accepted username, after trimming.
pub const USERNAME_MAX: usize = 64;

/// Validates usernames and passwords for new admins.
#[derive(Debug, Clone)]
pub struct CredentialValidator {
    min_password_length: usize,
}

impl CredentialValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_password_length: config.password_min_length,
        }
    }

    /// Trims the username and checks its length. Returns the trimmed form.
    pub fn username<'a>(&self, username: &'a str) -> Result<&'a str, AppError> {
        let trimmed = username.trim();
        let len = trimmed.chars().count();
        if !(USERNAME_MIN..=USERNAME_MAX).contains(&len) {
            return Err(AppError::validation(format!(
                "Username must be between {USERNAME_MIN} and {USERNAME_MAX} characters"
            )));
        }
        Ok(trimmed)
    }

    /// Checks the password length.
    pub fn password(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_password_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_password_length
            )));
        }
        Ok(())
    }
}
