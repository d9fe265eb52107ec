use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::forms::sanitize_inline_text;

const USERNAME_MIN_LEN: u64 = 3;
const USERNAME_MAX_LEN: u64 = 80;
const PASSWORD_MIN_LEN: u64 = 8;

/// Result type returned by the account form helpers.
pub type AuthFormResult<T> = Result<T, AuthFormError>;

/// Errors that can occur while processing account forms.
#[derive(Debug, Error)]
pub enum AuthFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

/// JSON payload submitted when registering an account.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterForm {
    #[validate(length(min = USERNAME_MIN_LEN, max = USERNAME_MAX_LEN))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = PASSWORD_MIN_LEN))]
    pub password: String,
}

impl RegisterForm {
    /// Sanitizes and validates the payload; the password is left as
    /// entered for the service to hash.
    pub fn validated(mut self) -> AuthFormResult<Self> {
        self.username = sanitize_inline_text(&self.username);
        self.email = self.email.trim().to_lowercase();
        self.validate()?;

        Ok(self)
    }
}

/// JSON payload submitted when logging in.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_email() {
        let form = RegisterForm {
            username: " alice ".to_string(),
            email: " Alice@Example.COM ".to_string(),
            password: "correcthorse".to_string(),
        };

        let form = form.validated().expect("expected success");
        assert_eq!(form.username, "alice");
        assert_eq!(form.email, "alice@example.com");
    }

    #[test]
    fn rejects_short_password() {
        let form = RegisterForm {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "short".to_string(),
        };

        assert!(form.validated().is_err());
    }
}
