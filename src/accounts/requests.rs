//! Request DTOs for account endpoints.

use serde::Deserialize;

/// Sign-up form
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

/// Password to score while the user types
#[derive(Debug, Deserialize)]
pub struct PasswordStrengthRequest {
    #[serde(default)]
    pub password: String,
}
