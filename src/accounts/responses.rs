//! Response DTOs for account endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::validation::PasswordStrength;

use super::models::Account;

/// Public view of an account
#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
            email: account.email.clone(),
            created_at: account.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PasswordStrengthResponse {
    pub strength: PasswordStrength,
    pub message: &'static str,
}

impl From<PasswordStrength> for PasswordStrengthResponse {
    fn from(strength: PasswordStrength) -> Self {
        Self {
            strength,
            message: strength.message(),
        }
    }
}
