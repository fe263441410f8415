//! Account creation

use chrono::Utc;
use uuid::Uuid;

use crate::store::AppStore;
use crate::validation::{validate_account_form, FieldErrors};

use super::models::Account;
use super::requests::CreateAccountRequest;

/// Account creation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    #[error("Account form has {} invalid field(s)", .0.len())]
    Validation(FieldErrors),

    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),
}

/// Validate the sign-up form and register the account
pub async fn create_account(
    store: &AppStore,
    request: CreateAccountRequest,
) -> Result<Account, AccountError> {
    let errors = validate_account_form(
        &request.username,
        &request.email,
        &request.password,
        &request.confirm_password,
    );
    if !errors.is_empty() {
        tracing::debug!(fields = ?errors.keys().collect::<Vec<_>>(), "Rejected account form");
        return Err(AccountError::Validation(errors));
    }

    let account = Account {
        id: Uuid::new_v4(),
        username: request.username,
        email: request.email.trim().to_string(),
        password: request.password,
        created_at: Utc::now(),
    };

    store
        .insert_account(account)
        .await
        .map_err(|rejected| AccountError::UsernameTaken(rejected.username))
}
