//! Account route handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::accounts::create_account;
use crate::accounts::requests::{CreateAccountRequest, PasswordStrengthRequest};
use crate::accounts::responses::{AccountResponse, PasswordStrengthResponse};
use crate::error::Result;
use crate::validation::password_strength;
use crate::AppState;

/// Sign up
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>)> {
    let account = create_account(&state.store, request).await?;
    Ok((StatusCode::CREATED, Json(AccountResponse::from(&account))))
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<AccountResponse>> {
    let accounts = state.store.accounts().await;
    Json(accounts.iter().map(AccountResponse::from).collect())
}

/// Score a password while the user is typing it
pub async fn strength(Json(request): Json<PasswordStrengthRequest>) -> Json<PasswordStrengthResponse> {
    Json(password_strength(&request.password).into())
}
