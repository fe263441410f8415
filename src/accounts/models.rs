//! Account models

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered user.
///
/// The password is kept in plain text for the demo and is never
/// serialized; see [`AccountResponse`](super::responses::AccountResponse).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}
