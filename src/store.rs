//! In-memory application store
//!
//! Append-only collections of accounts and bookings, shared across request
//! handlers. Writes take the lock exclusively so concurrent sign-ups and
//! bookings are serialized. Nothing is persisted.

use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::accounts::models::Account;
use crate::voyages::Booking;

#[derive(Debug, Default)]
pub struct AppStore {
    accounts: RwLock<Vec<Account>>,
    bookings: RwLock<Vec<Booking>>,
}

impl AppStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an account unless its username is already taken.
    ///
    /// Returns the rejected account when the username exists.
    pub async fn insert_account(&self, account: Account) -> Result<Account, Account> {
        let mut accounts = self.accounts.write().await;
        if accounts.iter().any(|a| a.username == account.username) {
            return Err(account);
        }
        accounts.push(account.clone());
        info!(account_id = %account.id, username = %account.username, "Account created");
        Ok(account)
    }

    pub async fn find_account(&self, id: Uuid) -> Option<Account> {
        self.accounts.read().await.iter().find(|a| a.id == id).cloned()
    }

    pub async fn find_account_by_username(&self, username: &str) -> Option<Account> {
        self.accounts
            .read()
            .await
            .iter()
            .find(|a| a.username == username)
            .cloned()
    }

    /// Snapshot of all accounts in creation order
    pub async fn accounts(&self) -> Vec<Account> {
        self.accounts.read().await.clone()
    }

    pub async fn record_booking(&self, booking: Booking) -> Booking {
        self.bookings.write().await.push(booking.clone());
        info!(booking_id = %booking.id, account_id = %booking.account_id, "Booking recorded");
        booking
    }

    /// Snapshot of all bookings in booking order
    pub async fn bookings(&self) -> Vec<Booking> {
        self.bookings.read().await.clone()
    }

    pub async fn bookings_for_account(&self, account_id: Uuid) -> Vec<Booking> {
        self.bookings
            .read()
            .await
            .iter()
            .filter(|b| b.account_id == account_id)
            .cloned()
            .collect()
    }
}
