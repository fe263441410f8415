//! User accounts for the booking demo.
//!
//! Credentials are demo-only and live in process memory.

pub mod models;
pub mod requests;
pub mod responses;
pub mod services;

pub use models::Account;
pub use services::{create_account, AccountError};
