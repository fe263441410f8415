//! Form field validation for accounts and bookings.
//!
//! Stateless checks shared by the account and booking handlers. Form-level
//! helpers return a field → message map that is empty when the form is valid.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Field name → human readable message
pub type FieldErrors = BTreeMap<String, String>;

fn name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z\s'-]+$").unwrap())
}

fn username_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z0-9_]{3,20}$").unwrap())
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// Passenger names: 2-50 characters of letters, spaces, hyphens and apostrophes
pub fn validate_name(name: &str) -> bool {
    let trimmed = name.trim();
    let len = trimmed.chars().count();
    (2..=50).contains(&len) && name_regex().is_match(trimmed)
}

/// Usernames: 3-20 characters, alphanumeric and underscore only
pub fn validate_username(username: &str) -> bool {
    username_regex().is_match(username)
}

/// Basic `user@domain.tld` check with length limits
pub fn validate_email(email: &str) -> bool {
    (5..=254).contains(&email.len()) && !email.contains("..") && email_regex().is_match(email)
}

/// At least 8 characters with an uppercase letter, a lowercase letter and a digit
pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

pub fn passwords_match(password: &str, confirm_password: &str) -> bool {
    !password.is_empty() && password == confirm_password
}

/// Coarse password strength for sign-up feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordStrength {
    Empty,
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn message(&self) -> &'static str {
        match self {
            PasswordStrength::Empty => "Enter a password",
            PasswordStrength::Weak => "Weak password",
            PasswordStrength::Medium => "Medium strength",
            PasswordStrength::Strong => "Strong password",
        }
    }
}

pub fn password_strength(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength::Empty;
    }

    let len = password.chars().count();
    let checks = [
        len >= 8,
        len >= 12,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    let score = checks.iter().filter(|passed| **passed).count();

    match score {
        0..=2 => PasswordStrength::Weak,
        3..=4 => PasswordStrength::Medium,
        _ => PasswordStrength::Strong,
    }
}

/// Validate the sign-up form
pub fn validate_account_form(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if username.trim().is_empty() {
        errors.insert("username".into(), "Username is required".into());
    } else if !validate_username(username) {
        errors.insert(
            "username".into(),
            "Username must be 3-20 characters, alphanumeric and underscore only".into(),
        );
    }

    if email.trim().is_empty() {
        errors.insert("email".into(), "Email is required".into());
    } else if !validate_email(email) {
        errors.insert("email".into(), "Please enter a valid email address".into());
    }

    if password.is_empty() {
        errors.insert("password".into(), "Password is required".into());
    } else if !validate_password(password) {
        errors.insert(
            "password".into(),
            "Password must be at least 8 characters with uppercase, lowercase, and number".into(),
        );
    }

    if !passwords_match(password, confirm_password) {
        errors.insert("confirm_password".into(), "Passwords do not match".into());
    }

    errors
}

/// Validate the presence and shape of booking form fields.
///
/// Route validity against the timetable is checked by the booking assembler.
pub fn validate_booking_form(
    passenger_name: &str,
    departure_date: &str,
    departure_port: &str,
    arrival_date: &str,
    arrival_port: &str,
) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let departure_date = departure_date.trim();
    let arrival_date = arrival_date.trim();

    if !validate_name(passenger_name) {
        errors.insert(
            "passenger_name".into(),
            "Please enter a valid name (2-50 characters)".into(),
        );
    }
    if departure_date.is_empty() {
        errors.insert("departure_date".into(), "Please select a departure date".into());
    }
    if departure_port.trim().is_empty() {
        errors.insert("departure_port".into(), "Please select a departure location".into());
    }
    if arrival_date.is_empty() {
        errors.insert("arrival_date".into(), "Please select an arrival date".into());
    } else if !departure_date.is_empty() && arrival_date <= departure_date {
        // ISO 8601 dates are fixed width, so string order is calendar order
        errors.insert(
            "arrival_date".into(),
            "Arrival date must be after departure date".into(),
        );
    }
    if arrival_port.trim().is_empty() {
        errors.insert("arrival_port".into(), "Please select an arrival location".into());
    }

    errors
}
