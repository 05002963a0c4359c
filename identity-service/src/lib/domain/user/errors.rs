use auth::LookupError;
use auth::PasswordError;
use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error(
        "Username contains invalid characters (only alphanumeric, underscore, and hyphen allowed)"
    )]
    InvalidCharacters,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for user registration
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    #[error("Username already registered: {0}")]
    DuplicateUsername(String),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("User lookup failed: {0}")]
    Lookup(#[from] LookupError),

    #[error("Storage error: {0}")]
    Storage(String),
}
