use thiserror::Error;

/// Error type for JWT operations.
///
/// Decoding collapses every rejection reason into `InvalidToken`; the
/// specific reason is only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is invalid or expired")]
    InvalidToken,
}

/// Error for token configuration that cannot be used to sign tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenConfigError {
    #[error("Signing secret is missing")]
    MissingSecret,

    #[error("Signing secret too short: minimum {min} bytes, got {actual}")]
    SecretTooShort { min: usize, actual: usize },

    #[error("Unsupported token algorithm: {0} (expected HS256, HS384 or HS512)")]
    UnsupportedAlgorithm(String),

    #[error("Token lifetime must be a positive number of minutes, got {0}")]
    InvalidLifetime(i64),
}
