//! Authentication core
//!
//! Password verification, signed access tokens with expiry, and the
//! resolution of a bearer token into an active identity:
//! - Credential hashing (Argon2id)
//! - Token encoding and decoding (HMAC-signed JWT, injected clock)
//! - Username/password authentication against a [`UsernameLookup`]
//! - Token issuance and session resolution
//!
//! Persistence is not part of this crate: services provide a
//! [`UsernameLookup`] implementation over their own user store.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::{Argon2Hasher, CredentialHasher};
//!
//! let hasher = Argon2Hasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{TokenCodec, TokenConfig};
//!
//! let config = TokenConfig::new(b"secret_key_at_least_32_bytes_long!", "HS256", 30).unwrap();
//! let codec = TokenCodec::new(&config);
//! let token = codec.encode("neo", config.ttl()).unwrap();
//! let claims = codec.decode(&token).unwrap();
//! assert_eq!(claims.sub, "neo");
//! ```

pub mod authenticator;
pub mod issuer;
pub mod jwt;
pub mod models;
pub mod password;
pub mod ports;
pub mod session;

#[cfg(test)]
mod testing;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use issuer::TokenIssuer;
pub use issuer::TokenResponse;
pub use jwt::Claims;
pub use jwt::Clock;
pub use jwt::FixedClock;
pub use jwt::JwtError;
pub use jwt::SystemClock;
pub use jwt::TokenCodec;
pub use jwt::TokenConfig;
pub use jwt::TokenConfigError;
pub use models::AuthenticatedIdentity;
pub use models::Credential;
pub use models::StoredIdentity;
pub use password::Argon2Hasher;
pub use password::CredentialHasher;
pub use password::PasswordError;
pub use ports::LookupError;
pub use ports::UsernameLookup;
pub use session::require_active;
pub use session::SessionError;
pub use session::SessionResolver;
