pub mod argon2;
pub mod errors;

pub use self::argon2::Argon2Hasher;
pub use errors::PasswordError;

/// One-way password hashing with verification against a stored hash.
///
/// Implementations embed their salt and parameters in the returned string so
/// that `verify` needs nothing but the password and the stored hash.
pub trait CredentialHasher: Send + Sync + 'static {
    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Errors
    /// * `HashingFailed` - The underlying algorithm rejected its input
    fn hash(&self, password: &str) -> Result<String, PasswordError>;

    /// Check a plaintext password against a stored hash.
    ///
    /// Returns `false` both for a mismatch and for a hash string that cannot
    /// be parsed, so callers see a single failure path.
    fn verify(&self, password: &str, hash: &str) -> bool;
}
