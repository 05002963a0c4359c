use std::sync::Arc;

use crate::jwt::JwtError;
use crate::models::Credential;
use crate::models::StoredIdentity;
use crate::password::CredentialHasher;
use crate::ports::LookupError;
use crate::ports::UsernameLookup;

/// Well-formed Argon2id hash (default parameters) that matches no password.
/// Verified against on an unknown username so both rejection paths pay for
/// one full hash.
const UNKNOWN_USER_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$Y0ea1poJCyWCd+yPum+ZQQ$0EuY9I6Pi8wVxq5awFCAHNbc/UKPtfnmXE4W54BzQPo";

/// Validates a username/password pair against the user store.
///
/// An unknown username and a wrong password produce the same error so a
/// caller cannot probe which usernames exist.
pub struct Authenticator<L, H>
where
    L: UsernameLookup,
    H: CredentialHasher,
{
    lookup: Arc<L>,
    hasher: H,
}

/// Authentication operation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Incorrect username or password")]
    InvalidCredentials,

    #[error("User lookup failed: {0}")]
    Lookup(#[from] LookupError),

    #[error("Token generation failed: {0}")]
    Token(#[from] JwtError),
}

impl<L, H> Authenticator<L, H>
where
    L: UsernameLookup,
    H: CredentialHasher,
{
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `lookup` - User store read access
    /// * `hasher` - Hasher matching the format of stored password hashes
    pub fn new(lookup: Arc<L>, hasher: H) -> Self {
        Self { lookup, hasher }
    }

    /// Verify credentials and return the matching stored identity.
    ///
    /// Account status is not checked here; a disabled account can still
    /// authenticate and is refused later when its token is resolved.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `Lookup` - User store could not be queried
    pub async fn authenticate(
        &self,
        credential: &Credential,
    ) -> Result<StoredIdentity, AuthenticationError> {
        let Some(identity) = self.lookup.get(&credential.username).await? else {
            let _ = self.hasher.verify(&credential.password, UNKNOWN_USER_HASH);
            tracing::info!(username = %credential.username, "Login rejected: unknown user");
            return Err(AuthenticationError::InvalidCredentials);
        };

        if !self
            .hasher
            .verify(&credential.password, &identity.password_hash)
        {
            tracing::info!(username = %credential.username, "Login rejected: password mismatch");
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(identity)
    }
}
