use async_trait::async_trait;
use auth::StoredIdentity;
use auth::UsernameLookup;

use crate::user::errors::RegistrationError;

/// Persistence operations for stored identities.
///
/// Reads go through the `UsernameLookup` supertrait shared with the
/// authentication core.
#[async_trait]
pub trait UserRepository: UsernameLookup {
    /// Persist a new identity.
    ///
    /// # Returns
    /// Created identity
    ///
    /// # Errors
    /// * `DuplicateUsername` - Username is already taken
    /// * `Storage` - Storage operation failed
    async fn create(&self, identity: StoredIdentity) -> Result<StoredIdentity, RegistrationError>;
}
