use async_trait::async_trait;
use thiserror::Error;

use crate::models::StoredIdentity;

/// Error raised by a user store that could not answer a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("User store unavailable: {0}")]
    Unavailable(String),
}

/// Read access to stored identities by username.
///
/// Implemented by whatever owns persistence. A lookup that may block on a
/// remote store is bounded by the caller: wrap the returned future in a
/// timeout, and dropping it abandons the lookup.
#[async_trait]
pub trait UsernameLookup: Send + Sync + 'static {
    /// Retrieve the current identity record for `username`.
    ///
    /// # Returns
    /// Optional identity (None if no such user)
    ///
    /// # Errors
    /// * `Unavailable` - The store could not be queried
    async fn get(&self, username: &str) -> Result<Option<StoredIdentity>, LookupError>;
}
