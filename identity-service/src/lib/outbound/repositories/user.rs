use std::collections::hash_map::Entry;
use std::collections::HashMap;

use async_trait::async_trait;
use auth::LookupError;
use auth::StoredIdentity;
use auth::UsernameLookup;
use tokio::sync::RwLock;

use crate::user::errors::RegistrationError;
use crate::user::ports::UserRepository;

/// Process-local identity store keyed by username.
///
/// Owned by whoever constructs it and shared through `Arc`; nothing here is
/// global.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, StoredIdentity>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable an account.
    ///
    /// # Returns
    /// False if no such user exists
    pub async fn set_active(&self, username: &str, active: bool) -> bool {
        match self.users.write().await.get_mut(username) {
            Some(identity) => {
                identity.active = active;
                true
            }
            None => false,
        }
    }

    /// Remove an account; tokens already issued for it stop resolving.
    pub async fn remove(&self, username: &str) -> Option<StoredIdentity> {
        self.users.write().await.remove(username)
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UsernameLookup for InMemoryUserRepository {
    async fn get(&self, username: &str) -> Result<Option<StoredIdentity>, LookupError> {
        Ok(self.users.read().await.get(username).cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, identity: StoredIdentity) -> Result<StoredIdentity, RegistrationError> {
        match self.users.write().await.entry(identity.username.clone()) {
            Entry::Occupied(entry) => Err(RegistrationError::DuplicateUsername(entry.key().clone())),
            Entry::Vacant(entry) => Ok(entry.insert(identity).clone()),
        }
    }
}
