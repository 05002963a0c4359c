use std::sync::Arc;

use auth::AuthenticatedIdentity;
use auth::CredentialHasher;
use auth::StoredIdentity;

use crate::domain::user::models::RegisterUserCommand;
use crate::user::errors::RegistrationError;
use crate::user::ports::UserRepository;

/// Registers new identities in the user store.
pub struct RegistrationService<UR, H>
where
    UR: UserRepository,
    H: CredentialHasher,
{
    repository: Arc<UR>,
    password_hasher: H,
}

impl<UR, H> RegistrationService<UR, H>
where
    UR: UserRepository,
    H: CredentialHasher,
{
    /// Create a new registration service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Identity persistence implementation
    /// * `password_hasher` - Hasher used for the stored password hash
    pub fn new(repository: Arc<UR>, password_hasher: H) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }

    /// Register a new, active identity.
    ///
    /// # Returns
    /// Public view of the created identity
    ///
    /// # Errors
    /// * `DuplicateUsername` - Username is already registered
    /// * `Password` - Password hashing failed
    /// * `Lookup` / `Storage` - User store operation failed
    pub async fn register(
        &self,
        command: RegisterUserCommand,
    ) -> Result<AuthenticatedIdentity, RegistrationError> {
        let username = command.username.as_str();

        if self.repository.get(username).await?.is_some() {
            tracing::info!(username = %username, "Registration rejected: username taken");
            return Err(RegistrationError::DuplicateUsername(username.to_string()));
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        let identity = StoredIdentity {
            username: username.to_string(),
            full_name: command.full_name,
            email: Some(command.email.as_str().to_string()),
            password_hash,
            active: true,
        };

        let created = self.repository.create(identity).await?;
        tracing::info!(username = %created.username, "User registered");

        Ok(created.into())
    }
}
