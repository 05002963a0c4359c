use std::sync::Arc;

use auth::Argon2Hasher;
use auth::Authenticator;
use auth::SessionResolver;
use auth::TokenCodec;
use auth::TokenConfigError;
use auth::TokenIssuer;
use chrono::Duration;

use crate::config::Config;
use crate::domain::user::service::RegistrationService;
use crate::outbound::repositories::InMemoryUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub token_issuer: Arc<TokenIssuer<InMemoryUserRepository, Argon2Hasher>>,
    pub session_resolver: Arc<SessionResolver<InMemoryUserRepository>>,
    pub registration_service: Arc<RegistrationService<InMemoryUserRepository, Argon2Hasher>>,
}

impl AppState {
    /// Wire the authentication services over one user store and one codec.
    ///
    /// # Arguments
    /// * `codec` - Token signer/verifier shared by issuance and resolution
    /// * `token_ttl` - Lifetime of issued tokens
    /// * `repository` - User store
    pub fn new(
        codec: Arc<TokenCodec>,
        token_ttl: Duration,
        repository: Arc<InMemoryUserRepository>,
    ) -> Self {
        let authenticator = Authenticator::new(Arc::clone(&repository), Argon2Hasher::new());

        Self {
            token_issuer: Arc::new(TokenIssuer::new(
                authenticator,
                Arc::clone(&codec),
                token_ttl,
            )),
            session_resolver: Arc::new(SessionResolver::new(codec, Arc::clone(&repository))),
            registration_service: Arc::new(RegistrationService::new(
                repository,
                Argon2Hasher::new(),
            )),
        }
    }

    /// Build state from loaded configuration using the system clock.
    ///
    /// # Errors
    /// * `TokenConfigError` - JWT settings are unusable
    pub fn from_config(
        config: &Config,
        repository: Arc<InMemoryUserRepository>,
    ) -> Result<Self, TokenConfigError> {
        let token_config = config.jwt.token_config()?;

        tracing::info!(
            algorithm = ?token_config.algorithm(),
            expiration_minutes = token_config.ttl().num_minutes(),
            "Token configuration loaded"
        );

        Ok(Self::new(
            Arc::new(TokenCodec::new(&token_config)),
            token_config.ttl(),
            repository,
        ))
    }
}
