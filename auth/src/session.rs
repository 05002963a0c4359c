use std::sync::Arc;

use crate::jwt::TokenCodec;
use crate::models::AuthenticatedIdentity;
use crate::models::StoredIdentity;
use crate::ports::LookupError;
use crate::ports::UsernameLookup;

/// Session resolution errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Could not validate credentials")]
    Unauthenticated,

    #[error("Inactive user")]
    AccountDisabled,

    #[error("User lookup failed: {0}")]
    Lookup(#[from] LookupError),
}

/// Resolves a bearer token into the active identity it was issued for.
///
/// Resolution runs as three stages, each usable on its own:
/// `resolve_subject` -> `resolve_identity` -> `require_active`.
/// The first failing stage ends the chain.
pub struct SessionResolver<L>
where
    L: UsernameLookup,
{
    codec: Arc<TokenCodec>,
    lookup: Arc<L>,
}

impl<L> SessionResolver<L>
where
    L: UsernameLookup,
{
    pub fn new(codec: Arc<TokenCodec>, lookup: Arc<L>) -> Self {
        Self { codec, lookup }
    }

    /// Resolve a raw token into the active identity it names.
    ///
    /// # Errors
    /// * `Unauthenticated` - Token rejected or subject no longer exists
    /// * `AccountDisabled` - Subject exists but is inactive
    /// * `Lookup` - User store could not be queried
    pub async fn resolve(&self, token: &str) -> Result<AuthenticatedIdentity, SessionError> {
        let username = self.resolve_subject(token)?;
        let identity = self.resolve_identity(&username).await?;
        require_active(identity)
    }

    /// Decode the token and return its subject.
    ///
    /// # Errors
    /// * `Unauthenticated` - Bad signature, malformed or expired token
    pub fn resolve_subject(&self, token: &str) -> Result<String, SessionError> {
        self.codec
            .decode(token)
            .map(|claims| claims.sub)
            .map_err(|_| SessionError::Unauthenticated)
    }

    /// Load the current record for a token subject.
    ///
    /// # Errors
    /// * `Unauthenticated` - Subject was removed after the token was issued
    /// * `Lookup` - User store could not be queried
    pub async fn resolve_identity(&self, username: &str) -> Result<StoredIdentity, SessionError> {
        self.lookup.get(username).await?.ok_or_else(|| {
            tracing::warn!(username = %username, "Token subject no longer exists");
            SessionError::Unauthenticated
        })
    }
}

/// Admit only active identities, stripping the password hash.
///
/// # Errors
/// * `AccountDisabled` - Identity is marked inactive
pub fn require_active(identity: StoredIdentity) -> Result<AuthenticatedIdentity, SessionError> {
    if !identity.active {
        tracing::warn!(username = %identity.username, "Access refused: account disabled");
        return Err(SessionError::AccountDisabled);
    }

    Ok(identity.into())
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use chrono::Duration;

    use super::*;
    use crate::jwt::FixedClock;
    use crate::jwt::TokenConfig;
    use crate::testing::identity;
    use crate::testing::lookup_with;
    use crate::testing::MockTestLookup;
    use crate::testing::SECRET;

    fn codec() -> Arc<TokenCodec> {
        Arc::new(TokenCodec::new(&TokenConfig::new(SECRET, "HS256", 30).unwrap()))
    }

    #[tokio::test]
    async fn test_resolve_active_identity() {
        let codec = codec();
        let lookup = lookup_with(identity("neo", "trinity123", true));
        let resolver = SessionResolver::new(codec.clone(), Arc::new(lookup));

        let token = codec.encode("neo", Duration::minutes(30)).unwrap();
        let identity = resolver.resolve(&token).await.expect("Resolution failed");

        assert_eq!(identity.username, "neo");
        assert!(identity.active);
    }

    #[tokio::test]
    async fn test_disabled_account() {
        let codec = codec();
        let lookup = lookup_with(identity("cypher", "steak", false));
        let resolver = SessionResolver::new(codec.clone(), Arc::new(lookup));

        let token = codec.encode("cypher", Duration::minutes(30)).unwrap();

        // The first two stages accept the token
        let username = resolver.resolve_subject(&token).unwrap();
        let stored = resolver.resolve_identity(&username).await.unwrap();
        assert_eq!(stored.username, "cypher");

        assert_eq!(
            require_active(stored).unwrap_err(),
            SessionError::AccountDisabled
        );
        assert_eq!(
            resolver.resolve(&token).await.unwrap_err(),
            SessionError::AccountDisabled
        );
    }

    #[tokio::test]
    async fn test_invalid_token_skips_lookup() {
        let mut lookup = MockTestLookup::new();
        lookup.expect_get().times(0);
        let resolver = SessionResolver::new(codec(), Arc::new(lookup));

        let result = resolver.resolve("invalid.token.here").await;

        assert_eq!(result.unwrap_err(), SessionError::Unauthenticated);
    }

    #[tokio::test]
    async fn test_expired_token_is_unauthenticated() {
        let clock = Arc::new(FixedClock::new(
            DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        ));
        let config = TokenConfig::new(SECRET, "HS256", 30).unwrap();
        let codec = Arc::new(TokenCodec::new(&config).with_clock(clock.clone()));
        let lookup = lookup_with(identity("neo", "trinity123", true));
        let resolver = SessionResolver::new(codec.clone(), Arc::new(lookup));

        let token = codec.encode("neo", config.ttl()).unwrap();
        assert!(resolver.resolve(&token).await.is_ok());

        clock.advance(Duration::minutes(31));
        assert_eq!(
            resolver.resolve(&token).await.unwrap_err(),
            SessionError::Unauthenticated
        );
    }

    #[tokio::test]
    async fn test_deleted_user_is_unauthenticated() {
        let codec = codec();
        let mut lookup = MockTestLookup::new();
        lookup
            .expect_get()
            .withf(|username| username == "neo")
            .times(1)
            .returning(|_| Ok(None));
        let resolver = SessionResolver::new(codec.clone(), Arc::new(lookup));

        let token = codec.encode("neo", Duration::minutes(30)).unwrap();

        assert_eq!(
            resolver.resolve(&token).await.unwrap_err(),
            SessionError::Unauthenticated
        );
    }

    #[tokio::test]
    async fn test_lookup_failure_propagates() {
        let codec = codec();
        let mut lookup = MockTestLookup::new();
        lookup
            .expect_get()
            .returning(|_| Err(LookupError::Unavailable("timeout".to_string())));
        let resolver = SessionResolver::new(codec.clone(), Arc::new(lookup));

        let token = codec.encode("neo", Duration::minutes(30)).unwrap();

        assert!(matches!(
            resolver.resolve(&token).await,
            Err(SessionError::Lookup(_))
        ));
    }
}
