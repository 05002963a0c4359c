use std::sync::Arc;

use chrono::Duration;
use serde::Deserialize;
use serde::Serialize;

use crate::authenticator::AuthenticationError;
use crate::authenticator::Authenticator;
use crate::jwt::TokenCodec;
use crate::models::Credential;
use crate::password::CredentialHasher;
use crate::ports::UsernameLookup;

/// Token type reported alongside every issued access token.
pub const BEARER: &str = "bearer";

/// Body returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: BEARER.to_string(),
        }
    }
}

/// Login flow: authenticate the credential, then sign a token for it.
pub struct TokenIssuer<L, H>
where
    L: UsernameLookup,
    H: CredentialHasher,
{
    authenticator: Authenticator<L, H>,
    codec: Arc<TokenCodec>,
    ttl: Duration,
}

impl<L, H> TokenIssuer<L, H>
where
    L: UsernameLookup,
    H: CredentialHasher,
{
    /// # Arguments
    /// * `authenticator` - Credential validation
    /// * `codec` - Token signer
    /// * `ttl` - Lifetime of issued tokens
    pub fn new(authenticator: Authenticator<L, H>, codec: Arc<TokenCodec>, ttl: Duration) -> Self {
        Self {
            authenticator,
            codec,
            ttl,
        }
    }

    /// Authenticate and issue a bearer token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `Lookup` - User store could not be queried
    /// * `Token` - Token signing failed
    pub async fn issue_token(
        &self,
        credential: &Credential,
    ) -> Result<TokenResponse, AuthenticationError> {
        let identity = self.authenticator.authenticate(credential).await?;
        let access_token = self.codec.encode(&identity.username, self.ttl)?;

        tracing::info!(username = %identity.username, "Access token issued");

        Ok(TokenResponse::bearer(access_token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::TokenConfig;
    use crate::password::Argon2Hasher;
    use crate::testing::identity;
    use crate::testing::lookup_with;
    use crate::testing::MockTestLookup;
    use crate::testing::SECRET;

    type TestIssuer = TokenIssuer<MockTestLookup, Argon2Hasher>;

    fn issuer(config: &TokenConfig) -> (TestIssuer, Arc<TokenCodec>) {
        let codec = Arc::new(TokenCodec::new(config));
        let lookup = lookup_with(identity("neo", "trinity123", true));
        let authenticator = Authenticator::new(Arc::new(lookup), Argon2Hasher::new());

        (
            TokenIssuer::new(authenticator, codec.clone(), config.ttl()),
            codec,
        )
    }

    #[tokio::test]
    async fn test_issue_token_success() {
        let config = TokenConfig::new(SECRET, "HS256", 30).unwrap();
        let (issuer, codec) = issuer(&config);

        let response = issuer
            .issue_token(&Credential::new("neo", "trinity123"))
            .await
            .expect("Issuance failed");

        assert_eq!(response.token_type, "bearer");

        let claims = codec.decode(&response.access_token).unwrap();
        assert_eq!(claims.sub, "neo");
        assert_eq!(claims.exp - claims.iat.unwrap(), 30 * 60);
    }

    #[tokio::test]
    async fn test_issue_token_wrong_password() {
        let config = TokenConfig::new(SECRET, "HS256", 30).unwrap();
        let (issuer, _) = issuer(&config);

        let result = issuer
            .issue_token(&Credential::new("neo", "wrongpass"))
            .await;

        assert_eq!(result.unwrap_err(), AuthenticationError::InvalidCredentials);
    }

    #[test]
    fn test_token_response_shape() {
        let response = TokenResponse::bearer("abc.def.ghi".to_string());

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"access_token": "abc.def.ghi", "token_type": "bearer"})
        );
    }
}
