use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::clock::Clock;
use super::clock::SystemClock;
use super::config::TokenConfig;
use super::errors::JwtError;

/// Signs and verifies time-bounded access tokens.
///
/// Expiry is judged against the injected `Clock`, never against the
/// library's own reading of system time, so every check made through one
/// codec observes the same time source.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    clock: Arc<dyn Clock>,
}

impl TokenCodec {
    /// Create a codec from validated configuration using the system clock.
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret()),
            decoding_key: DecodingKey::from_secret(config.secret()),
            algorithm: config.algorithm(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Encode a token for `subject` expiring `ttl` from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Expiry is out of range or signing failed
    pub fn encode(&self, subject: &str, ttl: Duration) -> Result<String, JwtError> {
        let now = self.clock.now();
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| JwtError::EncodingFailed("Expiry out of range".to_string()))?;

        let claims = Claims::new(subject, now, expires_at);

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Verify a token's signature, then its expiry.
    ///
    /// # Errors
    /// * `InvalidToken` - Signature mismatch, malformed token, wrong
    ///   algorithm, missing claims or expired
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below against the injected clock
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["sub", "exp"]);

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => {
                        tracing::warn!("Token rejected: signature mismatch")
                    }
                    ErrorKind::InvalidAlgorithm => {
                        tracing::warn!("Token rejected: unexpected algorithm")
                    }
                    ErrorKind::MissingRequiredClaim(claim) => {
                        tracing::warn!(claim = %claim, "Token rejected: missing claim")
                    }
                    _ => tracing::debug!(error = %e, "Token rejected: malformed"),
                }
                JwtError::InvalidToken
            })?
            .claims;

        let now = self.clock.now().timestamp();
        if claims.is_expired(now) {
            tracing::debug!(
                subject = %claims.sub,
                expired_at = claims.exp,
                now,
                "Token rejected: expired"
            );
            return Err(JwtError::InvalidToken);
        }

        Ok(claims)
    }
}
