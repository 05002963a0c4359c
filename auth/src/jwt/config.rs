use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use jsonwebtoken::Algorithm;

use super::errors::TokenConfigError;

/// Validated settings for signing and verifying access tokens.
///
/// Built once at startup; an unusable secret, algorithm or lifetime is
/// rejected here instead of on the first request.
#[derive(Clone)]
pub struct TokenConfig {
    secret: Vec<u8>,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenConfig {
    /// Minimum secret length in bytes (256 bits, the HS256 digest size).
    pub const MIN_SECRET_LENGTH: usize = 32;

    /// Build a token configuration.
    ///
    /// # Arguments
    /// * `secret` - HMAC signing secret
    /// * `algorithm` - Algorithm identifier (`HS256`, `HS384` or `HS512`)
    /// * `ttl_minutes` - Lifetime of issued tokens in minutes
    ///
    /// # Errors
    /// * `MissingSecret` - Secret is empty
    /// * `SecretTooShort` - Secret shorter than `MIN_SECRET_LENGTH`
    /// * `UnsupportedAlgorithm` - Identifier is unknown or not an HMAC algorithm
    /// * `InvalidLifetime` - Lifetime is zero, negative or out of range
    pub fn new(
        secret: impl Into<Vec<u8>>,
        algorithm: &str,
        ttl_minutes: i64,
    ) -> Result<Self, TokenConfigError> {
        let secret = Self::with_valid_secret(secret.into())?;
        let algorithm = Self::parse_algorithm(algorithm)?;
        let ttl = Duration::try_minutes(ttl_minutes)
            .filter(|_| ttl_minutes > 0)
            .ok_or(TokenConfigError::InvalidLifetime(ttl_minutes))?;

        Ok(Self {
            secret,
            algorithm,
            ttl,
        })
    }

    fn with_valid_secret(secret: Vec<u8>) -> Result<Vec<u8>, TokenConfigError> {
        if secret.is_empty() {
            Err(TokenConfigError::MissingSecret)
        } else if secret.len() < Self::MIN_SECRET_LENGTH {
            Err(TokenConfigError::SecretTooShort {
                min: Self::MIN_SECRET_LENGTH,
                actual: secret.len(),
            })
        } else {
            Ok(secret)
        }
    }

    fn parse_algorithm(algorithm: &str) -> Result<Algorithm, TokenConfigError> {
        match Algorithm::from_str(algorithm) {
            Ok(alg @ (Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512)) => Ok(alg),
            _ => Err(TokenConfigError::UnsupportedAlgorithm(algorithm.to_string())),
        }
    }

    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Lifetime applied to issued tokens.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"[redacted]")
            .field("algorithm", &self.algorithm)
            .field("ttl", &self.ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_valid_config() {
        let config = TokenConfig::new(SECRET, "HS256", 30).expect("Config should be valid");

        assert_eq!(config.algorithm(), Algorithm::HS256);
        assert_eq!(config.ttl(), Duration::minutes(30));
        assert_eq!(config.secret(), SECRET);
    }

    #[test]
    fn test_hmac_variants_accepted() {
        for name in ["HS256", "HS384", "HS512"] {
            assert!(TokenConfig::new(SECRET, name, 30).is_ok(), "{name} rejected");
        }
    }

    #[test]
    fn test_missing_secret() {
        let result = TokenConfig::new(Vec::<u8>::new(), "HS256", 30);
        assert_eq!(result.unwrap_err(), TokenConfigError::MissingSecret);
    }

    #[test]
    fn test_short_secret() {
        let result = TokenConfig::new(b"short".to_vec(), "HS256", 30);
        assert_eq!(
            result.unwrap_err(),
            TokenConfigError::SecretTooShort { min: 32, actual: 5 }
        );
    }

    #[test]
    fn test_non_hmac_algorithm_rejected() {
        for name in ["RS256", "ES256", "none", "hs256"] {
            assert!(matches!(
                TokenConfig::new(SECRET, name, 30),
                Err(TokenConfigError::UnsupportedAlgorithm(_))
            ));
        }
    }

    #[test]
    fn test_non_positive_lifetime_rejected() {
        assert_eq!(
            TokenConfig::new(SECRET, "HS256", 0).unwrap_err(),
            TokenConfigError::InvalidLifetime(0)
        );
        assert_eq!(
            TokenConfig::new(SECRET, "HS256", -5).unwrap_err(),
            TokenConfigError::InvalidLifetime(-5)
        );
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = TokenConfig::new(SECRET, "HS256", 30).unwrap();
        let rendered = format!("{:?}", config);

        assert!(rendered.contains("[redacted]"));
        assert!(!rendered.contains("test_secret_key"));
    }
}
