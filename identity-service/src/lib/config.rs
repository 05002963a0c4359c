use std::env;
use std::fmt;

use auth::TokenConfig;
use auth::TokenConfigError;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use config::FileFormat;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub jwt: JwtConfig,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "JwtConfig::default_algorithm")]
    pub algorithm: String,
    #[serde(default = "JwtConfig::default_expiration_minutes")]
    pub expiration_minutes: i64,
}

impl JwtConfig {
    fn default_algorithm() -> String {
        "HS256".to_string()
    }

    fn default_expiration_minutes() -> i64 {
        30
    }

    /// Validate these settings into a token configuration.
    ///
    /// # Errors
    /// * `TokenConfigError` - Secret, algorithm or lifetime is unusable
    pub fn token_config(&self) -> Result<TokenConfig, TokenConfigError> {
        TokenConfig::new(
            self.secret.as_bytes(),
            &self.algorithm,
            self.expiration_minutes,
        )
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[redacted]")
            .field("algorithm", &self.algorithm)
            .field("expiration_minutes", &self.expiration_minutes)
            .finish()
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, JWT__EXPIRATION_MINUTES, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// There is no default signing secret; loading fails when none is set.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        configuration.try_deserialize()
    }

    /// Parse configuration from a TOML document, without file or
    /// environment layering.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        ConfigBuilder::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
