//! Encrypter configuration
//!
//! A single required `secret` value, loaded from JSON or the environment.
//! The secret is used as raw bytes of its UTF-8 text; it is not hex-decoded.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EncrypterError, Result};
use crate::service::CipherService;

/// Environment variable read by [`EncrypterConfig::from_env`]
pub const SECRET_ENV_VAR: &str = "ENCRYPTER_SECRET";

/// Configuration for building a [`CipherService`]
#[derive(Clone, Serialize, Deserialize)]
pub struct EncrypterConfig {
    /// Secret key, 16, 32 or 64 bytes. Never written out.
    #[serde(skip_serializing)]
    pub secret: String,
}

impl EncrypterConfig {
    /// Wrap an existing secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self { secret: secret.into() }
    }

    /// Parse from a JSON document such as `{"secret": "..."}`
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the secret from [`SECRET_ENV_VAR`]
    pub fn from_env() -> Result<Self> {
        Self::from_env_var(SECRET_ENV_VAR)
    }

    /// Read the secret from the named environment variable
    pub fn from_env_var(name: &str) -> Result<Self> {
        std::env::var(name)
            .map(Self::new)
            .map_err(|e| EncrypterError::Config(format!("{}: {}", name, e)))
    }

    /// Build a service, validating the secret length
    pub fn build(&self) -> Result<CipherService> {
        CipherService::new(self.secret.as_bytes())
    }
}

impl fmt::Debug for EncrypterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncrypterConfig")
            .field("secret", &"<redacted>")
            .finish()
    }
}
