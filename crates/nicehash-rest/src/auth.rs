//! API credentials for private endpoints
//!
//! NiceHash authenticates private calls by sending the API id and key as plain
//! query parameters (`id`, `key`). There is no signing step.
//!
//! # Security
//!
//! The key is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_api_key()`

use secrecy::{ExposeSecret, SecretString};

use crate::error::{RestError, RestResult};

/// Environment variable holding the API id
pub const API_ID_ENV: &str = "NICEHASH_API_ID";
/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "NICEHASH_API_KEY";

/// API credentials for authenticated requests
///
/// Both halves are optional. A half that was never configured is `None`,
/// which is distinct from one configured with an empty string.
#[derive(Default)]
pub struct Credentials {
    api_id: Option<String>,
    api_key: Option<SecretString>,
}

impl Credentials {
    /// Create credentials with both id and key set
    pub fn new(api_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_id: Some(api_id.into()),
            api_key: Some(SecretString::from(api_key.into())),
        }
    }

    /// Credentials with nothing configured
    pub fn none() -> Self {
        Self::default()
    }

    /// Create credentials from environment variables
    ///
    /// Reads `NICEHASH_API_ID` and `NICEHASH_API_KEY` from the environment.
    pub fn from_env() -> RestResult<Self> {
        let api_id = std::env::var(API_ID_ENV)
            .map_err(|_| RestError::EnvVarNotSet(API_ID_ENV.to_string()))?;
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| RestError::EnvVarNotSet(API_KEY_ENV.to_string()))?;

        Ok(Self::new(api_id, api_key))
    }

    /// Set the API id
    pub fn with_api_id(mut self, api_id: impl Into<String>) -> Self {
        self.set_api_id(api_id);
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.set_api_key(api_key);
        self
    }

    /// Replace the API id
    pub fn set_api_id(&mut self, api_id: impl Into<String>) {
        self.api_id = Some(api_id.into());
    }

    /// Replace the API key
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = Some(SecretString::from(api_key.into()));
    }

    /// Forget both id and key
    pub fn clear(&mut self) {
        self.api_id = None;
        self.api_key = None;
    }

    /// Get the API id
    pub fn api_id(&self) -> Option<&str> {
        self.api_id.as_deref()
    }

    /// Get the API key in clear text
    pub fn expose_api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|key| key.expose_secret())
    }

    /// True when both id and key are present and non-empty
    pub fn is_complete(&self) -> bool {
        let has_id = self.api_id.as_deref().is_some_and(|id| !id.is_empty());
        let has_key = self.expose_api_key().is_some_and(|key| !key.is_empty());
        has_id && has_key
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates a new secret with the same content)
    fn clone(&self) -> Self {
        Self {
            api_id: self.api_id.clone(),
            api_key: self
                .expose_api_key()
                .map(|key| SecretString::from(key.to_owned())),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_id", &self.api_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_credentials() {
        let creds = Credentials::new("testApiId", "testApiKey");
        assert!(creds.is_complete());
        assert_eq!(creds.api_id(), Some("testApiId"));
        assert_eq!(creds.expose_api_key(), Some("testApiKey"));
    }

    #[test]
    fn test_partial_credentials() {
        let mut creds = Credentials::none().with_api_id("12345");
        assert!(!creds.is_complete());
        assert_eq!(creds.expose_api_key(), None);

        creds.set_api_key("test");
        assert!(creds.is_complete());

        creds.clear();
        assert!(!creds.is_complete());
        assert_eq!(creds.api_id(), None);
    }

    #[test]
    fn test_empty_strings_are_not_complete() {
        let creds = Credentials::new("", "key");
        assert!(!creds.is_complete());
        // Present but empty is still distinct from absent
        assert_eq!(creds.api_id(), Some(""));

        let creds = Credentials::new("id", "");
        assert!(!creds.is_complete());
    }

    #[test]
    fn test_debug_redacts_key() {
        let creds = Credentials::new("testApiId", "super_secret_key");
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("super_secret_key"));
        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("testApiId"));
    }

    #[test]
    fn test_clone_keeps_key() {
        let creds = Credentials::new("id", "key");
        let cloned = creds.clone();
        assert_eq!(cloned.expose_api_key(), Some("key"));
    }
}
