//! Authentication state derived from configuration.

use std::collections::HashMap;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::models::config::{AuthConfig, ConfigError, UserRecord};

/// Credential material carried for the lifetime of one request-handling
/// invocation. The secret key is stored decoded; credential verification
/// is not wired up, so nothing consults the user table yet.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    secret_key: Vec<u8>,
    users: HashMap<String, UserRecord>,
    enabled: bool,
}

impl AuthState {
    /// Decode the configured secret key and keep the user table. A secret
    /// that is not valid standard base64 is a fatal configuration error.
    pub fn from_config(config: &AuthConfig) -> Result<Self, ConfigError> {
        let secret_key = if config.secret_key.is_empty() {
            Vec::new()
        } else {
            STANDARD
                .decode(&config.secret_key)
                .map_err(ConfigError::InvalidSecretKey)?
        };

        Ok(Self {
            enabled: !config.secret_key.is_empty(),
            users: config.users.clone(),
            secret_key,
        })
    }

    /// Whether a non-empty secret key was configured.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn secret_key(&self) -> &[u8] {
        &self.secret_key
    }

    /// Stored record for a username, if any.
    pub fn user(&self, username: &str) -> Option<&UserRecord> {
        self.users.get(username)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_standard_base64_secret() {
        let config = AuthConfig {
            secret_key: "c2VjcmV0LWtleQ==".to_string(),
            users: HashMap::new(),
        };

        let auth = AuthState::from_config(&config).unwrap();

        assert!(auth.enabled());
        assert_eq!(auth.secret_key(), b"secret-key");
    }

    #[test]
    fn invalid_secret_is_fatal() {
        let config = AuthConfig {
            secret_key: "not!!base64".to_string(),
            users: HashMap::new(),
        };

        let err = AuthState::from_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSecretKey(_)));
    }

    #[test]
    fn disabled_without_secret() {
        let auth = AuthState::from_config(&AuthConfig::default()).unwrap();

        assert!(!auth.enabled());
        assert!(auth.secret_key().is_empty());
        assert_eq!(auth.user_count(), 0);
    }

    #[test]
    fn keeps_user_table() {
        let mut users = HashMap::new();
        users.insert(
            "alice".to_string(),
            UserRecord {
                password_hash: "$2a$10$abc".to_string(),
            },
        );
        let config = AuthConfig {
            secret_key: String::new(),
            users,
        };

        let auth = AuthState::from_config(&config).unwrap();

        assert_eq!(auth.user_count(), 1);
        assert_eq!(auth.user("alice").unwrap().password_hash, "$2a$10$abc");
        assert!(auth.user("bob").is_none());
    }
}
