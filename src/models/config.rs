//! Configuration model loaded from `GLANCE_*` environment variables.

use std::collections::HashMap;
use std::env;

use serde::Deserialize;
use thiserror::Error;

/// Fatal configuration failures. Plain values never end up here; they fall
/// back to typed defaults instead.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parsing auth users: {0}")]
    InvalidUsers(#[source] serde_json::Error),
    #[error("parsing pages config: {0}")]
    InvalidPages(#[source] serde_json::Error),
    #[error("decoding secret key: {0}")]
    InvalidSecretKey(#[source] base64::DecodeError),
}

/// Network and deployment settings shared across handlers.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub proxied: bool,
    pub base_url: String,
}

impl ServerConfig {
    /// Address to bind; an unset host means every interface.
    pub fn bind_address(&self) -> (String, u16) {
        let host = if self.host.is_empty() {
            "0.0.0.0".to_string()
        } else {
            self.host.clone()
        };
        (host, self.port)
    }
}

/// Raw authentication settings as configured. The secret key stays in its
/// text form here; decoding happens in [`crate::models::auth::AuthState`].
#[derive(Clone, Debug, Default)]
pub struct AuthConfig {
    pub secret_key: String,
    pub users: HashMap<String, UserRecord>,
}

#[derive(Clone, Debug)]
pub struct ThemeConfig {
    pub disable_picker: bool,
}

/// Stored credentials for one user.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    #[serde(default)]
    pub password_hash: String,
}

/// One configured dashboard page. Missing fields deserialize to their
/// empty values, matching the permissiveness of the original format.
#[derive(Clone, Debug, Deserialize)]
pub struct PageConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub columns: Vec<ColumnConfig>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ColumnConfig {
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub widgets: Vec<WidgetConfig>,
}

/// A configured content block: a type tag plus an open-ended data bag.
/// This is the wire format only; the runtime widget type lives in
/// [`crate::domain::Widget`].
#[derive(Clone, Debug, Deserialize)]
pub struct WidgetConfig {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

/// Full configuration assembled from the environment.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub theme: ThemeConfig,
    pub pages: Vec<PageConfig>,
}

impl AppConfig {
    /// Read every `GLANCE_*` variable. Plain values get a typed default
    /// when absent or unparsable; the JSON blob variables are fatal on
    /// parse failure and simply absent otherwise.
    pub fn from_env() -> Result<Self, ConfigError> {
        let server = ServerConfig {
            host: env_or("GLANCE_HOST", ""),
            port: env_parse_or("GLANCE_PORT", 8080),
            proxied: env_parse_or("GLANCE_PROXIED", true),
            base_url: env_or("GLANCE_BASE_URL", ""),
        };

        let theme = ThemeConfig {
            disable_picker: env_parse_or("GLANCE_DISABLE_THEME_PICKER", false),
        };

        let mut auth = AuthConfig {
            secret_key: env_or("GLANCE_AUTH_SECRET", ""),
            ..AuthConfig::default()
        };
        if let Some(users_json) = non_empty_var("GLANCE_AUTH_USERS") {
            auth.users = serde_json::from_str(&users_json).map_err(ConfigError::InvalidUsers)?;
        }

        let pages = match non_empty_var("GLANCE_PAGES") {
            Some(pages_json) => {
                serde_json::from_str(&pages_json).map_err(ConfigError::InvalidPages)?
            }
            None => Vec::new(),
        };

        Ok(Self {
            server,
            auth,
            theme,
            pages,
        })
    }
}

/// String variable with a fallback for unset or empty values.
fn env_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

/// Parsed variable falling back to `default` when unset or unparsable.
fn env_parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}
