//! Per-request application state for the stateless deployment model.

use std::collections::HashMap;
use std::future::{Ready, ready};

use actix_web::error::ErrorInternalServerError;
use actix_web::{Error, FromRequest, HttpRequest, dev::Payload};

use crate::domain::{PageSet, Widget};
use crate::models::auth::AuthState;
use crate::models::config::{AppConfig, ConfigError, ServerConfig, ThemeConfig};

/// Everything a handler needs, rebuilt from the environment on every
/// request. Nothing survives between invocations.
#[derive(Clone, Debug)]
pub struct AppState {
    pub server: ServerConfig,
    pub theme: ThemeConfig,
    pub pages: PageSet,
    pub auth: AuthState,
    /// Registry of instantiated widgets, keyed by widget id. Stays empty
    /// until concrete widget variants exist.
    pub widgets: HashMap<u64, Widget>,
}

impl AppState {
    /// Derive runtime state from a parsed configuration.
    pub fn from_config(config: AppConfig) -> Result<Self, ConfigError> {
        let auth = AuthState::from_config(&config.auth)?;
        let pages = PageSet::from_configs(&config.pages);

        Ok(Self {
            server: config.server,
            theme: config.theme,
            pages,
            auth,
            widgets: HashMap::new(),
        })
    }

    /// Rebuild the full state from `GLANCE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        AppConfig::from_env().and_then(Self::from_config)
    }
}

impl FromRequest for AppState {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(_req: &HttpRequest, _: &mut Payload) -> Self::Future {
        // The cause is logged server-side only; the client gets a generic
        // message with no configuration detail.
        ready(AppState::from_env().map_err(|err| {
            log::error!("Failed to initialize application: {err}");
            ErrorInternalServerError("Failed to initialize application")
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_env;

    #[test]
    fn builds_state_from_environment() {
        let _env = test_env::scoped(&[
            ("GLANCE_PAGES", r#"[{"name":"Home","slug":""}]"#),
            ("GLANCE_AUTH_SECRET", "c2VjcmV0"),
        ]);

        let state = AppState::from_env().unwrap();

        assert_eq!(state.pages.len(), 1);
        assert!(state.auth.enabled());
        assert!(state.widgets.is_empty());
    }

    #[test]
    fn synthesizes_default_page_without_config() {
        let _env = test_env::scoped(&[]);

        let state = AppState::from_env().unwrap();

        let page = state.pages.resolve("").unwrap();
        assert_eq!(page.name(), "Dashboard");
        assert_eq!(page.slug(), "");
    }

    #[test]
    fn propagates_config_errors() {
        let _env = test_env::scoped(&[("GLANCE_AUTH_SECRET", "###")]);

        let err = AppState::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSecretKey(_)));
    }
}
