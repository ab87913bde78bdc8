//! Server settings loaded via OrthoConfig.

use std::sync::Arc;

use backend::domain::ports::{FixtureIdentityResolver, IdentityResolver, RejectingIdentityResolver};
use backend::domain::{InvalidRole, UserRole};
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_FIXTURE_ROLE: &str = "gestor";

/// Settings controlling the HTTP listener and identity resolution.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "VIGILANCIA")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Resolve every bearer token to the fixed development identity.
    #[ortho_config(default = false)]
    pub fixture_identity: bool,
    /// Role label held by the development identity.
    pub fixture_role: Option<String>,
}

impl ServerSettings {
    /// Bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> (String, u16) {
        (
            self.host.clone().unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Role for the development identity; unknown labels are an error.
    pub fn fixture_role(&self) -> Result<UserRole, InvalidRole> {
        self.fixture_role
            .as_deref()
            .unwrap_or(DEFAULT_FIXTURE_ROLE)
            .parse()
    }

    /// Build the identity resolver selected by these settings.
    pub fn identity_resolver(&self) -> Result<Arc<dyn IdentityResolver>, InvalidRole> {
        if !self.fixture_identity {
            return Ok(Arc::new(RejectingIdentityResolver));
        }
        let role = self.fixture_role()?;
        Ok(Arc::new(FixtureIdentityResolver::default().with_role(role)))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "VIGILANCIA_HOST",
        "VIGILANCIA_PORT",
        "VIGILANCIA_FIXTURE_IDENTITY",
        "VIGILANCIA_FIXTURE_ROLE",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("vigilancia-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), (DEFAULT_HOST.to_owned(), DEFAULT_PORT));
        assert!(!settings.fixture_identity);
        assert_eq!(settings.fixture_role(), Ok(UserRole::Gestor));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("VIGILANCIA_HOST", Some("127.0.0.1".to_owned())),
            ("VIGILANCIA_PORT", Some("9090".to_owned())),
            ("VIGILANCIA_FIXTURE_IDENTITY", Some("true".to_owned())),
            ("VIGILANCIA_FIXTURE_ROLE", Some("vigilancia".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), ("127.0.0.1".to_owned(), 9090));
        assert!(settings.fixture_identity);
        assert_eq!(settings.fixture_role(), Ok(UserRole::Vigilancia));
        assert!(settings.identity_resolver().is_ok());
    }

    #[rstest]
    fn unknown_fixture_role_is_not_coerced() {
        let settings = ServerSettings {
            host: None,
            port: None,
            fixture_identity: true,
            fixture_role: Some("admin".to_owned()),
        };
        let err = settings.identity_resolver().err().expect("invalid role");
        assert_eq!(err.value(), Some("admin"));
    }
}
