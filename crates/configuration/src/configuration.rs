//! Runtime configuration for the bridge.

use thiserror::Error;

use crate::environment::Environment;
use crate::values::ConnectionUri;

pub const DEFAULT_CONNECTION_URI_VARIABLE: &str = "SQLBRIDGE_DATABASE_URL";
pub const DEFAULT_PORT_VARIABLE: &str = "PORT";

const DEFAULT_CONNECTION_URI: &str = "postgres://connectordb@localhost:5432/connectordb";
const DEFAULT_PORT: u16 = 3000;

/// Everything the server needs to run: where the database lives and
/// which port to listen on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub connection_uri: ConnectionUri,
    pub port: u16,
}

impl ServiceConfig {
    /// Read the configuration from the given environment, falling back
    /// to the built-in defaults for anything unset.
    pub fn from_environment(environment: &impl Environment) -> Result<Self, ConfigurationError> {
        let connection_uri = environment
            .read(DEFAULT_CONNECTION_URI_VARIABLE)
            .map_or_else(|| ConnectionUri::from(DEFAULT_CONNECTION_URI), ConnectionUri::from);

        let port = match environment.read(DEFAULT_PORT_VARIABLE) {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigurationError::InvalidPort(raw))?,
        };

        Ok(Self {
            connection_uri,
            port,
        })
    }
}

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("invalid listen port: {0}")]
    InvalidPort(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::FixedEnvironment;

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = ServiceConfig::from_environment(&FixedEnvironment::default()).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(
            config.connection_uri,
            ConnectionUri::from("postgres://connectordb@localhost:5432/connectordb")
        );
    }

    #[test]
    fn environment_overrides_defaults() {
        let environment = FixedEnvironment::from([
            ("SQLBRIDGE_DATABASE_URL", "postgres://reports@db:5432/reports"),
            ("PORT", "8081"),
        ]);

        let config = ServiceConfig::from_environment(&environment).unwrap();

        assert_eq!(config.port, 8081);
        assert_eq!(
            config.connection_uri,
            ConnectionUri::from("postgres://reports@db:5432/reports")
        );
    }

    #[test]
    fn unparseable_port_is_an_error() {
        let environment = FixedEnvironment::from([("PORT", "not-a-port")]);

        let error = ServiceConfig::from_environment(&environment).unwrap_err();

        assert!(matches!(error, ConfigurationError::InvalidPort(raw) if raw == "not-a-port"));
    }
}
