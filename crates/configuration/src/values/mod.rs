//! Individual configuration values.

use serde::{Deserialize, Serialize};

/// Connection string for a Postgres-compatible database.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConnectionUri(pub String);

impl ConnectionUri {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ConnectionUri {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ConnectionUri {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}
