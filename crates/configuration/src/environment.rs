//! The seam between configuration and the process environment.

use std::collections::HashMap;

/// Lookup of named configuration variables.
///
/// Abstracted over so that tests can substitute a fixed set of
/// variables for the real process environment.
pub trait Environment {
    fn read(&self, variable: &str) -> Option<String>;
}

/// Reads variables from the environment of the running process.
#[derive(Debug, Clone, Copy)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn read(&self, variable: &str) -> Option<String> {
        std::env::var(variable).ok()
    }
}

/// A fixed set of variables, independent of the process environment.
#[derive(Debug, Clone, Default)]
pub struct FixedEnvironment(HashMap<String, String>);

impl Environment for FixedEnvironment {
    fn read(&self, variable: &str) -> Option<String> {
        self.0.get(variable).cloned()
    }
}

impl From<HashMap<String, String>> for FixedEnvironment {
    fn from(variables: HashMap<String, String>) -> Self {
        Self(variables)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for FixedEnvironment {
    fn from(variables: [(&str, &str); N]) -> Self {
        Self(
            variables
                .into_iter()
                .map(|(variable, value)| (variable.to_string(), value.to_string()))
                .collect(),
        )
    }
}
