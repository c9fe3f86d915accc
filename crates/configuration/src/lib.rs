pub mod configuration;
pub mod environment;
pub mod values;

pub use configuration::{ConfigurationError, ServiceConfig};
pub use environment::{Environment, FixedEnvironment, ProcessEnvironment};
pub use values::ConnectionUri;
