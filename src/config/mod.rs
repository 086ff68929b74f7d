mod connection;
mod loader;
mod types;

pub use connection::{NormalizedConnection, Protocol, DEFAULT_PORT};
pub use loader::ConfigError;
pub use types::{Config, ConnectionOptions};
