use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read settings: {0}")]
    Extract(#[from] figment::Error),
    #[error("Connect timeout must be at least one second")]
    ZeroTimeout,
}

/// Failures while bringing up the database client.
///
/// None of these are retried. The entry point treats every variant as fatal.
#[derive(Error, Debug)]
pub enum ConnectError {
    #[error("Invalid MongoDB address {address}: {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: mongodb::error::Error,
    },
    #[error("MongoDB at {address} is unreachable: {source}")]
    Unreachable {
        address: String,
        #[source]
        source: mongodb::error::Error,
    },
    #[error("Timed out after {timeout:?} connecting to MongoDB at {address}")]
    Timeout { address: String, timeout: Duration },
    #[error("Failed to write bootstrap trace: {0}")]
    Trace(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Connect(#[from] ConnectError),
    #[error("Rocket failed: {0}")]
    Launch(#[from] Box<rocket::Error>),
}
