// src/error.rs
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum SupplyError {
    #[error("totalSupply call failed: {0}")]
    Rpc(String),

    #[error("totalSupply call still pending after {0:?}")]
    Timeout(Duration),
}
