//! Error handling for the `minicc` CLI.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("failed to read '{path}': {source}")]
    ReadSource {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing failed")]
    ParseFailed,

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, DriverError>;
