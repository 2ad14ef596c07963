//! Unified error types for the health API.
//! Used by: config, health, main.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Any driver-level failure talking to the database. The driver's own
    /// message is kept verbatim for operators.
    #[error("{0}")]
    DependencyUnavailable(String),
}

impl From<sqlx::Error> for Error {
    fn from(e: sqlx::Error) -> Self {
        Error::DependencyUnavailable(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
