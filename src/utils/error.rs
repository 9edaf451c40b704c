use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocatorError {
    #[error("HTTP client error: {0}")]
    ClientError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid command: {message}")]
    CommandError { message: String },

    #[error("Load failed: {0}")]
    Load(#[from] LoadError),
}

/// Why a facility fetch failed. Every variant is shown to the user as the
/// same generic message; the kind is only logged.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("HTTP error: status {status}")]
    Http { status: u16 },

    #[error("parse error: {message}")]
    Parse { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    Network,
    Http,
    Parse,
}

impl LoadError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            LoadError::Network(_) => LoadErrorKind::Network,
            LoadError::Http { .. } => LoadErrorKind::Http,
            LoadError::Parse { .. } => LoadErrorKind::Parse,
        }
    }
}

pub type Result<T> = std::result::Result<T, LocatorError>;
