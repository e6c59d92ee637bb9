//! Error types.
//!
//! One top-level [`Error`] with a nested enum per concern, so handlers can
//! match on the category and `main` can attach a hint.

use thiserror::Error;

/// Top-level error for liftkit operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Capacity(#[from] CapacityError),

    #[error(transparent)]
    Download(#[from] DownloadError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("{0}")]
    Other(String),
}

/// Configuration loading and validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(String),

    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Control-plane errors.
#[derive(Error, Debug)]
pub enum RemoteError {
    /// The client could not be constructed (runtime or SDK setup).
    #[error("failed to create control-plane client: {0}")]
    Client(String),

    /// A service call failed: authorization, network, throttling, unknown resource.
    #[error("{operation} failed: {message}")]
    Call {
        operation: &'static str,
        message: String,
    },

    /// The call succeeded but the response lacked a required field.
    #[error("{operation} returned an incomplete response: missing {field}")]
    Incomplete {
        operation: &'static str,
        field: &'static str,
    },
}

impl RemoteError {
    /// Build a `Call` error from any displayable SDK error.
    pub fn call(operation: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Call {
            operation,
            message: err.to_string(),
        }
    }
}

/// Local fleet-capacity validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CapacityError {
    #[error("minimum size {min} exceeds desired instances {desired}")]
    MinAboveDesired { min: u32, desired: u32 },

    #[error("desired instances {desired} exceed maximum size {max}")]
    DesiredAboveMax { desired: u32, max: u32 },

    #[error("instance count {0} is out of range")]
    OutOfRange(u32),
}

/// Runtime archive download errors.
#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("http request failed: {0}")]
    Http(String),

    #[error("Failed to download Node.js. Status code: {0}")]
    Status(u16),

    #[error("invalid version: {0:?}")]
    InvalidVersion(String),

    #[error("unsupported platform: {0} (pass --platform explicitly)")]
    UnsupportedPlatform(String),
}

impl From<reqwest::Error> for DownloadError {
    fn from(err: reqwest::Error) -> Self {
        DownloadError::Http(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
