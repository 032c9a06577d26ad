//! Unified error types for atlasctl
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error talking to the Atlas API
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error (writing output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the Atlas API client
#[derive(Error, Debug)]
pub enum ApiError {
    /// Failed to build the HTTP client
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    /// Request could not be sent or the connection failed
    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },

    /// Server answered with a non-success status
    #[error("Server returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// Authentication was rejected
    #[error("Authentication rejected by the API (HTTP {0})")]
    Unauthorized(u16),

    /// Response body was not the expected JSON
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Errors from argument validators
///
/// The display text is what clap shows after "invalid value ... for ...".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Path does not exist
    #[error("\"{0}\" does not appear to be a valid path")]
    PathNotFound(String),

    /// Not a two-letter country code
    #[error("\"{0}\" is not a valid two-letter country code")]
    InvalidCountryCode(String),

    /// A token in an integer list was not an integer
    #[error("\"{0}\" is not a comma-separated list of integers")]
    InvalidIntegerList(String),

    /// Could not parse a date/time
    #[error("\"{0}\" is not a recognised date/time (expected YYYY-MM-DD[THH[:MM[:SS]]])")]
    InvalidDateTime(String),

    /// Not an integer at all
    #[error("\"{0}\" is not an integer")]
    InvalidInteger(String),

    /// Integer outside the accepted range
    #[error("{value} is out of range (valid range: {min}-{max})")]
    OutOfRange { value: i64, min: i64, max: i64 },
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
