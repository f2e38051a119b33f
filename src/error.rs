//! Error handling and custom error types
//!
//! Provides unified error handling across the crate using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse Gemini response: {0}")]
    Parse(String),

    #[error("Role must be user or model, but got {0:?}")]
    MalformedRole(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] dotenvy::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

impl Error {
    /// True for failures of the generation call itself (network, remote
    /// rejection, undecodable payload).
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_) | Error::Api { .. } | Error::Parse(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
