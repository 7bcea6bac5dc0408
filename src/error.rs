//! Error types for mtg-query
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Every error is terminal for the call it occurs in: nothing is retried and
//! a multi-page enumeration that fails on any page returns only the error.

use thiserror::Error;

/// The main error type for mtg-query
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {detail}")]
    HttpStatus { status: u16, detail: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Invalid {header} header '{value}': expected an integer")]
    InvalidHeaderInteger { header: String, value: String },
}

/// Coarse classification of [`Error`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request could not be completed or the server answered non-2xx
    Transport,
    /// The body could not be parsed into entities
    Decode,
    /// A header that should hold an integer did not
    Format,
    /// Invalid client configuration
    Config,
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, detail: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            detail: detail.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an invalid integer header error
    pub fn invalid_header_integer(header: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidHeaderInteger {
            header: header.into(),
            value: value.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config { .. } | Error::YamlParse(_) | Error::Io(_) => ErrorKind::Config,
            Error::Http(_) | Error::HttpStatus { .. } | Error::InvalidUrl(_) => {
                ErrorKind::Transport
            }
            Error::Decode { .. } => ErrorKind::Decode,
            Error::InvalidHeaderInteger { .. } => ErrorKind::Format,
        }
    }

    /// HTTP status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for mtg-query
pub type Result<T> = std::result::Result<T, Error>;
