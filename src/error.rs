//! Error types for staticmap.
//!
//! A fetch can fail in three distinct places: getting bytes over the wire,
//! the provider refusing the request, or the bytes not being an image. Each
//! has its own variant so callers can tell them apart.

use reqwest::StatusCode;
use thiserror::Error;

/// Upper bound on how much of an error body is kept for diagnostics.
pub(crate) const MAX_ERROR_BODY: usize = 512;

/// The main error type for staticmap operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The request never produced a response (DNS, connect, timeout, body read).
    #[error("request to map provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("map provider returned {status}: {body}")]
    Status {
        /// HTTP status returned by the provider.
        status: StatusCode,
        /// Leading part of the response body, if it was text.
        body: String,
    },

    /// The response body could not be decoded as an image.
    #[error("failed to decode map image: {0}")]
    Decode(#[from] image::ImageError),

    /// The image could not be written in the requested format.
    #[error("failed to encode map image: {0}")]
    Encode(#[source] image::ImageError),

    /// The HTTP client could not be set up (TLS backend, proxy settings).
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// A `FetcherConfig` value is outside what the provider accepts.
    #[error("invalid fetcher configuration: {message}")]
    InvalidConfig {
        /// Which value was rejected, and why.
        message: String,
    },

    /// The configured endpoint is not a valid URL.
    #[error("invalid map provider URL '{url}': {message}")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        message: String,
    },

    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for staticmap operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a status error, keeping at most a short prefix of the body.
    #[must_use]
    pub fn status(status: StatusCode, body: impl Into<String>) -> Self {
        let mut body = body.into();
        if body.len() > MAX_ERROR_BODY {
            let mut cut = MAX_ERROR_BODY;
            while !body.is_char_boundary(cut) {
                cut -= 1;
            }
            body.truncate(cut);
            body.push('…');
        }
        Self::Status { status, body }
    }

    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    #[must_use]
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }

    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// The HTTP status, if this error carries one.
    #[must_use]
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
            _ => None,
        }
    }
}
