//! Error types shared across the crate.
//!
//! The remote boundary has a deliberately small taxonomy:
//!
//! - [`GatewayError::Upstream`] - the remote call itself failed (transport,
//!   timeout, auth, quota, non-2xx status)
//! - [`GatewayError::Decode`] - the call succeeded but the payload violates
//!   the structured-output contract
//!
//! Both are caught at the orchestrator boundary and surfaced as a status
//! banner; the presentation layer never sees a raw error.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the AI gateway.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The remote call failed before a usable payload arrived.
    #[error("upstream error{}: {message}", .status.map(|s| format!(" ({s})")).unwrap_or_default())]
    Upstream {
        /// HTTP status, when the failure happened after a response arrived.
        status: Option<u16>,
        message: String,
    },

    /// The remote call succeeded but returned a malformed payload.
    #[error("decode error: {message}")]
    Decode { message: String },
}

impl GatewayError {
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            status: None,
            message: message.into(),
        }
    }

    pub fn upstream_status(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream { .. })
    }

    /// Short message suitable for the status banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Upstream { status: Some(s), .. } if *s == 401 || *s == 403 => {
                "The AI service rejected the API key. Check GEMINI_API_KEY.".to_string()
            }
            Self::Upstream { status: Some(s), .. } if *s == 429 => {
                "The AI service is rate-limiting requests. Try again shortly.".to_string()
            }
            Self::Upstream { .. } => {
                "Could not reach the AI service. Check your connection and try again.".to_string()
            }
            Self::Decode { .. } => {
                "The AI service returned an unexpected response. Try again.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        let status = err.status().map(|s| s.as_u16());
        let message = if err.is_timeout() {
            format!("request timed out: {err}")
        } else if err.is_connect() {
            format!("connection failed: {err}")
        } else {
            err.to_string()
        };
        Self::Upstream { status, message }
    }
}

/// Errors from the device-capture boundary (image file loading).
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is an image format the transport does not accept.
    #[error("{} is not a JPEG or PNG image", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// The bytes do not parse as an image at all.
    #[error("{} does not look like an image: {message}", .path.display())]
    NotAnImage { path: PathBuf, message: String },

    /// The encoded payload would exceed the transport size cap.
    #[error("{} is {size} bytes, over the {limit}-byte limit", .path.display())]
    TooLarge { path: PathBuf, size: usize, limit: usize },
}

impl CaptureError {
    /// Short message suitable for the status banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io { path, .. } => format!("Could not read {}.", path.display()),
            Self::UnsupportedFormat { path } => {
                format!("{} must be a JPEG or PNG image.", path.display())
            }
            Self::NotAnImage { path, .. } => {
                format!("{} is not a readable image.", path.display())
            }
            Self::TooLarge { path, .. } => {
                format!("{} is too large to submit (4 MB max).", path.display())
            }
        }
    }
}
