//! Error types for plume - one diagnostic enum shared by every crate.

use miette::Diagnostic;
use smol_str::SmolStr;

/// Main error type for plume operations
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum PlumeError {
    /// Transport-level HTTP failure (connection, TLS, body read)
    #[error(transparent)]
    #[diagnostic(code(plume::http))]
    Http(#[from] reqwest::Error),

    /// A service answered with a non-success status
    #[error("request failed with status {status}: {message}")]
    #[diagnostic(code(plume::status))]
    Status { status: u16, message: String },

    /// Serialization/deserialization error
    #[error(transparent)]
    #[diagnostic(code(plume::serde))]
    Serde(#[from] serde_json::Error),

    /// Not a `did:` identifier
    #[error("invalid DID: {0}")]
    #[diagnostic(
        code(plume::did),
        help("DIDs look like `did:plc:abc123` or `did:web:example.com`")
    )]
    InvalidDid(SmolStr),

    /// Category tag outside the fixed set
    #[error("unknown category: {0}")]
    #[diagnostic(code(plume::category))]
    InvalidCategory(SmolStr),

    /// Bad or unreadable configuration
    #[error("configuration error: {0}")]
    #[diagnostic(code(plume::config))]
    Config(String),

    /// Draft is missing a required field or a submission is already running
    #[error("post is not ready to submit: {0}")]
    #[diagnostic(code(plume::not_ready))]
    NotReady(&'static str),

    /// IO error
    #[error(transparent)]
    #[diagnostic(code(plume::io))]
    Io(#[from] std::io::Error),
}

impl PlumeError {
    pub fn status(status: http::StatusCode, message: impl Into<String>) -> Self {
        Self::Status {
            status: status.as_u16(),
            message: message.into(),
        }
    }

    /// Short message suitable for the inline error label.
    pub fn inline_message(&self) -> String {
        match self {
            PlumeError::Status { message, .. } if !message.is_empty() => message.clone(),
            other => other.to_string(),
        }
    }
}
