//! Error types for the submission flow.

use thiserror::Error;

/// Message shown for any transport or parse failure.
pub const CONNECTIVITY_MESSAGE: &str =
    "Failed to connect to the backend. Please check your connection.";

/// Client-side validation failures. The `Display` text is the message shown
/// to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select or drop an image!")]
    MissingImage,
    #[error("Please drop a valid image file.")]
    NotAnImage { mime_type: String },
    #[error("Please enter your city!")]
    EmptyCity,
}

/// Failures while sending the request or reading its body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Parse(String),
    /// Superseded by a newer submission or cancelled by the user.
    #[error("request aborted")]
    Aborted,
}

impl TransportError {
    /// Text to surface to the user, or `None` when nothing should be shown.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            TransportError::Network(_) | TransportError::Parse(_) => Some(CONNECTIVITY_MESSAGE),
            TransportError::Aborted => None,
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(e: serde_json::Error) -> Self {
        TransportError::Parse(e.to_string())
    }
}

/// Failures reading or writing the persisted city.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
