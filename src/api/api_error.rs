use std::error::Error;
use std::fmt;

/// Failures of the one call this site makes to the property API.
///
/// The two variants map to the two user-visible outcomes: a rejection
/// carries the server's own message, a network failure gets a generic
/// notice.
#[derive(Debug)]
pub enum ApiError {
    /// The request never completed (connect, timeout, body read).
    Network(String),
    /// The API answered with a non-success status.
    Rejected { status: u16, message: String },
}

impl ApiError {
    /// The line shown to the user on the failure notice.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Failed to submit property.".to_string(),
            ApiError::Rejected { message, .. } => format!("Error: {message}"),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {msg}"),
            ApiError::Rejected { status, message } => {
                write!(f, "API rejected request ({status}): {message}")
            }
        }
    }
}

impl Error for ApiError {}
