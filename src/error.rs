use thiserror::Error;

/// Message shown when the proxy fails without telling us why.
pub const GENERIC_NETWORK_ERROR: &str = "Errore di rete";

/// The phrase to translate was empty after trimming.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Per favore inserisci una frase da tradurre.")]
pub struct ValidationError;

/// Failures of the proxy round-trip.
///
/// `Display` yields only the detail text, since that is what ends up in the
/// explanation slot of the window.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// Non-success HTTP status; carries the response body.
    #[error("{body}")]
    Status { status: u16, body: String },

    /// Connection refused, timeout, DNS and the like.
    #[error("{0}")]
    Transport(String),

    /// Success status but the body was not the expected JSON.
    #[error("{0}")]
    Decode(String),
}

impl RemoteError {
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let body = if body.trim().is_empty() {
            GENERIC_NETWORK_ERROR.to_string()
        } else {
            body
        };
        RemoteError::Status { status, body }
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RemoteError::Decode(err.to_string())
        } else {
            RemoteError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for RemoteError {
    fn from(err: serde_json::Error) -> Self {
        RemoteError::Decode(err.to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("{0}")]
    Write(String),
}
