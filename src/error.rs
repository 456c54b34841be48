// Error types for the library surface.
//
// Only two things can go wrong: the caller configured something we can't use
// (bad pattern, bad placeholder, unknown language), or the remote toxicity
// service failed. Everything else is a total function over strings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModerateError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Failures talking to the toxicity service. Surfaced to the caller as-is.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Perspective API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("failed to decode Perspective API response: {0}")]
    Decode(String),
}

impl ModerateError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// True for the configuration branch of the taxonomy.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

pub type Result<T> = std::result::Result<T, ModerateError>;
