/// Error types shared by the API client and the commands
use thiserror::Error;

/// Errors surfaced to the process boundary
#[derive(Debug, Error)]
pub enum Error {
    /// The API answered with a non-OKAY envelope
    #[error("API error ({code}): {detail}")]
    Api { code: String, detail: String },

    /// The referenced resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Transport-level failure talking to the API
    #[error("Network error: {0}")]
    Network(String),

    /// The API answered with something we could not decode
    #[error("Invalid API response: {0}")]
    Decode(String),

    /// A flag or argument failed validation before any mutating call
    #[error("Invalid value: {0}")]
    Usage(String),

    #[error("No confirmed password was entered")]
    PasswordMismatch,

    /// A queued operation ended in a non-DONE terminal step
    #[error("Operation {id} ({kind}) ended with step {step}")]
    OperationFailed { id: u64, kind: String, step: String },

    #[error("Console session failed: {0}")]
    Console(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Exit code used by `main` for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) | Error::PasswordMismatch => 2,
            _ => 1,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Network(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
