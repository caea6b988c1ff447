use thiserror::Error;

/// Failure of a single round trip to the data backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),

    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode row: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unexpected response: {0}")]
    Unexpected(String),

    /// Raised by the in-memory backend when failures are switched on.
    #[error("simulated backend failure on {0}")]
    Simulated(&'static str),
}

pub type BackendResult<T> = Result<T, BackendError>;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("auth request failed: {0}")]
    Transport(#[from] gloo_net::Error),

    #[error("auth provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode session: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("session storage unavailable: {0}")]
    Storage(String),
}

pub type AuthResult<T> = Result<T, AuthError>;

/// Errors a content editor can report inline.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("{field} {value:?} is already used by another record")]
    Duplicate { field: &'static str, value: String },

    /// The draft cannot be stored as it stands.
    #[error("{0}")]
    Invalid(&'static str),
}
