/// Shared error type used across all mnemo crates.
///
/// Every failed memory call ends in exactly one of these variants; nothing
/// is retried or recovered locally.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The service answered with a non-2xx HTTP status. The body is not read.
    #[error("HTTP {status} {status_text}")]
    Transport { status: u16, status_text: String },

    /// The response envelope carried an `error` object.
    #[error("{0}")]
    Application(String),

    /// No response arrived within the configured deadline (milliseconds).
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Connection, send or body-read failure below the HTTP status level.
    #[error("HTTP: {0}")]
    Http(String),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status carried by a [`Error::Transport`] failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
