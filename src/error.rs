use thiserror::Error;

pub type Result<T> = std::result::Result<T, MyrrixError>;

/// Errors surfaced by the Myrrix client.
#[derive(Debug, Error)]
pub enum MyrrixError {
    /// Transport-level failure (connection refused, DNS, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status code.
    #[error("Server returned status {0}")]
    Status(u16),

    /// The response body did not match the shape the operation declares.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for MyrrixError {
    fn from(e: reqwest::Error) -> Self {
        MyrrixError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for MyrrixError {
    fn from(e: serde_json::Error) -> Self {
        MyrrixError::Decode(e.to_string())
    }
}
