//! Errors at the remote analysis boundary.
//!
//! Nothing here is fatal: the orchestrator recovers from every variant by
//! recomputing locally, so these errors never reach the end user as a hard
//! failure.

use std::fmt;

/// Failure of a remote analysis call.
#[derive(Debug, Clone)]
pub enum TransportError {
    /// Network failure or a non-success status from the service.
    Unavailable(String),
    /// The service responded, but the payload did not decode.
    MalformedResponse(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Unavailable(msg) => write!(f, "analysis service unavailable: {}", msg),
            TransportError::MalformedResponse(msg) => {
                write!(f, "malformed analysis response: {}", msg)
            }
        }
    }
}

impl std::error::Error for TransportError {}
