//! Error type for language service calls

use thiserror::Error;

/// Failure of a single request to the language service.
///
/// Every variant carries the underlying cause as text so results can travel
/// inside [`crate::messages::Msg`], which must be `Clone`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Request payload could not be serialized.
    #[error("failed to encode request for {endpoint}: {cause}")]
    Encode {
        endpoint: &'static str,
        cause: String,
    },

    /// Connection, DNS, TLS or timeout failure in the transport.
    #[error("request to {endpoint} failed: {cause}")]
    Transport {
        endpoint: &'static str,
        cause: String,
    },

    /// Service answered with a non-success status.
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: &'static str, status: u16 },

    /// Response body did not match the expected shape.
    #[error("unexpected response from {endpoint}: {cause}")]
    Decode {
        endpoint: &'static str,
        cause: String,
    },

    /// Service URL or a returned resource locator is not a valid URL.
    #[error("invalid URL {url}: {cause}")]
    InvalidUrl { url: String, cause: String },
}

impl ServiceError {
    /// Endpoint path the failing request targeted, if any
    pub fn endpoint(&self) -> Option<&'static str> {
        match self {
            Self::Encode { endpoint, .. }
            | Self::Transport { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Decode { endpoint, .. } => Some(*endpoint),
            Self::InvalidUrl { .. } => None,
        }
    }
}
