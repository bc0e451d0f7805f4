//! Failure taxonomy for the meal fetch.
//!
//! Two classes: network failures (transport, timeout, non-success status) and
//! decode failures (the body is not the expected JSON shape).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection could not be established or broke mid-transfer.
    #[error("Request to '{endpoint}' failed: {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Transport timed out before a full response arrived.
    #[error("Request to '{endpoint}' timed out")]
    Timeout { endpoint: String },

    /// Server answered with a non-success status.
    #[error("Server returned HTTP {status} for '{endpoint}'")]
    Status { endpoint: String, status: u16 },

    /// Body did not decode into a meal collection.
    #[error("Malformed response from '{endpoint}': {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl FetchError {
    pub(crate) fn from_transport(endpoint: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            FetchError::Timeout {
                endpoint: endpoint.to_string(),
            }
        } else {
            FetchError::Network {
                endpoint: endpoint.to_string(),
                source,
            }
        }
    }

    /// Connection, timeout or HTTP status failure.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            FetchError::Network { .. } | FetchError::Timeout { .. } | FetchError::Status { .. }
        )
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, FetchError::Decode { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Timeout { .. })
    }

    /// Short machine-readable kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network { .. } => "network",
            FetchError::Timeout { .. } => "timeout",
            FetchError::Status { .. } => "status",
            FetchError::Decode { .. } => "decode",
            FetchError::Client(_) => "client",
        }
    }
}
