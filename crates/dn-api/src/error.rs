//! Client errors.

use thiserror::Error;

/// Failures below the HTTP status line: connecting, timing out, setup.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Failed to build HTTP client.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    /// Failed to start the runtime that drives requests.
    #[error("failed to start HTTP runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// HTTP request failed.
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    /// A non-HTTP transport could not deliver the request.
    #[error("connection failed: {0}")]
    Connection(String),
}

/// Errors returned by every client operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(#[from] TransportError),
    /// The server answered with an unexpected status. The message is the
    /// response body exactly as received.
    #[error("{body}")]
    Api { status: u16, body: String },
    /// The status was fine but the body did not have the expected shape.
    #[error("invalid {entity} response: {source}")]
    Decode {
        entity: &'static str,
        #[source]
        source: serde_json::Error,
    },
    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    /// The entity was never bound to a credential.
    #[error("{entity} {id} has no credential bound")]
    Unbound { entity: &'static str, id: u64 },
    /// The entity lacks the parent id needed to build its path.
    #[error("{entity} {id} is not linked to a {parent}")]
    Unlinked {
        entity: &'static str,
        id: u64,
        parent: &'static str,
    },
}

impl ApiError {
    /// HTTP status of an API error.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
