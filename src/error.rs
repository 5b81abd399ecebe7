//! Error types for Raide API operations.

use thiserror::Error;

/// Errors surfaced by [`TicketingClient`](crate::TicketingClient) operations.
///
/// The service communicates failure two ways: a non-200 HTTP status, or a
/// 200 whose envelope carries a nonzero `error` field. Both funnel into this
/// enum, so callers can match on the failure kind regardless of which layer
/// produced it.
#[derive(Debug, Error)]
pub enum TicketingError {
    /// The service rejected the credentials (HTTP 401).
    #[error("You are Unauthorized.")]
    Unauthorized,

    /// The credentials were accepted but this operation is not permitted
    /// (HTTP 403).
    #[error("You are Forbidden.")]
    Forbidden,

    /// The service processed the request and reported an application-level
    /// failure in the response envelope.
    #[error("{description}")]
    Service { description: String },

    /// A 200 response whose body could not be decoded as an envelope.
    #[error("Malformed response from service: {0}")]
    MalformedResponse(String),

    /// Any HTTP status other than 200, 401 or 403.
    #[error("An error has occurred.")]
    Unknown,

    /// Network-level failure from the transport, passed through unchanged.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid base URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Failed to read credentials file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid credentials file: {0}")]
    Config(#[from] serde_yaml::Error),
}
