//! # Transport Error Types
//!
//! Error types for remote cart operations.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Transport Error Categories                          │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │     Network     │  │       Response          │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidUrl     │  │  Network        │  │  Http (status + body)   │ │
//! │  │                 │  │  (conn/timeout) │  │  MalformedResponse      │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  The drawer treats every variant the same way: log and move on. The    │
//! │  categories exist so diagnostics can tell a dead network from a        │
//! │  misbehaving server.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Transport error type covering all remote-cart failures.
///
/// ## Design Principles
/// - Each variant includes enough context for debugging
/// - Non-success responses carry the server's body text when available,
///   because the remote cart resource puts its diagnostics there
/// - All errors are `Send + Sync` for async compatibility
#[derive(Debug, Error)]
pub enum TransportError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// The configured base URL (or a joined endpoint path) is invalid.
    #[error("Invalid cart URL: {0}")]
    InvalidUrl(String),

    // =========================================================================
    // Network Errors
    // =========================================================================
    /// Connection failure, timeout, or any other error below the HTTP layer.
    #[error("Cart request failed: {0}")]
    Network(String),

    // =========================================================================
    // Response Errors
    // =========================================================================
    /// The server answered with a non-success status.
    ///
    /// `body` holds the response body text when it could be read; the remote
    /// cart resource reports rejected adds (sold out, bad variant) there.
    #[error("Cart endpoint returned {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be parsed as the expected cart shape.
    ///
    /// Treated as a transport failure for propagation purposes: the caller
    /// cannot tell a garbled body from a dropped connection and should not
    /// have to.
    #[error("Malformed cart response: {0}")]
    MalformedResponse(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            TransportError::MalformedResponse(err.to_string())
        } else if err.is_builder() {
            TransportError::InvalidUrl(err.to_string())
        } else {
            TransportError::Network(err.to_string())
        }
    }
}

impl From<url::ParseError> for TransportError {
    fn from(err: url::ParseError) -> Self {
        TransportError::InvalidUrl(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl TransportError {
    /// Returns true if this error came from the network rather than the
    /// server or the configuration.
    ///
    /// There is no retry policy — a failed add or update requires the user
    /// to repeat the action — so this exists purely for diagnostics.
    pub fn is_network(&self) -> bool {
        matches!(self, TransportError::Network(_))
    }

    /// Returns true if the server answered but the answer was unusable.
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            TransportError::Http { .. } | TransportError::MalformedResponse(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_carries_body_text() {
        let err = TransportError::Http {
            status: 422,
            body: "variant 42 is sold out".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Cart endpoint returned 422: variant 42 is sold out"
        );
    }

    #[test]
    fn test_categorization() {
        assert!(TransportError::Network("reset".into()).is_network());
        assert!(!TransportError::Network("reset".into()).is_server_error());

        let http = TransportError::Http {
            status: 500,
            body: String::new(),
        };
        assert!(http.is_server_error());
        assert!(!http.is_network());

        assert!(TransportError::MalformedResponse("not json".into()).is_server_error());
    }

    #[test]
    fn test_from_url_parse_error() {
        let err: TransportError = url::ParseError::EmptyHost.into();
        assert!(matches!(err, TransportError::InvalidUrl(_)));
    }
}
