//! Gateway error types.
//!
//! [`GatewayError`] covers the HTTP surface and maps each variant to a
//! status code and structured JSON body. [`StreamError`] covers the
//! streaming session lifecycle: accepting, delivering to and addressing
//! registered connections.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::ConnectionId;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "route not found: /api/unknown",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side HTTP error enum with status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status               |
/// |-----------|-----------------|---------------------------|
/// | 2000–2999 | Not Found       | 404 Not Found             |
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// No route matches the requested path.
    #[error("route not found: {0}")]
    RouteNotFound(String),
}

impl GatewayError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::RouteNotFound(_) => 2001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::RouteNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

/// Failures in the streaming connection lifecycle.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// The protocol-level handshake did not complete. Fatal to that
    /// session only.
    #[error("websocket handshake failed: {0}")]
    AcceptFailure(String),

    /// The transport rejected a write, usually because the peer is gone.
    #[error("delivery to connection {id} failed: {source}")]
    Delivery {
        /// Connection the write was addressed to.
        id: ConnectionId,
        /// Underlying transport error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The addressed connection is not (or no longer) registered.
    #[error("connection {0} is not registered")]
    NotRegistered(ConnectionId),
}

impl StreamError {
    /// Returns the connection this error is about, if any.
    #[must_use]
    pub const fn connection_id(&self) -> Option<ConnectionId> {
        match self {
            Self::AcceptFailure(_) => None,
            Self::Delivery { id, .. } | Self::NotRegistered(id) => Some(*id),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn route_not_found_maps_to_404() {
        let err = GatewayError::RouteNotFound("/nope".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), 2001);
        assert_eq!(err.to_string(), "route not found: /nope");
    }

    #[test]
    fn into_response_carries_status() {
        let response = GatewayError::RouteNotFound("/x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn stream_error_reports_connection() {
        let id = ConnectionId::new();
        let err = StreamError::NotRegistered(id);
        assert_eq!(err.connection_id(), Some(id));

        let delivery = StreamError::Delivery {
            id,
            source: Box::new(std::io::Error::from(std::io::ErrorKind::BrokenPipe)),
        };
        assert_eq!(delivery.connection_id(), Some(id));
        assert!(delivery.to_string().contains(&id.to_string()));

        assert_eq!(
            StreamError::AcceptFailure("bad key".to_string()).connection_id(),
            None
        );
    }
}
