//! Normalized error taxonomy for the homologation API client.
//!
//! Every failure that crosses from the transport into the rest of the
//! application is collapsed into [`ApiError`], a small closed set of kinds.
//! Callers branch on the kind; end users only ever see the carried message.
//! Status codes, transport internals, and schema diagnostics never reach the
//! message text.
//!
//! The conversion from [`TransportError`] implements a priority-ordered
//! normalization:
//!
//! 1. HTTP 400 → [`ApiError::Client`], using the server-supplied message when
//!    present, else a generic invalid-data message
//! 2. any other HTTP status → [`ApiError::Server`], same message rule
//! 3. no response at all (network failure) → [`ApiError::Server`] with the
//!    generic message and no status
//! 4. anything else → [`ApiError::Unknown`] with a fixed message
//!
//! Case 3 is deliberately indistinguishable from case 2 for the end user; the
//! optional status is kept so logs can still tell them apart.

use thiserror::Error;

/// Default message for a 400 response that carries no server message.
pub const MSG_BAD_REQUEST: &str = "Error en el formato de los datos";

/// Default message for any other HTTP error or a network failure.
pub const MSG_SERVER: &str = "Error del servidor";

/// Fixed message for failures that are not HTTP errors at all.
pub const MSG_UNKNOWN: &str = "Error inesperado";

/// The normalized error every caller of the API client branches on.
///
/// The `Display` output is exactly the human-readable message; nothing else
/// is ever shown to the end user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The response arrived but its body did not match the expected schema.
    ///
    /// The message is the caller-supplied fallback; field-level diagnostics
    /// are only emitted to the debug log.
    #[error("{message}")]
    Validation { message: String },

    /// The server rejected the request with HTTP 400.
    #[error("{message}")]
    Client { status: u16, message: String },

    /// The server failed (any non-400 error status), or it was never reached.
    ///
    /// `status` is `None` when the failure happened before a response existed.
    #[error("{message}")]
    Server { status: Option<u16>, message: String },

    /// A failure that did not originate from the HTTP exchange.
    #[error("{message}")]
    Unknown { message: String },
}

impl ApiError {
    /// A validation failure carrying the caller-supplied fallback message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// The message shown to the end user.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message }
            | Self::Client { message, .. }
            | Self::Server { message, .. }
            | Self::Unknown { message } => message,
        }
    }

    /// The HTTP status this error originated from, when one exists.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Client { status, .. } => Some(*status),
            Self::Server { status, .. } => *status,
            Self::Validation { .. } | Self::Unknown { .. } => None,
        }
    }
}

/// Where a transport failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureOrigin {
    /// An HTTP response with an error status was received.
    Response(u16),
    /// The request never produced a response (connection refused, DNS
    /// failure, timeout).
    Network,
    /// The failure happened outside the HTTP exchange entirely.
    Other,
}

/// The failure shape every transport adapter must populate.
///
/// This is the single error interface between the HTTP layer and the
/// normalizer, so the normalizer never inspects unknown shapes. A failure
/// that originated from an HTTP response carries the numeric status and the
/// optional `message` field from the response body; any other failure
/// carries neither.
#[derive(Debug)]
pub struct TransportError {
    /// What produced the failure.
    pub origin: FailureOrigin,
    /// The `message` string from the response body, if the server sent one.
    pub server_message: Option<String>,
    /// The underlying failure, kept for logging only.
    pub source: anyhow::Error,
}

impl TransportError {
    /// A failure backed by an HTTP error response.
    pub fn status(status: u16, server_message: Option<String>, source: anyhow::Error) -> Self {
        Self {
            origin: FailureOrigin::Response(status),
            server_message,
            source,
        }
    }

    /// A transport-level failure with no response.
    pub fn network(source: anyhow::Error) -> Self {
        Self {
            origin: FailureOrigin::Network,
            server_message: None,
            source,
        }
    }

    /// A failure outside the HTTP exchange entirely.
    pub fn other(source: anyhow::Error) -> Self {
        Self {
            origin: FailureOrigin::Other,
            server_message: None,
            source,
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        match err.origin {
            FailureOrigin::Response(400) => ApiError::Client {
                status: 400,
                message: err
                    .server_message
                    .unwrap_or_else(|| MSG_BAD_REQUEST.to_string()),
            },
            FailureOrigin::Response(status) => ApiError::Server {
                status: Some(status),
                message: err.server_message.unwrap_or_else(|| MSG_SERVER.to_string()),
            },
            FailureOrigin::Network => ApiError::Server {
                status: None,
                message: MSG_SERVER.to_string(),
            },
            FailureOrigin::Other => ApiError::Unknown {
                message: MSG_UNKNOWN.to_string(),
            },
        }
    }
}
