//! # Error response
//!
//! The module contains a result type that represents parsed service error
//! responses for [`AcademyError`] consumption.

use crate::core::AcademyError;

/// Additional error information struct.
///
/// This structure is used by [`ErrorResponseBody::AsObjectWithCode`] to carry
/// the HTTP status the service attached to the error payload.
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ErrorData {
    /// Operation status (HTTP) code reported inside the payload.
    pub status: Option<u16>,
}

/// Academy service error response.
///
/// `ErrorResponseBody` enum variants cover the error response shapes the host
/// REST API is known to produce.
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ErrorResponseBody {
    /// Error response produced by the REST dispatcher.
    ///
    /// # Example
    /// ```json
    /// {
    ///     "code": "rest_forbidden",
    ///     "message": "Sorry, you are not allowed to do that.",
    ///     "data": { "status": 403 }
    /// }
    /// ```
    AsObjectWithCode {
        /// Machine-readable error code.
        code: String,

        /// A message explaining what went wrong.
        message: String,

        /// Additional information about the error.
        data: Option<ErrorData>,
    },

    /// Error response produced by the plugin's own handlers.
    ///
    /// # Example
    /// ```json
    /// { "success": false, "message": "Current password is incorrect." }
    /// ```
    AsObjectWithSuccessFlag {
        /// There is a flag that tells if this is an error response.
        success: bool,

        /// A message explaining what went wrong.
        message: String,
    },

    /// Error response carrying nothing but a message.
    ///
    /// # Example
    /// ```json
    /// { "message": "Not found." }
    /// ```
    AsObjectWithMessage {
        /// A message explaining what went wrong.
        message: String,
    },
}

impl ErrorResponseBody {
    /// Convert a parsed error body into an [`AcademyError::API`].
    ///
    /// `response_status` is the HTTP status of the response and is used when
    /// the payload itself doesn't carry one.
    pub(crate) fn into_error(self, response_status: u16) -> AcademyError {
        match self {
            Self::AsObjectWithCode {
                code,
                message,
                data,
            } => AcademyError::API {
                status: data.and_then(|data| data.status).unwrap_or(response_status),
                code: Some(code),
                message,
            },
            Self::AsObjectWithSuccessFlag { message, .. }
            | Self::AsObjectWithMessage { message } => AcademyError::API {
                status: response_status,
                code: None,
                message,
            },
        }
    }
}
