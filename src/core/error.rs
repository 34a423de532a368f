//! # Error types
//!
//! This module contains the error types for the [`academy`] crate.
//!
//! [`academy`]: ../index.html

/// Academy error type
///
/// This type is used to represent errors that can occur while talking to the
/// Academy REST API. It is used as the error type for the [`Result`] type.
///
/// # Examples
/// ```
/// use academy::core::AcademyError;
///
/// fn foo() -> Result<(), AcademyError> {
///   Ok(())
/// }
///
/// foo().map_err(|e| match e {
///   AcademyError::TransportError(_) => println!("Transport error"),
///   AcademyError::API { .. } => println!("Service rejected the request"),
///   _ => println!("Other error"),
/// });
/// ```
///
/// [`Result`]: https://doc.rust-lang.org/std/result/enum.Result.html
#[derive(thiserror::Error, Debug)]
pub enum AcademyError {
    /// this error is returned when the transport layer fails
    #[error("Transport error: {0}")]
    TransportError(String),

    /// this error is returned when the serialization of the request fails
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// this error is returned when the deserialization of the response fails
    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    /// this error is returned when the initialization of the client fails
    #[error("Client initialization error: {0}")]
    ClientInitializationError(String),

    /// this error is returned when the service answered with an error response
    #[error("API error: {message} (status {status})")]
    API {
        /// HTTP status code of the failed request.
        status: u16,

        /// Machine-readable error code reported by the service, when present.
        code: Option<String>,

        /// Human-readable message explaining what went wrong.
        message: String,
    },
}

impl AcademyError {
    /// Create an [`AcademyError::API`] from a status code and a raw body for
    /// responses that don't carry a structured error payload.
    pub(crate) fn general_api_error<S>(status: u16, message: S) -> Self
    where
        S: Into<String>,
    {
        AcademyError::API {
            status,
            code: None,
            message: message.into(),
        }
    }
}
