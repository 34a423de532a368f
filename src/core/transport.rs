//! # Transport module
//!
//! This module contains the [`Transport`] trait and the [`TransportRequest`] and [`TransportResponse`] types.
//!
//! You can implement this trait for your own types, or use one of the provided
//! features to use a transport library.

use super::{transport_response::TransportResponse, AcademyError, TransportRequest};

/// This trait is used to send requests to the Academy REST API.
///
/// You can implement this trait for your own types, or use one of the provided
/// features to use a transport library.
///
/// # Examples
/// ```
/// use academy::core::{Transport, TransportRequest, TransportResponse, AcademyError};
///
/// struct MyTransport;
///
/// #[async_trait::async_trait]
/// impl Transport for MyTransport {
///    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, AcademyError> {
///         // Send your request here
///
///         Ok(TransportResponse::default())
///    }
/// }
/// ```
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Send a request to the Academy REST API.
    ///
    /// # Errors
    /// Should return an [`AcademyError::TransportError`] if the request cannot
    /// be sent.
    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, AcademyError>;
}
