//! # Academy Core
//!
//! Core functionality of the Academy client.
//!
//! The `core` module contains the transport abstraction, the error types and
//! the shared helpers used by the operation modules. It is intended to be
//! used by the [`academy`] crate.
//!
//! [`academy`]: ../index.html

pub use error::AcademyError;
pub mod error;

pub use error_response::ErrorResponseBody;
pub mod error_response;

pub use transport::Transport;
pub mod transport;

pub use transport_request::{TransportMethod, TransportRequest};
pub mod transport_request;

pub use transport_response::TransportResponse;
pub mod transport_response;

pub use serialize::Serialize;
pub mod serialize;

pub use deserializer::Deserializer;
pub mod deserializer;

pub mod utils;
