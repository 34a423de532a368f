//! # Transport Providers Module
//!
//! This module contains the Transport Providers that can be used by
//! [`AcademyClient`], and the middleware every built client wraps its
//! transport in.
//!
//! [`AcademyClient`]: ../dx/client/struct.AcademyClient.html

#[cfg(feature = "reqwest")]
pub use self::reqwest::TransportReqwest;
#[cfg(feature = "reqwest")]
pub mod reqwest;

pub mod middleware;
