//! # Providers module
//!
//! This module contains the Providers that can be used by [`AcademyClient`].
//! It is intended to be used by the [`academy`] crate.
//!
//! [`AcademyClient`]: ../dx/client/struct.AcademyClient.html
//! [`academy`]: ../index.html

pub mod serialization_serde;

pub mod deserialization_serde;
