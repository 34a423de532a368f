//! Serde implementation for the Academy [`Deserializer`] trait.
//!
//! This module provides a `serde` deserializer for API response bodies.
//!
//! [`Deserializer`]: ../../core/trait.Deserializer.html

use crate::core::{AcademyError, Deserializer};

/// Serde implementation for the Academy [`Deserializer`] trait.
///
/// This struct implements the [`Deserializer`] trait for the [`serde`] crate.
/// It is used by the [`dx`] modules to deserialize the data returned by the
/// Academy REST API.
///
/// [`Deserializer`]: ../../core/trait.Deserializer.html
/// [`serde`]: https://crates.io/crates/serde
/// [`dx`]: ../../dx/index.html
#[derive(Debug, Clone)]
pub struct DeserializerSerde;

impl Deserializer for DeserializerSerde {
    fn deserialize<T>(&self, bytes: &[u8]) -> Result<T, AcademyError>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        serde_json::from_slice(bytes).map_err(|e| AcademyError::DeserializationError(e.to_string()))
    }
}
