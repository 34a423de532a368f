//! Deserialization of Rust data structures.
//!
//! This module contains the `Deserializer` trait which is used to implement
//! deserialization of API response bodies.

use super::AcademyError;

/// Trait for deserializing API response bodies.
///
/// This trait is used by the [`dx`] modules to deserialize the data returned
/// by the Academy REST API.
///
/// To implement this trait, you must provide a `deserialize` method that
/// takes a `&[u8]` and returns a `Result<T, AcademyError>`.
///
/// # Examples
/// ```
/// use academy::core::{Deserializer, AcademyError};
///
/// struct MyDeserializer;
///
/// impl Deserializer for MyDeserializer {
///    fn deserialize<T>(&self, bytes: &[u8]) -> Result<T, AcademyError>
///    where
///        T: for<'de> serde::Deserialize<'de>,
///    {
///         // ...
///         # unimplemented!()
///    }
/// }
/// ```
///
/// [`dx`]: ../dx/index.html
pub trait Deserializer: Send + Sync {
    /// Deserialize a `&[u8]` into a `Result<T, AcademyError>`.
    fn deserialize<T>(&self, bytes: &[u8]) -> Result<T, AcademyError>
    where
        T: for<'de> serde::Deserialize<'de>;
}
