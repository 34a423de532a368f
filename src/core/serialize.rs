//! Serialization module
//!
//! This module provides a [`Serialize`] trait for request payloads.
//!
//! You can implement this trait for your own types, or use the provided
//! implementation for types implementing [`serde::Serialize`].
//!
//! [`Serialize`]: trait.Serialize.html

use super::AcademyError;

/// Serialize values
///
/// This trait provides a [`serialize`] method used to turn request payloads
/// into bytes before they are handed to the transport.
///
/// You can implement this trait for your own types, or use the provided
/// implementation for types implementing [`serde::Serialize`].
///
/// [`serialize`]: #tymethod.serialize
///
/// # Examples
/// ```
/// use academy::core::Serialize;
///
/// struct Foo;
///
/// impl Serialize for Foo {
///    fn serialize(self) -> Result<Vec<u8>, academy::core::AcademyError> {
///         Ok(vec![1, 2, 3])
///    }
/// }
/// ```
pub trait Serialize {
    /// Serialize the value
    ///
    /// # Errors
    /// Should return an [`AcademyError::SerializationError`] if the value
    /// cannot be serialized.
    ///
    /// [`AcademyError::SerializationError`]: ../error/enum.AcademyError.html#variant.SerializationError
    fn serialize(self) -> Result<Vec<u8>, AcademyError>;
}
