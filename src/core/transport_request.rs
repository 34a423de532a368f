//! # Transport Request
//!
//! This module contains the `TransportRequest` struct and related types. It is
//! intended to be used by the [`academy`] crate.
//!
//! [`academy`]: ../index.html

use std::{collections::HashMap, fmt::Display, sync::Arc};

use crate::core::{
    error_response::ErrorResponseBody, AcademyError, Deserializer, Transport, TransportResponse,
};

/// The method to use for a request.
///
/// This enum represents the method to use for a request. It is used by the
/// [`TransportRequest`] struct.
///
/// The full verb set is carried here; environments that cannot forward
/// `PUT` / `DELETE` can enable the method-override interop mode on the client
/// configuration, which rewrites them to `POST` before they reach the
/// transport.
///
/// [`TransportRequest`]: struct.TransportRequest.html
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub enum TransportMethod {
    /// Read a resource or a collection.
    #[default]
    Get,

    /// Create a resource (also used for domain actions).
    Post,

    /// Replace or update a resource.
    Put,

    /// Remove a resource.
    Delete,
}

impl Display for TransportMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TransportMethod::Get => "GET",
                TransportMethod::Post => "POST",
                TransportMethod::Put => "PUT",
                TransportMethod::Delete => "DELETE",
            }
        )
    }
}

/// This struct represents a request to be sent to the Academy REST API.
///
/// This struct represents a request to be sent to the Academy REST API. It is
/// used by the [`Transport`] trait.
///
/// All fields are representing certain parts of the request that can be used
/// to prepare one.
///
/// [`Transport`]: ../transport/trait.Transport.html
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct TransportRequest {
    /// path to the resource
    pub path: String,

    /// query parameters to be sent with the request
    pub query_parameters: HashMap<String, String>,

    /// method to use for the request
    pub method: TransportMethod,

    /// headers to be sent with the request
    pub headers: HashMap<String, String>,

    /// body to be sent with the request
    pub body: Option<Vec<u8>>,
}

impl TransportRequest {
    /// Send the request through `transport` and decode the response body into
    /// `B` with `deserializer`.
    ///
    /// Non-2xx responses are turned into [`AcademyError::API`], using the
    /// structured error payload when the service provided one.
    pub(crate) async fn send<B, T, D>(
        self,
        transport: &T,
        deserializer: Arc<D>,
    ) -> Result<B, AcademyError>
    where
        B: for<'de> serde::Deserialize<'de>,
        T: Transport + ?Sized,
        D: Deserializer + ?Sized,
    {
        transport
            .send(self)
            .await
            .and_then(|response| response_to_result(&response, deserializer.as_ref()))
    }
}

/// Decode a transport response into a typed value or an API error.
pub(crate) fn response_to_result<B, D>(
    response: &TransportResponse,
    deserializer: &D,
) -> Result<B, AcademyError>
where
    B: for<'de> serde::Deserialize<'de>,
    D: Deserializer + ?Sized,
{
    let body = response.body.as_deref().unwrap_or_default();

    if (200..300).contains(&response.status) {
        return deserializer.deserialize(body);
    }

    Err(deserializer
        .deserialize::<ErrorResponseBody>(body)
        .map(|parsed| parsed.into_error(response.status))
        .unwrap_or_else(|_| {
            AcademyError::general_api_error(
                response.status,
                String::from_utf8_lossy(body).into_owned(),
            )
        }))
}
