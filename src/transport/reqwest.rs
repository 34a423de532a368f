//! # Reqwest Transport Implementation
//!
//! This module contains the [`TransportReqwest`] struct.
//! It is used to send requests to the Academy REST API using the [`reqwest`]
//! crate. It is intended to be used by the [`academy`] crate.
//!
//! It requires the [`reqwest` feature] to be enabled.
//!
//! [`TransportReqwest`]: ./struct.TransportReqwest.html
//! [`reqwest`]: https://docs.rs/reqwest
//! [`academy`]: ../index.html
//! [`reqwest` feature]: ../index.html#features

use bytes::Bytes;
use log::info;
use reqwest::{header::HeaderMap, StatusCode};
use std::collections::HashMap;

use crate::{
    core::{
        error::{AcademyError, AcademyError::TransportError},
        utils::encoding::format_query,
        Transport, TransportMethod, TransportRequest, TransportResponse,
    },
    AcademyClientBuilder,
};

/// This struct is used to send requests to the Academy REST API using the
/// [`reqwest`] crate. It is used as the transport type for the
/// [`AcademyClient`].
///
/// [`reqwest`]: https://docs.rs/reqwest
/// [`AcademyClient`]: ../dx/client/struct.AcademyClient.html
#[derive(Clone, Debug)]
pub struct TransportReqwest {
    reqwest_client: reqwest::Client,

    /// The site origin to use for requests.
    /// It is used as the base URL for all requests.
    ///
    /// There is no canonical Academy host — every installation lives on its
    /// own site — so this defaults to `http://localhost/` and is expected to
    /// be replaced.
    ///
    /// # Examples
    /// ```
    /// use academy::transport::TransportReqwest;
    ///
    /// let transport = {
    ///    let mut transport = TransportReqwest::default();
    ///    transport.hostname = "https://school.example.com/".into();
    ///    transport
    /// };
    /// ```
    pub hostname: String,
}

#[async_trait::async_trait]
impl Transport for TransportReqwest {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, AcademyError> {
        let request_url = prepare_url(&self.hostname, &request.path, &request.query_parameters);
        info!("{} {}", request.method, request_url);
        let headers = prepare_headers(&request.headers)?;
        let builder = match request.method {
            TransportMethod::Get => self.reqwest_client.get(request_url),
            TransportMethod::Post => self.reqwest_client.post(request_url),
            TransportMethod::Put => self.reqwest_client.put(request_url),
            TransportMethod::Delete => self.reqwest_client.delete(request_url),
        };
        let builder = match request.body {
            Some(body) => builder.body(body),
            None => builder,
        };

        let result = builder
            .headers(headers)
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = result.status();
        result
            .bytes()
            .await
            .map_err(|e| TransportError(e.to_string()))
            .and_then(|bytes| create_result(status, bytes))
    }
}

impl Default for TransportReqwest {
    fn default() -> Self {
        Self {
            reqwest_client: reqwest::Client::default(),
            hostname: "http://localhost/".into(),
        }
    }
}

impl TransportReqwest {
    /// Create a new [`TransportReqwest`] instance.
    ///
    /// It provides a default [`reqwest`] client using
    /// [`reqwest::Client::default()`] and a default hostname of
    /// `http://localhost/`.
    ///
    /// # Example
    /// ```
    /// use academy::transport::TransportReqwest;
    ///
    /// let transport = TransportReqwest::new();
    /// ```
    ///
    /// [`reqwest`]: https://docs.rs/reqwest
    pub fn new() -> Self {
        Self::default()
    }

    /// set the custom hostname for request
    pub fn set_hostname<S>(&mut self, hostname: S)
    where
        S: Into<String>,
    {
        self.hostname = hostname.into();
    }
}

fn prepare_headers(request_headers: &HashMap<String, String>) -> Result<HeaderMap, AcademyError> {
    HeaderMap::try_from(request_headers).map_err(|err| TransportError(err.to_string()))
}

fn prepare_url(hostname: &str, path: &str, query_params: &HashMap<String, String>) -> String {
    let base = format!(
        "{}/{}",
        hostname.trim_end_matches('/'),
        path.trim_start_matches('/')
    );

    if query_params.is_empty() {
        return base;
    }
    format!("{}?{}", base, format_query(query_params))
}

fn create_result(status: StatusCode, body: Bytes) -> Result<TransportResponse, AcademyError> {
    Ok(TransportResponse {
        status: status.as_u16(),
        body: (!body.is_empty()).then(|| body.to_vec()),
        ..Default::default()
    })
}

impl AcademyClientBuilder<TransportReqwest> {
    /// Creates a new [`AcademyClientBuilder`] with the default
    /// [`TransportReqwest`] transport.
    ///
    /// The default transport uses the [`reqwest`] crate to send requests to
    /// the Academy REST API. Point it at the installation with
    /// [`TransportReqwest::set_hostname`] or by constructing the transport
    /// yourself.
    ///
    /// # Examples
    /// ```
    /// use academy::{AcademyClientBuilder, Credentials};
    ///
    /// let client = AcademyClientBuilder::with_reqwest_transport()
    ///     .with_credentials(Credentials {
    ///         nonce: Some("a9f4b21c70"),
    ///         token: None,
    ///     })
    ///     .build();
    /// ```
    ///
    /// [`reqwest`]: https://docs.rs/reqwest
    pub fn with_reqwest_transport() -> AcademyClientBuilder<TransportReqwest> {
        AcademyClientBuilder {
            transport: Some(TransportReqwest::new()),
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use test_case::test_case;
    use wiremock::matchers::{body_string, header, method, path as path_macher, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test_case("/courses/rust%20101", "/courses/rust 101" ; "sending encoded segment")]
    #[test_case("/courses/42", "/courses/42" ; "sending number")]
    #[test_case("/orders", "/orders" ; "sending collection path")]
    #[tokio::test]
    async fn send_via_get_method(path_to_match: &str, path_to_send: &str) {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path_macher(path_to_match.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"id\":42}"))
            .mount(&server)
            .await;

        let transport = TransportReqwest {
            reqwest_client: reqwest::Client::default(),
            hostname: server.uri(),
        };

        let request = TransportRequest {
            path: path_to_send.into(),
            query_parameters: [("page".into(), "1".into())].into(),
            method: TransportMethod::Get,
            body: None,
            ..Default::default()
        };

        let response = transport.send(request).await.unwrap();

        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn send_via_post_method() {
        let message = "{\"name\":\"x\"}";
        let path = "/courses";

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path_macher(path))
            .and(body_string(message.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"id\":1}"))
            .mount(&server)
            .await;

        let transport = TransportReqwest {
            reqwest_client: reqwest::Client::default(),
            hostname: server.uri(),
        };

        let request = TransportRequest {
            path: path.into(),
            method: TransportMethod::Post,
            body: Some(message.as_bytes().to_vec()),
            ..Default::default()
        };

        let response = transport.send(request).await.unwrap();

        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn send_via_put_method() {
        let message = "{\"name\":\"x\"}";
        let path = "/courses/42";

        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path_macher(path))
            .and(body_string(message.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"id\":42}"))
            .mount(&server)
            .await;

        let transport = TransportReqwest {
            reqwest_client: reqwest::Client::default(),
            hostname: server.uri(),
        };

        let request = TransportRequest {
            path: path.into(),
            method: TransportMethod::Put,
            body: Some(message.as_bytes().to_vec()),
            ..Default::default()
        };

        let response = transport.send(request).await.unwrap();

        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn send_via_delete_method_with_query() {
        let path = "/courses/42";

        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path_macher(path))
            .and(query_param("force", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"deleted\":true}"))
            .mount(&server)
            .await;

        let transport = TransportReqwest {
            reqwest_client: reqwest::Client::default(),
            hostname: server.uri(),
        };

        let request = TransportRequest {
            path: path.into(),
            query_parameters: [("force".into(), "true".into())].into(),
            method: TransportMethod::Delete,
            body: None,
            ..Default::default()
        };

        let response = transport.send(request).await.unwrap();

        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn send_headers() {
        let path = "/account";
        let expected_key = "x-wp-nonce";
        let expected_val = "a9f4b21c70";

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_macher(path))
            .and(header(expected_key, expected_val))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&server)
            .await;

        let transport = TransportReqwest {
            reqwest_client: reqwest::Client::default(),
            hostname: server.uri(),
        };

        let request = TransportRequest {
            path: path.into(),
            method: TransportMethod::Get,
            headers: HashMap::from([(expected_key.into(), expected_val.into())]),
            ..Default::default()
        };

        let response = transport.send(request).await.unwrap();

        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn pass_through_error_statuses() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("{\"message\":\"nope\"}"))
            .mount(&server)
            .await;

        let transport = TransportReqwest {
            reqwest_client: reqwest::Client::default(),
            hostname: server.uri(),
        };

        let response = transport
            .send(TransportRequest {
                path: "/courses/9000".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(response.status, 404);
        assert_eq!(response.body.unwrap(), b"{\"message\":\"nope\"}".to_vec());
    }
}
