//! Resource module.
//!
//! Generic CRUD access to a remote collection of the Academy REST API.
//!
//! A [`Resource`] maps a base path like `courses` or `orders` onto the
//! standard list / get / create / update / delete operations plus the
//! soft-delete restore action, each translated into exactly one HTTP call.
//! The typed operation modules are thin wrappers over this type.

use std::{collections::HashMap, fmt::Display};

use crate::{
    core::{
        utils::{
            encoding::url_encode,
            headers::{APPLICATION_JSON, CONTENT_TYPE},
        },
        AcademyError, Deserializer, Serialize, Transport, TransportMethod, TransportRequest,
    },
    dx::client::AcademyClientInstance,
};

/// Generic client for one remote collection.
///
/// Holds the collection's base path and a handle to the client it was created
/// from; the base path is immutable for the lifetime of the value. Responses
/// are deserialized into whatever type the caller requests — the typed
/// operation modules pin these down per resource.
///
/// # Examples
/// ```no_run
/// # use academy::{AcademyClientBuilder, Credentials};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let academy = AcademyClientBuilder::with_reqwest_transport()
/// #     .with_credentials(Credentials { nonce: Some("a9f4b21c70"), token: None })
/// #     .build()?;
/// let courses = academy.resource("courses");
/// let all: serde_json::Value = courses.list(Default::default()).await?;
/// let one: serde_json::Value = courses.get(42).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Resource<T, D> {
    pub(crate) client: AcademyClientInstance<T, D>,
    pub(crate) base_path: String,
}

impl<T, D> AcademyClientInstance<T, D> {
    /// Creates a resource client for the collection at `base_path`.
    ///
    /// # Arguments
    ///
    /// * `base_path` - The collection's route relative to the REST root, e.g.
    ///   `"courses"`.
    ///
    /// # Returns
    ///
    /// Returns a [`Resource`] bound to this client.
    pub fn resource<S>(&self, base_path: S) -> Resource<T, D>
    where
        S: Into<String>,
    {
        Resource {
            client: self.clone(),
            base_path: base_path.into().trim_matches('/').to_string(),
        }
    }
}

impl<T, D> Resource<T, D>
where
    T: Transport,
    D: Deserializer,
{
    /// Read the collection.
    ///
    /// `query` is appended as a query string when non-empty.
    pub async fn list<O>(&self, query: HashMap<String, String>) -> Result<O, AcademyError>
    where
        O: for<'de> serde::Deserialize<'de>,
    {
        TransportRequest {
            path: self.base_path.clone(),
            query_parameters: query,
            method: TransportMethod::Get,
            ..Default::default()
        }
        .send(&self.client.transport, self.client.deserializer.clone())
        .await
    }

    /// Read one entity.
    ///
    /// The identifier is required: reading the bare collection path is
    /// [`Resource::list`], not a `get` without an id.
    pub async fn get<O, I>(&self, id: I) -> Result<O, AcademyError>
    where
        O: for<'de> serde::Deserialize<'de>,
        I: Display,
    {
        TransportRequest {
            path: self.entity_path(id),
            method: TransportMethod::Get,
            ..Default::default()
        }
        .send(&self.client.transport, self.client.deserializer.clone())
        .await
    }

    /// Create an entity (or update one by convention, where the route treats
    /// a bare `POST` that way).
    pub async fn create<B, O>(&self, body: B) -> Result<O, AcademyError>
    where
        B: Serialize,
        O: for<'de> serde::Deserialize<'de>,
    {
        TransportRequest {
            path: self.base_path.clone(),
            method: TransportMethod::Post,
            headers: [(CONTENT_TYPE.into(), APPLICATION_JSON.into())].into(),
            body: Some(body.serialize()?),
            ..Default::default()
        }
        .send(&self.client.transport, self.client.deserializer.clone())
        .await
    }

    /// Update one entity.
    ///
    /// Issues a native `PUT`; in method-override interop mode the middleware
    /// rewrites it to `POST` plus an override header before it reaches the
    /// transport.
    pub async fn update<B, O, I>(&self, id: I, body: B) -> Result<O, AcademyError>
    where
        B: Serialize,
        O: for<'de> serde::Deserialize<'de>,
        I: Display,
    {
        TransportRequest {
            path: self.entity_path(id),
            method: TransportMethod::Put,
            headers: [(CONTENT_TYPE.into(), APPLICATION_JSON.into())].into(),
            body: Some(body.serialize()?),
            ..Default::default()
        }
        .send(&self.client.transport, self.client.deserializer.clone())
        .await
    }

    /// Remove one entity.
    ///
    /// The identifier is always a path segment and `query` — when non-empty —
    /// is always appended as a query string, regardless of interop mode.
    pub async fn delete<O, I>(
        &self,
        id: I,
        query: HashMap<String, String>,
    ) -> Result<O, AcademyError>
    where
        O: for<'de> serde::Deserialize<'de>,
        I: Display,
    {
        TransportRequest {
            path: self.entity_path(id),
            query_parameters: query,
            method: TransportMethod::Delete,
            ..Default::default()
        }
        .send(&self.client.transport, self.client.deserializer.clone())
        .await
    }

    /// Invoke a domain action on the collection (`POST {base}/{action}`).
    ///
    /// Used for the routes that aren't CRUD verbs, like quiz session
    /// management or password changes.
    pub async fn action<B, O>(&self, action: &str, body: B) -> Result<O, AcademyError>
    where
        B: Serialize,
        O: for<'de> serde::Deserialize<'de>,
    {
        TransportRequest {
            path: format!("{}/{}", self.base_path, action),
            method: TransportMethod::Post,
            headers: [(CONTENT_TYPE.into(), APPLICATION_JSON.into())].into(),
            body: Some(body.serialize()?),
            ..Default::default()
        }
        .send(&self.client.transport, self.client.deserializer.clone())
        .await
    }

    /// Reverse a prior soft-delete.
    pub async fn restore<O, I>(&self, id: I) -> Result<O, AcademyError>
    where
        O: for<'de> serde::Deserialize<'de>,
        I: Display,
    {
        TransportRequest {
            path: format!("{}/restore", self.entity_path(id)),
            method: TransportMethod::Post,
            ..Default::default()
        }
        .send(&self.client.transport, self.client.deserializer.clone())
        .await
    }

    fn entity_path<I>(&self, id: I) -> String
    where
        I: Display,
    {
        format!(
            "{}/{}",
            self.base_path,
            url_encode(id.to_string().as_bytes())
        )
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::{
        core::TransportResponse, providers::deserialization_serde::DeserializerSerde,
        transport::middleware::AcademyMiddleware, AcademyClientBuilder, Credentials,
    };
    use serde_json::{json, Value};

    struct MockTransport {
        check: fn(&TransportRequest),
        response_body: &'static str,
    }

    #[async_trait::async_trait]
    impl Transport for MockTransport {
        async fn send(&self, request: TransportRequest) -> Result<TransportResponse, AcademyError> {
            (self.check)(&request);
            Ok(TransportResponse {
                status: 200,
                body: Some(self.response_body.as_bytes().to_vec()),
                ..Default::default()
            })
        }
    }

    fn client(
        check: fn(&TransportRequest),
        response_body: &'static str,
    ) -> AcademyClientInstance<AcademyMiddleware<MockTransport>, DeserializerSerde> {
        AcademyClientBuilder::with_transport(MockTransport {
            check,
            response_body,
        })
        .with_credentials(Credentials::<&str> {
            nonce: None,
            token: None,
        })
        .with_rest_root("")
        .build()
        .unwrap()
    }

    #[tokio::test]
    async fn list_collection_with_query() {
        let client = client(
            |request| {
                assert_eq!(request.method, TransportMethod::Get);
                assert_eq!(request.path, "courses");
                assert_eq!(request.query_parameters.get("page").unwrap(), "2");
            },
            "[]",
        );

        let result: Vec<Value> = client
            .resource("courses")
            .list(HashMap::from([("page".to_string(), "2".to_string())]))
            .await
            .unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn get_entity_by_id() {
        let client = client(
            |request| {
                assert_eq!(request.method, TransportMethod::Get);
                assert_eq!(request.path, "courses/42");
            },
            "{\"id\":42}",
        );

        let result: Value = client.resource("courses").get(42).await.unwrap();

        assert_eq!(result["id"], 42);
    }

    #[tokio::test]
    async fn create_entity_with_json_body() {
        let client = client(
            |request| {
                assert_eq!(request.method, TransportMethod::Post);
                assert_eq!(request.path, "courses");
                assert_eq!(
                    request.headers.get(CONTENT_TYPE).unwrap(),
                    APPLICATION_JSON
                );
                let body: Value =
                    serde_json::from_slice(request.body.as_deref().unwrap()).unwrap();
                assert_eq!(body["name"], "x");
            },
            "{\"id\":1,\"name\":\"x\"}",
        );

        let result: Value = client
            .resource("courses")
            .create(json!({"name": "x"}))
            .await
            .unwrap();

        assert_eq!(result["id"], 1);
    }

    #[tokio::test]
    async fn update_entity_with_native_put() {
        let client = client(
            |request| {
                assert_eq!(request.method, TransportMethod::Put);
                assert_eq!(request.path, "courses/42");
            },
            "{\"id\":42,\"name\":\"x\"}",
        );

        let result: Value = client
            .resource("courses")
            .update(42, json!({"name": "x"}))
            .await
            .unwrap();

        assert_eq!(result["name"], "x");
    }

    #[tokio::test]
    async fn delete_entity_with_id_and_query() {
        let client = client(
            |request| {
                assert_eq!(request.method, TransportMethod::Delete);
                assert_eq!(request.path, "courses/42");
                assert_eq!(request.query_parameters.get("force").unwrap(), "true");
            },
            "{\"deleted\":true}",
        );

        let result: Value = client
            .resource("courses")
            .delete(42, HashMap::from([("force".to_string(), "true".to_string())]))
            .await
            .unwrap();

        assert_eq!(result["deleted"], true);
    }

    #[tokio::test]
    async fn invoke_domain_action() {
        let client = client(
            |request| {
                assert_eq!(request.method, TransportMethod::Post);
                assert_eq!(request.path, "quizzes/start_quiz");
                let body: Value =
                    serde_json::from_slice(request.body.as_deref().unwrap()).unwrap();
                assert_eq!(body["id"], 7);
            },
            "{\"session_id\":\"s-1\"}",
        );

        let result: Value = client
            .resource("quizzes")
            .action("start_quiz", json!({"id": 7}))
            .await
            .unwrap();

        assert_eq!(result["session_id"], "s-1");
    }

    #[tokio::test]
    async fn restore_entity() {
        let client = client(
            |request| {
                assert_eq!(request.method, TransportMethod::Post);
                assert_eq!(request.path, "courses/42/restore");
            },
            "{\"id\":42}",
        );

        let result: Value = client.resource("courses").restore(42).await.unwrap();

        assert_eq!(result["id"], 42);
    }

    #[tokio::test]
    async fn encode_identifier_segments() {
        let client = client(
            |request| {
                assert_eq!(request.path, "courses/rust%20101");
            },
            "{}",
        );

        let _: Value = client.resource("courses").get("rust 101").await.unwrap();
    }

    #[tokio::test]
    async fn surface_api_errors_unchanged() {
        struct FailingTransport;

        #[async_trait::async_trait]
        impl Transport for FailingTransport {
            async fn send(
                &self,
                _request: TransportRequest,
            ) -> Result<TransportResponse, AcademyError> {
                Ok(TransportResponse {
                    status: 404,
                    body: Some(
                        b"{\"code\":\"not_found\",\"message\":\"No such course.\",\"data\":{\"status\":404}}"
                            .to_vec(),
                    ),
                    ..Default::default()
                })
            }
        }

        let client = AcademyClientBuilder::with_transport(FailingTransport)
            .with_credentials(Credentials::<&str> {
                nonce: None,
                token: None,
            })
            .build()
            .unwrap();

        let result: Result<Value, _> = client.resource("courses").get(42).await;

        assert!(matches!(
            result.unwrap_err(),
            AcademyError::API { status: 404, .. }
        ));
    }
}
