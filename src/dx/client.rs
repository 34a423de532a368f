//! Academy client module
//!
//! This module contains the [`AcademyClient`] struct.
//! It's used to send requests to the Academy REST API.
//! It's intended to be used by the [`academy`] crate.
//!
//! [`academy`]: ../index.html

use std::{
    ops::{Deref, DerefMut},
    sync::Arc,
};

use derive_builder::Builder;
use log::info;
use spin::RwLock;
use uuid::Uuid;

use crate::{
    core::AcademyError, providers::deserialization_serde::DeserializerSerde,
    transport::middleware::AcademyMiddleware,
};

#[cfg(feature = "reqwest")]
use crate::transport::TransportReqwest;

pub(crate) const SDK_ID: &str = "Academy-Rust";
pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

/// REST route prefix used when the host didn't hand over a custom one.
const DEFAULT_REST_ROOT: &str = "wp-json/academy/v2";

/// Academy client
///
/// Client for the Academy REST API behind the LMS account area.
/// The client is transport-layer-agnostic, so you can use any transport layer
/// that implements the [`Transport`] trait.
///
/// You can create clients using the [`AcademyClientBuilder`].
/// You must provide [`Credentials`] issued by the host at page load — a
/// nonce, a bearer token, or both — to identify the session.
///
/// # Examples
/// ```
/// use academy::{AcademyClientBuilder, Credentials};
///
/// // note that `with_reqwest_transport` requires `reqwest` feature
/// // to be enabled (default)
/// # fn main() -> Result<(), academy::core::AcademyError> {
/// let academy = AcademyClientBuilder::with_reqwest_transport()
///    .with_credentials(Credentials {
///         nonce: Some("a9f4b21c70"),
///         token: None,
///    })
///    .build()?;
///
/// # Ok(())
/// # }
/// ```
///
/// Using your own [`Transport`] implementation:
///
/// ```
/// use academy::{AcademyClientBuilder, Credentials};
///
/// # use academy::core::{Transport, TransportRequest, TransportResponse, AcademyError};
/// # struct MyTransport;
/// # #[async_trait::async_trait]
/// # impl Transport for MyTransport {
/// #     async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, AcademyError> {
/// #         unimplemented!()
/// #     }
/// # }
///
/// # fn main() -> Result<(), AcademyError> {
/// // note that MyTransport must implement the `Transport` trait
/// let academy = AcademyClientBuilder::with_transport(MyTransport)
///    .with_credentials(Credentials {
///         nonce: Some("a9f4b21c70"),
///         token: None,
///    })
///    .build()?;
///
/// # Ok(())
/// # }
/// ```
///
/// # Synchronization
///
/// Client is thread-safe and can be shared between threads. You don't need to
/// wrap it in `Arc` or `Mutex` because it is already wrapped in `Arc` and uses
/// interior mutability for its internal state.
///
/// # See also
/// [`Credentials`]
/// [`Transport`]
///
/// [`Transport`]: ../core/trait.Transport.html
pub type AcademyGenericClient<T, D> = AcademyClientInstance<AcademyMiddleware<T>, D>;

/// Academy client
///
/// Client for the Academy REST API with [`reqwest`] as the transport layer and
/// [`serde`] for responses deserialization.
///
/// See [`AcademyGenericClient`] for the transport-agnostic variant and
/// [`AcademyClientInstance`] for the available methods.
///
/// [`reqwest`]: https://crates.io/crates/reqwest
/// [`serde`]: https://crates.io/crates/serde
#[cfg(feature = "reqwest")]
pub type AcademyClient = AcademyGenericClient<TransportReqwest, DeserializerSerde>;

/// Academy client raw instance.
///
/// This struct contains the actual client state.
/// It shouldn't be used directly. Use [`AcademyGenericClient`] or
/// [`AcademyClient`] instead.
#[derive(Debug)]
pub struct AcademyClientInstance<T, D> {
    pub(crate) inner: Arc<AcademyClientRef<T, D>>,
}

impl<T, D> Deref for AcademyClientInstance<T, D> {
    type Target = AcademyClientRef<T, D>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T, D> DerefMut for AcademyClientInstance<T, D> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        Arc::get_mut(&mut self.inner)
            .expect("Multiple mutable references to AcademyClientInstance are not allowed")
    }
}

impl<T, D> Clone for AcademyClientInstance<T, D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, D> AcademyClientInstance<T, D> {
    /// Update currently used bearer token.
    ///
    /// # Examples
    /// ```rust
    /// use academy::{AcademyClientBuilder, Credentials};
    ///
    /// # fn main() -> Result<(), academy::core::AcademyError> {
    /// let token = "<bearer token from the host login flow>";
    /// let academy = // AcademyClient
    /// #     AcademyClientBuilder::with_reqwest_transport()
    /// #         .with_credentials(Credentials {
    /// #              nonce: Some("a9f4b21c70"),
    /// #              token: None,
    /// #          })
    /// #         .build()?;
    /// academy.set_token(token);
    /// // Requests are now authenticated with `token`.
    /// #     Ok(())
    /// # }
    /// ```
    pub fn set_token<S>(&self, access_token: S)
    where
        S: Into<String>,
    {
        let mut token = self.auth_token.write();
        *token = access_token.into();
    }

    /// Retrieve currently used bearer token.
    ///
    /// Returns `None` until a token has been provided via [`Credentials`] or
    /// [`AcademyClientInstance::set_token`].
    pub fn get_token(&self) -> Option<String> {
        let token = self.auth_token.read().deref().clone();
        (!token.is_empty()).then_some(token)
    }
}

/// Client reference
///
/// This struct contains the actual client state.
/// It's wrapped in `Arc` by [`AcademyClientInstance`] and uses interior
/// mutability for its internal state.
///
/// Not intended to be used directly. Use [`AcademyClient`] instead.
#[derive(Builder, Debug)]
#[builder(
    pattern = "owned",
    name = "AcademyClientConfigBuilder",
    build_fn(private, name = "build_internal"),
    setter(prefix = "with")
)]
pub struct AcademyClientRef<T, D> {
    /// Transport layer
    pub(crate) transport: T,

    /// API responses deserializer
    pub(crate) deserializer: Arc<D>,

    /// Instance ID
    #[builder(
        setter(custom),
        field(type = "String", build = "Arc::new(Some(Uuid::new_v4().to_string()))")
    )]
    pub(crate) instance_id: Arc<Option<String>>,

    /// Configuration
    pub(crate) config: AcademyConfig,

    /// Bearer token
    #[builder(
        setter(custom),
        field(vis = "pub(crate)"),
        default = "Arc::new(spin::RwLock::new(String::new()))"
    )]
    pub(crate) auth_token: Arc<RwLock<String>>,
}

impl<T, D> AcademyClientConfigBuilder<T, D> {
    /// REST route prefix all operation paths are resolved against.
    ///
    /// Override it when the host exposes the API under a relocated or
    /// versioned route.
    ///
    /// It returns [`AcademyClientConfigBuilder`] that you can use to set the
    /// configuration for the client. This is a part of the
    /// [`AcademyClientConfigBuilder`].
    pub fn with_rest_root<S>(mut self, rest_root: S) -> Self
    where
        S: Into<String>,
    {
        if let Some(config) = self.config.as_mut() {
            config.rest_root = rest_root.into().trim_matches('/').to_string();
        }

        self
    }

    /// Simulate `PUT` / `DELETE` with `POST` plus an override header.
    ///
    /// Enable this only when the server or an intermediary refuses the native
    /// verbs; the wire shape then matches the legacy front end.
    ///
    /// It returns [`AcademyClientConfigBuilder`] that you can use to set the
    /// configuration for the client. This is a part of the
    /// [`AcademyClientConfigBuilder`].
    pub fn with_method_override(mut self, enabled: bool) -> Self {
        if let Some(config) = self.config.as_mut() {
            config.method_override = enabled;
        }

        self
    }

    /// Build an [`AcademyClient`] from the builder
    pub fn build(self) -> Result<AcademyClientInstance<AcademyMiddleware<T>, D>, AcademyError> {
        self.build_internal()
            .map_err(|err| AcademyError::ClientInitializationError(err.to_string()))
            .map(|pre_build| {
                info!(
                    "Client Configuration: \n rest_root: {}\n nonce: {}\n method_override: {}",
                    pre_build.config.rest_root,
                    pre_build.config.nonce.is_some(),
                    pre_build.config.method_override
                );

                AcademyClientRef {
                    transport: AcademyMiddleware {
                        transport: pre_build.transport,
                        rest_root: Arc::new(pre_build.config.rest_root.clone()),
                        nonce: pre_build.config.nonce.clone(),
                        auth_token: pre_build.auth_token.clone(),
                        instance_id: pre_build.instance_id.clone(),
                        method_override: pre_build.config.method_override,
                    },
                    deserializer: pre_build.deserializer,
                    instance_id: pre_build.instance_id,
                    config: pre_build.config,
                    auth_token: pre_build.auth_token,
                }
            })
            .map(|client| AcademyClientInstance {
                inner: Arc::new(client),
            })
    }
}

/// Academy configuration
///
/// Configuration for [`AcademyClient`].
/// This struct separates the configuration from the actual client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcademyConfig {
    /// REST route prefix all operation paths are resolved against.
    pub(crate) rest_root: String,

    /// Host-issued nonce attached to every request.
    pub(crate) nonce: Option<Arc<String>>,

    /// Simulate `PUT` / `DELETE` with `POST` plus an override header.
    pub(crate) method_override: bool,
}

/// Academy builder for [`AcademyClient`]
///
/// Builder for [`AcademyClient`] that is a first step to create a client.
/// The client is transport-layer-agnostic, so you can use any transport layer
/// that implements the [`Transport`] trait.
///
/// The builder provides methods to set the transport layer and returns the
/// next step of the builder with the remaining parameters.
///
/// See [`AcademyClient`] for more information.
///
/// [`Transport`]: ../core/trait.Transport.html
#[derive(Debug, Clone)]
pub struct AcademyClientBuilder<T> {
    pub(crate) transport: Option<T>,
}

impl<T> AcademyClientBuilder<T> {
    /// Set the transport layer for the client.
    ///
    /// Returns [`AcademyClientBuilder`] where the [`Credentials`] and the
    /// remaining configuration can be set.
    ///
    /// # Examples
    /// ```
    /// # use academy::core::{Transport, TransportRequest, TransportResponse, AcademyError};
    /// use academy::{AcademyClientBuilder, Credentials};
    /// #
    /// # struct MyTransport;
    /// # #[async_trait::async_trait]
    /// # impl Transport for MyTransport {
    /// #     async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, AcademyError> {
    /// #         unimplemented!()
    /// #     }
    /// # }
    ///
    /// # fn main() -> Result<(), AcademyError> {
    /// let academy = AcademyClientBuilder::with_transport(MyTransport)
    ///    .with_credentials(Credentials {
    ///         nonce: Some("a9f4b21c70"),
    ///         token: None,
    ///    })
    ///    .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_transport(transport: T) -> AcademyClientBuilder<T> {
        AcademyClientBuilder {
            transport: Some(transport),
        }
    }

    /// Session credentials issued by the host.
    ///
    /// Returns [`AcademyClientConfigBuilder`] that you can use to set the
    /// remaining configuration for the client.
    pub fn with_credentials<S>(
        self,
        credentials: Credentials<S>,
    ) -> AcademyClientConfigBuilder<T, DeserializerSerde>
    where
        S: Into<String>,
    {
        let initial_token = credentials.token.map(Into::into).unwrap_or_default();

        AcademyClientConfigBuilder {
            transport: self.transport,
            deserializer: Some(Arc::new(DeserializerSerde)),
            config: Some(AcademyConfig {
                rest_root: DEFAULT_REST_ROOT.into(),
                nonce: credentials.nonce.map(|nonce| Arc::new(nonce.into())),
                method_override: false,
            }),
            auth_token: Some(Arc::new(RwLock::new(initial_token))),
            ..Default::default()
        }
    }
}

/// Session credentials for the Academy REST API.
///
/// The host injects these at page load: a nonce proving the request belongs
/// to the current authenticated session, and/or a bearer token for
/// cookie-less consumers. Either may be absent, but a client without both can
/// only reach public routes.
///
/// # Examples
/// ```
/// use academy::Credentials;
///
/// Credentials {
///     nonce: Some("a9f4b21c70"),
///     token: None,
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Credentials<S>
where
    S: Into<String>,
{
    /// Host-issued nonce.
    pub nonce: Option<S>,

    /// Bearer token.
    pub token: Option<S>,
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::core::{Transport, TransportRequest, TransportResponse};

    #[derive(Default, Debug)]
    struct MockTransport;

    #[async_trait::async_trait]
    impl Transport for MockTransport {
        async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, AcademyError> {
            Ok(TransportResponse::default())
        }
    }

    fn client() -> AcademyGenericClient<MockTransport, DeserializerSerde> {
        AcademyClientBuilder::with_transport(MockTransport)
            .with_credentials(Credentials {
                nonce: Some("nonce"),
                token: None,
            })
            .build()
            .unwrap()
    }

    #[test]
    fn build_client_with_defaults() {
        let client = client();

        assert_eq!(client.config.rest_root, DEFAULT_REST_ROOT);
        assert!(!client.config.method_override);
        assert_eq!(client.config.nonce.as_deref().map(String::as_str), Some("nonce"));
    }

    #[test]
    fn override_rest_root_and_interop_flag() {
        let client = AcademyClientBuilder::with_transport(MockTransport)
            .with_credentials(Credentials::<&str> {
                nonce: None,
                token: None,
            })
            .with_rest_root("/wp-json/academy/v3/")
            .with_method_override(true)
            .build()
            .unwrap();

        assert_eq!(client.config.rest_root, "wp-json/academy/v3");
        assert!(client.config.method_override);
    }

    #[test]
    fn expose_initial_token() {
        let client = AcademyClientBuilder::with_transport(MockTransport)
            .with_credentials(Credentials {
                nonce: None,
                token: Some("abc"),
            })
            .build()
            .unwrap();

        assert_eq!(client.get_token(), Some("abc".into()));
    }

    #[test]
    fn update_token_at_runtime() {
        let client = client();

        assert_eq!(client.get_token(), None);

        client.set_token("fresh-token");

        assert_eq!(client.get_token(), Some("fresh-token".into()));
    }
}
