//! Request decoration middleware.
//!
//! Wraps any [`Transport`] and decorates outgoing requests with everything
//! the host expects on each call: the REST route prefix, the session nonce,
//! the bearer token and the SDK identifier. In method-override interop mode
//! it also rewrites `PUT` / `DELETE` into `POST` plus an override header, for
//! servers or intermediaries that don't forward the native verbs.

use std::{ops::Deref, sync::Arc};

use spin::RwLock;

use crate::core::{
    utils::headers::{AUTHORIZATION, METHOD_OVERRIDE, NONCE},
    AcademyError, Transport, TransportMethod, TransportRequest, TransportResponse,
};
use crate::dx::client::{SDK_ID, VERSION};

/// Transport wrapper applied to every client built by the config builder.
pub struct AcademyMiddleware<T> {
    pub(crate) transport: T,
    pub(crate) rest_root: Arc<String>,
    pub(crate) nonce: Option<Arc<String>>,
    pub(crate) auth_token: Arc<RwLock<String>>,
    pub(crate) instance_id: Arc<Option<String>>,
    pub(crate) method_override: bool,
}

impl<T> AcademyMiddleware<T> {
    fn prefixed_path(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        let rest_root = self.rest_root.trim_end_matches('/');

        if rest_root.is_empty() {
            return path.to_string();
        }
        format!("{rest_root}/{path}")
    }
}

#[async_trait::async_trait]
impl<T> Transport for AcademyMiddleware<T>
where
    T: Transport + Sync + Send,
{
    async fn send(&self, mut req: TransportRequest) -> Result<TransportResponse, AcademyError> {
        req.path = self.prefixed_path(&req.path);

        req.headers
            .insert("X-Academy-SDK".into(), format!("{SDK_ID}/{VERSION}"));

        if let Some(nonce) = &self.nonce {
            req.headers.insert(NONCE.into(), nonce.as_ref().clone());
        }

        let token = self.auth_token.read().deref().clone();
        if !token.is_empty() {
            req.headers
                .insert(AUTHORIZATION.into(), format!("Bearer {token}"));
        }

        if let Some(instance_id) = self.instance_id.as_ref() {
            req.query_parameters
                .insert("instanceid".into(), instance_id.clone());
        }

        if self.method_override
            && matches!(req.method, TransportMethod::Put | TransportMethod::Delete)
        {
            req.headers
                .insert(METHOD_OVERRIDE.into(), req.method.to_string());
            req.method = TransportMethod::Post;
        }

        self.transport.send(req).await
    }
}
