//! Account module.
//!
//! Typed access to the current user's account: profile read and update, and
//! password management.
//!
//! Profile updates go through the collection root with a bare `POST` — the
//! service treats a `POST` against `account` as "update the current user" —
//! and empty fields are pruned from the payload before it is sent, so an
//! unset builder option never overwrites stored data with a blank.

use std::collections::HashMap;

use derive_builder::Builder;
use serde_json::json;

use crate::{
    core::{
        utils::json::prune_empty, AcademyError, Deserializer, Transport, TransportMethod,
        TransportRequest,
    },
    dx::client::AcademyClientInstance,
};

pub(crate) const ACCOUNT_PATH: &str = "account";

/// The current user's profile.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Profile {
    /// User identifier.
    pub id: u64,

    /// Login name; immutable on the host.
    pub login: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    /// Avatar image URL.
    #[serde(default)]
    pub avatar: Option<String>,

    #[serde(default)]
    pub bio: Option<String>,

    /// Social profile URLs, keyed by network name.
    #[serde(default)]
    pub socials: HashMap<String, String>,
}

/// Result of an account action that doesn't return a record.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct AccountActionResult {
    /// Whether the service accepted the action.
    pub success: bool,

    #[serde(default)]
    pub message: Option<String>,
}

/// The [`UpdateProfileRequest`] is used by [`update_profile`] to collect the
/// fields to change before the request is issued with `execute()`.
///
/// Only the fields that were set end up in the payload.
///
/// [`update_profile`]: crate::dx::client::AcademyClientInstance::update_profile
#[derive(Builder)]
#[builder(pattern = "owned", build_fn(private))]
pub struct UpdateProfileRequest<T, D> {
    #[builder(setter(custom))]
    pub(super) client: AcademyClientInstance<T, D>,

    #[builder(setter(strip_option, into), default = "None")]
    pub(super) email: Option<String>,

    #[builder(setter(strip_option, into), default = "None")]
    pub(super) first_name: Option<String>,

    #[builder(setter(strip_option, into), default = "None")]
    pub(super) last_name: Option<String>,

    #[builder(setter(strip_option, into), default = "None")]
    pub(super) bio: Option<String>,

    /// Social profile URLs, keyed by network name.
    #[builder(setter(strip_option), default = "None")]
    pub(super) socials: Option<HashMap<String, String>>,
}

impl<T, D> UpdateProfileRequestBuilder<T, D>
where
    T: Transport,
    D: Deserializer,
{
    /// Execute the request and return the result.
    ///
    /// This method is asynchronous and will return a future that resolves to
    /// the updated [`Profile`] or [`AcademyError`].
    pub async fn execute(self) -> Result<Profile, AcademyError> {
        let request = self
            .build()
            .map_err(|err| AcademyError::ClientInitializationError(err.to_string()))?;

        let mut payload = json!({
            "email": request.email,
            "first_name": request.first_name,
            "last_name": request.last_name,
            "bio": request.bio,
            "socials": request.socials,
        });
        prune_empty(&mut payload);

        request.client.resource(ACCOUNT_PATH).create(payload).await
    }
}

/// The [`ChangePasswordRequest`] carries the current and the new password;
/// issue it with `execute()`.
///
/// [`ChangePasswordRequest`]: struct.ChangePasswordRequest.html
#[derive(Builder)]
#[builder(pattern = "owned", build_fn(private))]
pub struct ChangePasswordRequest<T, D> {
    #[builder(setter(custom))]
    pub(super) client: AcademyClientInstance<T, D>,

    /// Password the user signs in with today; the service re-checks it.
    #[builder(setter(into))]
    pub(super) current_password: String,

    /// Replacement password.
    #[builder(setter(into))]
    pub(super) new_password: String,
}

impl<T, D> ChangePasswordRequestBuilder<T, D>
where
    T: Transport,
    D: Deserializer,
{
    /// Execute the request and return the result.
    ///
    /// This method is asynchronous and will return a future that resolves to
    /// an [`AccountActionResult`] or [`AcademyError`]. A wrong current
    /// password surfaces as [`AcademyError::API`] with the service's message.
    pub async fn execute(self) -> Result<AccountActionResult, AcademyError> {
        let request = self
            .build()
            .map_err(|err| AcademyError::ClientInitializationError(err.to_string()))?;

        let payload = json!({
            "current_password": request.current_password,
            "new_password": request.new_password,
        });

        request
            .client
            .resource(ACCOUNT_PATH)
            .action("password", payload)
            .await
    }
}

impl<T, D> AcademyClientInstance<T, D>
where
    T: Transport,
    D: Deserializer,
{
    /// Fetch the current user's profile.
    ///
    /// # Example
    /// ```no_run
    /// # use academy::{AcademyClientBuilder, Credentials};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let academy = AcademyClientBuilder::with_reqwest_transport()
    /// #     .with_credentials(Credentials { nonce: Some("a9f4b21c70"), token: None })
    /// #     .build()?;
    /// let me = academy.profile().await?;
    /// println!("signed in as {}", me.login);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn profile(&self) -> Result<Profile, AcademyError> {
        TransportRequest {
            path: ACCOUNT_PATH.to_string(),
            method: TransportMethod::Get,
            ..Default::default()
        }
        .send(&self.transport, self.deserializer.clone())
        .await
    }
}

impl<T, D> AcademyClientInstance<T, D> {
    /// Create a new profile update builder.
    ///
    /// Instance of [`UpdateProfileRequestBuilder`] is returned.
    pub fn update_profile(&self) -> UpdateProfileRequestBuilder<T, D> {
        UpdateProfileRequestBuilder {
            client: Some(self.clone()),
            ..Default::default()
        }
    }

    /// Create a new password change builder.
    ///
    /// Instance of [`ChangePasswordRequestBuilder`] is returned.
    ///
    /// # Example
    /// ```no_run
    /// # use academy::{AcademyClientBuilder, Credentials};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let academy = AcademyClientBuilder::with_reqwest_transport()
    /// #     .with_credentials(Credentials { nonce: Some("a9f4b21c70"), token: None })
    /// #     .build()?;
    /// academy
    ///     .change_password()
    ///     .current_password("old pass")
    ///     .new_password("n3w p4ss")
    ///     .execute()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn change_password(&self) -> ChangePasswordRequestBuilder<T, D> {
        ChangePasswordRequestBuilder {
            client: Some(self.clone()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::{
        core::TransportResponse, providers::deserialization_serde::DeserializerSerde,
        transport::middleware::AcademyMiddleware, AcademyClientBuilder, Credentials,
    };
    use serde_json::Value;

    const PROFILE_BODY: &str = "{\"id\":5,\"login\":\"student\",\"email\":\"s@example.com\",\"first_name\":\"Sam\",\"socials\":{\"github\":\"https://github.com/sam\"}}";

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
    async fn fetch_profile() {
        let client = client(
            |request| {
                assert_eq!(request.method, TransportMethod::Get);
                assert_eq!(request.path, ACCOUNT_PATH);
            },
            PROFILE_BODY,
        );

        let profile = client.profile().await.unwrap();

        assert_eq!(profile.login, "student");
        assert_eq!(profile.socials.get("github").unwrap(), "https://github.com/sam");
    }

    #[tokio::test]
    async fn prune_unset_fields_from_update_payload() {
        let client = client(
            |request| {
                assert_eq!(request.method, TransportMethod::Post);
                assert_eq!(request.path, ACCOUNT_PATH);
                let body: Value =
                    serde_json::from_slice(request.body.as_deref().unwrap()).unwrap();
                assert_eq!(body["first_name"], "Sam");
                // unset options must not reach the wire as nulls
                assert!(body.get("email").is_none());
                assert!(body.get("bio").is_none());
            },
            PROFILE_BODY,
        );

        let profile = client
            .update_profile()
            .first_name("Sam")
            .execute()
            .await
            .unwrap();

        assert_eq!(profile.first_name.as_deref(), Some("Sam"));
    }

    #[tokio::test]
    async fn change_password_via_account_route() {
        let client = client(
            |request| {
                assert_eq!(request.method, TransportMethod::Post);
                assert_eq!(request.path, "account/password");
                let body: Value =
                    serde_json::from_slice(request.body.as_deref().unwrap()).unwrap();
                assert_eq!(body["current_password"], "old pass");
                assert_eq!(body["new_password"], "n3w p4ss");
            },
            "{\"success\":true,\"message\":\"Password updated.\"}",
        );

        let result = client
            .change_password()
            .current_password("old pass")
            .new_password("n3w p4ss")
            .execute()
            .await
            .unwrap();

        assert!(result.success);
    }

    #[tokio::test]
    async fn surface_wrong_current_password() {
        struct RejectingTransport;

        #[async_trait::async_trait]
        impl Transport for RejectingTransport {
            async fn send(
                &self,
                _request: TransportRequest,
            ) -> Result<TransportResponse, AcademyError> {
                Ok(TransportResponse {
                    status: 400,
                    body: Some(
                        b"{\"success\":false,\"message\":\"Current password is incorrect.\"}"
                            .to_vec(),
                    ),
                    ..Default::default()
                })
            }
        }

        let client = AcademyClientBuilder::with_transport(RejectingTransport)
            .with_credentials(Credentials::<&str> {
                nonce: None,
                token: None,
            })
            .build()
            .unwrap();

        let result = client
            .change_password()
            .current_password("wrong")
            .new_password("n3w p4ss")
            .execute()
            .await;

        match result.unwrap_err() {
            AcademyError::API { message, .. } => {
                assert_eq!(message, "Current password is incorrect.")
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
