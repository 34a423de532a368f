//! Headers module
//!
//! This module provides constants for HTTP headers.
//!

pub(crate) const CONTENT_TYPE: &str = "Content-Type";
pub(crate) const APPLICATION_JSON: &str = "application/json";

/// Nonce issued by the host CMS at page load; proves the request originates
/// from an authenticated session.
pub(crate) const NONCE: &str = "X-WP-Nonce";
pub(crate) const AUTHORIZATION: &str = "Authorization";

/// Signals the real verb of a `POST` request in method-override interop mode.
pub(crate) const METHOD_OVERRIDE: &str = "X-HTTP-Method-Override";
