//! # Academy Rust SDK
//!
//! Async client for the Academy LMS REST API — the routes behind the account
//! area of an Academy installation: course catalog and enrollments, order
//! history, profile and password management, and quiz attempts.
//!
//! The client is transport-layer-agnostic: every request goes through the
//! [`Transport`] trait, and the crate ships a [`reqwest`]-based implementation
//! behind the `reqwest` feature (enabled by default). Responses are
//! deserialized with [`serde`].
//!
//! # Getting started
//!
//! ```no_run
//! use academy::{AcademyClientBuilder, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let academy = AcademyClientBuilder::with_reqwest_transport()
//!         .with_credentials(Credentials {
//!             nonce: Some("a9f4b21c70"),
//!             token: None,
//!         })
//!         .build()?;
//!
//!     let enrolled = academy.list_courses().enrolled(true).execute().await?;
//!     for course in enrolled.posts {
//!         println!("{} ({}%)", course.title, course.progress.unwrap_or(0));
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Collections without a typed wrapper are reachable through the generic
//! [`Resource`] client:
//!
//! ```no_run
//! # use academy::{AcademyClientBuilder, Credentials};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let academy = AcademyClientBuilder::with_reqwest_transport()
//! #     .with_credentials(Credentials { nonce: Some("a9f4b21c70"), token: None })
//! #     .build()?;
//! let certificates: serde_json::Value = academy
//!     .resource("certificates")
//!     .list(Default::default())
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! * `reqwest` *(default)* — [`reqwest`]-based [`Transport`] implementation.
//!
//! [`Transport`]: crate::core::Transport
//! [`Resource`]: crate::dx::Resource
//! [`reqwest`]: https://crates.io/crates/reqwest
//! [`serde`]: https://crates.io/crates/serde

#[doc(inline)]
pub use dx::{AcademyClientBuilder, Credentials, Resource};

#[cfg(feature = "reqwest")]
#[doc(inline)]
pub use dx::client::AcademyClient;

pub mod core;
pub mod dx;
pub mod providers;
pub mod transport;
