//! # Academy Developer Experience
//!
//! This module provides the structures and methods for working with the
//! Academy REST API. It is intended to be used by the [`academy`] crate.
//!
//! [`academy`]: ../index.html

pub use client::{AcademyClientBuilder, AcademyConfig, AcademyGenericClient, Credentials};
pub mod client;

pub use resource::Resource;
pub mod resource;

pub mod account;
pub mod courses;
pub mod orders;
pub mod quizzes;
