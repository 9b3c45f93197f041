//! REST client for the enrollment API.
//!
//! Four collections (`students`, `teachers`, `courses`, `enrollments`) are
//! exposed at fixed paths below a configurable base URL:
//!
//! | Operation | Request                |
//! |-----------|------------------------|
//! | list      | `GET {resource}/`      |
//! | create    | `POST {resource}/`     |
//! | update    | `PUT {resource}/{id}/` |
//! | delete    | `DELETE {resource}/{id}/` |
//!
//! Enrollments have no update. Each operation is a single request with no
//! retry, no timeout override and no caching; failures are returned as
//! [`ClientError`].
//!
//! # Example
//!
//! ```no_run
//! use enroll_client::{ApiConfig, HttpClient, ResourceApi};
//!
//! async fn count_students() -> enroll_client::Result<usize> {
//!     let client = HttpClient::new(ApiConfig::default())?;
//!     Ok(client.list_students().await?.len())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;

pub use api::ResourceApi;
pub use client::HttpClient;
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use error::{ClientError, Result};
