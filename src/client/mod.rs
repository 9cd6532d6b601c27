//! Client layer for the remote short-link API
//!
//! # Architecture
//!
//! ```text
//! console controllers → LinkApi ──→ HttpLinkApi (ureq, spawn_blocking)
//!                               └→ any test double
//! ```
//!
//! Every call returns the error taxonomy of [`LinkdeskError`]:
//! network failures are `RequestFailure` with a generic message, non-success
//! statuses are `ServerError` carrying the server's message when it sent one.

mod http;
pub mod wire;

pub use http::HttpLinkApi;

use async_trait::async_trait;

use crate::directory::LinkRecord;
use crate::errors::Result;

/// Shown when the directory could not be fetched and the server gave no reason
pub const FETCH_FAILED: &str = "Failed to fetch links";
/// Shown when a shorten request got an error status without a message
pub const SHORTEN_FAILED: &str = "Failed to shorten URL";
/// Shown when a shorten request never reached the server
pub const REQUEST_FAILED: &str = "An error occurred while processing your request";

#[async_trait]
pub trait LinkApi: Send + Sync {
    /// `GET /v1/links`
    async fn list_links(&self) -> Result<Vec<LinkRecord>>;

    /// `POST /v1/shortener`; returns the generated short URL
    async fn shorten(&self, url: &str) -> Result<String>;
}
