//! Client layer for the shortening backend
//!
//! ```text
//! TUI / CLI → store (cache + mutations) → UrlApi → HTTP backend
//! ```
//!
//! Calls are single-shot: no retry, no timeout beyond the transport
//! defaults, and errors reach the caller unchanged.

mod http;

pub use http::HttpUrlApi;

use async_trait::async_trait;

use crate::errors::Result;
use crate::structs::{ShortenRequest, ShortenResponse, UrlEntry};

/// The three backend operations the client relies on
#[async_trait]
pub trait UrlApi: Send + Sync {
    /// `GET /urls`: the whole collection, in backend order
    async fn list(&self) -> Result<Vec<UrlEntry>>;

    /// `POST /shorten`: the backend picks an alias when none is given
    async fn create(&self, request: ShortenRequest) -> Result<ShortenResponse>;

    /// `DELETE /{alias}`: whether a missing alias is an error is up to the
    /// backend
    async fn remove(&self, alias: &str) -> Result<()>;

    /// Name for logs
    fn name(&self) -> &'static str;
}
