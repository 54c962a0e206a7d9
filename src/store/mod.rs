//! Data-access layer
//!
//! Binds [`UrlApi`] calls to a keyed query cache:
//! - reads go through [`Query`] and are coalesced per key
//! - writes go through [`Mutation`], each declaring the keys it invalidates

pub mod cache;
pub mod mutation;
pub mod query;

pub use cache::{Invalidate, QueryCache, QueryKey};
pub use mutation::{Mutation, MutationStatus};
pub use query::{Query, QueryState};

use std::sync::Arc;

use crate::client::UrlApi;
use crate::structs::{ShortenRequest, ShortenResponse, UrlEntry};

/// The cached URL collection
pub type UrlList = Arc<Vec<UrlEntry>>;

/// Query and mutation factory over one backend and one cache
#[derive(Clone)]
pub struct UrlStore {
    api: Arc<dyn UrlApi>,
    cache: QueryCache<UrlList>,
}

impl UrlStore {
    pub fn new(api: Arc<dyn UrlApi>) -> Self {
        Self {
            api,
            cache: QueryCache::new(),
        }
    }

    pub fn cache(&self) -> &QueryCache<UrlList> {
        &self.cache
    }

    pub fn api_name(&self) -> &'static str {
        self.api.name()
    }

    /// Every shortened URL, in backend order
    pub fn urls(&self) -> Query<UrlList> {
        let api = self.api.clone();
        Query::new(QueryKey::Urls, self.cache.clone(), move || {
            let api = api.clone();
            Box::pin(async move { api.list().await.map(Arc::new) })
        })
    }

    /// Create a short URL; invalidates [`QueryKey::Urls`] on success
    pub fn shorten_url(&self) -> Mutation<ShortenRequest, ShortenResponse> {
        let api = self.api.clone();
        Mutation::new(
            "shorten_url",
            Arc::new(self.cache.clone()),
            &[QueryKey::Urls],
            move |request: ShortenRequest| {
                let api = api.clone();
                Box::pin(async move { api.create(request).await })
            },
        )
    }

    /// Delete by alias; invalidates [`QueryKey::Urls`] on success
    pub fn delete_url(&self) -> Mutation<String, ()> {
        let api = self.api.clone();
        Mutation::new(
            "delete_url",
            Arc::new(self.cache.clone()),
            &[QueryKey::Urls],
            move |alias: String| {
                let api = api.clone();
                Box::pin(async move { api.remove(&alias).await })
            },
        )
    }
}
