//! Read handle over a cached query

use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use parking_lot::RwLock;
use tracing::warn;

use super::cache::{QueryCache, QueryKey};
use crate::errors::{LinkdeckError, Result};

type Fetcher<V> = Arc<dyn Fn() -> BoxFuture<'static, Result<V>> + Send + Sync>;

/// Observable state of a query
#[derive(Debug, Clone)]
pub struct QueryState<V> {
    pub data: Option<V>,
    pub error: Option<LinkdeckError>,
    in_flight: usize,
}

impl<V> Default for QueryState<V> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            in_flight: 0,
        }
    }
}

impl<V> QueryState<V> {
    pub fn is_fetching(&self) -> bool {
        self.in_flight > 0
    }

    /// First load: fetching with nothing to show yet
    pub fn is_loading(&self) -> bool {
        self.is_fetching() && self.data.is_none()
    }
}

/// A keyed read that goes through the shared [`QueryCache`]
pub struct Query<V> {
    key: QueryKey,
    cache: QueryCache<V>,
    fetcher: Fetcher<V>,
    state: Arc<RwLock<QueryState<V>>>,
}

impl<V> Clone for Query<V> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            cache: self.cache.clone(),
            fetcher: self.fetcher.clone(),
            state: self.state.clone(),
        }
    }
}

impl<V> Query<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new<F>(key: QueryKey, cache: QueryCache<V>, fetcher: F) -> Self
    where
        F: Fn() -> BoxFuture<'static, Result<V>> + Send + Sync + 'static,
    {
        Self {
            key,
            cache,
            fetcher: Arc::new(fetcher),
            state: Arc::new(RwLock::new(QueryState::default())),
        }
    }

    pub fn key(&self) -> QueryKey {
        self.key
    }

    /// Read through the cache and record the outcome.
    ///
    /// The state flips to fetching before the returned future is polled.
    pub fn fetch(&self) -> impl Future<Output = Result<V>> + Send + 'static {
        self.state.write().in_flight += 1;

        let key = self.key;
        let cache = self.cache.clone();
        let fetcher = self.fetcher.clone();
        let state = self.state.clone();

        async move {
            let result = cache
                .fetch(key, || fetcher())
                .await
                .map_err(|e| (*e).clone());

            let mut guard = state.write();
            guard.in_flight = guard.in_flight.saturating_sub(1);
            match &result {
                Ok(value) => {
                    guard.data = Some(value.clone());
                    guard.error = None;
                }
                Err(e) => {
                    warn!("Query {} failed: {}", key, e);
                    guard.error = Some(e.clone());
                }
            }
            result
        }
    }

    pub fn snapshot(&self) -> QueryState<V> {
        self.state.read().clone()
    }

    pub fn data(&self) -> Option<V> {
        self.state.read().data.clone()
    }

    pub fn error(&self) -> Option<LinkdeckError> {
        self.state.read().error.clone()
    }

    pub fn is_fetching(&self) -> bool {
        self.state.read().is_fetching()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading()
    }
}
