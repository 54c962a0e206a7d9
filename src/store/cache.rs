//! Query cache keyed by logical identifiers
//!
//! Backed by a Moka future cache:
//! - `try_get_with` gives singleflight semantics, so concurrent reads of a
//!   cold key share one loader call
//! - errors are never cached
//! - every key carries a generation that `invalidate` bumps, so a load that
//!   started before an invalidation is never served as fresh

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use moka::future::Cache;
use tokio::sync::broadcast;
use tracing::{debug, trace};

/// Upper bound on cached keys
const QUERY_CACHE_MAX_CAPACITY: u64 = 64;
/// Buffered invalidation notifications per subscriber
const INVALIDATION_CHANNEL_CAPACITY: usize = 32;

/// Logical cache identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// The full shortened-URL collection
    Urls,
}

impl QueryKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Urls => "urls",
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marks cached keys stale
///
/// Mutations only need this half of the cache, whatever its value type.
#[async_trait]
pub trait Invalidate: Send + Sync {
    async fn invalidate(&self, key: QueryKey);
}

#[derive(Clone)]
struct Stamped<V> {
    generation: u64,
    value: V,
}

/// Explicit cache store for query results
pub struct QueryCache<V> {
    entries: Cache<QueryKey, Stamped<V>>,
    generations: Arc<DashMap<QueryKey, u64>>,
    invalidated: broadcast::Sender<QueryKey>,
}

impl<V> Clone for QueryCache<V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            generations: self.generations.clone(),
            invalidated: self.invalidated.clone(),
        }
    }
}

impl<V> Default for QueryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> QueryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        let entries = Cache::builder()
            .max_capacity(QUERY_CACHE_MAX_CAPACITY)
            .build();
        let (invalidated, _) = broadcast::channel(INVALIDATION_CHANNEL_CAPACITY);

        Self {
            entries,
            generations: Arc::new(DashMap::new()),
            invalidated,
        }
    }

    fn generation(&self, key: QueryKey) -> u64 {
        self.generations.get(&key).map(|g| *g).unwrap_or(0)
    }

    /// Return the fresh value for `key`, loading it on a miss.
    ///
    /// Concurrent callers on a cold key share one `loader` call. A value
    /// whose load began before the latest invalidation is discarded and
    /// loaded again.
    pub async fn fetch<F, Fut, E>(&self, key: QueryKey, loader: F) -> Result<V, Arc<E>>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<V, E>>,
        E: Send + Sync + 'static,
    {
        loop {
            let generation = self.generation(key);
            let load = loader();
            let entry = self
                .entries
                .try_get_with(key, async move {
                    trace!("Query cache miss for {}, loading", key);
                    load.await.map(|value| Stamped { generation, value })
                })
                .await?;

            if entry.generation == self.generation(key) {
                return Ok(entry.value);
            }

            debug!(
                "Discarding {} loaded at generation {} (now {})",
                key,
                entry.generation,
                self.generation(key)
            );
            self.entries.invalidate(&key).await;
        }
    }

    #[cfg(test)]
    fn is_cached(&self, key: QueryKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Mark `key` stale so the next fetch reloads it
    pub async fn invalidate_key(&self, key: QueryKey) {
        *self.generations.entry(key).or_insert(0) += 1;
        self.entries.invalidate(&key).await;
        debug!("Invalidated query {}", key);
        // No subscribers is fine
        let _ = self.invalidated.send(key);
    }

    /// How many times `key` has been invalidated
    pub fn invalidation_count(&self, key: QueryKey) -> u64 {
        self.generation(key)
    }

    /// Notifications of invalidated keys, for views that refetch actively
    pub fn subscribe(&self) -> broadcast::Receiver<QueryKey> {
        self.invalidated.subscribe()
    }
}

#[async_trait]
impl<V> Invalidate for QueryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    async fn invalidate(&self, key: QueryKey) {
        self.invalidate_key(key).await;
    }
}
