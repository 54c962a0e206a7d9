//! Write handle with an explicit invalidation set

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use futures_util::future::BoxFuture;
use parking_lot::RwLock;
use tracing::{debug, warn};

use super::cache::{Invalidate, QueryKey};
use crate::errors::{LinkdeckError, Result};

type Runner<I, O> = Arc<dyn Fn(I) -> BoxFuture<'static, Result<O>> + Send + Sync>;

/// Mutation lifecycle: `Idle → Pending → (Success | Error)`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MutationStatus<O> {
    #[default]
    Idle,
    Pending,
    Success(O),
    Error(LinkdeckError),
}

impl<O> MutationStatus<O> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn error(&self) -> Option<&LinkdeckError> {
        match self {
            Self::Error(e) => Some(e),
            _ => None,
        }
    }
}

/// A write against the backend.
///
/// Every success invalidates the keys passed at construction before the
/// caller's `on_success` runs. Failures invalidate nothing. When calls
/// overlap, the most recent one owns the observable status.
pub struct Mutation<I, O> {
    name: &'static str,
    run: Runner<I, O>,
    invalidator: Arc<dyn Invalidate>,
    invalidates: Arc<[QueryKey]>,
    state: Arc<RwLock<MutationStatus<O>>>,
    latest: Arc<AtomicU64>,
}

impl<I, O> Clone for Mutation<I, O> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            run: self.run.clone(),
            invalidator: self.invalidator.clone(),
            invalidates: self.invalidates.clone(),
            state: self.state.clone(),
            latest: self.latest.clone(),
        }
    }
}

impl<I, O> Mutation<I, O>
where
    I: Send + 'static,
    O: Clone + Send + Sync + 'static,
{
    pub fn new<F>(
        name: &'static str,
        invalidator: Arc<dyn Invalidate>,
        invalidates: &[QueryKey],
        run: F,
    ) -> Self
    where
        F: Fn(I) -> BoxFuture<'static, Result<O>> + Send + Sync + 'static,
    {
        Self {
            name,
            run: Arc::new(run),
            invalidator,
            invalidates: invalidates.into(),
            state: Arc::new(RwLock::new(MutationStatus::Idle)),
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Start the mutation.
    ///
    /// The status is `Pending` as soon as this returns, before the future is
    /// polled. `on_success` runs after invalidation.
    pub fn mutate<F>(
        &self,
        input: I,
        on_success: Option<F>,
    ) -> impl Future<Output = Result<O>> + Send + 'static
    where
        F: FnOnce(&O) + Send + 'static,
    {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        *self.state.write() = MutationStatus::Pending;

        let name = self.name;
        let call = (self.run)(input);
        let invalidator = self.invalidator.clone();
        let invalidates = self.invalidates.clone();
        let state = self.state.clone();
        let latest = self.latest.clone();

        async move {
            let result = call.await;
            let current = latest.load(Ordering::SeqCst) == ticket;

            match &result {
                Ok(output) => {
                    debug!("Mutation {} succeeded", name);
                    for key in invalidates.iter() {
                        invalidator.invalidate(*key).await;
                    }
                    if current {
                        *state.write() = MutationStatus::Success(output.clone());
                    }
                    if let Some(callback) = on_success {
                        callback(output);
                    }
                }
                Err(e) => {
                    warn!("Mutation {} failed: {}", name, e);
                    if current {
                        *state.write() = MutationStatus::Error(e.clone());
                    }
                }
            }
            result
        }
    }

    /// Start the mutation with no success callback
    pub fn run(&self, input: I) -> impl Future<Output = Result<O>> + Send + 'static {
        self.mutate::<fn(&O)>(input, None)
    }

    pub fn status(&self) -> MutationStatus<O> {
        self.state.read().clone()
    }

    pub fn is_pending(&self) -> bool {
        self.state.read().is_pending()
    }

    pub fn error(&self) -> Option<LinkdeckError> {
        self.state.read().error().cloned()
    }

    /// Back to `Idle`. A call still in flight no longer owns the status.
    pub fn reset(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
        *self.state.write() = MutationStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::cache::QueryCache;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    fn doubling(cache: &QueryCache<u32>) -> Mutation<u32, u32> {
        Mutation::new("double", Arc::new(cache.clone()), &[QueryKey::Urls], |n: u32| {
            Box::pin(async move {
                if n == 0 {
                    Err(LinkdeckError::api(400, "zero is not allowed"))
                } else {
                    Ok(n * 2)
                }
            })
        })
    }

    #[tokio::test]
    async fn test_pending_is_set_synchronously() {
        let cache = QueryCache::new();
        let mutation = doubling(&cache);
        assert!(mutation.status().is_idle());

        let pending = mutation.run(2);
        assert!(mutation.is_pending());
        assert_eq!(pending.await.unwrap(), 4);
        assert_eq!(mutation.status(), MutationStatus::Success(4));
    }

    #[tokio::test]
    async fn test_success_invalidates_once_then_calls_back() {
        let cache = QueryCache::new();
        let mutation = doubling(&cache);
        let seen = Arc::new(AtomicUsize::new(0));

        let observed = {
            let cache = cache.clone();
            let seen = seen.clone();
            move |out: &u32| {
                // Invalidation already happened when the callback runs
                seen.store(
                    (*out as usize) * 10 + cache.invalidation_count(QueryKey::Urls) as usize,
                    Ordering::SeqCst,
                );
            }
        };

        mutation.mutate(3, Some(observed)).await.unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 61);
        assert_eq!(cache.invalidation_count(QueryKey::Urls), 1);
    }

    #[tokio::test]
    async fn test_failure_does_not_invalidate() {
        let cache = QueryCache::new();
        let mutation = doubling(&cache);

        let err = mutation.run(0).await.unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(cache.invalidation_count(QueryKey::Urls), 0);
        assert_eq!(mutation.error().unwrap().message(), "zero is not allowed");
    }

    #[tokio::test]
    async fn test_new_mutate_returns_to_pending() {
        let cache = QueryCache::new();
        let mutation = doubling(&cache);

        mutation.run(0).await.unwrap_err();
        let again = mutation.run(1);
        assert!(mutation.is_pending());
        assert!(mutation.error().is_none());
        again.await.unwrap();
        assert!(mutation.status().is_success());

        mutation.reset();
        assert!(mutation.status().is_idle());
    }

    #[tokio::test]
    async fn test_latest_call_owns_status() {
        let cache: QueryCache<u32> = QueryCache::new();
        let mutation: Mutation<u64, u64> =
            Mutation::new("sleep", Arc::new(cache.clone()), &[QueryKey::Urls], |ms: u64| {
                Box::pin(async move {
                    tokio::time::sleep(Duration::from_millis(ms)).await;
                    Ok(ms)
                })
            });

        let slow = tokio::spawn(mutation.run(80));
        let fast = mutation.run(5);
        assert_eq!(fast.await.unwrap(), 5);
        assert_eq!(slow.await.unwrap().unwrap(), 80);

        assert_eq!(mutation.status(), MutationStatus::Success(5));
        assert_eq!(cache.invalidation_count(QueryKey::Urls), 2);
    }
}
