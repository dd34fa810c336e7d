//! Resilience primitives for gateway calls.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::time::{timeout, Duration};

use crate::error::{FetchError, FetchResult};

/// Bounds gateway calls in both width and time.
///
/// At most `max_concurrent` calls are in flight at once; the enrichment
/// fan-out issues one call per artist, so without this a large catalog
/// would open one connection per artist. Every call is also cut off after
/// `call_timeout` so a hung request cannot stall a filter forever.
#[derive(Debug, Clone)]
pub struct FetchLimiter {
    semaphore: Arc<Semaphore>,
    call_timeout: Duration,
}

impl FetchLimiter {
    pub fn new(max_concurrent: usize, call_timeout: Duration) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(max_concurrent.max(1))),
            call_timeout,
        }
    }

    pub fn call_timeout(&self) -> Duration {
        self.call_timeout
    }

    /// Number of calls that could start right now.
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }

    /// Run `call` once a slot is free, failing with
    /// [`FetchError::Timeout`] if it does not finish in time.
    pub async fn run<F, T>(&self, endpoint: &str, call: F) -> FetchResult<T>
    where
        F: Future<Output = FetchResult<T>>,
    {
        let timed_out = || FetchError::Timeout {
            endpoint: endpoint.to_string(),
        };

        // A closed semaphore means the call can never start.
        let _permit = self.semaphore.acquire().await.map_err(|_| timed_out())?;

        timeout(self.call_timeout, call).await.map_err(|_| timed_out())?
    }
}
