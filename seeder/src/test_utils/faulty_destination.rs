use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::bail;
use crate::destination::Destination;
use crate::error::{ErrorKind, SeedResult};
use crate::types::CatalogRecord;

#[derive(Debug)]
struct Inner<D> {
    wrapped: D,
    /// 1-based upsert call numbers that fail with an injected error.
    fail_calls: HashSet<usize>,
    /// Record counts of every attempted upsert call, in order.
    upsert_calls: Vec<usize>,
    calls_seen: usize,
    table_exists: bool,
}

/// Test wrapper for [`Destination`] implementations that injects failures.
///
/// [`FaultyDestination`] wraps any destination and records every upsert attempt, so
/// tests can assert that a failed chunk was counted and that later chunks were still
/// sent. Calls configured to fail never reach the wrapped destination — the whole
/// chunk is rejected, matching the engine's one-failure-domain-per-chunk model. The
/// wrapper can also report the catalog table as missing to exercise the fatal
/// precondition path.
#[derive(Debug, Clone)]
pub struct FaultyDestination<D> {
    inner: Arc<Mutex<Inner<D>>>,
}

impl<D> FaultyDestination<D> {
    /// Wraps a destination without any injected failures.
    pub fn wrap(destination: D) -> Self {
        Self::failing_on(destination, [])
    }

    /// Wraps a destination and fails the given 1-based upsert call numbers.
    pub fn failing_on(destination: D, calls: impl IntoIterator<Item = usize>) -> Self {
        let inner = Inner {
            wrapped: destination,
            fail_calls: calls.into_iter().collect(),
            upsert_calls: Vec::new(),
            calls_seen: 0,
            table_exists: true,
        };

        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    /// Wraps a destination that reports the catalog table as missing.
    pub fn with_missing_table(destination: D) -> Self {
        let wrapper = Self::wrap(destination);
        {
            let mut inner = wrapper
                .inner
                .try_lock()
                .expect("inner lock is uncontended during construction");
            inner.table_exists = false;
        }
        wrapper
    }

    /// Returns the record counts of every attempted upsert call, in order.
    pub async fn upsert_calls(&self) -> Vec<usize> {
        let inner = self.inner.lock().await;
        inner.upsert_calls.clone()
    }
}

impl<D> Destination for FaultyDestination<D>
where
    D: Destination + Clone + Send + Sync,
{
    fn name() -> &'static str {
        "faulty"
    }

    async fn table_exists(&self) -> SeedResult<bool> {
        let inner = self.inner.lock().await;
        Ok(inner.table_exists)
    }

    async fn count_records(&self) -> SeedResult<u64> {
        let wrapped = {
            let inner = self.inner.lock().await;
            inner.wrapped.clone()
        };

        wrapped.count_records().await
    }

    async fn upsert_records(&self, records: Vec<CatalogRecord>) -> SeedResult<()> {
        let (wrapped, call, should_fail) = {
            let mut inner = self.inner.lock().await;
            inner.calls_seen += 1;
            inner.upsert_calls.push(records.len());
            let call = inner.calls_seen;
            (inner.wrapped.clone(), call, inner.fail_calls.contains(&call))
        };

        if should_fail {
            bail!(
                ErrorKind::DestinationQueryFailed,
                "Injected chunk failure",
                format!("upsert call {call} is configured to fail")
            );
        }

        wrapped.upsert_records(records).await
    }
}
