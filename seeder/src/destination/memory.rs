use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use crate::destination::Destination;
use crate::error::SeedResult;
use crate::types::CatalogRecord;

#[derive(Debug)]
struct Inner {
    records: HashMap<String, CatalogRecord>,
    upsert_calls: Vec<usize>,
}

/// In-memory destination for testing and development purposes.
///
/// [`MemoryDestination`] mirrors the upsert semantics of the real store: records are
/// keyed by `code` and a conflicting write replaces the stored record whole. That makes
/// idempotence observable in tests — re-sending the same batches leaves the record
/// count unchanged. All data is held in memory and lost when the process terminates.
#[derive(Debug, Clone)]
pub struct MemoryDestination {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryDestination {
    /// Creates a new empty memory destination.
    pub fn new() -> Self {
        let inner = Inner {
            records: HashMap::new(),
            upsert_calls: Vec::new(),
        };

        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    /// Returns a copy of all records stored in this destination, keyed by `code`.
    pub async fn records(&self) -> HashMap<String, CatalogRecord> {
        let inner = self.inner.lock().await;
        inner.records.clone()
    }

    /// Returns the stored record for `code`, if any.
    pub async fn get(&self, code: &str) -> Option<CatalogRecord> {
        let inner = self.inner.lock().await;
        inner.records.get(code).cloned()
    }

    /// Returns the batch sizes of every upsert call received, in order.
    pub async fn upsert_calls(&self) -> Vec<usize> {
        let inner = self.inner.lock().await;
        inner.upsert_calls.clone()
    }

    /// Clears all stored records and call history.
    pub async fn clear(&self) {
        let mut inner = self.inner.lock().await;
        inner.records.clear();
        inner.upsert_calls.clear();
    }
}

impl Default for MemoryDestination {
    fn default() -> Self {
        Self::new()
    }
}

impl Destination for MemoryDestination {
    fn name() -> &'static str {
        "memory"
    }

    async fn table_exists(&self) -> SeedResult<bool> {
        Ok(true)
    }

    async fn count_records(&self) -> SeedResult<u64> {
        let inner = self.inner.lock().await;
        Ok(inner.records.len() as u64)
    }

    async fn upsert_records(&self, records: Vec<CatalogRecord>) -> SeedResult<()> {
        let mut inner = self.inner.lock().await;

        info!("upserting a batch of {} catalog records", records.len());

        inner.upsert_calls.push(records.len());
        for record in records {
            inner.records.insert(record.code.clone(), record);
        }

        Ok(())
    }
}
