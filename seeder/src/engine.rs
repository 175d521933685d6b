//! Chunked, failure-tolerant upserts against a destination.

use tracing::{error, info};

use crate::destination::Destination;
use crate::error::SeedResult;
use crate::types::CatalogRecord;

/// Counters produced by one upsert pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpsertSummary {
    /// Records confirmed written across all successful chunks.
    pub total_upserted: usize,
    /// Chunks the destination rejected whole.
    pub error_chunks: usize,
}

/// Partitions a record set into fixed-size chunks and upserts them one at a time.
///
/// Chunks are sent strictly sequentially; each destination call is awaited before the
/// next chunk begins, so the engine itself holds no shared mutable state beyond its
/// counters. A rejected chunk is logged, counted, and skipped — a single bad chunk
/// never aborts the pass, and there is no retry: a failed chunk's records stay absent
/// or stale until the next full run. `apply_chunk` is the single failure domain, which
/// keeps a bounded-concurrency variant a drop-in extension.
#[derive(Debug)]
pub struct BatchUpsertEngine<D> {
    destination: D,
    batch_size: usize,
}

impl<D> BatchUpsertEngine<D>
where
    D: Destination,
{
    pub fn new(destination: D, batch_size: usize) -> Self {
        Self {
            destination,
            // Batch size is validated non-zero at the configuration boundary.
            batch_size: batch_size.max(1),
        }
    }

    /// Upserts all records in order and returns the pass counters.
    pub async fn upsert_all(&self, records: &[CatalogRecord]) -> UpsertSummary {
        let mut summary = UpsertSummary::default();
        let chunk_count = records.len().div_ceil(self.batch_size);

        for (index, chunk) in records.chunks(self.batch_size).enumerate() {
            match self.apply_chunk(chunk).await {
                Ok(()) => {
                    summary.total_upserted += chunk.len();
                    info!(
                        chunk = index + 1,
                        chunks = chunk_count,
                        records = chunk.len(),
                        "upserted catalog chunk"
                    );
                }
                Err(err) => {
                    summary.error_chunks += 1;
                    error!(
                        chunk = index + 1,
                        chunks = chunk_count,
                        error = %err,
                        "catalog chunk upsert failed, continuing with the next chunk"
                    );
                }
            }
        }

        summary
    }

    /// Sends one chunk with `is_active` stamped on every record.
    async fn apply_chunk(&self, chunk: &[CatalogRecord]) -> SeedResult<()> {
        let rows = chunk
            .iter()
            .cloned()
            .map(|mut record| {
                record.is_active = true;
                record
            })
            .collect();

        self.destination.upsert_records(rows).await
    }
}
