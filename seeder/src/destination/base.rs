use std::future::Future;

use crate::error::SeedResult;
use crate::types::CatalogRecord;

/// Trait for stores that can receive catalog records from the seeding pipeline.
///
/// [`Destination`] implementations define how the merged catalog is written to a target
/// system. The pipeline only needs three operations: an existence probe for the
/// precondition check, a row count for the final sanity report, and the batch upsert
/// itself.
///
/// Implementations must make `upsert_records` idempotent: every write is keyed by
/// `code` and is a whole-record replace, so re-sending a batch converges to the same
/// destination state. This is what makes re-running the tool after a partial failure
/// safe.
pub trait Destination {
    /// Returns the name of the destination.
    fn name() -> &'static str;

    /// Probes whether the catalog table exists and is reachable.
    fn table_exists(&self) -> impl Future<Output = SeedResult<bool>> + Send;

    /// Returns the number of rows currently stored in the catalog table.
    fn count_records(&self) -> impl Future<Output = SeedResult<u64>> + Send;

    /// Upserts a batch of records keyed by `code`, updating on conflict.
    ///
    /// The whole batch is one failure domain: implementations either apply it fully or
    /// return an error for the caller to count and move past.
    fn upsert_records(
        &self,
        records: Vec<CatalogRecord>,
    ) -> impl Future<Output = SeedResult<()>> + Send;
}
