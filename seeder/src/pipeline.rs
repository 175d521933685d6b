use seeder_config::shared::PipelineConfig;
use tracing::info;

use crate::bail;
use crate::destination::Destination;
use crate::engine::{BatchUpsertEngine, UpsertSummary};
use crate::error::{ErrorKind, SeedResult};
use crate::merge::merge_last_write_wins;
use crate::sources::{Collector, LegacyFileSource, MemorySource};

/// Counters for one upsert phase of a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseSummary {
    /// Records collected from all of the phase's sources, before deduplication.
    pub collected: usize,
    /// Matching legacy lines that could not be mapped into a record.
    pub skipped: usize,
    /// Records actually sent to the destination after deduplication.
    pub unique: usize,
    pub upsert: UpsertSummary,
}

/// Aggregate outcome of one seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub legacy: PhaseSummary,
    pub merge: PhaseSummary,
    /// Destination row count re-queried after both phases, as a sanity check against
    /// silent partial writes.
    pub final_row_count: u64,
}

/// Sequences a full seeding run against one destination.
///
/// The run is strictly sequential and single-pass: precondition checks, then the
/// legacy-file phase, then the multi-source merge phase, then the report. The merge
/// phase re-parses the legacy file on purpose — the two phases are independent passes
/// over overlapping data, and the idempotent upserts make the redundancy harmless.
///
/// The only fatal state is the precondition check; every later problem is absorbed
/// into counters. The in-memory source order given at construction is the merge
/// priority and is preserved exactly.
#[derive(Debug)]
pub struct SeedPipeline<D> {
    legacy_file: LegacyFileSource,
    sources: Vec<MemorySource>,
    batch_size: usize,
    destination: D,
}

impl<D> SeedPipeline<D>
where
    D: Destination + Clone,
{
    pub fn new(config: PipelineConfig, destination: D, sources: Vec<MemorySource>) -> Self {
        Self {
            legacy_file: LegacyFileSource::new(config.legacy_seed_file),
            sources,
            batch_size: config.batch.max_size,
            destination,
        }
    }

    /// Runs the whole pipeline and returns the aggregate report.
    pub async fn run(self) -> SeedResult<SeedReport> {
        self.check_preconditions().await?;

        let engine = BatchUpsertEngine::new(self.destination.clone(), self.batch_size);

        let legacy = self.run_legacy_phase(&engine).await?;
        let merge = self.run_merge_phase(&engine).await?;

        let final_row_count = self.destination.count_records().await?;

        let report = SeedReport {
            legacy,
            merge,
            final_row_count,
        };

        info!(
            legacy_upserted = report.legacy.upsert.total_upserted,
            legacy_error_chunks = report.legacy.upsert.error_chunks,
            merge_upserted = report.merge.upsert.total_upserted,
            merge_error_chunks = report.merge.upsert.error_chunks,
            final_row_count = report.final_row_count,
            "seeding run complete"
        );

        Ok(report)
    }

    /// Verifies the destination table and the legacy seed file before any write.
    ///
    /// This is the only fatal, non-recoverable step of the run.
    async fn check_preconditions(&self) -> SeedResult<()> {
        if !self.destination.table_exists().await? {
            bail!(
                ErrorKind::DestinationTableMissing,
                "Catalog table missing at the destination",
                "The destination does not expose the catalog table; apply the catalog schema (including the unique index on code) before seeding"
            );
        }

        if !self.legacy_file.path().is_file() {
            bail!(
                ErrorKind::ConfigError,
                "Legacy seed file not found",
                format!(
                    "No file at '{}'; point pipeline.legacy_seed_file at the legacy catalog dump",
                    self.legacy_file.path().display()
                )
            );
        }

        Ok(())
    }

    /// Parses the legacy file alone and upserts whatever it yields.
    async fn run_legacy_phase(&self, engine: &BatchUpsertEngine<D>) -> SeedResult<PhaseSummary> {
        info!("starting legacy file phase");

        let scan = self.legacy_file.scan().await?;
        let upsert = engine.upsert_all(&scan.records).await;

        let summary = PhaseSummary {
            collected: scan.records.len(),
            skipped: scan.skipped.len(),
            unique: scan.records.len(),
            upsert,
        };

        info!(
            parsed = summary.collected,
            skipped = summary.skipped,
            upserted = summary.upsert.total_upserted,
            error_chunks = summary.upsert.error_chunks,
            "legacy file phase complete"
        );

        Ok(summary)
    }

    /// Collects every source, merges last-write-wins, and upserts the merged set.
    async fn run_merge_phase(&self, engine: &BatchUpsertEngine<D>) -> SeedResult<PhaseSummary> {
        info!(sources = self.sources.len() + 1, "starting multi-source merge phase");

        let collector = Collector::new(self.legacy_file.clone(), self.sources.clone());
        let batches = collector.collect_all().await?;

        let collected = batches.iter().map(|batch| batch.records.len()).sum();
        let skipped = batches.iter().map(|batch| batch.skipped).sum();

        let merged = merge_last_write_wins(batches);
        let upsert = engine.upsert_all(&merged).await;

        let summary = PhaseSummary {
            collected,
            skipped,
            unique: merged.len(),
            upsert,
        };

        info!(
            collected = summary.collected,
            unique = summary.unique,
            upserted = summary.upsert.total_upserted,
            error_chunks = summary.upsert.error_chunks,
            "multi-source merge phase complete"
        );

        Ok(summary)
    }
}
