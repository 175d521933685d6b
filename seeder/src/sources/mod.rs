//! Catalog record sources and the multi-source collector.
//!
//! The pipeline draws records from two kinds of collaborators: the legacy seed file
//! (parsed line by line) and an ordered list of pre-built in-memory generations. The
//! [`Collector`] concatenates their batches with provenance, it never deduplicates;
//! merging is a separate step.

mod legacy_file;
mod memory;

pub use legacy_file::*;
pub use memory::*;

use crate::error::SeedResult;
use crate::types::CatalogRecord;

/// Records gathered from one source, tagged with provenance for diagnostics.
#[derive(Debug, Clone)]
pub struct CollectedBatch {
    /// Source name, kept for logging only.
    pub source: String,
    pub records: Vec<CatalogRecord>,
    /// Lines the source matched but could not map (always zero for memory sources).
    pub skipped: usize,
}

/// Assembles the full working set of records from the legacy file and the in-memory
/// generations, preserving the declared source order.
#[derive(Debug, Clone)]
pub struct Collector {
    file: LegacyFileSource,
    memory: Vec<MemorySource>,
}

impl Collector {
    pub fn new(file: LegacyFileSource, memory: Vec<MemorySource>) -> Self {
        Self { file, memory }
    }

    /// Collects one batch per source, file first, then each memory generation in
    /// declaration order.
    pub async fn collect_all(&self) -> SeedResult<Vec<CollectedBatch>> {
        let mut batches = Vec::with_capacity(self.memory.len() + 1);

        let scan = self.file.scan().await?;
        batches.push(CollectedBatch {
            source: self.file.name().to_string(),
            records: scan.records,
            skipped: scan.skipped.len(),
        });

        for source in &self.memory {
            batches.push(CollectedBatch {
                source: source.name().to_string(),
                records: source.records().to_vec(),
                skipped: 0,
            });
        }

        Ok(batches)
    }
}
