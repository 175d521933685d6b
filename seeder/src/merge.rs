//! Folds collected batches into one record per business code.

use std::collections::HashMap;

use tracing::debug;

use crate::sources::CollectedBatch;
use crate::types::CatalogRecord;

/// Merges all collected batches into a set with exactly one record per `code`.
///
/// Batches are folded in the given order and, for equal codes, the record encountered
/// later overwrites the earlier one whole — no field-by-field merging. The output is
/// deterministic for a fixed input order: records keep the first-seen position of their
/// code, with the winning record occupying each slot.
pub fn merge_last_write_wins(batches: Vec<CollectedBatch>) -> Vec<CatalogRecord> {
    let mut merged: Vec<CatalogRecord> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut replaced = 0usize;

    for batch in batches {
        debug!(
            source = %batch.source,
            records = batch.records.len(),
            "merging source batch"
        );

        for record in batch.records {
            match slots.get(&record.code) {
                Some(&slot) => {
                    merged[slot] = record;
                    replaced += 1;
                }
                None => {
                    slots.insert(record.code.clone(), merged.len());
                    merged.push(record);
                }
            }
        }
    }

    debug!(unique = merged.len(), replaced, "merged catalog sources");

    merged
}
