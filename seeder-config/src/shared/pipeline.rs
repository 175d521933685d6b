use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::shared::{BatchConfig, ValidationError};

/// Configuration for a seeding pipeline run.
///
/// Contains the settings the core pipeline needs: where the legacy catalog dump lives
/// and how upserts are batched. Connection settings live separately in
/// [`crate::shared::PgConnectionConfig`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Path to the legacy seed file scanned for catalog inserts.
    pub legacy_seed_file: PathBuf,
    /// Batch processing configuration.
    #[serde(default)]
    pub batch: BatchConfig,
}

impl PipelineConfig {
    /// Validates the pipeline configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.batch.validate()
    }
}
