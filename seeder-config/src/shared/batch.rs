use serde::{Deserialize, Serialize};

use crate::shared::ValidationError;

/// Batch processing configuration for catalog upserts.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BatchConfig {
    /// Maximum number of records sent to the destination in one upsert call.
    #[serde(default = "default_batch_max_size")]
    pub max_size: usize,
}

impl BatchConfig {
    /// Default maximum batch size for catalog upserts.
    pub const DEFAULT_MAX_SIZE: usize = 100;

    /// Validates batch configuration settings.
    ///
    /// Ensures max_size is non-zero.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_size == 0 {
            return Err(ValidationError::BatchMaxSizeZero);
        }

        Ok(())
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_size: default_batch_max_size(),
        }
    }
}

fn default_batch_max_size() -> usize {
    BatchConfig::DEFAULT_MAX_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_batch_size_is_one_hundred() {
        assert_eq!(BatchConfig::default().max_size, 100);
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        let config = BatchConfig { max_size: 0 };
        assert!(config.validate().is_err());
    }
}
