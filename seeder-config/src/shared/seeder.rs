use serde::Deserialize;

use crate::Config;
use crate::shared::{PgConnectionConfig, PipelineConfig, ValidationError};

/// Complete configuration for the catalog seeder process.
///
/// Aggregates the destination connection, the catalog table name, and the pipeline
/// settings. Loaded from the process environment at startup.
///
/// This intentionally does not implement [`serde::Serialize`] to avoid accidentally
/// leaking secrets in the config into serialized forms.
#[derive(Debug, Clone, Deserialize)]
pub struct SeederConfig {
    /// Connection configuration for the destination catalog store.
    pub destination: PgConnectionConfig,
    /// Name of the destination catalog table.
    #[serde(default = "default_catalog_table")]
    pub catalog_table: String,
    /// Configuration for the seeding pipeline.
    pub pipeline: PipelineConfig,
}

impl SeederConfig {
    /// Default name of the destination catalog table.
    pub const DEFAULT_CATALOG_TABLE: &'static str = "expanded_problem_types";

    /// Validates the complete seeder configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        // The table name is interpolated into SQL, so it must stay a plain identifier.
        let mut chars = self.catalog_table.chars();
        let valid_identifier = match chars.next() {
            Some(first) => {
                (first.is_ascii_alphabetic() || first == '_')
                    && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
            }
            None => false,
        };
        if !valid_identifier {
            return Err(ValidationError::CatalogTableInvalid);
        }

        self.destination.validate()?;
        self.pipeline.validate()
    }
}

impl Config for SeederConfig {
    const LIST_PARSE_KEYS: &'static [&'static str] = &[];
}

fn default_catalog_table() -> String {
    SeederConfig::DEFAULT_CATALOG_TABLE.to_string()
}
