use crate::types::CatalogRecord;

/// A named, pre-normalized batch of catalog records held in memory.
///
/// Each [`MemorySource`] represents one generation of catalog content. Records are
/// treated as opaque, already-normalized input; the pipeline does not re-validate them.
/// The position of a source in the pipeline's source list is its merge priority.
#[derive(Debug, Clone)]
pub struct MemorySource {
    name: String,
    records: Vec<CatalogRecord>,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, records: Vec<CatalogRecord>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }

    /// Returns the source name used for provenance tracking.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }
}
