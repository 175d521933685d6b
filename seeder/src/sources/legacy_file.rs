use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::SeedResult;
use crate::parser::normalizer::{LineOutcome, SkipReason, normalize_line};
use crate::types::CatalogRecord;

/// The legacy seed file, scanned line by line for catalog inserts.
///
/// Every line matching the `INSERT ... VALUES (...) ON CONFLICT` shape is tokenized and
/// normalized; all other lines are ignored. The scan is best-effort by design: lines
/// that match but cannot be mapped are dropped and only counted.
#[derive(Debug, Clone)]
pub struct LegacyFileSource {
    path: PathBuf,
}

/// Result of one pass over the legacy seed file.
#[derive(Debug, Clone)]
pub struct FileScan {
    pub records: Vec<CatalogRecord>,
    /// Skip diagnostics for matching lines that did not map into a record.
    pub skipped: Vec<SkipReason>,
}

impl LegacyFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the source name used for provenance tracking.
    pub fn name(&self) -> &'static str {
        "legacy-file"
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Scans the whole file and normalizes every matching insert line.
    pub async fn scan(&self) -> SeedResult<FileScan> {
        let contents = tokio::fs::read_to_string(&self.path).await?;

        let mut records = Vec::new();
        let mut skipped = Vec::new();
        for line in contents.lines() {
            match normalize_line(line) {
                Some(LineOutcome::Record(record)) => records.push(record),
                Some(LineOutcome::Skipped(reason)) => {
                    debug!(?reason, "skipping unmappable insert line");
                    skipped.push(reason);
                }
                None => {}
            }
        }

        info!(
            path = %self.path.display(),
            records = records.len(),
            skipped = skipped.len(),
            "scanned legacy seed file"
        );

        Ok(FileScan { records, skipped })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    fn write_seed_file(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("legacy.sql");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[tokio::test]
    async fn scan_collects_matching_lines_and_counts_skips() {
        let contents = r#"-- legacy catalog dump
SET search_path = public;
INSERT INTO expanded_problem_types (code) VALUES ('A-1', 'n', 'd', 's', 'subj', 'area', 'std', 'content', 'tag', 1, 3, '[]', 'middle', 'L1', 'D1') ON CONFLICT (code) DO UPDATE SET name = EXCLUDED.name;
INSERT INTO expanded_problem_types (code) VALUES ('too', 'short') ON CONFLICT (code) DO NOTHING;
INSERT INTO expanded_problem_types (code) VALUES ('B-2', 'n', 'd', 's', 'subj', 'area', 'std', 'content', 'tag', 2, 9, '["x"]', 'middle', 'L1', 'D1') ON CONFLICT (code) DO UPDATE SET name = EXCLUDED.name;
"#;

        let dir = tempfile::tempdir().unwrap();
        let source = LegacyFileSource::new(write_seed_file(&dir, contents));

        let scan = source.scan().await.unwrap();
        assert_eq!(scan.records.len(), 2);
        assert_eq!(scan.records[0].code, "A-1");
        assert_eq!(scan.records[1].code, "B-2");
        // The 1-10 scale of the legacy dump is clamped on the way in.
        assert_eq!(scan.records[1].difficulty_max, 5);
        assert_eq!(scan.skipped, vec![SkipReason::TooFewFields { found: 2 }]);
    }

    #[tokio::test]
    async fn scan_of_missing_file_is_an_error() {
        let source = LegacyFileSource::new("/nonexistent/legacy.sql");
        assert!(source.scan().await.is_err());
    }
}
