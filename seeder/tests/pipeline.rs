#![cfg(feature = "test-utils")]

use seeder::destination::Destination;
use seeder::destination::memory::MemoryDestination;
use seeder::engine::UpsertSummary;
use seeder::error::ErrorKind;
use seeder::pipeline::SeedPipeline;
use seeder::sources::MemorySource;
use seeder::test_utils::faulty_destination::FaultyDestination;
use seeder::types::CatalogRecord;
use seeder_config::shared::{BatchConfig, PipelineConfig};
use seeder_telemetry::tracing::init_test_tracing;
use tempfile::TempDir;

/// Writes a legacy seed file into `dir` and returns a pipeline config pointing at it.
fn pipeline_config(dir: &TempDir, contents: &str, batch_size: usize) -> PipelineConfig {
    let path = dir.path().join("legacy.sql");
    std::fs::write(&path, contents).unwrap();

    PipelineConfig {
        legacy_seed_file: path,
        batch: BatchConfig {
            max_size: batch_size,
        },
    }
}

/// One well-formed legacy insert line with the given code, name, and difficulty bounds.
fn insert_line(code: &str, name: &str, min: i32, max: i32) -> String {
    format!(
        "INSERT INTO expanded_problem_types (code, name, description, solution_method, subject, \
         area, standard_code, standard_content, cognitive_tag, difficulty_min, difficulty_max, \
         keywords, school_level, level_code, domain_code) VALUES ('{code}', '{name}', 'd', 's', \
         'Algebra', 'Equations', 'STD-1', 'content', 'procedural', {min}, {max}, '[]', 'middle', \
         'L1', 'D1') ON CONFLICT (code) DO UPDATE SET name = EXCLUDED.name;"
    )
}

fn record(code: &str, name: &str) -> CatalogRecord {
    CatalogRecord {
        code: code.to_string(),
        name: name.to_string(),
        ..CatalogRecord::default()
    }
}

fn many_records(count: usize) -> Vec<CatalogRecord> {
    (0..count)
        .map(|i| record(&format!("R-{i:03}"), "bulk"))
        .collect()
}

#[tokio::test]
async fn end_to_end_run_seeds_both_phases() {
    init_test_tracing();

    let contents = format!(
        "-- legacy dump\nSET search_path = public;\n{}\n{}\nINSERT INTO expanded_problem_types \
         (code, name) VALUES ('too', 'short') ON CONFLICT (code) DO NOTHING;\n",
        insert_line("F-1", "file one", 2, 9),
        insert_line("F-2", "file two", 1, 3),
    );
    let dir = TempDir::new().unwrap();
    let config = pipeline_config(&dir, &contents, 100);

    let destination = MemoryDestination::new();
    let sources = vec![
        MemorySource::new("gen-1", vec![record("G-1", "gen one"), record("F-2", "gen override")]),
        MemorySource::new("gen-2", vec![record("G-2", "gen two")]),
    ];

    let report = SeedPipeline::new(config, destination.clone(), sources)
        .run()
        .await
        .unwrap();

    assert_eq!(report.legacy.collected, 2);
    assert_eq!(report.legacy.skipped, 1);
    assert_eq!(
        report.legacy.upsert,
        UpsertSummary {
            total_upserted: 2,
            error_chunks: 0
        }
    );

    // The merge phase re-parses the file, then folds in both generations.
    assert_eq!(report.merge.collected, 5);
    assert_eq!(report.merge.unique, 4);
    assert_eq!(report.merge.upsert.total_upserted, 4);
    assert_eq!(report.final_row_count, 4);

    // The later generation won the conflicting code.
    assert_eq!(destination.get("F-2").await.unwrap().name, "gen override");
    // Legacy 1-10 difficulties were clamped on the way in.
    assert_eq!(destination.get("F-1").await.unwrap().difficulty_max, 5);
    // Every stored record is stamped active.
    for record in destination.records().await.values() {
        assert!(record.is_active);
    }
}

#[tokio::test]
async fn later_sources_win_over_file_and_earlier_generations() {
    init_test_tracing();

    let dir = TempDir::new().unwrap();
    let config = pipeline_config(&dir, &insert_line("X", "from file", 1, 3), 100);

    let destination = MemoryDestination::new();
    let sources = vec![
        MemorySource::new("gen-a", vec![record("X", "from gen a")]),
        MemorySource::new("gen-b", vec![record("X", "from gen b")]),
    ];

    let report = SeedPipeline::new(config, destination.clone(), sources)
        .run()
        .await
        .unwrap();

    assert_eq!(report.final_row_count, 1);
    assert_eq!(destination.get("X").await.unwrap().name, "from gen b");
}

#[tokio::test]
async fn failed_chunk_is_counted_and_later_chunks_still_run() {
    init_test_tracing();

    // The legacy file holds no insert lines, so the merge phase issues the only
    // three upsert calls and the second one fails.
    let dir = TempDir::new().unwrap();
    let config = pipeline_config(&dir, "-- empty legacy dump\n", 100);

    let memory = MemoryDestination::new();
    let faulty = FaultyDestination::failing_on(memory.clone(), [2]);
    let sources = vec![MemorySource::new("bulk", many_records(250))];

    let report = SeedPipeline::new(config, faulty.clone(), sources)
        .run()
        .await
        .unwrap();

    assert_eq!(
        report.merge.upsert,
        UpsertSummary {
            total_upserted: 150,
            error_chunks: 1
        }
    );
    assert_eq!(faulty.upsert_calls().await, vec![100, 100, 50]);
    assert_eq!(report.final_row_count, 150);
}

#[tokio::test]
async fn rerunning_the_pipeline_is_idempotent() {
    init_test_tracing();

    let dir = TempDir::new().unwrap();
    let contents = format!(
        "{}\n{}\n",
        insert_line("F-1", "file one", 1, 3),
        insert_line("F-2", "file two", 2, 4),
    );

    let destination = MemoryDestination::new();
    let sources = vec![MemorySource::new(
        "gen-1",
        vec![record("G-1", "gen one"), record("F-1", "override")],
    )];

    let first = SeedPipeline::new(
        pipeline_config(&dir, &contents, 100),
        destination.clone(),
        sources.clone(),
    )
    .run()
    .await
    .unwrap();

    let second = SeedPipeline::new(
        pipeline_config(&dir, &contents, 100),
        destination.clone(),
        sources,
    )
    .run()
    .await
    .unwrap();

    // Converged: the second pass rewrites the same keys and the count stays put.
    assert_eq!(first.final_row_count, 3);
    assert_eq!(second.final_row_count, 3);
    assert_eq!(first.merge.unique, second.merge.unique);
    assert_eq!(destination.get("F-1").await.unwrap().name, "override");
}

#[tokio::test]
async fn missing_catalog_table_aborts_before_any_write() {
    init_test_tracing();

    let dir = TempDir::new().unwrap();
    let config = pipeline_config(&dir, &insert_line("X", "x", 1, 3), 100);

    let memory = MemoryDestination::new();
    let faulty = FaultyDestination::with_missing_table(memory.clone());

    let err = SeedPipeline::new(config, faulty.clone(), vec![])
        .run()
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DestinationTableMissing);
    assert!(faulty.upsert_calls().await.is_empty());
    assert_eq!(memory.count_records().await.unwrap(), 0);
}

#[tokio::test]
async fn missing_legacy_file_aborts_with_a_config_error() {
    init_test_tracing();

    let dir = TempDir::new().unwrap();
    let config = PipelineConfig {
        legacy_seed_file: dir.path().join("does-not-exist.sql"),
        batch: BatchConfig::default(),
    };

    let err = SeedPipeline::new(config, MemoryDestination::new(), vec![])
        .run()
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ConfigError);
}
