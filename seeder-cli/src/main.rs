//! Catalog seeder binary.
//!
//! Seeds the academy's expanded problem-type catalog in the hosted store from the
//! legacy SQL dump and the built-in in-memory catalog generations. Configuration comes
//! from the process environment; the run is single-pass and exits zero even when some
//! chunks fail, since only missing configuration or an unreachable/missing catalog
//! table is fatal.

use seeder::destination::postgres::PostgresDestination;
use seeder::pipeline::SeedPipeline;
use seeder_config::shared::SeederConfig;
use seeder_telemetry::tracing::init_tracing;
use tracing::info;

use crate::config::load_seeder_config;
use crate::error::RunnerResult;

mod catalog;
mod config;
mod error;

/// Entry point for the seeder process.
///
/// Loads configuration, initializes tracing, starts the async runtime, and launches
/// the seeding pipeline.
fn main() -> RunnerResult<()> {
    // Load the config before anything else; missing configuration must abort the
    // process without touching the destination.
    let seeder_config = load_seeder_config()?;

    // Initialize tracing; the flusher must stay alive until exit.
    let _log_flusher = init_tracing(env!("CARGO_BIN_NAME"))?;

    // We start the runtime.
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async_main(seeder_config))?;

    Ok(())
}

/// Main async entry point that runs the seeding pipeline.
async fn async_main(seeder_config: SeederConfig) -> RunnerResult<()> {
    info!(
        table = %seeder_config.catalog_table,
        legacy_seed_file = %seeder_config.pipeline.legacy_seed_file.display(),
        batch_size = seeder_config.pipeline.batch.max_size,
        "starting catalog seeder"
    );

    let destination = PostgresDestination::connect(
        &seeder_config.destination,
        seeder_config.catalog_table.as_str(),
    )
    .await?;

    let pipeline = SeedPipeline::new(seeder_config.pipeline, destination, catalog::sources());
    let report = pipeline.run().await?;

    info!(
        upserted = report.legacy.upsert.total_upserted + report.merge.upsert.total_upserted,
        error_chunks = report.legacy.upsert.error_chunks + report.merge.upsert.error_chunks,
        final_row_count = report.final_row_count,
        "catalog seeding finished"
    );

    Ok(())
}
