use seeder::error::SeedError;
use seeder_config::LoadConfigError;
use seeder_config::shared::ValidationError;
use seeder_telemetry::tracing::InitTracingError;
use thiserror::Error;

/// Convenient result type for the seeder binary.
pub type RunnerResult<T> = Result<T, RunnerError>;

/// Top-level errors for the seeder binary.
///
/// Everything here is fatal: chunk-level upsert failures never reach this type, they
/// are absorbed by the pipeline and surface only as counters in the final report.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("configuration error: {0}")]
    Config(#[from] LoadConfigError),
    #[error("configuration error: {0}")]
    Validation(#[from] ValidationError),
    #[error("failed to initialize tracing: {0}")]
    Tracing(#[from] InitTracingError),
    #[error("failed to start the async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error(transparent)]
    Seed(#[from] SeedError),
}
