//! Tracing initialization for seeder binaries and tests.

use std::io;

use seeder_config::Environment;
use thiserror::Error;
use tracing::info;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Default log filter when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "info";

/// Keeps the non-blocking log writer alive for the duration of the process.
///
/// Dropping the flusher flushes buffered log lines, so it should be held in `main`
/// until exit.
#[derive(Debug)]
pub struct LogFlusher {
    _guard: WorkerGuard,
}

/// Errors that can occur while initializing tracing.
#[derive(Debug, Error)]
pub enum InitTracingError {
    /// Failed to determine the runtime environment (`APP_ENVIRONMENT`).
    #[error("failed to determine runtime environment: {0}")]
    Environment(#[from] io::Error),
    /// A global subscriber was already installed.
    #[error("failed to set the global tracing subscriber: {0}")]
    Subscriber(#[from] SetGlobalDefaultError),
}

/// Initializes the global tracing subscriber for a seeder binary.
///
/// Logs go to stdout through a non-blocking writer; the returned [`LogFlusher`] must
/// be kept alive until the process exits. Output is human-readable in the dev
/// environment and JSON in prod. The filter honors `RUST_LOG` and defaults to `info`.
pub fn init_tracing(service_name: &str) -> Result<LogFlusher, InitTracingError> {
    let environment = Environment::load()?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let (writer, guard) = tracing_appender::non_blocking(io::stdout());

    match environment {
        Environment::Dev => {
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_target(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        Environment::Prod => {
            let subscriber = tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(writer)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    info!(
        service = service_name,
        environment = %environment,
        "tracing initialized"
    );

    Ok(LogFlusher { _guard: guard })
}

/// Initializes tracing for tests.
///
/// Uses the test writer so output is captured per test, and is safe to call from every
/// test since a second initialization is ignored.
pub fn init_test_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
