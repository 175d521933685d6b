//! Error types and result definitions for the seeding pipeline.
//!
//! Provides a classified error system with captured diagnostic metadata for pipeline
//! operations. The [`SeedError`] type carries a static description, an optional dynamic
//! detail, the originating source error, and the callsite that produced it.

use std::backtrace::Backtrace;
use std::borrow::Cow;
use std::error;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Convenient result type for seeding operations using [`SeedError`] as the error type.
pub type SeedResult<T> = Result<T, SeedError>;

/// Specific categories of errors that can occur during a seeding run.
///
/// This enum provides granular error classification so callers can decide whether a
/// failure is fatal (configuration and precondition errors) or absorbable (everything
/// the pipeline handles locally never surfaces as a [`SeedError`] at all).
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    // Configuration & precondition errors
    ConfigError,
    DestinationTableMissing,

    // Destination errors
    DestinationConnectionFailed,
    DestinationQueryFailed,

    // Data & transformation errors
    ConversionError,
    InvalidData,

    // IO errors
    IoError,

    // Unknown / uncategorized
    Unknown,
}

/// Main error type for seeding operations.
///
/// [`SeedError`] pairs an [`ErrorKind`] with a static description and optional dynamic
/// detail, while capturing the callsite location and a backtrace for diagnostics.
#[derive(Debug, Clone)]
pub struct SeedError {
    kind: ErrorKind,
    description: Cow<'static, str>,
    detail: Option<Cow<'static, str>>,
    source: Option<Arc<dyn error::Error + Send + Sync>>,
    location: &'static Location<'static>,
    backtrace: Arc<Backtrace>,
}

impl SeedError {
    /// Returns the [`ErrorKind`] of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the detailed error information if available.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Returns the captured backtrace for this error.
    pub fn backtrace(&self) -> &Backtrace {
        self.backtrace.as_ref()
    }

    /// Returns the captured callsite location for this error.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Attaches an originating [`error::Error`] to this error and returns the modified
    /// instance.
    ///
    /// The stored source is preserved across clones and exposed via [`error::Error::source`].
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: error::Error + Send + Sync + 'static,
    {
        self.source = Some(Arc::new(source));
        self
    }

    /// Creates a [`SeedError`] from its components.
    #[track_caller]
    fn from_components(
        kind: ErrorKind,
        description: Cow<'static, str>,
        detail: Option<Cow<'static, str>>,
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    ) -> Self {
        let location = Location::caller();
        let backtrace = Arc::new(Backtrace::capture());

        SeedError {
            kind,
            description,
            detail,
            source,
            location,
            backtrace,
        }
    }
}

impl PartialEq for SeedError {
    fn eq(&self, other: &SeedError) -> bool {
        self.kind == other.kind
    }
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            f,
            "[{:?}] {} @ {}:{}:{}",
            self.kind,
            self.description,
            self.location.file(),
            self.location.line(),
            self.location.column()
        )?;

        if let Some(detail) = self.detail.as_deref() {
            if detail.trim().is_empty() {
                write!(f, "\n  Detail: <empty>")?;
            } else {
                write!(f, "\n  Detail:")?;
                for line in detail.lines() {
                    write!(f, "\n    {line}")?;
                }
            }
        }

        Ok(())
    }
}

impl error::Error for SeedError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|source| source as &(dyn error::Error + 'static))
    }
}

/// Creates a [`SeedError`] from an error kind and static description.
impl From<(ErrorKind, &'static str)> for SeedError {
    #[track_caller]
    fn from((kind, desc): (ErrorKind, &'static str)) -> SeedError {
        SeedError::from_components(kind, Cow::Borrowed(desc), None, None)
    }
}

/// Creates a [`SeedError`] from an error kind, static description, and dynamic detail.
impl<D> From<(ErrorKind, &'static str, D)> for SeedError
where
    D: Into<Cow<'static, str>>,
{
    #[track_caller]
    fn from((kind, desc, detail): (ErrorKind, &'static str, D)) -> SeedError {
        SeedError::from_components(kind, Cow::Borrowed(desc), Some(detail.into()), None)
    }
}

/// Converts [`std::io::Error`] to [`SeedError`] with [`ErrorKind::IoError`].
impl From<std::io::Error> for SeedError {
    #[track_caller]
    fn from(err: std::io::Error) -> SeedError {
        let detail = err.to_string();
        let source = Arc::new(err);
        SeedError::from_components(
            ErrorKind::IoError,
            Cow::Borrowed("I/O operation failed"),
            Some(Cow::Owned(detail)),
            Some(source),
        )
    }
}

/// Converts [`sqlx::Error`] to [`SeedError`] with the appropriate error kind.
///
/// Maps database errors to [`ErrorKind::DestinationQueryFailed`], I/O errors to
/// [`ErrorKind::IoError`], and connection pool errors to
/// [`ErrorKind::DestinationConnectionFailed`].
impl From<sqlx::Error> for SeedError {
    #[track_caller]
    fn from(err: sqlx::Error) -> SeedError {
        let kind = match &err {
            sqlx::Error::Database(_) => ErrorKind::DestinationQueryFailed,
            sqlx::Error::Io(_) => ErrorKind::IoError,
            sqlx::Error::PoolClosed | sqlx::Error::PoolTimedOut => {
                ErrorKind::DestinationConnectionFailed
            }
            _ => ErrorKind::DestinationQueryFailed,
        };

        let detail = err.to_string();
        let source = Arc::new(err);
        SeedError::from_components(
            kind,
            Cow::Borrowed("Destination database operation failed"),
            Some(Cow::Owned(detail)),
            Some(source),
        )
    }
}
