use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Batch size cannot be zero.
    #[error("`batch.max_size` cannot be zero")]
    BatchMaxSizeZero,
    /// The catalog table name is empty or not a plain identifier.
    #[error("`catalog_table` must be a plain SQL identifier (letters, digits, underscores)")]
    CatalogTableInvalid,
    /// TLS is enabled but no trusted root certificates are provided.
    #[error("Invalid TLS config: `trusted_root_certs` must be set when `enabled` is true")]
    MissingTrustedRootCerts,
}
