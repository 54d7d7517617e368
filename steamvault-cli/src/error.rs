use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Store open or query failed
    #[error("Database error: {0}")]
    Database(String),

    /// Collection load or projection failed
    #[error("Ingest error: {0}")]
    Ingest(String),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn ingest(msg: impl Into<String>) -> Self {
        Self::Ingest(msg.into())
    }
}
