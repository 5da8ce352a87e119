//! Error types for consumer dispatch.

use thiserror::Error;

/// Errors surfaced by pipeline dispatch and the ingest step.
///
/// These are per-invocation errors: one failed job never affects other
/// jobs' schedules or concurrent invocations.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No consumer is registered under the given job name.
    #[error("no consumer registered for job '{0}'")]
    ConsumerNotFound(String),

    /// The resolved consumer's fetch operation failed.
    #[error("consumer '{name}' failed: {reason}")]
    Consumer { name: String, reason: String },

    /// The pipeline executor rejected the invocation.
    #[error("executor error: {0}")]
    Executor(String),
}

/// Result alias for dispatch operations.
pub type Result<T> = std::result::Result<T, DispatchError>;
