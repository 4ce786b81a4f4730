//! Error types for workload registration and metric queries.

use thiserror::Error;

/// Result alias used across the crate.
pub type SchedResult<T> = Result<T, SchedError>;

/// Errors reported by the registry, the comparator and algorithm parsing.
///
/// All failures are local and synchronous; nothing here is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedError {
    /// A process descriptor failed validation at registration time.
    #[error("Invalid process '{id}': {reason}")]
    InvalidProcess {
        /// Identifier of the rejected descriptor.
        id: String,
        /// Human-readable list of failed checks.
        reason: String,
    },

    /// No metrics exist for the requested process id.
    #[error("Process not found: {0}")]
    NotFound(String),

    /// An algorithm name did not match `FCFS`, `SJF` or `Priority`.
    #[error("Unknown scheduling algorithm: {0}")]
    UnknownAlgorithm(String),
}
