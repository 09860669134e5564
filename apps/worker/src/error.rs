//! Error handling for the Resonance Worker
//!
//! This module provides a unified error type for background jobs using
//! thiserror, with severity levels that decide how each failure is logged.

use thiserror::Error;

use crate::providers::{BoxError, EntityKind};

/// Which half of a prioritized entity list was being fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    /// Entities with no popularity data yet (scanned first)
    WithoutPopularity,
    /// Entities being refreshed
    WithPopularity,
}

impl std::fmt::Display for ListPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WithoutPopularity => write!(f, "without popularity data"),
            Self::WithPopularity => write!(f, "with popularity data"),
        }
    }
}

/// Main worker error type
#[derive(Error, Debug)]
pub enum WorkerError {
    // ========== Popularity Sync Errors ==========
    /// Listing entities to scan failed; aborts the whole run
    #[error("failed to get {} {phase}: {source}", .kind.plural())]
    EntityListFetch {
        kind: EntityKind,
        phase: ListPhase,
        #[source]
        source: BoxError,
    },

    /// Refreshing a single entity failed; the run continues
    #[error("failed to update {kind} '{entity}': {source}")]
    Enrichment {
        kind: EntityKind,
        entity: String,
        #[source]
        source: BoxError,
    },

    /// Job execution was cancelled (e.g., due to shutdown)
    #[error("job cancelled: {0}")]
    Cancelled(String),
}

impl WorkerError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::EntityListFetch { .. } | Self::Enrichment { .. })
    }

    /// Get a severity level for logging
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EntityListFetch { .. } => ErrorSeverity::Error,
            Self::Cancelled(_) => ErrorSeverity::Info,
            // One bad entity is routine while walking a large library
            Self::Enrichment { .. } => ErrorSeverity::Debug,
        }
    }

    /// Log the error with appropriate severity
    pub fn log(&self) {
        let retryable = self.is_retryable();
        match self.severity() {
            ErrorSeverity::Error => {
                tracing::error!(error = %self, retryable, "Worker error");
            }
            ErrorSeverity::Info => {
                tracing::info!(error = %self, retryable, "Worker info");
            }
            ErrorSeverity::Debug => {
                tracing::debug!(error = %self, retryable, "Worker debug");
            }
        }
    }

    /// Create an entity list fetch error
    pub fn entity_list(kind: EntityKind, phase: ListPhase, source: BoxError) -> Self {
        Self::EntityListFetch {
            kind,
            phase,
            source,
        }
    }

    /// Create an enrichment error
    pub fn enrichment(kind: EntityKind, entity: impl Into<String>, source: BoxError) -> Self {
        Self::Enrichment {
            kind,
            entity: entity.into(),
            source,
        }
    }

    /// Create a cancellation error
    pub fn cancelled(reason: impl Into<String>) -> Self {
        Self::Cancelled(reason.into())
    }
}

/// Error severity levels for logging and alerting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Standard errors
    Error,
    /// Informational messages
    Info,
    /// Per-item noise, only useful when debugging
    Debug,
}

/// Result type alias for worker operations
pub type WorkerResult<T> = Result<T, WorkerError>;
