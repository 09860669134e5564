//! Library radio error types

use thiserror::Error;

/// Opaque error returned by storage providers
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Library radio errors
#[derive(Error, Debug)]
pub enum RadioError {
    /// The candidate pool could not be fetched
    #[error("failed to retrieve radio candidates: {0}")]
    CandidateRetrieval(#[source] BoxError),

    /// Album popularity could not be fetched
    #[error("failed to retrieve album popularity: {0}")]
    AlbumPopularity(#[source] BoxError),

    /// No selectable item is left in the weighted pool
    #[error("weighted pool is empty")]
    EmptyPool,
}

/// Result type for library radio operations
pub type RadioResult<T> = Result<T, RadioError>;
