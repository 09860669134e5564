//! Storage seams for the radio selector

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::BoxError;
use crate::models::{AlbumPopularity, Candidate, CandidateFilter};

/// Supplies the random candidate pool for a radio request
///
/// Implementations decide ordering and randomisation within the cap; the
/// selector only relies on receiving at most `pool_cap` songs that match the
/// filter.
#[async_trait]
pub trait CandidateProvider: Send + Sync {
    async fn fetch_candidates(
        &self,
        filter: &CandidateFilter,
        pool_cap: usize,
    ) -> Result<Vec<Candidate>, BoxError>;
}

/// Looks up album-level popularity for a set of albums
#[async_trait]
pub trait AlbumPopularityProvider: Send + Sync {
    /// Albums without popularity data may be omitted from the result
    async fn fetch_album_popularity(&self, album_ids: &[Uuid]) -> Result<AlbumPopularity, BoxError>;
}
