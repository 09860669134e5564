//! Library catalog and enrichment seams used by the popularity sync
//!
//! The worker does not talk to the database or Last.fm directly. The host
//! application supplies an [`EntityCatalog`] for listing entities and a
//! [`PopularityEnricher`] that performs the actual external lookups (with
//! whatever retry policy it needs).

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque error returned by catalog and enrichment providers
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Kind of library entity carrying popularity data
///
/// Ordering follows scan order: artists, then albums, then tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Artist,
    Album,
    Track,
}

impl EntityKind {
    /// All kinds in scan order
    pub const ALL: [EntityKind; 3] = [EntityKind::Artist, EntityKind::Album, EntityKind::Track];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Artist => "artist",
            Self::Album => "album",
            Self::Track => "track",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            Self::Artist => "artists",
            Self::Album => "albums",
            Self::Track => "tracks",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to an artist, album or track to enrich
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: Uuid,
    /// Display name, used for logging only
    pub name: String,
}

impl EntityRef {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Lists library entities split by whether popularity data is present
#[async_trait]
pub trait EntityCatalog: Send + Sync {
    /// Entities with no listener or play count recorded yet
    async fn fetch_without_popularity(&self, kind: EntityKind) -> Result<Vec<EntityRef>, BoxError>;

    /// Entities that already have popularity data
    async fn fetch_with_popularity(&self, kind: EntityKind) -> Result<Vec<EntityRef>, BoxError>;
}

/// Refreshes popularity data from the external source
#[async_trait]
pub trait PopularityEnricher: Send + Sync {
    async fn update_artist_info(&self, artist: &EntityRef) -> Result<(), BoxError>;

    async fn update_album_info(&self, album: &EntityRef) -> Result<(), BoxError>;

    async fn update_track_popularity(&self, track: &EntityRef) -> Result<(), BoxError>;
}
