//! Library radio data model

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use resonance_shared_config::RadioConfig;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Last.fm popularity counters for a track or album
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularityPair {
    /// Number of distinct Last.fm listeners
    pub listeners: u64,
    /// Total Last.fm scrobbles
    pub playcount: u64,
}

impl PopularityPair {
    pub fn new(listeners: u64, playcount: u64) -> Self {
        Self {
            listeners,
            playcount,
        }
    }

    /// Whether any popularity data has been recorded
    pub fn is_known(&self) -> bool {
        self.listeners > 0 || self.playcount > 0
    }
}

/// Album-level popularity keyed by album id
pub type AlbumPopularity = HashMap<Uuid, PopularityPair>;

/// A song under consideration for the radio list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Uuid,
    pub title: String,
    pub album_id: Option<Uuid>,
    /// Star rating, 0 (unrated) to 5. A rating of 1 is a thumbs-down.
    pub rating: u8,
    /// How many times this user has played the song
    pub play_count: u32,
    pub last_played: Option<DateTime<Utc>>,
    /// Track-level popularity, zero when never enriched
    #[serde(default)]
    pub popularity: PopularityPair,
}

impl Candidate {
    /// Create an unrated, never-played candidate
    pub fn new(id: Uuid, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            album_id: None,
            rating: 0,
            play_count: 0,
            last_played: None,
            popularity: PopularityPair::default(),
        }
    }

    /// Whether the listener gave this song a thumbs-down
    pub fn is_thumbs_down(&self) -> bool {
        self.rating == 1
    }
}

/// Filters applied when fetching the candidate pool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateFilter {
    pub genre: Option<String>,
    pub from_year: Option<i32>,
    pub to_year: Option<i32>,
    /// Libraries the caller may read; empty means no restriction
    #[serde(default)]
    pub library_ids: Vec<i32>,
}

/// A radio selection request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioRequest {
    /// Number of songs wanted, already clamped
    pub count: usize,
    pub filter: CandidateFilter,
}

impl RadioRequest {
    /// Build a request from raw query parameters
    ///
    /// A missing count falls back to the configured default, and any count is
    /// clamped to the configured maximum. Year bounds of zero mean "unset".
    pub fn from_params(
        count: Option<usize>,
        genre: Option<String>,
        from_year: Option<i32>,
        to_year: Option<i32>,
        library_ids: Vec<i32>,
        config: &RadioConfig,
    ) -> Self {
        Self {
            count: config.clamp_count(count),
            filter: CandidateFilter {
                genre: genre.filter(|g| !g.trim().is_empty()),
                from_year: from_year.filter(|y| *y != 0),
                to_year: to_year.filter(|y| *y != 0),
                library_ids,
            },
        }
    }
}
