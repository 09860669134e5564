//! In-memory providers for selector tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use resonance_library_radio::{
    AlbumPopularity, AlbumPopularityProvider, BoxError, Candidate, CandidateFilter,
    CandidateProvider, PopularityPair,
};
use uuid::Uuid;

/// Candidate provider backed by a fixed list
///
/// Honours the pool cap and records every filter it was asked for.
pub struct MockCandidateProvider {
    songs: Vec<Candidate>,
    fail_with: Option<String>,
    requests: Mutex<Vec<(CandidateFilter, usize)>>,
}

impl MockCandidateProvider {
    pub fn new(songs: Vec<Candidate>) -> Arc<Self> {
        Arc::new(Self {
            songs,
            fail_with: None,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            songs: Vec::new(),
            fail_with: Some(message.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<(CandidateFilter, usize)> {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl CandidateProvider for MockCandidateProvider {
    async fn fetch_candidates(
        &self,
        filter: &CandidateFilter,
        pool_cap: usize,
    ) -> Result<Vec<Candidate>, BoxError> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((filter.clone(), pool_cap));

        if let Some(message) = &self.fail_with {
            return Err(message.clone().into());
        }

        Ok(self.songs.iter().take(pool_cap).cloned().collect())
    }
}

/// Album popularity provider backed by a map
pub struct MockAlbumPopularity {
    albums: HashMap<Uuid, PopularityPair>,
    fail: bool,
    lookups: Mutex<Vec<Vec<Uuid>>>,
}

impl MockAlbumPopularity {
    pub fn new(albums: HashMap<Uuid, PopularityPair>) -> Arc<Self> {
        Arc::new(Self {
            albums,
            fail: false,
            lookups: Mutex::new(Vec::new()),
        })
    }

    pub fn empty() -> Arc<Self> {
        Self::new(HashMap::new())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            albums: HashMap::new(),
            fail: true,
            lookups: Mutex::new(Vec::new()),
        })
    }

    /// Album id sets requested so far, one entry per call
    pub fn lookups(&self) -> Vec<Vec<Uuid>> {
        self.lookups.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl AlbumPopularityProvider for MockAlbumPopularity {
    async fn fetch_album_popularity(
        &self,
        album_ids: &[Uuid],
    ) -> Result<AlbumPopularity, BoxError> {
        self.lookups
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(album_ids.to_vec());

        if self.fail {
            return Err("album table unavailable".into());
        }

        Ok(album_ids
            .iter()
            .filter_map(|id| self.albums.get(id).map(|pop| (*id, *pop)))
            .collect())
    }
}
