//! Library radio selection
//!
//! Pulls a bounded random pool of candidates, weights each one and draws the
//! requested number of songs without replacement.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use resonance_shared_config::RadioConfig;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::chooser::WeightedChooser;
use crate::error::{RadioError, RadioResult};
use crate::models::{AlbumPopularity, Candidate, RadioRequest};
use crate::provider::{AlbumPopularityProvider, CandidateProvider};
use crate::weight::{calculate_weight, WeightParams};

/// Library radio selector
#[derive(Clone)]
pub struct RadioSelector {
    candidates: Arc<dyn CandidateProvider>,
    albums: Arc<dyn AlbumPopularityProvider>,
    config: RadioConfig,
    params: WeightParams,
}

impl std::fmt::Debug for RadioSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RadioSelector")
            .field("config", &self.config)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl RadioSelector {
    /// Create a selector with the default weighting factors
    pub fn new(
        candidates: Arc<dyn CandidateProvider>,
        albums: Arc<dyn AlbumPopularityProvider>,
        config: RadioConfig,
    ) -> Self {
        Self {
            candidates,
            albums,
            config,
            params: WeightParams::default(),
        }
    }

    /// Override the weighting factors
    pub fn with_params(mut self, params: WeightParams) -> Self {
        self.params = params;
        self
    }

    pub fn config(&self) -> &RadioConfig {
        &self.config
    }

    /// Select up to `request.count` songs for the radio
    ///
    /// Returns fewer songs than requested when the pool runs out of drawable
    /// candidates; that is not an error.
    ///
    /// # Errors
    /// - `RadioError::CandidateRetrieval` - If the candidate pool cannot be fetched
    pub async fn select(&self, request: &RadioRequest) -> RadioResult<Vec<Candidate>> {
        self.select_with_rng(request, StdRng::from_entropy()).await
    }

    /// Same as [`select`](Self::select) but drawing from the given random source
    #[instrument(skip(self, rng), fields(count = request.count, genre = ?request.filter.genre))]
    pub async fn select_with_rng<R: Rng + Send>(
        &self,
        request: &RadioRequest,
        rng: R,
    ) -> RadioResult<Vec<Candidate>> {
        let songs = self
            .candidates
            .fetch_candidates(&request.filter, self.config.pool_size)
            .await
            .map_err(RadioError::CandidateRetrieval)?;

        if songs.is_empty() {
            debug!("No radio candidates matched the filter");
            return Ok(Vec::new());
        }

        let album_popularity = self.album_popularity(&songs).await;

        let now = Utc::now();
        let pool_size = songs.len();
        let mut chooser = WeightedChooser::with_capacity(pool_size, rng);
        for song in songs {
            let album = song
                .album_id
                .and_then(|id| album_popularity.get(&id).copied())
                .unwrap_or_default();
            let weight = calculate_weight(&song, album, now, &self.params);
            chooser.add(song, weight);
        }

        let selectable = chooser.len();
        let mut result = Vec::with_capacity(request.count.min(selectable));
        while result.len() < request.count && !chooser.is_empty() {
            match chooser.pick() {
                Ok(song) => result.push(song),
                Err(_) => break,
            }
        }

        debug!(
            pool_size,
            excluded = pool_size - selectable,
            returned = result.len(),
            "Library radio selection complete"
        );

        Ok(result)
    }

    /// Fetch popularity for every album referenced by the pool
    ///
    /// Failure here only degrades the weighting, so it is logged and treated
    /// as "no album data".
    async fn album_popularity(&self, songs: &[Candidate]) -> AlbumPopularity {
        let album_ids: Vec<Uuid> = songs
            .iter()
            .filter_map(|song| song.album_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        if album_ids.is_empty() {
            return AlbumPopularity::new();
        }

        match self.albums.fetch_album_popularity(&album_ids).await {
            Ok(popularity) => popularity,
            Err(e) => {
                let err = RadioError::AlbumPopularity(e);
                warn!(
                    error = %err,
                    albums = album_ids.len(),
                    "Continuing radio selection without album popularity"
                );
                AlbumPopularity::new()
            }
        }
    }
}
