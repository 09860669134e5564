//! Candidate builders for selector tests

use chrono::{Duration, Utc};
use resonance_library_radio::{Candidate, PopularityPair};
use uuid::Uuid;

/// Builder for radio candidates
#[derive(Debug, Clone)]
pub struct CandidateBuilder {
    candidate: Candidate,
}

impl CandidateBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            candidate: Candidate::new(Uuid::new_v4(), title),
        }
    }

    pub fn album(mut self, album_id: Uuid) -> Self {
        self.candidate.album_id = Some(album_id);
        self
    }

    pub fn rating(mut self, rating: u8) -> Self {
        self.candidate.rating = rating;
        self
    }

    pub fn plays(mut self, play_count: u32) -> Self {
        self.candidate.play_count = play_count;
        self
    }

    pub fn played_days_ago(mut self, days: i64) -> Self {
        self.candidate.last_played = Some(Utc::now() - Duration::days(days));
        self
    }

    pub fn popularity(mut self, listeners: u64, playcount: u64) -> Self {
        self.candidate.popularity = PopularityPair::new(listeners, playcount);
        self
    }

    pub fn build(self) -> Candidate {
        self.candidate
    }
}

/// `n` unrated songs titled "Song 0".."Song n-1"
pub fn plain_songs(n: usize) -> Vec<Candidate> {
    (0..n)
        .map(|i| CandidateBuilder::new(&format!("Song {}", i)).build())
        .collect()
}
