//! Radio weight calculation
//!
//! A song's weight is its relative chance of being drawn next. The score
//! starts from a base so every song can play, then adds:
//! - Last.fm popularity (log-scaled, track level with album fallback)
//! - the listener's own play count (capped)
//! - a boost for 4 and 5 star ratings
//!
//! Recently played songs have the total multiplied down, and thumbs-down songs
//! get a weight of zero so they are never drawn.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Candidate, PopularityPair};

/// Lowest rating that earns a rating boost
const BOOSTED_RATING: u8 = 4;

/// Tunable weighting factors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightParams {
    /// Starting weight for every eligible song
    pub base_weight: f64,
    /// Multiplier applied to the log-scaled Last.fm score
    pub popularity_factor: f64,
    /// Weight added per personal play
    pub user_factor: f64,
    /// Personal plays above this are ignored
    pub max_user_plays: u32,
    /// Weight added per star for 4+ star songs
    pub rating_factor: f64,
    /// Songs played within this many days are penalised
    pub recency_days: i64,
    /// Multiplier for recently played songs
    pub recency_penalty: f64,
}

impl Default for WeightParams {
    fn default() -> Self {
        Self {
            base_weight: 10.0,
            popularity_factor: 5.0,
            user_factor: 2.0,
            max_user_plays: 50,
            rating_factor: 15.0,
            recency_days: 3,
            recency_penalty: 0.3,
        }
    }
}

/// Compute the radio weight of a candidate
///
/// `album` is the popularity of the candidate's album, or zero when unknown.
/// It is only consulted when the track itself has no popularity data.
pub fn calculate_weight(
    candidate: &Candidate,
    album: PopularityPair,
    now: DateTime<Utc>,
    params: &WeightParams,
) -> u32 {
    if candidate.is_thumbs_down() {
        return 0;
    }

    let mut weight = params.base_weight;

    let popularity = if candidate.popularity.is_known() {
        candidate.popularity
    } else {
        album
    };

    if popularity.is_known() {
        weight += popularity_score(popularity) * params.popularity_factor;
    }

    let user_plays = candidate.play_count.min(params.max_user_plays);
    weight += f64::from(user_plays) * params.user_factor;

    if candidate.rating >= BOOSTED_RATING {
        weight += f64::from(candidate.rating) * params.rating_factor;
    }

    if let Some(last_played) = candidate.last_played {
        if now.signed_duration_since(last_played) < Duration::days(params.recency_days) {
            weight *= params.recency_penalty;
        }
    }

    // `as` saturates, so absurd inputs cannot wrap around
    (weight.floor() as u32).max(1)
}

/// Log-scaled popularity, so a handful of viral tracks cannot drown out the
/// rest of the library
fn popularity_score(popularity: PopularityPair) -> f64 {
    ((popularity.listeners as f64) + 1.0).log10() + ((popularity.playcount as f64) + 1.0).log10()
}
