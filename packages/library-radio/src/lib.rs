//! Library radio selection for Resonance
//!
//! This crate builds an endless-radio style song list from the local library:
//! - Candidates are weighted by Last.fm popularity, personal play count and rating
//! - Thumbs-down (1 star) songs are excluded entirely
//! - Recently played songs are penalised
//! - Songs are drawn without replacement, so a list never repeats a track
//!
//! Storage access stays outside this crate. Callers plug in a
//! [`CandidateProvider`] and an [`AlbumPopularityProvider`].
//!
//! # Example
//!
//! ```rust,ignore
//! use resonance_library_radio::{RadioRequest, RadioSelector};
//! use resonance_shared_config::RadioConfig;
//!
//! let config = RadioConfig::default();
//! let selector = RadioSelector::new(candidates, albums, config.clone());
//!
//! let request =
//!     RadioRequest::from_params(Some(25), Some("Jazz".into()), None, None, vec![], &config);
//! let songs = selector.select(&request).await?;
//! ```

pub mod chooser;
mod error;
mod models;
mod provider;
pub mod selector;
pub mod weight;

pub use chooser::WeightedChooser;
pub use error::{BoxError, RadioError, RadioResult};
pub use models::{AlbumPopularity, Candidate, CandidateFilter, PopularityPair, RadioRequest};
pub use provider::{AlbumPopularityProvider, CandidateProvider};
pub use selector::RadioSelector;
pub use weight::{calculate_weight, WeightParams};
