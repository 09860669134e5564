//! Resonance background worker
//!
//! Hosts the popularity sync job, which walks every artist, album and track
//! in the library and refreshes its Last.fm popularity through an external
//! enrichment provider, publishing progress snapshots as it goes.

pub mod config;
pub mod error;
pub mod jobs;
pub mod providers;
pub mod status;
pub mod telemetry;

pub use config::Config;
pub use error::{ErrorSeverity, ListPhase, WorkerError, WorkerResult};
pub use jobs::popularity_sync::PopularitySync;
pub use providers::{BoxError, EntityCatalog, EntityKind, EntityRef, PopularityEnricher};
pub use status::{PopularityScanStatus, ScanStatusStore, ScanTotals};
