//! Popularity sync job
//!
//! Walks every artist, album and track in the library and asks the
//! [`PopularityEnricher`] to refresh its popularity data. Entities that have
//! never been enriched go first within each kind so a fresh library becomes
//! useful for radio weighting as early as possible.
//!
//! At most one scan runs per [`PopularitySync`] at a time. Progress is
//! published as [`PopularityScanStatus`] snapshots after every entity.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use resonance_shared_config::PopularitySyncConfig;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::error::{ListPhase, WorkerError, WorkerResult};
use crate::providers::{BoxError, EntityCatalog, EntityKind, EntityRef, PopularityEnricher};
use crate::status::{PopularityScanStatus, ScanStatusStore, ScanTotals};

/// Entities to enrich for one kind, in processing order
type WorkQueue = (EntityKind, Vec<EntityRef>);

/// Background popularity refresh with single-run guarantee
#[derive(Clone)]
pub struct PopularitySync {
    catalog: Arc<dyn EntityCatalog>,
    enricher: Arc<dyn PopularityEnricher>,
    config: PopularitySyncConfig,
    running: Arc<AtomicBool>,
    status: Arc<ScanStatusStore>,
    shutdown: CancellationToken,
    current_run: Arc<Mutex<Option<CancellationToken>>>,
}

impl std::fmt::Debug for PopularitySync {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PopularitySync")
            .field("config", &self.config)
            .field("running", &self.is_running())
            .finish_non_exhaustive()
    }
}

/// Releases the run flag when a scan task finishes, however it finishes
struct RunFlagGuard {
    running: Arc<AtomicBool>,
    current_run: Arc<Mutex<Option<CancellationToken>>>,
}

impl Drop for RunFlagGuard {
    fn drop(&mut self) {
        // Clear the token before the flag so a new run never sees a stale one
        lock_run(&self.current_run).take();
        self.running.store(false, Ordering::Release);
    }
}

fn lock_run(
    slot: &Mutex<Option<CancellationToken>>,
) -> MutexGuard<'_, Option<CancellationToken>> {
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl PopularitySync {
    pub fn new(
        catalog: Arc<dyn EntityCatalog>,
        enricher: Arc<dyn PopularityEnricher>,
        config: PopularitySyncConfig,
    ) -> Self {
        Self {
            catalog,
            enricher,
            config,
            running: Arc::new(AtomicBool::new(false)),
            status: Arc::new(ScanStatusStore::new()),
            shutdown: CancellationToken::new(),
            current_run: Arc::new(Mutex::new(None)),
        }
    }

    /// Tie scans to an application shutdown token
    ///
    /// Each run gets a child of this token, so cancelling it stops any
    /// in-flight scan.
    pub fn with_shutdown(mut self, shutdown: CancellationToken) -> Self {
        self.shutdown = shutdown;
        self
    }

    /// Shared status slot, for hosts that expose it elsewhere
    pub fn status_store(&self) -> Arc<ScanStatusStore> {
        Arc::clone(&self.status)
    }

    /// Start a scan in the background unless one is already running
    ///
    /// Returns immediately. A request made while a scan is running is a
    /// no-op, not an error.
    pub fn start(&self) {
        let _ = self.spawn_scan();
    }

    /// Like [`start`](Self::start) but hands back the task handle
    ///
    /// Returns `None` when a scan is already running.
    pub fn spawn_scan(&self) -> Option<JoinHandle<()>> {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Popularity scan already running, ignoring start request");
            return None;
        }

        let token = self.shutdown.child_token();
        *lock_run(&self.current_run) = Some(token.clone());

        let guard = RunFlagGuard {
            running: Arc::clone(&self.running),
            current_run: Arc::clone(&self.current_run),
        };
        let job = self.clone();

        Some(tokio::spawn(async move {
            let _guard = guard;
            job.run(token).await;
        }))
    }

    /// Ask the current scan to stop at the next entity boundary
    pub fn cancel(&self) {
        if let Some(token) = lock_run(&self.current_run).as_ref() {
            info!("Cancelling popularity scan");
            token.cancel();
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Latest published progress snapshot
    pub fn status(&self) -> Arc<PopularityScanStatus> {
        self.status.current()
    }

    async fn run(&self, token: CancellationToken) {
        let started = Instant::now();
        info!("Starting popularity scan");

        let queues = match self.fetch_work_queues().await {
            Ok(queues) => queues,
            Err(e) => {
                e.log();
                self.status.publish(PopularityScanStatus::failed(e.to_string()));
                return;
            }
        };

        let totals = ScanTotals {
            artists: queue_len(&queues, EntityKind::Artist),
            albums: queue_len(&queues, EntityKind::Album),
            tracks: queue_len(&queues, EntityKind::Track),
        };
        self.status.publish(totals.started());

        let delay = self.config.request_delay();
        for (kind, queue) in &queues {
            for (index, entity) in queue.iter().enumerate() {
                if token.is_cancelled() {
                    cancellation(*kind, index, queue.len()).log();
                    return;
                }

                if let Err(e) = self.enrich(*kind, entity).await {
                    WorkerError::enrichment(*kind, entity.name.as_str(), e).log();
                }

                self.status.publish(totals.progress(*kind, index + 1));

                tokio::select! {
                    _ = token.cancelled() => {
                        cancellation(*kind, index + 1, queue.len()).log();
                        return;
                    }
                    _ = tokio::time::sleep(delay) => {}
                }
            }
        }

        self.status.publish(totals.completed());
        info!(
            artists = totals.artists,
            albums = totals.albums,
            tracks = totals.tracks,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Popularity scan completed"
        );
    }

    /// Build the per-kind work queues in scan order
    ///
    /// Any listing failure aborts the run before an entity is touched.
    async fn fetch_work_queues(&self) -> WorkerResult<Vec<WorkQueue>> {
        let mut queues = Vec::with_capacity(EntityKind::ALL.len());
        for kind in EntityKind::ALL {
            queues.push((kind, self.prioritized(kind).await?));
        }
        Ok(queues)
    }

    /// Entities without popularity data first, then the ones being refreshed
    async fn prioritized(&self, kind: EntityKind) -> WorkerResult<Vec<EntityRef>> {
        let mut queue = self
            .catalog
            .fetch_without_popularity(kind)
            .await
            .map_err(|e| WorkerError::entity_list(kind, ListPhase::WithoutPopularity, e))?;

        let refresh = self
            .catalog
            .fetch_with_popularity(kind)
            .await
            .map_err(|e| WorkerError::entity_list(kind, ListPhase::WithPopularity, e))?;

        info!(
            kind = %kind,
            without_popularity = queue.len(),
            with_popularity = refresh.len(),
            "Prioritized {} for popularity scan",
            kind.plural()
        );

        queue.extend(refresh);
        Ok(queue)
    }

    async fn enrich(&self, kind: EntityKind, entity: &EntityRef) -> Result<(), BoxError> {
        match kind {
            EntityKind::Artist => self.enricher.update_artist_info(entity).await,
            EntityKind::Album => self.enricher.update_album_info(entity).await,
            EntityKind::Track => self.enricher.update_track_popularity(entity).await,
        }
    }
}

/// Error recorded when a run stops early
fn cancellation(kind: EntityKind, scanned: usize, total: usize) -> WorkerError {
    WorkerError::cancelled(format!(
        "popularity scan stopped after {} of {} {}",
        scanned,
        total,
        kind.plural()
    ))
}

fn queue_len(queues: &[WorkQueue], kind: EntityKind) -> usize {
    queues
        .iter()
        .find(|(k, _)| *k == kind)
        .map_or(0, |(_, queue)| queue.len())
}
