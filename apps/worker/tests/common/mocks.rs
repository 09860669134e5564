//! In-memory providers for worker integration tests
//!
//! `MockCatalog` serves fixed entity lists and can fail a chosen listing.
//! `MockEnricher` records every call in order and can fail specific
//! entities, slow itself down, or capture the published status on each call.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use resonance_worker::{
    BoxError, EntityCatalog, EntityKind, EntityRef, ListPhase, PopularityEnricher,
    PopularityScanStatus, ScanStatusStore,
};
use uuid::Uuid;

/// Catalog backed by fixed lists per kind and phase
#[derive(Default)]
pub struct MockCatalog {
    without: HashMap<EntityKind, Vec<EntityRef>>,
    with: HashMap<EntityKind, Vec<EntityRef>>,
    fail_on: Option<(EntityKind, ListPhase)>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entities that have no popularity data yet
    pub fn without_popularity(mut self, kind: EntityKind, entities: Vec<EntityRef>) -> Self {
        self.without.insert(kind, entities);
        self
    }

    /// Entities that already have popularity data
    pub fn with_popularity(mut self, kind: EntityKind, entities: Vec<EntityRef>) -> Self {
        self.with.insert(kind, entities);
        self
    }

    /// Make one listing call fail
    pub fn failing_on(mut self, kind: EntityKind, phase: ListPhase) -> Self {
        self.fail_on = Some((kind, phase));
        self
    }

    pub fn build(self) -> Arc<Self> {
        Arc::new(self)
    }

    fn list(&self, kind: EntityKind, phase: ListPhase) -> Result<Vec<EntityRef>, BoxError> {
        if self.fail_on == Some((kind, phase)) {
            return Err(format!("{} listing unavailable", kind.plural()).into());
        }
        let lists = match phase {
            ListPhase::WithoutPopularity => &self.without,
            ListPhase::WithPopularity => &self.with,
        };
        Ok(lists.get(&kind).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl EntityCatalog for MockCatalog {
    async fn fetch_without_popularity(&self, kind: EntityKind) -> Result<Vec<EntityRef>, BoxError> {
        self.list(kind, ListPhase::WithoutPopularity)
    }

    async fn fetch_with_popularity(&self, kind: EntityKind) -> Result<Vec<EntityRef>, BoxError> {
        self.list(kind, ListPhase::WithPopularity)
    }
}

/// Enricher that records the order of update calls
#[derive(Default)]
pub struct MockEnricher {
    calls: Mutex<Vec<(EntityKind, Uuid)>>,
    failing: HashSet<Uuid>,
    delay: Duration,
    observed: Mutex<Option<Arc<ScanStatusStore>>>,
    snapshots: Mutex<Vec<PopularityScanStatus>>,
}

impl MockEnricher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Enricher whose calls fail for the given entities
    pub fn failing_for(ids: impl IntoIterator<Item = Uuid>) -> Arc<Self> {
        Arc::new(Self {
            failing: ids.into_iter().collect(),
            ..Self::default()
        })
    }

    /// Enricher that takes `delay` per call
    pub fn slow(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            delay,
            ..Self::default()
        })
    }

    /// Capture the current snapshot of `store` at the start of every call
    pub fn observe(&self, store: Arc<ScanStatusStore>) {
        *self.observed.lock().unwrap() = Some(store);
    }

    pub fn calls(&self) -> Vec<(EntityKind, Uuid)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn snapshots(&self) -> Vec<PopularityScanStatus> {
        self.snapshots.lock().unwrap().clone()
    }

    async fn record(&self, kind: EntityKind, entity: &EntityRef) -> Result<(), BoxError> {
        let store = self.observed.lock().unwrap().clone();
        if let Some(store) = store {
            self.snapshots
                .lock()
                .unwrap()
                .push(store.current().as_ref().clone());
        }

        self.calls.lock().unwrap().push((kind, entity.id));

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if self.failing.contains(&entity.id) {
            return Err(format!("no popularity data for '{}'", entity.name).into());
        }
        Ok(())
    }
}

#[async_trait]
impl PopularityEnricher for MockEnricher {
    async fn update_artist_info(&self, artist: &EntityRef) -> Result<(), BoxError> {
        self.record(EntityKind::Artist, artist).await
    }

    async fn update_album_info(&self, album: &EntityRef) -> Result<(), BoxError> {
        self.record(EntityKind::Album, album).await
    }

    async fn update_track_popularity(&self, track: &EntityRef) -> Result<(), BoxError> {
        self.record(EntityKind::Track, track).await
    }
}
