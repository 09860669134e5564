//! Popularity scan progress snapshots
//!
//! The running job publishes immutable [`PopularityScanStatus`] snapshots into
//! a [`ScanStatusStore`]; readers always get a complete snapshot and never
//! block the job.

use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};

use crate::providers::EntityKind;

/// Point-in-time view of a popularity scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularityScanStatus {
    pub running: bool,
    pub total_artists: usize,
    pub scanned_artists: usize,
    pub total_albums: usize,
    pub scanned_albums: usize,
    pub total_tracks: usize,
    pub scanned_tracks: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PopularityScanStatus {
    /// Snapshot for a run that could not list its work
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            running: false,
            error: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn total(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Artist => self.total_artists,
            EntityKind::Album => self.total_albums,
            EntityKind::Track => self.total_tracks,
        }
    }

    pub fn scanned(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Artist => self.scanned_artists,
            EntityKind::Album => self.scanned_albums,
            EntityKind::Track => self.scanned_tracks,
        }
    }
}

/// Number of entities of each kind queued for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanTotals {
    pub artists: usize,
    pub albums: usize,
    pub tracks: usize,
}

impl ScanTotals {
    pub fn get(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Artist => self.artists,
            EntityKind::Album => self.albums,
            EntityKind::Track => self.tracks,
        }
    }

    fn snapshot(
        &self,
        running: bool,
        scanned: impl Fn(EntityKind) -> usize,
    ) -> PopularityScanStatus {
        PopularityScanStatus {
            running,
            total_artists: self.artists,
            scanned_artists: scanned(EntityKind::Artist),
            total_albums: self.albums,
            scanned_albums: scanned(EntityKind::Album),
            total_tracks: self.tracks,
            scanned_tracks: scanned(EntityKind::Track),
            error: None,
        }
    }

    /// Snapshot published once the work lists are known
    pub fn started(&self) -> PopularityScanStatus {
        self.snapshot(true, |_| 0)
    }

    /// Snapshot after `scanned` entities of `kind` have been processed
    ///
    /// Kinds earlier in scan order are reported as fully scanned, later
    /// kinds as not started.
    pub fn progress(&self, kind: EntityKind, scanned: usize) -> PopularityScanStatus {
        self.snapshot(true, |k| match k.cmp(&kind) {
            std::cmp::Ordering::Less => self.get(k),
            std::cmp::Ordering::Equal => scanned,
            std::cmp::Ordering::Greater => 0,
        })
    }

    /// Final snapshot of a run that walked every entity
    pub fn completed(&self) -> PopularityScanStatus {
        self.snapshot(false, |k| self.get(k))
    }
}

/// Shared slot holding the latest published snapshot
#[derive(Debug)]
pub struct ScanStatusStore {
    slot: ArcSwap<PopularityScanStatus>,
}

impl ScanStatusStore {
    pub fn new() -> Self {
        Self {
            slot: ArcSwap::from_pointee(PopularityScanStatus::default()),
        }
    }

    /// Latest snapshot
    pub fn current(&self) -> Arc<PopularityScanStatus> {
        self.slot.load_full()
    }

    /// Replace the current snapshot
    pub fn publish(&self, status: PopularityScanStatus) {
        self.slot.store(Arc::new(status));
    }
}

impl Default for ScanStatusStore {
    fn default() -> Self {
        Self::new()
    }
}
