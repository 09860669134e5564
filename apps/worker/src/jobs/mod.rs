//! Background job definitions and handlers
//!
//! This module contains long-running library maintenance tasks:
//! - Popularity sync (artist, album and track popularity refresh)

pub mod popularity_sync;
