//! Common test utilities for worker integration tests
//!
//! Provides an in-memory catalog, a recording enricher and polling helpers
//! so the popularity sync can run without a database or network.

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
