//! Common test utilities and helpers for lifecycle tests.
//!
//! This module provides shared functionality across the integration
//! tests: a disk-backed tracker rooted in a temp directory and sample
//! uploads to feed it.

pub mod fixtures;

pub use fixtures::*;
