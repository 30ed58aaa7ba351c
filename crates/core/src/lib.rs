//! # rk-core
//!
//! Job store and lifecycle controller for relay-kit.
//!
//! This crate provides:
//! - Configuration loading from the `.relay-kit/` directory
//! - Durable job index and artifact storage
//! - The job lifecycle state machine and its controller
//! - Handoff link construction for the external notebook environment
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading and management
//! - [`store`]: Job index and artifact directory
//! - [`jobs`]: Lifecycle state machine and controller
//! - [`handoff`]: Notebook links and operator instructions

pub mod config;
pub mod handoff;
pub mod jobs;
pub mod store;
