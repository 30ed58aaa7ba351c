//! # rk-protocol
//!
//! Core protocol definitions and data models for relay-kit.
//!
//! This crate defines all shared data structures used for:
//! - Durable job records and their lifecycle status
//! - Step handoff payloads consumed by the external notebook environment
//! - Status reports rendered by presentation surfaces
//!
//! ## Modules
//!
//! - [`job_models`]: Job records, status, parameters, and reports
//! - [`handoff_models`]: Notebook templates and handoff payloads
//!
//! ## Design Principles
//!
//! - Minimal dependencies: Only serde and ts-rs
//! - TypeScript generation: All types derive `TS` for client compatibility
//! - Independent compilation: No dependencies on other relay-kit crates

pub mod handoff_models;
pub mod job_models;

// Re-export all public types for convenience
pub use handoff_models::*;
pub use job_models::*;
