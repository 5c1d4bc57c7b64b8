//! Shared utilities for the stagehand release tool.
//!
//! This crate provides the cross-cutting concerns used by the other
//! stagehand crates: the unified error type and terminal status output.

pub mod errors;
pub mod progress;
