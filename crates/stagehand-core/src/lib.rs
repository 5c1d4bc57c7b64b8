//! Core data types for the stagehand release tool.
//!
//! This crate defines what a release run operates on: the static table of
//! publishable projects, the credentials loaded from the CI secure file,
//! and the rules for locating and naming the artifacts to upload.
//!
//! This crate is intentionally free of async code and network I/O.

pub mod artifacts;
pub mod credentials;
pub mod project;
