//! Sonatype Nexus staging REST protocol: endpoint URL layout, HTTP client
//! construction, basic-auth application, staging session start, and raw
//! artifact deploy.

pub mod auth;
pub mod client;
pub mod deploy;
pub mod endpoint;
pub mod staging;
