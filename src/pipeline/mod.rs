//! Extraction pipeline
//!
//! Artifacts, progress hooks, the two-pass runner and its background worker.

pub mod artifacts;
pub mod observer;
pub mod runner;
pub mod worker;
