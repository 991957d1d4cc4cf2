//! Application layer - Use cases and orchestration

pub mod prune;

pub use prune::{prune_file, PruneOptions, PruneReport};
