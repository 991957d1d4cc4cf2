//! Domain layer - Line filtering rules and logic

pub mod filter;
pub mod rules;

pub use filter::{filter_document, FilterOutcome, RemovedLine};
pub use rules::{PruneRules, DEFAULT_EXCEPTION_MARKER, DEFAULT_EXCLUSIONS};
