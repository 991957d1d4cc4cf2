//! Infrastructure layer - File I/O and rule files

pub mod config;
pub mod document;

pub use config::{RuleConfig, DEFAULT_TARGET};
pub use document::{DocumentFile, WriteMode};
