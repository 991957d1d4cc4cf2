//! refprune - Remove project file references to deleted sources
//!
//! Reads a line-oriented project file, drops every line naming one of the
//! excluded files unless it also names the exception marker, and writes the
//! result back to the same path.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::PruneError;
