//! Error types for refprune

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for refprune
#[derive(Debug, Error)]
pub enum PruneError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PruneError {
    /// Map an I/O error on `path` to the matching variant
    pub fn from_io(err: std::io::Error, path: &std::path::Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => PruneError::FileNotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => {
                PruneError::PermissionDenied(path.to_path_buf())
            }
            _ => PruneError::Io(err),
        }
    }

    /// Get the exit code for this error
    ///
    /// `2` is left to clap for usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            PruneError::FileNotFound(_) => 3,
            PruneError::PermissionDenied(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            PruneError::FileNotFound(path) => {
                format!(
                    "File not found: {}\n\n\
                    Suggestions:\n\
                    • Run refprune from the directory containing the project\n\
                    • Pass the project file explicitly: refprune path/to/project.pbxproj\n\
                    • Set 'target' in a rule file and pass it with --rules",
                    path.display()
                )
            }
            PruneError::PermissionDenied(path) => {
                format!(
                    "Permission denied: {}\n\n\
                    Suggestions:\n\
                    • Check that the file is readable and writable by the current user\n\
                    • Close any application holding the file open\n\
                    • Use --dry-run to preview the changes without writing",
                    path.display()
                )
            }
            PruneError::Config(msg) if msg.contains("exclusion") => {
                format!(
                    "{}\n\n\
                    Provide at least one non-empty name to remove, e.g.\n\
                    refprune --exclude OldView.swift",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using PruneError
pub type Result<T> = std::result::Result<T, PruneError>;
