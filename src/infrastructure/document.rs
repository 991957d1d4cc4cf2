//! Target file access

use crate::error::{PruneError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// How the filtered document is written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Write a sibling temp file, then rename it over the target
    #[default]
    Atomic,
    /// Truncate and overwrite the target in place
    Direct,
}

/// The file being edited.
#[derive(Debug, Clone)]
pub struct DocumentFile {
    path: PathBuf,
}

impl DocumentFile {
    pub fn new(path: PathBuf) -> Self {
        DocumentFile { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file as UTF-8 text.
    pub fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| PruneError::from_io(e, &self.path))
    }

    /// Replace the file content.
    pub fn write(&self, content: &str, mode: WriteMode) -> Result<()> {
        tracing::debug!(path = %self.path.display(), ?mode, "writing document");
        match mode {
            WriteMode::Direct => {
                fs::write(&self.path, content).map_err(|e| PruneError::from_io(e, &self.path))
            }
            WriteMode::Atomic => self.write_atomic(content),
        }
    }

    /// Best-effort atomic replace: write to a temp file next to the resolved
    /// target, then rename into place.
    ///
    /// Symlinks are followed so the link keeps pointing at the edited file.
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    fn write_atomic(&self, content: &str) -> Result<()> {
        let target = match fs::canonicalize(&self.path) {
            Ok(resolved) => resolved,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => self.path.clone(),
            Err(e) => return Err(PruneError::from_io(e, &self.path)),
        };

        // Ask the OS for write access up front; the rename alone would bypass it.
        let permissions = match fs::OpenOptions::new().write(true).open(&target) {
            Ok(file) => Some(
                file.metadata()
                    .map_err(|e| PruneError::from_io(e, &self.path))?
                    .permissions(),
            ),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(PruneError::from_io(e, &self.path)),
        };

        let tmp_name = format!(
            "{}.refprune-tmp-{}",
            target
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("document"),
            std::process::id()
        );
        let tmp_path = target.with_file_name(tmp_name);

        if let Err(e) = fs::write(&tmp_path, content) {
            let _ = fs::remove_file(&tmp_path);
            return Err(PruneError::from_io(e, &tmp_path));
        }

        if let Some(permissions) = permissions {
            if let Err(e) = fs::set_permissions(&tmp_path, permissions) {
                let _ = fs::remove_file(&tmp_path);
                return Err(PruneError::from_io(e, &tmp_path));
            }
        }

        if cfg!(windows) && target.exists() {
            if let Err(e) = fs::remove_file(&target) {
                let _ = fs::remove_file(&tmp_path);
                return Err(PruneError::from_io(e, &self.path));
            }
        }

        if let Err(e) = fs::rename(&tmp_path, &target) {
            let _ = fs::remove_file(&tmp_path);
            return Err(PruneError::from_io(e, &self.path));
        }
        Ok(())
    }
}
