//! Prune use case
//!
//! Single pass over the target file: read, filter, write back.

use crate::domain::{filter_document, PruneRules, RemovedLine};
use crate::error::Result;
use crate::infrastructure::{DocumentFile, WriteMode};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct PruneOptions {
    pub path: PathBuf,
    pub rules: PruneRules,
    pub dry_run: bool,
    pub write_mode: WriteMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneReport {
    pub path: PathBuf,
    pub scanned_lines: usize,
    pub removed: Vec<RemovedLine>,
    pub dry_run: bool,
}

impl PruneReport {
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }
}

/// Remove every line of the target file rejected by the rules.
///
/// The file is left untouched if the read fails or `dry_run` is set.
pub fn prune_file(options: &PruneOptions) -> Result<PruneReport> {
    let document = DocumentFile::new(options.path.clone());
    let content = document.read()?;

    let outcome = filter_document(&content, &options.rules);
    tracing::info!(
        path = %options.path.display(),
        scanned = outcome.scanned_lines,
        removed = outcome.removed.len(),
        "filtered document"
    );

    if outcome.is_unchanged() {
        tracing::debug!("no lines matched the exclusion list");
    }

    if !options.dry_run {
        document.write(&outcome.content, options.write_mode)?;
    }

    Ok(PruneReport {
        path: document.path().to_path_buf(),
        scanned_lines: outcome.scanned_lines,
        removed: outcome.removed,
        dry_run: options.dry_run,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PruneError;
    use std::fs;
    use tempfile::TempDir;

    fn options(path: PathBuf, dry_run: bool) -> PruneOptions {
        PruneOptions {
            path,
            rules: PruneRules::default(),
            dry_run,
            write_mode: WriteMode::Atomic,
        }
    }

    #[test]
    fn test_prune_rewrites_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("project.pbxproj");
        fs::write(&path, "main.swift\nPDFManager.swift\nApp.swift\n").unwrap();

        let report = prune_file(&options(path.clone(), false)).unwrap();

        assert!(!report.dry_run);
        assert_eq!(report.removed_count(), 1);
        assert_eq!(report.removed[0].line_number, 2);
        assert_eq!(report.scanned_lines, 4);
        assert_eq!(fs::read_to_string(&path).unwrap(), "main.swift\nApp.swift\n");
    }

    #[test]
    fn test_prune_dry_run_leaves_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("project.pbxproj");
        let original = "main.swift\nPDFManager.swift\n";
        fs::write(&path, original).unwrap();

        let report = prune_file(&options(path.clone(), true)).unwrap();

        assert!(report.dry_run);
        assert_eq!(report.removed_count(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_prune_twice_is_stable() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("project.pbxproj");
        fs::write(
            &path,
            "a\nPDFViewWrapper.swift\nPDFDrawerContainer.swift, PDFDrawerComponents.swift\nb",
        )
        .unwrap();

        prune_file(&options(path.clone(), false)).unwrap();
        let after_first = fs::read_to_string(&path).unwrap();
        let second = prune_file(&options(path.clone(), false)).unwrap();

        assert_eq!(second.removed_count(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
        assert_eq!(
            after_first,
            "a\nPDFDrawerContainer.swift, PDFDrawerComponents.swift\nb"
        );
    }

    #[test]
    fn test_prune_direct_mode() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("project.pbxproj");
        fs::write(&path, "PDFManager.swift\nmain.swift").unwrap();

        let mut opts = options(path.clone(), false);
        opts.write_mode = WriteMode::Direct;
        prune_file(&opts).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "main.swift");
    }

    #[test]
    fn test_prune_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.pbxproj");

        let err = prune_file(&options(path.clone(), false)).unwrap_err();
        assert!(matches!(err, PruneError::FileNotFound(_)));
        assert!(!path.exists());
    }
}
