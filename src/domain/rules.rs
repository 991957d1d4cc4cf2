//! Line retention rules

use crate::error::{PruneError, Result};

/// Files whose project references are removed by default.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    "PDFViewWrapper.swift",
    "PDFDrawerContainer.swift",
    "RightSideDrawerView.swift",
    "PDFFormFieldsView.swift",
    "PDFManager.swift",
    "SamplePDFTestView.swift",
    "PDFDrawerExampleView.swift",
];

/// Lines containing this name are always kept.
pub const DEFAULT_EXCEPTION_MARKER: &str = "PDFDrawerComponents.swift";

/// Exclusion list plus the exception marker that overrides it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneRules {
    exclusions: Vec<String>,
    exception_marker: String,
}

impl PruneRules {
    /// Build a validated rule set.
    ///
    /// The exclusion list must be non-empty and contain no empty entries,
    /// since an empty substring matches every line.
    pub fn new(exclusions: Vec<String>, exception_marker: String) -> Result<Self> {
        if exclusions.is_empty() {
            return Err(PruneError::Config("exclusion list is empty".to_string()));
        }
        if exclusions.iter().any(|name| name.is_empty()) {
            return Err(PruneError::Config(
                "exclusion list contains an empty entry".to_string(),
            ));
        }
        if exception_marker.is_empty() {
            return Err(PruneError::Config("exception marker is empty".to_string()));
        }

        Ok(PruneRules {
            exclusions,
            exception_marker,
        })
    }

    pub fn exclusions(&self) -> &[String] {
        &self.exclusions
    }

    pub fn exception_marker(&self) -> &str {
        &self.exception_marker
    }

    /// Decide whether `line` survives the filter.
    pub fn keeps(&self, line: &str) -> bool {
        if line.contains(self.exception_marker.as_str()) {
            return true;
        }
        self.matched_exclusion(line).is_none()
    }

    /// First exclusion found in `line`, if any.
    pub fn matched_exclusion(&self, line: &str) -> Option<&str> {
        self.exclusions
            .iter()
            .map(String::as_str)
            .find(|name| line.contains(name))
    }
}

impl Default for PruneRules {
    fn default() -> Self {
        PruneRules {
            exclusions: DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect(),
            exception_marker: DEFAULT_EXCEPTION_MARKER.to_string(),
        }
    }
}
