//! Rule file loading

use crate::domain::{PruneRules, DEFAULT_EXCEPTION_MARKER, DEFAULT_EXCLUSIONS};
use crate::error::{PruneError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Project file edited when no path is given.
pub const DEFAULT_TARGET: &str = "XCAChatGPT.xcodeproj/project.pbxproj";

/// Contents of a TOML rule file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    pub target: Option<PathBuf>,
    pub exception_marker: Option<String>,
    pub exclusions: Option<Vec<String>>,
}

impl RuleConfig {
    /// Load a rule file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| PruneError::from_io(e, path))?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| PruneError::Config(format!("Failed to parse rule file: {}", e)))
    }

    /// Merge command-line overrides onto this file and fall back to built-in defaults.
    pub fn resolve(
        self,
        target: Option<PathBuf>,
        exclusions: Vec<String>,
        exception_marker: Option<String>,
    ) -> Result<(PathBuf, PruneRules)> {
        let target = target
            .or(self.target)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET));

        let exclusions = if !exclusions.is_empty() {
            exclusions
        } else {
            self.exclusions.unwrap_or_else(|| {
                DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect()
            })
        };

        let exception_marker = exception_marker
            .or(self.exception_marker)
            .unwrap_or_else(|| DEFAULT_EXCEPTION_MARKER.to_string());

        let rules = PruneRules::new(exclusions, exception_marker)?;
        Ok((target, rules))
    }
}
