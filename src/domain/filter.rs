//! Whole-line document filter.

use super::rules::PruneRules;

/// A line dropped by the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedLine {
    /// 1-based position in the input document
    pub line_number: usize,
    pub text: String,
}

/// Result of filtering a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    pub content: String,
    pub scanned_lines: usize,
    pub removed: Vec<RemovedLine>,
}

impl FilterOutcome {
    pub fn is_unchanged(&self) -> bool {
        self.removed.is_empty()
    }
}

/// Drop every line of `document` rejected by `rules`.
///
/// Lines are split and rejoined on `\n`, so a trailing newline survives and
/// `\r` stays attached to its line.
pub fn filter_document(document: &str, rules: &PruneRules) -> FilterOutcome {
    let mut kept: Vec<&str> = Vec::new();
    let mut removed = Vec::new();
    let mut scanned_lines = 0usize;

    for (index, line) in document.split('\n').enumerate() {
        scanned_lines += 1;
        if rules.keeps(line) {
            kept.push(line);
        } else {
            tracing::debug!(line = index + 1, text = line, "dropping line");
            removed.push(RemovedLine {
                line_number: index + 1,
                text: line.to_string(),
            });
        }
    }

    FilterOutcome {
        content: kept.join("\n"),
        scanned_lines,
        removed,
    }
}
