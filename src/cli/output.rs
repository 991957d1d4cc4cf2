//! Output formatting utilities

use crate::application::PruneReport;
use crate::domain::RemovedLine;

/// Printed after a successful write.
pub const SUCCESS_MESSAGE: &str = "✅ Removed references to deleted files from Xcode project";

/// Follow-up hint printed after the success message.
pub const NEXT_STEP_HINT: &str = "Now run: Clean Build Folder (Cmd+Shift+K) and Build (Cmd+B)";

/// Format removed lines as `<line>: <text>`, one per line.
pub fn format_removed_lines(removed: &[RemovedLine]) -> String {
    if removed.is_empty() {
        return "No matching lines".to_string();
    }

    let mut output = String::new();
    for line in removed {
        output.push_str(&format!("{:>6}: {}\n", line.line_number, line.text.trim()));
    }
    output
}

/// Format the end-of-run summary.
pub fn format_report(report: &PruneReport, verbose: bool) -> String {
    let mut output = String::new();

    if report.dry_run {
        output.push_str(&format!(
            "Dry run: would remove {} of {} line(s) from {}\n",
            report.removed_count(),
            report.scanned_lines,
            report.path.display()
        ));
        if report.removed_count() > 0 {
            output.push_str(&format_removed_lines(&report.removed));
        }
        return output;
    }

    if verbose && report.removed_count() > 0 {
        output.push_str(&format_removed_lines(&report.removed));
    }
    output.push_str(&format!(
        "Removed {} line(s) from {}\n",
        report.removed_count(),
        report.path.display()
    ));
    output.push_str(SUCCESS_MESSAGE);
    output.push('\n');
    output.push_str(NEXT_STEP_HINT);
    output.push('\n');
    output
}
