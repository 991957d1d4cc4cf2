//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "refprune")]
#[command(
    about = "Remove project file lines referencing deleted source files",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Project file to edit (default: XCAChatGPT.xcodeproj/project.pbxproj)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// TOML rule file with `target`, `exclusions` and `exception_marker`
    #[arg(long, value_name = "TOML")]
    pub rules: Option<PathBuf>,

    /// File name to remove references to (repeatable, replaces the built-in list)
    #[arg(short, long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Lines containing this name are always kept
    #[arg(short, long, value_name = "NAME")]
    pub keep_marker: Option<String>,

    /// Show what would be removed without writing
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Overwrite the file in place instead of replacing it via a temp file
    #[arg(long)]
    pub no_atomic: bool,

    /// List every removed line
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["refprune"]).unwrap();
        assert!(cli.file.is_none());
        assert!(cli.exclude.is_empty());
        assert!(!cli.dry_run);
        assert!(!cli.no_atomic);
    }

    #[test]
    fn test_repeated_excludes() {
        let cli = Cli::try_parse_from([
            "refprune",
            "app.pbxproj",
            "-e",
            "A.swift",
            "--exclude",
            "B.swift",
            "-k",
            "Keep.swift",
            "-n",
        ])
        .unwrap();

        assert_eq!(cli.file, Some(PathBuf::from("app.pbxproj")));
        assert_eq!(cli.exclude, vec!["A.swift", "B.swift"]);
        assert_eq!(cli.keep_marker.as_deref(), Some("Keep.swift"));
        assert!(cli.dry_run);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
