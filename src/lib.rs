pub mod cli;
pub mod error;
pub mod extractor;
pub mod stripper;
pub mod ui;

// Public API re-exports
pub use cli::StripCli;
pub use error::{RepoToolsError, Result, UserFriendlyError};
pub use extractor::{render_command_list, CommandExtractor, COMMANDS_FILE};
pub use stripper::{HeaderStripper, StripOutcome, StripSummary, COPYRIGHT_LINE, SOURCE_EXTENSION};
pub use ui::OutputFormatter;

use std::path::Path;

/// Extract command names from a markdown command table.
pub fn extract_commands_from<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    CommandExtractor::new()?.extract_from_file(path)
}

/// Strip the copyright header from every matching file under `root`,
/// without printing the per-file report lines.
pub fn strip_copyright_tree<P: AsRef<Path>>(root: P) -> Result<StripSummary> {
    HeaderStripper::new().strip_tree(root, &OutputFormatter::quiet())
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_extract_commands_from() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("commands.md");
        fs::write(&path, "| \\sum | summation |\n| \\prod | product |\n").unwrap();

        let commands = extract_commands_from(&path).unwrap();
        assert_eq!(commands, vec!["sum", "prod"]);
    }

    #[test]
    fn test_strip_copyright_tree() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("model.swift");
        fs::write(&path, "// Copyright 2024 Lie Yan\n\nstruct Model {}\n").unwrap();

        let summary = strip_copyright_tree(temp_dir.path()).unwrap();
        assert_eq!(summary.files_stripped, 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "struct Model {}\n");
    }

    #[test]
    fn test_version_info() {
        assert!(!version_info().is_empty());
    }
}
