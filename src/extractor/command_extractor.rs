use crate::error::Result;
use regex::Regex;
use std::path::Path;

/// Markdown file holding the command reference table, resolved against the
/// working directory.
pub const COMMANDS_FILE: &str = "commands.md";

/// Table rows that name a command start with a pipe, a space, and a
/// backslash-prefixed identifier, e.g. `| \frac | ... |`.
const COMMAND_ROW_PATTERN: &str = r"^\| \\([A-Za-z]+)";

pub struct CommandExtractor {
    row_pattern: Regex,
}

impl CommandExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            row_pattern: Regex::new(COMMAND_ROW_PATTERN)?,
        })
    }

    /// Scan the text line by line and collect the command name from every
    /// matching table row. Duplicates are kept; order is top-to-bottom.
    pub fn extract_commands(&self, text: &str) -> Vec<String> {
        text.lines()
            .filter_map(|line| self.row_pattern.captures(line))
            .map(|caps| caps[1].to_string())
            .collect()
    }

    /// Read the file at `path` and extract its command names. Read and
    /// decode failures propagate to the caller.
    pub fn extract_from_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Ok(self.extract_commands(&text))
    }
}

/// Render the extracted names as a bracketed, quoted, comma-separated list:
/// `["one", "two"]`, or `[]` when nothing matched.
pub fn render_command_list(commands: &[String]) -> String {
    let quoted: Vec<String> = commands.iter().map(|c| format!("\"{}\"", c)).collect();
    format!("[{}]", quoted.join(", "))
}
