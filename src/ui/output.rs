use crate::error::UserFriendlyError;
use console::{style, Term};
use std::path::Path;

/// Terminal output for the tools. The stripper's stdout lines are part of
/// its contract and are printed verbatim; diagnostics go to stderr with
/// color when the terminal supports it.
pub struct OutputFormatter {
    use_colors: bool,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new() -> Self {
        Self {
            use_colors: Term::stderr().features().colors_supported(),
            quiet: false,
        }
    }

    /// Suppress the contract lines on stdout. Used by library callers that
    /// only want the returned summary.
    pub fn quiet() -> Self {
        Self {
            use_colors: false,
            quiet: true,
        }
    }

    pub fn removed(&self, path: &Path) {
        if !self.quiet {
            println!("Removed copyright from: {}", path.display());
        }
    }

    pub fn processing_complete(&self) {
        if !self.quiet {
            println!("Processing complete.");
        }
    }

    pub fn file_error(&self, path: &str, message: &str) {
        if self.use_colors {
            eprintln!("{} {}: {}", style("error:").red().bold(), path, message);
        } else {
            eprintln!("error: {}: {}", path, message);
        }
    }

    /// Invocation-level failure. Reported on standard output, matching the
    /// tool's historical behavior.
    pub fn invocation_error<E: UserFriendlyError>(&self, error: &E) {
        println!("{}", error.user_message());
        if let Some(suggestion) = error.suggestion() {
            println!("{}", suggestion);
        }
    }

    pub fn usage(&self, program: &str) {
        println!("Usage: {} <directory>", program);
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new()
    }
}
