use crate::error::{RepoToolsError, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "strip-copyright")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Remove the fixed two-line copyright header from source files")]
#[command(
    long_about = "strip-copyright walks a source tree and removes the known two-line \
                  copyright header from the top of every matching source file, in place. \
                  Files without the exact header are left untouched."
)]
pub struct StripCli {
    /// Root directory of the source tree to process
    pub directory: PathBuf,
}

impl StripCli {
    /// Invocation-level check, performed before any file is touched.
    pub fn validate(&self) -> Result<()> {
        if !self.directory.exists() {
            return Err(RepoToolsError::InvalidPath {
                path: self.directory.display().to_string(),
            });
        }
        if !self.directory.is_dir() {
            return Err(RepoToolsError::NotADirectory {
                path: self.directory.display().to_string(),
            });
        }
        Ok(())
    }
}
