use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoToolsError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("File is not valid UTF-8: {path}")]
    InvalidEncoding { path: String },

    #[error("Pattern compilation failed: {0}")]
    Pattern(#[from] regex::Error),
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for RepoToolsError {
    fn user_message(&self) -> String {
        match self {
            RepoToolsError::InvalidPath { path } => {
                format!("Path does not exist: {}", path)
            }
            RepoToolsError::NotADirectory { path } => {
                format!("Error: {} is not a directory", path)
            }
            RepoToolsError::InvalidEncoding { path } => {
                format!("File is not valid UTF-8 text: {}", path)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            RepoToolsError::InvalidPath { .. } => {
                Some("Check that the path exists and is spelled correctly.".to_string())
            }
            RepoToolsError::NotADirectory { .. } => {
                Some("Pass the root directory of the source tree, not a single file.".to_string())
            }
            RepoToolsError::InvalidEncoding { .. } => {
                Some("Only UTF-8 encoded text files are supported.".to_string())
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RepoToolsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_friendly_messages() {
        let error = RepoToolsError::NotADirectory {
            path: "some-file.txt".to_string(),
        };
        assert!(error.user_message().contains("not a directory"));
        assert!(error.suggestion().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = RepoToolsError::from(io_error);
        assert!(matches!(error, RepoToolsError::Io(_)));
        assert!(error.user_message().contains("IO operation failed"));
    }
}
