//! Error types for the sv-app layer.

use std::path::PathBuf;

use sv_core::SvError;
use sv_graph::GraphError;

/// Application error shared by the CLI and the desktop viewer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },

    #[error("Invalid YAML: {message}")]
    InvalidYaml { message: String },

    #[error("No root found")]
    NoRoot,

    #[error("No structure loaded")]
    NotLoaded,

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Document error: {0}")]
    Document(String),

    #[error(transparent)]
    Outline(#[from] SvError),
}

/// Result type for sv-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// One-line text for a status bar.
    pub fn status(&self) -> String {
        match self {
            AppError::FileRead { .. } => "Failed to read file".to_string(),
            AppError::InvalidJson { .. } | AppError::InvalidYaml { .. } => {
                "Invalid JSON".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl From<GraphError> for AppError {
    fn from(err: GraphError) -> Self {
        AppError::Document(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidJson {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_messages_are_short() {
        let read = AppError::FileRead {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(read.status(), "Failed to read file");
        assert_eq!(
            AppError::InvalidYaml {
                message: "bad indent".into()
            }
            .status(),
            "Invalid JSON"
        );
        assert_eq!(AppError::NoRoot.status(), "No root found");
    }
}
