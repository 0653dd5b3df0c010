use thiserror::Error;

use crate::project::ValidationError;

#[derive(Error, Debug)]
pub enum DevdeckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error for key '{key}': {message}")]
    Storage { key: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("GUI error: {0}")]
    GuiError(String),

    #[error("Failed to launch '{program}': {message}")]
    Launch { program: String, message: String },

    #[error("Could not determine home directory (${0} is not set)")]
    HomeDirUnavailable(&'static str),

    #[error("Invalid project: {0}")]
    Validation(#[from] ValidationError),

    #[error("No project matches '{0}'")]
    ProjectNotFound(String),
}

pub type Result<T> = std::result::Result<T, DevdeckError>;
