use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("invalid status '{0}', expected one of: completada, pendiente, en_progreso")]
    InvalidStatus(String),

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("task not found: {0}")]
    TaskNotFound(String),

    #[error("could not build task pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("unexpected error: {0}")]
    Io(#[from] io::Error),
}
