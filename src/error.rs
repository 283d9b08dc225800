//! Crate-level error type and `Result` alias.
//! Wraps filesystem, directory-walk and pattern errors, and carries semantic
//! variants for a missing submission template and a tool that could not be started.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Invalid list pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Submission template does not exist: {}", path.display())]
    TemplateMissing { path: PathBuf },

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Report serialization error: {0}")]
    Report(#[from] serde_json::Error),
}
