//! Errors raised while loading a case file.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaseError {
    #[error("failed to read case file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed case file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("suspect '{0}' is listed more than once")]
    DuplicateSuspect(String),

    #[error("culprit '{0}' is not among the suspects")]
    UnknownCulprit(String),

    #[error("{context} refers to unknown suspect '{name}'")]
    UnknownSuspect { context: String, name: String },
}

pub type CaseResult<T> = Result<T, CaseError>;
