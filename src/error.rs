use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised before any file is renamed.
///
/// Per-file problems during execution are reported as
/// [`RenameOutcome`](crate::types::RenameOutcome) values instead, so a single
/// failing file never aborts the batch.
#[derive(Error, Debug)]
pub enum SequenceError {
    #[error("Rule must end with a number (e.g., IMG_1020), got '{rule}'")]
    InvalidRule { rule: String },

    #[error("Rule prefix '{prefix}' must be a plain file name without path separators")]
    PrefixNotFileName { prefix: String },

    #[error("Rule number '{digits}' is too large")]
    RuleNumberTooLarge { digits: String },

    #[error("Extension must not be empty, got '{ext}'")]
    InvalidExtension { ext: String },

    #[error("Directory '{}' not found", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("Failed to read directory '{}'", path.display())]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to build file name pattern")]
    Pattern(#[from] regex::Error),

    #[error("No sequence number left after {last}")]
    SequenceExhausted { last: u64 },
}

pub type Result<T, E = SequenceError> = std::result::Result<T, E>;
