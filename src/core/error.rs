use std::{io, path::PathBuf};

use thiserror::Error;

/// Fatal conditions that stop a scan before a report is produced.
///
/// Non-compliant callsites and unbalanced call expressions are data, not
/// errors, and never show up here.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The root passed to file discovery does not exist.
    #[error("root path does not exist: {}", path.display())]
    RootNotFound { path: PathBuf },

    /// A directory entry could not be read while walking the root.
    #[error("cannot access path")]
    Walk(#[from] walkdir::Error),

    /// A discovered source file could not be read as UTF-8 text.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
