//! Error types for tree walking

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while resolving the root or walking the tree.
///
/// Both filesystem variants are fatal: the walkers propagate them without
/// retrying, and a failed subdirectory read aborts the whole run.
#[derive(Error, Debug)]
pub enum TreeError {
    /// The root path could not be resolved to a real filesystem location.
    #[error("cannot resolve path '{}': {source}", path.display())]
    PathResolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A directory's contents could not be listed (permission denied,
    /// not a directory, ...).
    #[error("cannot read directory '{}': {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a rendered line to the output stream failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TreeError>;
