// ============================================================================
// File: src/error.rs
// ----------------------------------------------------------------------------
// Crate-wide error types
// ============================================================================

use std::io;
use std::path::PathBuf;

/// Errors raised while validating, probing, or fixing paths.
///
/// Every variant carries the path it occurred on; source errors are kept
/// for diagnosis.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Nothing exists at the target path
    #[error("path {} does not exist", .path.display())]
    NotFound { path: PathBuf },

    /// Stat failed for a reason other than not-found
    #[error("failed to stat {}: {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading the leading magic bytes failed
    #[error("checking if {} is executable: {source}", .path.display())]
    Probe {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The permission change itself failed
    #[error("setting mode {mode:o} on {}: {source}", .path.display())]
    SetMode {
        path: PathBuf,
        mode: u32,
        #[source]
        source: io::Error,
    },

    /// The traversal mechanism failed on an entry
    #[error("iterate over path {}: {source}", .path.display())]
    Iterate {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Handling a visited entry failed
    #[error("handle path {}: {source}", .path.display())]
    Handle {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
