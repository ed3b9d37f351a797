use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};

/// What a target path turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Nothing exists at the path.
    Missing,
    /// The path is a directory.
    Directory,
    /// The path is anything that is not a directory.
    File,
}

/// Classify `path` with a single stat call, following symlinks.
///
/// Not-found is a regular outcome; any other stat failure surfaces as
/// [`Error::Stat`].
pub fn inspect(path: &Path) -> Result<PathKind> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => Ok(PathKind::Directory),
        Ok(_) => Ok(PathKind::File),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(PathKind::Missing),
        Err(source) => Err(Error::Stat {
            path: path.to_path_buf(),
            source,
        }),
    }
}
