use std::path::{Path, PathBuf};

use log::{debug, error};
use walkdir::WalkDir;

use crate::apply::Fixer;
use crate::config::RunOptions;
use crate::error::{Error, Result};

/// Counts accumulated over one completed walk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkSummary {
    /// Entries whose mode was overwritten.
    pub fixed: usize,
    /// Entries that failed and were skipped.
    pub failed: usize,
}

/// Walk `root` depth-first and normalize every entry, the root itself
/// included.
///
/// Directory entries take the directory handler; every other entry takes
/// the file handler. Each per-entry failure is wrapped with the phase it
/// occurred in ("iterate" for traversal errors, "handle" for fixing
/// errors) and the offending path before the policy in `options` decides
/// whether the walk continues.
pub fn fix_tree(root: &Path, fixer: &Fixer, options: &RunOptions) -> Result<WalkSummary> {
    let entries = WalkDir::new(root).into_iter().map(|entry| match entry {
        Ok(entry) => {
            let path = entry.path().to_path_buf();
            let outcome = if entry.file_type().is_dir() {
                fixer.fix_dir(&path)
            } else {
                fixer.fix_file(&path)
            };
            match outcome {
                Ok(()) => Ok(path),
                Err(source) => Err(Error::Handle {
                    path,
                    source: Box::new(source),
                }),
            }
        }
        Err(err) => {
            let path = err
                .path()
                .map_or_else(|| root.to_path_buf(), Path::to_path_buf);
            Err(Error::Iterate { path, source: err })
        }
    });

    drive(entries, options.fail_early)
}

/// Apply the error policy to a stream of per-entry results.
///
/// Under fail-early the first error aborts the walk and nothing further
/// is pulled from `entries`; otherwise every error is logged and counted
/// and the walk runs to completion.
fn drive<I>(entries: I, fail_early: bool) -> Result<WalkSummary>
where
    I: IntoIterator<Item = Result<PathBuf>>,
{
    let mut summary = WalkSummary::default();
    for entry in entries {
        match entry {
            Ok(path) => {
                debug!("fixed {}", path.display());
                summary.fixed += 1;
            }
            Err(err) if fail_early => return Err(err),
            Err(err) => {
                error!("{err}");
                summary.failed += 1;
            }
        }
    }
    Ok(summary)
}
