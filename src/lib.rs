//! Recursive filesystem permission normalizer.
//!
//! Directories are reset to one fixed mode; files get one of two fixed
//! modes depending on whether their leading bytes mark them as executable
//! (shebang or ELF magic). [`run`] drives a whole pass: the target path is
//! classified once, a single file is handled directly, and a directory is
//! walked depth-first under a configurable error policy.

pub mod apply;
pub mod config;
pub mod detect;
pub mod error;
pub mod validate;
pub mod walk;

use std::path::Path;

use log::info;

pub use apply::Fixer;
pub use config::{ModeSet, RunOptions};
pub use error::{Error, Result};
pub use walk::WalkSummary;

/// Fix permissions under `path`.
///
/// A file target is handed straight to the [`Fixer`]; a directory target
/// is walked depth-first. Returns an error if the path is missing or
/// cannot be stat'ed, and, under the fail-early policy, for the first
/// failing entry.
pub fn run(path: &Path, modes: ModeSet, options: RunOptions) -> Result<()> {
    let fixer = Fixer::new(modes);

    match validate::inspect(path)? {
        validate::PathKind::Missing => Err(Error::NotFound {
            path: path.to_path_buf(),
        }),
        validate::PathKind::File => fixer.fix_file(path),
        validate::PathKind::Directory => {
            let summary = walk::fix_tree(path, &fixer, &options)?;
            info!("fixed {} entries, {} failed", summary.fixed, summary.failed);
            Ok(())
        }
    }
}
