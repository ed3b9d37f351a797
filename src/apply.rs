use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use crate::config::ModeSet;
use crate::detect;
use crate::error::{Error, Result};

/// Applies the configured modes to individual filesystem entries.
///
/// Built once per run from an injected [`ModeSet`]; the walker calls it
/// for every visited entry.
#[derive(Debug, Clone)]
pub struct Fixer {
    modes: ModeSet,
}

impl Fixer {
    pub fn new(modes: ModeSet) -> Self {
        Self { modes }
    }

    /// Reset a directory to the configured directory mode.
    pub fn fix_dir(&self, path: &Path) -> Result<()> {
        set_mode(path, self.modes.dir)
    }

    /// Reset a file to the executable or regular mode, depending on its
    /// leading bytes.
    pub fn fix_file(&self, path: &Path) -> Result<()> {
        let mode = if detect::is_executable(path)? {
            self.modes.executable
        } else {
            self.modes.file
        };
        set_mode(path, mode)
    }
}

/// Overwrite the permission bits on `path` with `mode`.
fn set_mode(path: &Path, mode: u32) -> Result<()> {
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).map_err(|source| Error::SetMode {
        path: path.to_path_buf(),
        mode,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode_of(path: &Path) -> u32 {
        fs::metadata(path)
            .expect("Failed to stat path in test")
            .permissions()
            .mode()
            & 0o7777
    }

    #[test]
    fn directory_gets_dir_mode() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir in test");
        let fixer = Fixer::new(ModeSet::default());

        fixer
            .fix_dir(dir.path())
            .expect("Failed to fix directory in test");
        assert_eq!(mode_of(dir.path()), 0o750);
    }

    #[test]
    fn shebang_file_gets_executable_mode() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir in test");
        let path = dir.path().join("run.sh");
        std::fs::write(&path, b"#!/bin/sh\n").expect("Failed to write script in test");
        let fixer = Fixer::new(ModeSet::default());

        fixer.fix_file(&path).expect("Failed to fix script in test");
        assert_eq!(mode_of(&path), 0o750);
    }

    #[test]
    fn plain_file_gets_file_mode() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir in test");
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"plain text").expect("Failed to write file in test");
        let fixer = Fixer::new(ModeSet::default());

        fixer.fix_file(&path).expect("Failed to fix file in test");
        assert_eq!(mode_of(&path), 0o640);
    }

    #[test]
    fn alternate_mode_set_is_honored() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir in test");
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"plain text").expect("Failed to write file in test");
        let fixer = Fixer::new(ModeSet::default().with_file(0o444));

        fixer.fix_file(&path).expect("Failed to fix file in test");
        assert_eq!(mode_of(&path), 0o444);
    }

    #[test]
    fn missing_file_surfaces_probe_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir in test");
        let path = dir.path().join("gone");
        let fixer = Fixer::new(ModeSet::default());

        let err = fixer
            .fix_file(&path)
            .expect_err("Fixing a missing file should fail in test");
        assert!(matches!(err, Error::Probe { .. }));
    }
}
