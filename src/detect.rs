use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// Shebang marker opening an interpreted script.
const SHEBANG: &[u8] = b"#!";

/// ELF object file signature.
const ELF_MAGIC: &[u8] = &[0x7F, b'E', b'L', b'F'];

/// Classify a file's leading bytes as executable or not.
///
/// A shebang needs only its two marker bytes; the ELF check requires the
/// full four-byte signature, so truncated fragments classify as plain
/// files.
pub fn classify(magic: &[u8]) -> bool {
    magic.starts_with(SHEBANG) || magic == ELF_MAGIC
}

/// Probe whether the file at `path` is executable.
///
/// Opens the file and reads at most 4 bytes. Hitting end-of-file earlier,
/// including on empty files, is not an error; the shorter buffer is
/// classified as-is. Any other open or read failure surfaces as
/// [`Error::Probe`].
pub fn is_executable(path: &Path) -> Result<bool> {
    let file = File::open(path).map_err(|source| Error::Probe {
        path: path.to_path_buf(),
        source,
    })?;

    let mut magic = Vec::with_capacity(4);
    file.take(4)
        .read_to_end(&mut magic)
        .map_err(|source| Error::Probe {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(classify(&magic))
}
