//! File input at the I/O boundary.

use crate::error::DiffError;
use crate::lines::Comparison;
use std::path::Path;

/// Read a UTF-8 text file.
pub fn read_text(path: impl AsRef<Path>) -> Result<String, DiffError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| DiffError::read_file(path, e))?;
    tracing::trace!(path = %path.display(), bytes = text.len(), "read input");
    Ok(text)
}

/// Read two files and compare them line by line.
pub fn compare_files(
    original: impl AsRef<Path>,
    modified: impl AsRef<Path>,
) -> Result<Comparison, DiffError> {
    let original = read_text(original)?;
    let modified = read_text(modified)?;
    Ok(Comparison::of(&original, &modified))
}
