//! Static asset copying.

use crate::{error::Error, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Replaces `dest` with a recursive copy of `src`.
pub fn copy_static(src: &Path, dest: &Path) -> Result<()> {
    if dest.exists() {
        log::info!("Deleting contents of {}", dest.display());
        fs::remove_dir_all(dest)?;
    }
    fs::create_dir_all(dest)?;

    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|_| Error::InvalidPath(entry.path().to_path_buf()))?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
            log::debug!("Created directory: {}", target.display());
        } else {
            fs::copy(entry.path(), &target)?;
            log::info!("Copied file: {} -> {}", entry.path().display(), target.display());
        }
    }
    Ok(())
}
