//! Removal of build outputs.

use std::fs;
use std::io;
use std::path::PathBuf;

use eyre::{Result, WrapErr};

use crate::project::Layout;

/// What clean removed (or, for a preview, would remove).
#[derive(Debug, Default)]
pub struct CleanOutcome {
    pub removed: Vec<PathBuf>,
}

/// Remove the build directory, the linked binary, and the disk image.
///
/// Destructive and unconditional, but a no-op for anything that does not
/// exist: cleaning twice is not an error.
pub fn clean(layout: &Layout) -> Result<CleanOutcome> {
    let mut outcome = CleanOutcome::default();

    if remove(&layout.build_dir, |path| fs::remove_dir_all(path))? {
        outcome.removed.push(layout.build_dir.clone());
    }
    if remove(&layout.binary, |path| fs::remove_file(path))? {
        outcome.removed.push(layout.binary.clone());
    }
    if remove(&layout.image, |path| fs::remove_file(path))? {
        outcome.removed.push(layout.image.clone());
    }

    Ok(outcome)
}

/// The clean targets that currently exist, without removing anything.
pub fn preview_clean(layout: &Layout) -> CleanOutcome {
    let removed = [&layout.build_dir, &layout.binary, &layout.image]
        .into_iter()
        .filter(|path| path.exists())
        .cloned()
        .collect();
    CleanOutcome { removed }
}

/// Apply a removal, reporting whether anything was there. Missing targets
/// are fine; any other failure is not.
fn remove(path: &PathBuf, op: fn(&PathBuf) -> io::Result<()>) -> Result<bool> {
    match op(path) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => {
            Err(err).wrap_err_with(|| format!("failed to remove '{}'", path.display()))
        }
    }
}
