// src/config/validation.rs

//! Path validation helpers used while building a [`Config`](super::Config).

use crate::errors::{io_error_with_path, Error, Result};
use std::path::{Path, PathBuf};

/// Makes `path` absolute against the current working directory without
/// resolving symlinks.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|e| io_error_with_path(e, path))?;
    Ok(cwd.join(path))
}

/// Validates one input root: it must exist and be a directory. Returns the
/// absolute form.
pub fn ensure_input_dir(path: &Path) -> Result<PathBuf> {
    let abs = absolutize(path)?;
    if !abs.exists() {
        return Err(Error::Config(format!(
            "input directory '{}' does not exist",
            path.display()
        )));
    }
    if !abs.is_dir() {
        return Err(Error::Config(format!(
            "input path '{}' is not a directory",
            path.display()
        )));
    }
    Ok(abs)
}

/// Validates the output path before anything is written: refuses to clobber
/// an existing file unless `force` is set. Returns the absolute form.
pub fn ensure_output_path(path: &Path, force: bool) -> Result<PathBuf> {
    let abs = absolutize(path)?;
    if abs.exists() && !force {
        return Err(Error::Config(format!(
            "output file '{}' already exists (use --force to overwrite)",
            path.display()
        )));
    }
    if let Some(parent) = abs.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(Error::Config(format!(
                "output directory '{}' does not exist",
                parent.display()
            )));
        }
    }
    Ok(abs)
}
