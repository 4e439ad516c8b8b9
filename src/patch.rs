//! File Patching
//!
//! Copy-and-substitute primitives for the provisioning run. Substitution is
//! whole-file text replacement: every occurrence of the placeholder in the
//! file is rewritten, not just a line anchored by a key prefix.

use std::fs;
use std::path::Path;

use crate::error::HookError;

/// Copy `from` to `to`, overwriting `to` if it exists.
///
/// A missing source file is reported as [`HookError::MissingInput`] and
/// leaves no target file behind.
pub fn copy_file(from: &Path, to: &Path) -> Result<(), HookError> {
    if !from.exists() {
        return Err(HookError::MissingInput {
            path: from.to_path_buf(),
        });
    }
    fs::copy(from, to).map_err(|source| HookError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Replace every occurrence of `placeholder` in the file at `path` with
/// `replacement`, rewriting the file in place.
///
/// Content that does not contain the placeholder is written back
/// byte-identical, line endings included.
pub fn replace_in_file(
    path: &Path,
    placeholder: &str,
    replacement: &str,
) -> Result<(), HookError> {
    if !path.exists() {
        return Err(HookError::MissingInput {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| HookError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let updated = content.replace(placeholder, replacement);

    fs::write(path, updated).map_err(|source| HookError::Write {
        path: path.to_path_buf(),
        source,
    })
}
