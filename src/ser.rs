//! Writing [`ConfigValue`] trees back to TOML.
//!
//! Serialization is delegated to the `toml` crate through the [`serde::Serialize`]
//! implementation of [`ConfigValue`]. Keys are written in the tree's order,
//! so a canonicalized tree produces canonical text. Output is deterministic.
//!
//! Files are replaced atomically: the new content goes to a temporary file
//! next to the target, which is then renamed over it. A failed write leaves
//! the original file as it was.

use crate::error::{Error, Result};
use crate::ConfigValue;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

fn check_root(value: &ConfigValue) -> Result<()> {
    if value.is_table() {
        Ok(())
    } else {
        Err(Error::UnsupportedRoot(value.kind_name()))
    }
}

/// Serializes a table to TOML text.
///
/// Arrays are written inline on a single line.
///
/// # Examples
///
/// ```rust
/// use pyprojectsort::{config, to_string};
///
/// let text = to_string(&config!({"b": 2, "a": [1, 2]})).unwrap();
/// assert_eq!(text, "b = 2\na = [1, 2]\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedRoot`] if `value` is not a table, or
/// [`Error::Serialize`] if the `toml` serializer rejects the tree.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(value: &ConfigValue) -> Result<String> {
    check_root(value)?;
    Ok(toml::to_string(value)?)
}

/// Serializes a table to TOML text, writing arrays one element per line.
///
/// # Errors
///
/// Same as [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty(value: &ConfigValue) -> Result<String> {
    check_root(value)?;
    Ok(toml::to_string_pretty(value)?)
}

/// Serializes a table to TOML bytes.
///
/// # Errors
///
/// Same as [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn dump(value: &ConfigValue) -> Result<Vec<u8>> {
    to_string(value).map(String::into_bytes)
}

fn temp_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()))
}

// A target that does not exist yet is written as given.
fn resolve_target(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn write_then_rename(tmp: &Path, path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = File::create(tmp)?;
    file.write_all(contents)?;
    file.sync_all()?;
    drop(file);

    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(tmp, metadata.permissions())?;
    }
    fs::rename(tmp, path)
}

/// Replaces the file at `path` with `contents`.
///
/// The target's permissions are kept when it already exists. A symlink is
/// followed, so the file it points to is replaced and the link survives.
///
/// # Errors
///
/// Returns [`Error::Io`] if the temporary file cannot be written or renamed.
/// The temporary file is removed on failure.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let target = resolve_target(path);
    let tmp = temp_path(&target);
    debug!(path = %target.display(), tmp = %tmp.display(), bytes = contents.len(), "writing configuration file");

    if let Err(source) = write_then_rename(&tmp, &target, contents) {
        let _ = fs::remove_file(&tmp);
        return Err(Error::io(path, source));
    }
    Ok(())
}
