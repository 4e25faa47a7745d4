//! Loading configuration files into [`ConfigValue`] trees.
//!
//! Parsing is delegated to the `toml` crate; this module only converts its
//! tree into a [`ConfigValue`] and checks file preconditions. The root of a
//! loaded document is always a [`ConfigValue::Table`], with keys in file order.
//!
//! ## Examples
//!
//! ```rust
//! use pyprojectsort::from_str;
//!
//! let value = from_str("[project]\nname = \"demo\"\n").unwrap();
//! let name = value
//!     .as_table()
//!     .and_then(|t| t.get("project"))
//!     .and_then(|p| p.as_table())
//!     .and_then(|p| p.get("name"))
//!     .and_then(|n| n.as_str());
//! assert_eq!(name, Some("demo"));
//! ```

use crate::error::{Error, Result};
use crate::{ConfigMap, ConfigValue};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parses TOML text into a [`ConfigValue`] table.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the text is not valid TOML, or
/// [`Error::InvalidDatetime`] for datetimes `chrono` cannot represent.
pub fn from_str(s: &str) -> Result<ConfigValue> {
    let table: toml::Table = toml::from_str(s)?;
    Ok(ConfigValue::Table(ConfigMap::try_from(table)?))
}

/// Parses TOML bytes into a [`ConfigValue`] table.
///
/// # Errors
///
/// Returns [`Error::Encoding`] if the bytes are not UTF-8, otherwise the
/// same errors as [`from_str`].
pub fn load(bytes: &[u8]) -> Result<ConfigValue> {
    let s = std::str::from_utf8(bytes)?;
    from_str(s)
}

/// Reads and parses the configuration file at `path`.
///
/// # Errors
///
/// Returns [`Error::MissingFile`] if `path` is not an existing regular file,
/// [`Error::Io`] if reading fails, otherwise the same errors as [`load`].
pub fn load_file(path: &Path) -> Result<ConfigValue> {
    load(&read_file(path)?)
}

pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>> {
    if !path.is_file() {
        return Err(Error::MissingFile(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "read configuration file");
    Ok(bytes)
}
