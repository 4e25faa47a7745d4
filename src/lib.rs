//! # pyprojectsort
//!
//! Canonicalizes `pyproject.toml` (or any TOML configuration file) by
//! recursively sorting table keys and array contents, producing a
//! deterministic, diff-friendly layout.
//!
//! ## Pipeline
//!
//! ```text
//!  bytes ──▶ load ──▶ [normalize_keys] ──▶ canonicalize ──▶ to_string ──▶ bytes
//!            (de)       (normalize)         (canonical)       (ser)
//! ```
//!
//! - **Loader** ([`de`]): TOML text to a [`ConfigValue`] tree via the `toml` crate
//! - **Key normalizer** ([`normalize`]): optional top-level key rewriting
//! - **Canonicalizer** ([`canonical`]): the pure reordering step
//! - **Writer** ([`ser`]): [`ConfigValue`] back to TOML, atomic file replacement
//!
//! Only the canonicalizer carries real semantics. It is total, pure and
//! idempotent, and the layout of its output depends only on content.
//!
//! ## Quick Start
//!
//! ```rust
//! use pyprojectsort::{sort_str, SortOptions};
//!
//! let input = r#"
//! [project]
//! name = "demo"
//! dependencies = ["requests", "attrs"]
//!
//! [build-system]
//! requires = ["setuptools"]
//! "#;
//!
//! let sorted = sort_str(input, &SortOptions::default()).unwrap();
//! assert!(sorted.find("[build-system]").unwrap() < sorted.find("[project]").unwrap());
//! assert!(sorted.contains(r#"dependencies = ["attrs", "requests"]"#));
//! ```
//!
//! ### Working with values directly
//!
//! ```rust
//! use pyprojectsort::{canonicalize, config};
//!
//! let value = canonicalize(config!({"b": 2, "a": [3, 1, 2]}));
//! assert_eq!(value, config!({"a": [1, 2, 3], "b": 2}));
//! ```

pub mod canonical;
pub mod de;
pub mod error;
pub mod macros;
pub mod map;
pub mod normalize;
pub mod options;
pub mod ser;
pub mod value;

pub use canonical::canonicalize;
pub use de::{from_str, load, load_file};
pub use error::{Error, Result};
pub use map::ConfigMap;
pub use normalize::normalize_keys;
pub use options::SortOptions;
pub use ser::{dump, to_string, to_string_pretty, write_atomic};
pub use value::{ConfigValue, Datetime};

use std::path::Path;
use tracing::info;

/// Conventional configuration file name used when no path is given.
pub const DEFAULT_CONFIG: &str = "pyproject.toml";

fn prepare(value: ConfigValue, options: &SortOptions) -> ConfigValue {
    let value = match value {
        ConfigValue::Table(table) if options.normalize_keys => {
            ConfigValue::Table(normalize_keys(table))
        }
        other => other,
    };
    canonicalize(value)
}

fn render(value: &ConfigValue, options: &SortOptions) -> Result<String> {
    if options.pretty {
        to_string_pretty(value)
    } else {
        to_string(value)
    }
}

/// Loads, canonicalizes and re-serializes TOML text.
///
/// # Examples
///
/// ```rust
/// use pyprojectsort::{sort_str, SortOptions};
///
/// let sorted = sort_str("b = 2\na = 1\n", &SortOptions::new()).unwrap();
/// assert_eq!(sorted, "a = 1\nb = 2\n");
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid TOML or cannot be written back.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn sort_str(input: &str, options: &SortOptions) -> Result<String> {
    let value = prepare(from_str(input)?, options);
    render(&value, options)
}

/// Canonicalizes the file at `path` in place.
///
/// The file is always rewritten. Returns `true` if its content changed.
///
/// # Errors
///
/// Returns [`Error::MissingFile`] without writing anything if `path` is not
/// an existing regular file. Parse errors also abort before any write. A
/// failed write leaves the original file untouched.
pub fn sort_file(path: &Path, options: &SortOptions) -> Result<bool> {
    let original = de::read_file(path)?;
    let value = prepare(load(&original)?, options);
    let output = render(&value, options)?;

    write_atomic(path, output.as_bytes())?;

    let changed = original != output.as_bytes();
    info!(path = %path.display(), changed, "canonicalized configuration file");
    Ok(changed)
}
