//! Top-level key normalization.
//!
//! Runs between loading and canonicalization when
//! [`SortOptions::normalize_keys`](crate::SortOptions::normalize_keys) is set.
//! Only the keys of the root table are rewritten; nested keys and all values
//! pass through untouched.

use crate::ConfigMap;
use tracing::warn;

/// Normalizes a single key: every `--` is removed, then every `-` becomes `_`.
///
/// # Examples
///
/// ```rust
/// use pyprojectsort::normalize::normalize_key;
///
/// assert_eq!(normalize_key("build-system"), "build_system");
/// assert_eq!(normalize_key("--flag-name"), "flag_name");
/// assert_eq!(normalize_key("a---b"), "a_b");
/// ```
#[must_use]
pub fn normalize_key(key: &str) -> String {
    key.replace("--", "").replace('-', "_")
}

/// Normalizes every key of `table`.
///
/// When two keys normalize to the same name, the value that appears later in
/// `table` wins and keeps the position of the first one.
pub fn normalize_keys(table: ConfigMap) -> ConfigMap {
    let mut normalized = ConfigMap::with_capacity(table.len());
    for (key, value) in table {
        let renamed = normalize_key(&key);
        if normalized.insert(renamed.clone(), value).is_some() {
            warn!(key = %key, normalized = %renamed, "normalized key collides with an earlier key, keeping the later value");
        }
    }
    normalized
}
