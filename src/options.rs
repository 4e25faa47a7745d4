//! Configuration options for a sort run.
//!
//! [`SortOptions`] controls the steps around canonicalization: whether the
//! top-level keys are normalized after loading, and how the result is
//! written back.
//!
//! ## Examples
//!
//! ```rust
//! use pyprojectsort::{sort_str, SortOptions};
//!
//! let options = SortOptions::new().with_normalize_keys(true);
//! let sorted = sort_str("tool-b = 1\ntool-a = 2\n", &options).unwrap();
//! assert_eq!(sorted, "tool_a = 2\ntool_b = 1\n");
//! ```

/// Options for loading, canonicalizing and writing a configuration file.
///
/// # Examples
///
/// ```rust
/// use pyprojectsort::SortOptions;
///
/// // Defaults: keys untouched, compact arrays
/// let options = SortOptions::new();
/// assert!(!options.normalize_keys);
/// assert!(!options.pretty);
///
/// let options = SortOptions::new().with_pretty(true);
/// assert!(options.pretty);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortOptions {
    /// Rewrite top-level keys (`--` removed, `-` to `_`) before sorting.
    pub normalize_keys: bool,
    /// Write arrays one element per line.
    pub pretty: bool,
}

impl SortOptions {
    /// Creates default options (no key normalization, compact output).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables top-level key normalization.
    ///
    /// This renames standard sections such as `build-system`, so it is off
    /// by default.
    #[must_use]
    pub fn with_normalize_keys(mut self, normalize_keys: bool) -> Self {
        self.normalize_keys = normalize_keys;
        self
    }

    /// Enables or disables pretty-printed output.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
