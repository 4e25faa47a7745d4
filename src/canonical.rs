//! Recursive canonicalization of configuration trees.
//!
//! [`canonicalize`] rebuilds a [`ConfigValue`] so that its layout depends only
//! on its content:
//!
//! - tables are rebuilt with keys in ascending byte-wise order
//! - arrays are sorted after their elements are canonicalized
//! - scalars are returned unchanged
//!
//! The result is idempotent and independent of the input's key and element
//! order. No I/O happens here and nothing can fail.
//!
//! ## Ordering
//!
//! Sorting arrays needs a total order over every kind of value, mixed-kind
//! arrays included. Kinds are ranked first:
//!
//! ```text
//! boolean < number < string < datetime < array < table
//! ```
//!
//! Within a kind:
//!
//! | Kind | Order |
//! |------|-------|
//! | Boolean | `false < true` |
//! | Number | numeric; integer and float share a rank, an integer sorts before an equal float |
//! | String | byte-wise lexicographic |
//! | Datetime | `offset < local < date < time`, then chronological |
//! | Array | element-wise, shorter first on a common prefix |
//! | Table | as the key-sorted list of `(key, value)` pairs |
//!
//! Floats use IEEE total ordering, so `-0.0 < 0.0`, except that every NaN
//! sorts after infinity whatever its sign. Integers and floats compare by
//! exact value, also past 2^53. Equality follows the same order: two values are equal exactly
//! when neither sorts before the other.
//!
//! ## Examples
//!
//! ```rust
//! use pyprojectsort::{canonicalize, config};
//!
//! let value = canonicalize(config!({"tool": {"b": [2, 1], "a": "x"}}));
//!
//! let tool = value.as_table().and_then(|t| t.get("tool")).and_then(|t| t.as_table()).unwrap();
//! let keys: Vec<_> = tool.keys().map(String::as_str).collect();
//! assert_eq!(keys, vec!["a", "b"]);
//! assert_eq!(tool.get("b"), Some(&config!([1, 2])));
//! ```

use crate::{ConfigMap, ConfigValue, Datetime};
use std::cmp::Ordering;

/// Returns the canonical form of `value`.
///
/// Tables get sorted keys and arrays get sorted elements, recursively.
/// Ownership of the input passes in and a freshly built tree comes back.
#[must_use]
pub fn canonicalize(value: ConfigValue) -> ConfigValue {
    match value {
        ConfigValue::Table(table) => {
            let mut table: ConfigMap = table
                .into_iter()
                .map(|(key, value)| (key, canonicalize(value)))
                .collect();
            table.sort_keys();
            ConfigValue::Table(table)
        }
        ConfigValue::Array(items) => {
            let mut items: Vec<ConfigValue> = items.into_iter().map(canonicalize).collect();
            items.sort();
            ConfigValue::Array(items)
        }
        scalar @ (ConfigValue::Boolean(_)
        | ConfigValue::Integer(_)
        | ConfigValue::Float(_)
        | ConfigValue::String(_)
        | ConfigValue::Datetime(_)) => scalar,
    }
}

impl ConfigValue {
    /// Returns the canonical form of this value, leaving `self` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pyprojectsort::config;
    ///
    /// let original = config!([3, 1, 2]);
    /// assert_eq!(original.canonicalized(), config!([1, 2, 3]));
    /// assert_eq!(original.as_array().map(|a| a.len()), Some(3));
    /// ```
    #[must_use]
    pub fn canonicalized(&self) -> ConfigValue {
        canonicalize(self.clone())
    }

    /// Returns `true` if this value is already in canonical form, including
    /// the key order of every table.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        match self {
            ConfigValue::Table(table) => {
                table.keys().zip(table.keys().skip(1)).all(|(a, b)| a < b)
                    && table.values().all(ConfigValue::is_canonical)
            }
            ConfigValue::Array(items) => {
                items.windows(2).all(|pair| pair[0] <= pair[1])
                    && items.iter().all(ConfigValue::is_canonical)
            }
            _ => true,
        }
    }

    const fn kind_rank(&self) -> u8 {
        match self {
            ConfigValue::Boolean(_) => 0,
            ConfigValue::Integer(_) | ConfigValue::Float(_) => 1,
            ConfigValue::String(_) => 2,
            ConfigValue::Datetime(_) => 3,
            ConfigValue::Array(_) => 4,
            ConfigValue::Table(_) => 5,
        }
    }
}

// Every f64 with magnitude below this has an integral part that fits an i128.
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

// NaNs of either sign go last, ordered among themselves by bit pattern.
fn cmp_float(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => a.to_bits().cmp(&b.to_bits()),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.total_cmp(&b),
    }
}

// Exact numeric comparison; an integer sorts before a float of the same value.
fn cmp_integer_float(integer: i64, float: f64) -> Ordering {
    if float.is_nan() {
        return Ordering::Less;
    }
    if float.abs() >= TWO_POW_64 {
        return if float > 0.0 {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    let whole = float.trunc();
    i128::from(integer)
        .cmp(&(whole as i128))
        .then_with(|| whole.total_cmp(&float))
        .then(Ordering::Less)
}

impl Ord for ConfigValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (ConfigValue::Boolean(a), ConfigValue::Boolean(b)) => a.cmp(b),
            (ConfigValue::Integer(a), ConfigValue::Integer(b)) => a.cmp(b),
            (ConfigValue::Float(a), ConfigValue::Float(b)) => cmp_float(*a, *b),
            (ConfigValue::Integer(a), ConfigValue::Float(b)) => cmp_integer_float(*a, *b),
            (ConfigValue::Float(a), ConfigValue::Integer(b)) => {
                cmp_integer_float(*b, *a).reverse()
            }
            (ConfigValue::String(a), ConfigValue::String(b)) => a.cmp(b),
            (ConfigValue::Datetime(a), ConfigValue::Datetime(b)) => a.cmp(b),
            (ConfigValue::Array(a), ConfigValue::Array(b)) => a.cmp(b),
            (ConfigValue::Table(a), ConfigValue::Table(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

impl PartialOrd for ConfigValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ConfigValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ConfigValue {}

impl Ord for ConfigMap {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sorted_entries().cmp(&other.sorted_entries())
    }
}

impl PartialOrd for ConfigMap {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Datetime {
    const fn kind_rank(&self) -> u8 {
        match self {
            Datetime::Offset(_) => 0,
            Datetime::Local(_) => 1,
            Datetime::Date(_) => 2,
            Datetime::Time(_) => 3,
        }
    }
}

impl Ord for Datetime {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // Same instant, different offsets: the offset breaks the tie.
            (Datetime::Offset(a), Datetime::Offset(b)) => a.cmp(b).then_with(|| {
                a.offset()
                    .local_minus_utc()
                    .cmp(&b.offset().local_minus_utc())
            }),
            (Datetime::Local(a), Datetime::Local(b)) => a.cmp(b),
            (Datetime::Date(a), Datetime::Date(b)) => a.cmp(b),
            (Datetime::Time(a), Datetime::Time(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

impl PartialOrd for Datetime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Datetime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Datetime {}
