/// Builds a [`ConfigValue`](crate::ConfigValue) from JSON-like syntax.
///
/// Tables keep the key order written in the macro, which makes it easy to
/// build deliberately unsorted input.
///
/// ```rust
/// use pyprojectsort::{config, ConfigValue};
///
/// let value = config!({"b": [2, 1], "a": "x"});
/// let keys: Vec<_> = value.as_table().unwrap().keys().cloned().collect();
/// assert_eq!(keys, vec!["b", "a"]);
/// ```
#[macro_export]
macro_rules! config {
    // Handle empty array
    ([]) => {
        $crate::ConfigValue::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::ConfigValue::Array(vec![$($crate::config!($elem)),*])
    };

    // Handle empty table
    ({}) => {
        $crate::ConfigValue::Table($crate::ConfigMap::new())
    };

    // Handle non-empty table
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut table = $crate::ConfigMap::new();
        $(
            table.insert($key.to_string(), $crate::config!($value));
        )*
        $crate::ConfigValue::Table(table)
    }};

    // Scalars
    ($s:expr) => {
        $crate::ConfigValue::from($s)
    };
}
