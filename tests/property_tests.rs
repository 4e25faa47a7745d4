//! Property-based tests for canonicalization guarantees
//!
//! Generated trees mix every non-datetime kind, including mixed-kind arrays,
//! NaN and signed zeros, so ordering has to stay total everywhere.

use proptest::prelude::*;
use pyprojectsort::{canonicalize, ConfigMap, ConfigValue};

fn leaf() -> impl Strategy<Value = ConfigValue> {
    prop_oneof![
        any::<bool>().prop_map(ConfigValue::Boolean),
        any::<i64>().prop_map(ConfigValue::Integer),
        (-4i64..4).prop_map(ConfigValue::Integer),
        any::<f64>().prop_map(ConfigValue::Float),
        (-4i64..4).prop_map(|i| ConfigValue::Float(i as f64)),
        "[a-c]{0,3}".prop_map(ConfigValue::String),
    ]
}

fn config_value() -> impl Strategy<Value = ConfigValue> {
    leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(ConfigValue::Array),
            prop::collection::vec(("[a-e-]{1,3}", inner), 0..6).prop_map(|pairs| {
                ConfigValue::Table(pairs.into_iter().collect::<ConfigMap>())
            }),
        ]
    })
}

fn reversed(value: &ConfigValue) -> ConfigValue {
    match value {
        ConfigValue::Table(table) => {
            let mut pairs: Vec<_> = table
                .iter()
                .map(|(k, v)| (k.clone(), reversed(v)))
                .collect();
            pairs.reverse();
            ConfigValue::Table(pairs.into_iter().collect())
        }
        ConfigValue::Array(items) => ConfigValue::Array(items.iter().rev().map(reversed).collect()),
        scalar => scalar.clone(),
    }
}

/// Renders the exact layout, key order included.
fn layout(value: &ConfigValue) -> String {
    match value {
        ConfigValue::Table(table) => {
            let entries: Vec<_> = table
                .iter()
                .map(|(k, v)| format!("{:?}={}", k, layout(v)))
                .collect();
            format!("{{{}}}", entries.join(","))
        }
        ConfigValue::Array(items) => {
            let items: Vec<_> = items.iter().map(layout).collect();
            format!("[{}]", items.join(","))
        }
        ConfigValue::Float(f) => format!("f{:x}", f.to_bits()),
        scalar => format!("{:?}", scalar),
    }
}

fn leaves(value: &ConfigValue, out: &mut Vec<ConfigValue>) {
    match value {
        ConfigValue::Table(table) => table.values().for_each(|v| leaves(v, out)),
        ConfigValue::Array(items) => items.iter().for_each(|v| leaves(v, out)),
        scalar => out.push(scalar.clone()),
    }
}

fn keys(value: &ConfigValue, out: &mut Vec<String>) {
    match value {
        ConfigValue::Table(table) => {
            for (k, v) in table {
                out.push(k.clone());
                keys(v, out);
            }
        }
        ConfigValue::Array(items) => items.iter().for_each(|v| keys(v, out)),
        _ => {}
    }
}

fn sorted_leaves(value: &ConfigValue) -> Vec<ConfigValue> {
    let mut out = Vec::new();
    leaves(value, &mut out);
    out.sort();
    out
}

fn sorted_keys(value: &ConfigValue) -> Vec<String> {
    let mut out = Vec::new();
    keys(value, &mut out);
    out.sort();
    out
}

proptest! {
    #[test]
    fn prop_idempotent(value in config_value()) {
        let once = canonicalize(value);
        let twice = canonicalize(once.clone());
        prop_assert_eq!(layout(&once), layout(&twice));
    }

    #[test]
    fn prop_output_is_canonical(value in config_value()) {
        prop_assert!(canonicalize(value).is_canonical());
    }

    #[test]
    fn prop_shape_preserved(value in config_value()) {
        let canonical = value.canonicalized();
        prop_assert_eq!(sorted_leaves(&value), sorted_leaves(&canonical));
        prop_assert_eq!(sorted_keys(&value), sorted_keys(&canonical));
        prop_assert_eq!(value.kind_name(), canonical.kind_name());
    }

    #[test]
    fn prop_order_independent(value in config_value()) {
        let left = canonicalize(value.clone());
        let right = canonicalize(reversed(&value));
        prop_assert_eq!(layout(&left), layout(&right));
    }

    #[test]
    fn prop_arrays_sorted(items in prop::collection::vec(config_value(), 0..8)) {
        let canonical = canonicalize(ConfigValue::Array(items));
        let sorted = canonical.as_array().unwrap();
        for pair in sorted.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn prop_order_is_antisymmetric(a in config_value(), b in config_value()) {
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        prop_assert_eq!(a == b, a.cmp(&b) == std::cmp::Ordering::Equal);
    }

    #[test]
    fn prop_order_is_transitive(a in leaf(), b in leaf(), c in leaf()) {
        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
    }
}
