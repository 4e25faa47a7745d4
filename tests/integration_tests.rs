use pyprojectsort::{
    canonicalize, config, dump, from_str, load, sort_file, sort_str, to_string, write_atomic,
    ConfigValue, Error, SortOptions,
};
use std::fs;
use std::path::PathBuf;

const PYPROJECT: &str = r#"[project]
name = "demo"
version = "0.1.0"
requires-python = ">=3.9"
dependencies = ["requests>=2", "attrs", "click"]
authors = [
    { name = "Zed", email = "zed@example.com" },
    { name = "Ann", email = "ann@example.com" },
]

[project.optional-dependencies]
test = ["pytest", "coverage"]

[build-system]
requires = ["setuptools>=61", "wheel"]
build-backend = "setuptools.build_meta"

[tool.black]
line-length = 88
target-version = ["py311", "py39", "py310"]

[[tool.mypy.overrides]]
module = "tests.*"
ignore_errors = true

[[tool.mypy.overrides]]
module = "attrs.*"
ignore_missing_imports = true
"#;

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pyprojectsort-it-{}-{}", std::process::id(), name));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("pyproject.toml");
    fs::write(&path, contents).unwrap();
    path
}

fn table_keys(value: &ConfigValue) -> Vec<String> {
    value.as_table().unwrap().keys().cloned().collect()
}

fn get<'a>(value: &'a ConfigValue, path: &[&str]) -> &'a ConfigValue {
    path.iter().fold(value, |v, key| {
        v.as_table()
            .and_then(|t| t.get(key))
            .unwrap_or_else(|| panic!("missing key {}", key))
    })
}

#[test]
fn test_pyproject_sorted() {
    let sorted = sort_str(PYPROJECT, &SortOptions::new()).unwrap();
    println!("Sorted pyproject:\n{}", sorted);

    let build_system = sorted.find("[build-system]").unwrap();
    let project = sorted.find("[project]").unwrap();
    let black = sorted.find("[tool.black]").unwrap();
    assert!(build_system < project && project < black);

    assert!(sorted.contains(r#"dependencies = ["attrs", "click", "requests>=2"]"#));
    assert!(sorted.contains(r#"target-version = ["py310", "py311", "py39"]"#));
    assert!(sorted.contains(r#"requires = ["setuptools>=61", "wheel"]"#));
}

#[test]
fn test_pyproject_tree_key_order() {
    let value = canonicalize(from_str(PYPROJECT).unwrap());

    assert_eq!(table_keys(&value), vec!["build-system", "project", "tool"]);
    assert_eq!(
        table_keys(get(&value, &["project"])),
        vec![
            "authors",
            "dependencies",
            "name",
            "optional-dependencies",
            "requires-python",
            "version"
        ]
    );
    assert_eq!(
        get(&value, &["project", "optional-dependencies", "test"]),
        &config!(["coverage", "pytest"])
    );
}

#[test]
fn test_array_of_tables_sorted_by_content() {
    let value = canonicalize(from_str(PYPROJECT).unwrap());

    let authors = get(&value, &["project", "authors"]).as_array().unwrap();
    let names: Vec<_> = authors
        .iter()
        .map(|a| get(a, &["name"]).as_str().unwrap())
        .collect();
    // Keys sort as "email" < "name", so authors order by email first.
    assert_eq!(names, vec!["Ann", "Zed"]);

    let overrides = get(&value, &["tool", "mypy", "overrides"]).as_array().unwrap();
    let modules: Vec<_> = overrides
        .iter()
        .map(|o| get(o, &["module"]).as_str().unwrap())
        .collect();
    // "ignore_errors" < "ignore_missing_imports" decides before "module".
    assert_eq!(modules, vec!["tests.*", "attrs.*"]);
}

#[test]
fn test_roundtrip_of_canonical_tree() {
    let canonical = canonicalize(from_str(PYPROJECT).unwrap());
    let reloaded = load(&dump(&canonical).unwrap()).unwrap();

    assert_eq!(canonical, reloaded);
    assert_eq!(
        to_string(&canonicalize(reloaded)).unwrap(),
        to_string(&canonical).unwrap()
    );
}

#[test]
fn test_sort_is_idempotent_on_text() {
    let once = sort_str(PYPROJECT, &SortOptions::new()).unwrap();
    let twice = sort_str(&once, &SortOptions::new()).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_pretty_output_reloads() {
    let pretty = sort_str(PYPROJECT, &SortOptions::new().with_pretty(true)).unwrap();
    let compact = sort_str(PYPROJECT, &SortOptions::new()).unwrap();

    assert_ne!(pretty, compact);
    assert_eq!(from_str(&pretty).unwrap(), from_str(&compact).unwrap());
}

#[test]
fn test_datetimes_roundtrip() {
    let input = "times = [07:32:00, 1979-05-27, 1979-05-27T07:32:00, 1979-05-27T07:32:00-08:00]\n";
    let sorted = sort_str(input, &SortOptions::new()).unwrap();
    assert_eq!(
        sorted,
        "times = [1979-05-27T07:32:00-08:00, 1979-05-27T07:32:00, 1979-05-27, 07:32:00]\n"
    );
}

#[test]
fn test_mixed_array_does_not_fail() {
    let sorted = sort_str("mixed = [{ a = 1 }, \"s\", 2, [1], true]\n", &SortOptions::new()).unwrap();
    let value = from_str(&sorted).unwrap();
    assert_eq!(
        get(&value, &["mixed"]),
        &config!([true, 2, "s", [1], {"a": 1}])
    );
}

#[test]
fn test_sort_file_in_place() {
    let path = scratch_file("in-place", "b = 2\na = [3, 1, 2]\n");

    let changed = sort_file(&path, &SortOptions::new()).unwrap();
    assert!(changed);
    assert_eq!(fs::read_to_string(&path).unwrap(), "a = [1, 2, 3]\nb = 2\n");

    let changed = sort_file(&path, &SortOptions::new()).unwrap();
    assert!(!changed);

    fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

#[test]
fn test_sort_file_missing_writes_nothing() {
    let dir = std::env::temp_dir().join(format!("pyprojectsort-it-{}-missing", std::process::id()));
    let path = dir.join("pyproject.toml");

    let err = sort_file(&path, &SortOptions::new()).unwrap_err();
    assert!(matches!(err, Error::MissingFile(_)));
    assert!(!path.exists());
}

#[test]
fn test_sort_file_parse_error_keeps_original() {
    let original = "b = 2\na = [unterminated\n";
    let path = scratch_file("parse-error", original);

    let err = sort_file(&path, &SortOptions::new()).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    assert_eq!(fs::read_to_string(&path).unwrap(), original);

    fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

#[test]
fn test_write_atomic_replaces_content() {
    let path = scratch_file("atomic", "old = true\n");
    let text = to_string(&config!({"new": true})).unwrap();

    write_atomic(&path, text.as_bytes()).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "new = true\n");

    let leftovers: Vec<_> = fs::read_dir(path.parent().unwrap())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());

    fs::remove_dir_all(path.parent().unwrap()).unwrap();
}

#[test]
fn test_write_atomic_into_missing_directory_fails() {
    let path = std::env::temp_dir()
        .join(format!("pyprojectsort-it-{}-nodir", std::process::id()))
        .join("pyproject.toml");

    let err = write_atomic(&path, b"a = 1\n").unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(!path.exists());
}

#[test]
fn test_write_atomic_failure_keeps_existing_file() {
    let original = "b = 2\na = 1\n";
    let path = scratch_file("atomic-fail", original);

    // A directory squatting on the temporary name makes the write fail.
    let dir = fs::canonicalize(path.parent().unwrap()).unwrap();
    let blocker = dir.join(format!(".pyproject.toml.{}.tmp", std::process::id()));
    fs::create_dir(&blocker).unwrap();

    let err = write_atomic(&path, b"a = 1\nb = 2\n").unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert_eq!(fs::read(&path).unwrap(), original.as_bytes());

    let err = sort_file(&path, &SortOptions::new()).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert_eq!(fs::read(&path).unwrap(), original.as_bytes());

    fs::remove_dir_all(dir).unwrap();
}

#[cfg(unix)]
#[test]
fn test_sort_file_through_symlink() {
    let real = scratch_file("symlink", "b = 1\na = 2\n");
    let link = real.with_file_name("linked.toml");
    std::os::unix::fs::symlink(&real, &link).unwrap();

    let changed = sort_file(&link, &SortOptions::new()).unwrap();
    assert!(changed);

    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(fs::read_to_string(&real).unwrap(), "a = 2\nb = 1\n");
    assert_eq!(fs::read_to_string(&link).unwrap(), "a = 2\nb = 1\n");

    fs::remove_dir_all(real.parent().unwrap()).unwrap();
}
