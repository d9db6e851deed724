use super::parse_path;
use crate::registry::error::RegistryError;

fn segments(path: &str) -> Vec<String> {
    parse_path(path).expect(&format!("`{}` should parse", path))
}

fn rejects(path: &str) {
    match parse_path(path) {
        Err(RegistryError::InvalidPath { .. }) => {}
        other => panic!("`{}` should be rejected, got {:?}", path, other),
    }
}

#[test]
fn test_single_identifier() {
    assert_eq!(segments("add"), vec!["add"]);
}

#[test]
fn test_nested_path() {
    assert_eq!(segments("Vector.normalize"), vec!["Vector", "normalize"]);
    assert_eq!(segments("a.b.c"), vec!["a", "b", "c"]);
}

#[test]
fn test_underscores_and_digits() {
    assert_eq!(segments("_private.v2"), vec!["_private", "v2"]);
    assert_eq!(segments("snake_case_name"), vec!["snake_case_name"]);
}

#[test]
fn test_rejects_empty() {
    rejects("");
}

#[test]
fn test_rejects_stray_dots() {
    rejects(".add");
    rejects("add.");
    rejects("a..b");
}

#[test]
fn test_rejects_bad_characters() {
    rejects("a b");
    rejects("a.b ");
    rejects(" a.b");
    rejects("1abc");
    rejects("a-b");
    rejects("a.b!");
}
