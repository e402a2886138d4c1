#[path = "../test_support/mod.rs"]
mod util;

#[test]
fn collapsed_array_folds_to_summary_line() {
    let out = util::run_tree(r#"{"b":[2,3]}"#, &["-c", ".b"]);
    assert_eq!(out, "{\n  \"b\": [... 2 items]\n}\n");
}

#[test]
fn collapsed_object_folds_to_key_count() {
    let out = util::run_tree(r#"{"cfg":{"x":1,"y":2},"on":true}"#, &["-c", ".cfg"]);
    assert_eq!(out, "{\n  \"cfg\": {... 2 keys},\n  \"on\": true\n}\n");
}

#[test]
fn multiple_collapse_flags_stack() {
    let doc = r#"{"a":[1],"b":{"c":2},"d":3}"#;
    let out = util::run_tree(doc, &["-c", ".a", "-c", ".b"]);
    assert_eq!(
        out,
        "{\n  \"a\": [... 1 items],\n  \"b\": {... 1 keys},\n  \"d\": 3\n}\n"
    );
}

#[test]
fn collapsing_a_nested_path_leaves_siblings_expanded() {
    let doc = r#"{"a":{"deep":[1,2,3]},"b":[4]}"#;
    let out = util::run_tree(doc, &["-c", ".a.deep"]);
    assert_eq!(
        out,
        "{\n  \"a\": {\n    \"deep\": [... 3 items]\n  },\n  \"b\": [\n    4\n  ]\n}\n"
    );
}

#[test]
fn collapse_by_array_index_path() {
    let doc = r#"[[1,2],[3]]"#;
    let out = util::run_tree(doc, &["-c", "[0]"]);
    assert_eq!(out, "[\n  [... 2 items],\n  [\n    3\n  ]\n]\n");
}

#[test]
fn collapsing_an_absent_path_changes_nothing() {
    let doc = r#"{"a":1}"#;
    assert_eq!(
        util::run_tree(doc, &["-c", ".nope[3]"]),
        util::run_tree(doc, &[])
    );
}

#[test]
fn empty_containers_ignore_collapse() {
    let out = util::run_tree(r#"{"a":[]}"#, &["-c", ".a"]);
    assert_eq!(out, "{\n  \"a\": []\n}\n");
}

#[test]
fn malformed_collapse_path_is_a_usage_error() {
    let assert = util::run_assert(r#"{"a":1}"#, &["-c", "nodot"]);
    let ok = assert.get_output().status.success();
    let err = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(!ok);
    assert!(err.contains("nodot"), "stderr: {err}");
}
