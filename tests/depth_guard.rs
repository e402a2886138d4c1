#[path = "../test_support/mod.rs"]
mod util;

#[test]
fn max_depth_flag_folds_deep_branches() {
    let doc = r#"{"a":{"b":{"c":1}}}"#;
    let out = util::run_tree(doc, &["--max-depth", "2"]);
    assert_eq!(out, "{\n  \"a\": {\n    \"b\": {... 1 keys}\n  }\n}\n");
}

#[test]
fn deeply_nested_input_still_completes() {
    // Deeper than the guard but still within the parser's own limit.
    let depth = 100;
    let mut doc = String::new();
    doc.push_str(&"[".repeat(depth));
    doc.push('1');
    doc.push_str(&"]".repeat(depth));
    let out = util::run_tree(&doc, &["--max-depth", "64"]);
    assert!(out.contains("[... 1 items]"));
    // 64 opens above the guard, one summary line, 64 matching closes.
    assert_eq!(out.lines().count(), 64 * 2 + 1);
}

#[test]
fn shallow_documents_are_untouched_by_the_default_guard() {
    let doc = r#"{"a":[{"b":1}]}"#;
    assert_eq!(
        util::run_tree(doc, &[]),
        util::run_tree(doc, &["--max-depth", "128"])
    );
}
