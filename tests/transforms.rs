#[path = "../test_support/mod.rs"]
mod util;

#[test]
fn pretty_reindents() {
    let out = util::run_stdout(r#"{"a":[1,2]}"#, &["-f", "pretty"]);
    assert_eq!(out, "{\n  \"a\": [\n    1,\n    2\n  ]\n}\n");
}

#[test]
fn pretty_honors_indent_flag() {
    let out = util::run_stdout(r#"{"a":1}"#, &["-f", "pretty", "--indent", "\t"]);
    assert_eq!(out, "{\n\t\"a\": 1\n}\n");
}

#[test]
fn min_strips_whitespace() {
    let out = util::run_stdout("{\n  \"a\": [ 1 , 2 ]\n}", &["-f", "min"]);
    assert_eq!(out, "{\"a\":[1,2]}\n");
}

#[test]
fn pretty_then_min_round_trips() {
    let doc = r#"{"a":{"b":[1,2,3]},"c":"x"}"#;
    let pretty = util::run_stdout(doc, &["-f", "pretty"]);
    let min = util::run_stdout(&pretty, &["-f", "min"]);
    assert_eq!(min.trim_end(), doc);
}

#[test]
fn xml_renders_object_members() {
    let out = util::run_stdout(r#"{"name":"ada","age":36}"#, &["-f", "xml"]);
    assert_eq!(
        out,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<root>\n  <name>ada</name>\n  <age>36</age>\n</root>\n"
    );
}

#[test]
fn xml_rejects_control_characters_in_string_values() {
    let assert = util::run_assert(r#"{"a":"x\u0001y"}"#, &["-f", "xml"]);
    let output = assert.get_output();
    assert!(!output.status.success());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("U+0001"), "stderr: {err}");
}

#[test]
fn xml_rejects_unrepresentable_shapes() {
    let assert = util::run_assert(r#"[[1,2]]"#, &["-f", "xml"]);
    let output = assert.get_output();
    assert!(!output.status.success());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("XML"), "stderr: {err}");
}
