#[path = "../test_support/mod.rs"]
mod util;

#[test]
fn escape_then_unescape_restores_the_text() {
    for text in [
        "plain",
        "with \"quotes\" and \\slashes\\",
        "tabs\tand\nnewlines",
        "unicode 世界 😀",
    ] {
        let escaped = util::run_stdout(text, &["-f", "escape"]);
        let restored = util::run_stdout(&escaped, &["-f", "unescape"]);
        assert_eq!(restored.trim_end_matches('\n'), text, "text: {text:?}");
    }
}

#[test]
fn escape_emits_json_sequences() {
    let out = util::run_stdout("a\"b\tc", &["-f", "escape"]);
    assert_eq!(out, "a\\\"b\\tc\n");
}

#[test]
fn unescape_decodes_surrogate_pairs() {
    let out = util::run_stdout("\\ud83d\\ude00", &["-f", "unescape"]);
    assert_eq!(out, "😀\n");
}

#[test]
fn unescape_rejects_unterminated_sequences() {
    let assert = util::run_assert("oops\\", &["-f", "unescape"]);
    let output = assert.get_output();
    assert!(!output.status.success());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("unterminated"), "stderr: {err}");
}

#[test]
fn unescape_names_the_bad_escape() {
    let assert = util::run_assert("ab\\q", &["-f", "unescape"]);
    let err = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(err.contains("'q'"), "stderr: {err}");
}
