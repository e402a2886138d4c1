use assert_cmd::{assert::Assert, Command};

#[allow(dead_code, reason = "test helpers used ad-hoc across tests")]
pub fn run_stdout(input: &str, args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("jsonfold").expect("bin");
    let assert = cmd
        .arg("--no-color")
        .args(args)
        .write_stdin(input)
        .assert()
        .success();
    String::from_utf8_lossy(&assert.get_output().stdout).into_owned()
}

#[allow(dead_code, reason = "test helpers used ad-hoc across tests")]
pub fn run_tree(input: &str, extra: &[&str]) -> String {
    let mut args = vec!["-f", "tree"];
    args.extend_from_slice(extra);
    run_stdout(input, &args)
}

#[allow(dead_code, reason = "test helpers used ad-hoc across tests")]
pub fn run_assert(input: &str, args: &[&str]) -> Assert {
    let mut cmd = Command::cargo_bin("jsonfold").expect("bin");
    cmd.arg("--no-color").args(args).write_stdin(input).assert()
}
