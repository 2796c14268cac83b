//! Integration tests for the `cmdline-keys` binary.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};

const KEYS: &str = "{help h usage ? || print this message}\
                    {@image1 || image1 for compare}\
                    {@repeat |1| number}\
                    {fps | -1.0 | fps for output video}\
                    {N count |100| count of objects}";

fn cmdline_keys_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_cmdline-keys"))
}

fn run(args: &[&str]) -> Output {
    Command::new(cmdline_keys_bin())
        .args(args)
        .output()
        .expect("failed to run cmdline-keys")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ---- usage ----

#[test]
fn test_usage_prints_message() {
    let output = run(&[
        "usage",
        "--keys",
        KEYS,
        "--program",
        "./bin/tool",
        "--about",
        "Tool v2",
    ]);
    assert!(
        output.status.success(),
        "usage failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let text = stdout(&output);
    assert!(text.starts_with("Tool v2\nUsage: tool [params] image1 repeat \n"));
    assert!(text.contains("-N, --count (value:100)"));
    assert!(text.contains("\trepeat (value:1)\n\t\tnumber\n"));
}

#[test]
fn test_usage_rejects_broken_keys() {
    let output = run(&["usage", "--keys", "{a|b"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid keys string"), "{stderr}");
}

// ---- inspect ----

#[test]
fn test_inspect_json_reflects_overlay() {
    let output = run(&[
        "inspect", "--keys", KEYS, "--", "-N=200", "1.png", "19", "-nope",
    ]);
    assert!(output.status.success());

    let text = stdout(&output);
    let parsed: serde_json::Value = serde_json::from_str(&text)
        .unwrap_or_else(|e| panic!("Invalid JSON output: {e}\n{text}"));
    assert_eq!(parsed["app_name"], "app");

    let decls = parsed["declarations"].as_array().unwrap();
    let count = decls
        .iter()
        .find(|d| d["keys"][0] == "N")
        .expect("N should be declared");
    assert_eq!(count["default_value"], "200");

    let repeat = decls
        .iter()
        .find(|d| d["position"] == 1)
        .expect("position 1 should be declared");
    assert_eq!(repeat["default_value"], "19");

    assert_eq!(parsed["ignored"][0], "-nope");
    assert!(parsed["errors"].as_array().unwrap().is_empty());
}

#[test]
fn test_inspect_reads_keys_file() {
    let mut file = tempfile::NamedTempFile::new().expect("failed to create keys file");
    writeln!(file, "{{@src || source}}\n{{ || }}").expect("failed to write keys file");

    let output = Command::new(cmdline_keys_bin())
        .args(["inspect", "--format", "yaml", "--keys-file"])
        .arg(file.path())
        .args(["--", "in.txt"])
        .output()
        .expect("failed to run cmdline-keys");
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("default_value: in.txt"), "{text}");
    assert!(text.contains("Field KEYS could not be empty"), "{text}");
}

// ---- get ----

#[test]
fn test_get_by_name() {
    let output = run(&[
        "get", "--keys", KEYS, "--name", "count", "--type", "int", "--", "-N=7",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "7\n");
}

#[test]
fn test_get_by_index() {
    let output = run(&["get", "--keys", KEYS, "--index", "0", "--", "a.png"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "a.png\n");
}

#[test]
fn test_get_conversion_failure() {
    let output = run(&[
        "get", "--keys", KEYS, "--name", "fps", "--type", "double", "--", "-fps=aaa",
    ]);
    assert!(!output.status.success());
    assert_eq!(
        stdout(&output),
        "\nERRORS:\nParameter 'fps': can not convert: [aaa] to [double]\n\n"
    );
}

#[test]
fn test_get_undeclared_position() {
    let output = run(&["get", "--keys", KEYS, "--index", "9"]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains("undeclared position 9 requested"));
}

// ---- demo ----

#[test]
fn test_demo_defaults() {
    let output = run(&["demo"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "n = 100\n@b = 200\ns = str\n");
}

#[test]
fn test_demo_with_arguments() {
    let output = run(&["demo", "--", "--count=5", "2.5", "-s=hello", "-t=3"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "n = 5\n@b = 2.5\ns = hello\nt = 3\n");
}

#[test]
fn test_demo_help() {
    let output = run(&["demo", "--", "-h"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("Application name v1.0.0\nUsage: demo [params] b \n"));
    assert!(text.contains("\t-?, -h, --help, --usage\n\t\tprint this message\n"));
}

#[test]
fn test_demo_reports_errors() {
    let output = run(&["demo", "--", "-n=many"]);
    assert!(!output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Parameter 'n': can not convert: [many] to [int]"));
}
