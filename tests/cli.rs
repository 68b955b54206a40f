//! Integration tests for top-level CLI behavior.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn run_gosymex(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_gosymex");
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run gosymex binary")
}

fn sample(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test_samples")
        .join(name)
}

#[test]
fn describe_file_prints_json_report() {
    let path = sample("testfile.go");
    let output = run_gosymex(&["describe", path.to_str().unwrap()]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["Imports"], serde_json::json!(["fmt", "net/http"]));
    assert_eq!(
        report["Structs"]["MyStruct"],
        serde_json::json!(["Field1 int", "Field2 string"])
    );
    assert!(report["Interfaces"].is_null());
    assert_eq!(
        report["Funcs"][0],
        "MyFunc(param1 int, param2 string) returns (result bool)"
    );
}

#[test]
fn describe_compact_is_single_line() {
    let path = sample("shapes.go");
    let output = run_gosymex(&["describe", "--compact", path.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end().lines().count(), 1);
    assert!(stdout.contains("\"Shape\":[\"Area func() float64\""));
}

#[test]
fn describe_rejects_non_go_file() {
    let output = run_gosymex(&["describe", "Cargo.toml"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("not a Go file"));
}

#[test]
fn describe_directory_continues_past_failures() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("a.go"), "package p\n\nfunc A() {}\n").unwrap();
    fs::write(root.join("b.go"), "package p\n\nfunc B( {\n").unwrap();
    fs::write(root.join("c_test.go"), "package p\n\nfunc TestC() {}\n").unwrap();
    fs::write(root.join("d.go"), "package p\n\nfunc D() {}\n").unwrap();

    let output = run_gosymex(&["describe", "--compact", root.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.contains("\"A()\""));
    assert!(stdout.contains("\"D()\""));
    assert!(!stdout.contains("TestC"));
    assert!(stderr.contains("syntax error"));

    let bad = root.join("b.go").to_string_lossy().to_string();
    let report = stderr
        .lines()
        .find(|line| line.starts_with(&bad))
        .expect("failure line for b.go");
    assert_eq!(report.matches("b.go").count(), 1);
}

#[test]
fn describe_directory_includes_tests_on_request() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("a.go"), "package p\n\nfunc A() {}\n").unwrap();
    fs::write(root.join("a_test.go"), "package p\n\nfunc TestA() {}\n").unwrap();

    let output = run_gosymex(&["describe", "-t", "--compact", root.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("TestA()"));
}

#[test]
fn detect_prints_dependency_table() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(
        root.join("go.mod"),
        concat!(
            "module example.com/app\n\ngo 1.22\n\n",
            "require (\n",
            "\tgithub.com/spf13/cobra v1.8.0\n",
            "\tgithub.com/spf13/pflag v1.0.5 // indirect\n",
            ")\n",
        ),
    )
    .unwrap();

    let output = run_gosymex(&["detect", root.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Module Path: example.com/app"));
    assert!(stdout.contains("github.com/spf13/cobra"));
    assert!(!stdout.contains("pflag"));

    let output = run_gosymex(&["detect", "--all-deps", root.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("github.com/spf13/pflag"));
}

#[test]
fn detect_outside_a_module_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_gosymex(&["detect", temp_dir.path().to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("not a Go project"));
}

#[test]
fn help_lists_subcommands() {
    let output = run_gosymex(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("describe"));
    assert!(stdout.contains("detect"));
}
