//! Integration tests for the gridcalc binary (command mode, edits, exports)

use std::fs;
use std::path::Path;
use std::process::Command;

fn run_command(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_gridcalc"))
        // Tests must be deterministic and not depend on a user's config.toml.
        .arg("--no-config")
        .args(args)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

#[test]
fn test_basic_arithmetic() {
    let (stdout, _, code) = run_command(&["-c", "2+3*4"]);
    assert_eq!(stdout.trim(), "14");
    assert_eq!(code, 0);
}

#[test]
fn test_grouping_and_unary_minus() {
    let (stdout, _, _) = run_command(&["-c", "(2+3)*4"]);
    assert_eq!(stdout.trim(), "20");
    let (stdout, _, code) = run_command(&["-c", "-5+2"]);
    assert_eq!(stdout.trim(), "-3");
    assert_eq!(code, 0);
}

#[test]
fn test_auto_prepend_equals() {
    let (stdout1, _, _) = run_command(&["-c", "10 + 5"]);
    let (stdout2, _, _) = run_command(&["-c", "=10 + 5"]);
    assert_eq!(stdout1, stdout2);
}

#[test]
fn test_division_by_zero_is_zero() {
    let (stdout, _, code) = run_command(&["-c", "1/0"]);
    assert_eq!(stdout.trim(), "0");
    assert_eq!(code, 0);
}

#[test]
fn test_garbage_still_evaluates() {
    let (stdout, _, code) = run_command(&["-c", "hello world"]);
    assert_eq!(stdout.trim(), "0");
    assert_eq!(code, 0);
}

#[test]
fn test_range_functions_over_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sheet.csv");
    fs::write(&path, "10\n20\n").unwrap();

    for (expr, expected) in [
        ("SUM(A1:A2)", "30"),
        ("AVG(A1:A2)", "15"),
        ("MIN(A1:A2)", "10"),
        ("MAX(A1:A2)", "20"),
        ("MIN(A2:A1)", "inf"),
    ] {
        let (stdout, _, code) = run_command(&[path_arg(&path), "-c", expr]);
        assert_eq!(stdout.trim(), expected, "{}", expr);
        assert_eq!(code, 0);
    }
}

#[test]
fn test_set_prints_table() {
    let (stdout, _, code) = run_command(&["-s", "A1=10", "-s", "B1==A1*2", "-s", "A2=total"]);
    assert_eq!(code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains('A') && lines[0].contains('B'));
    assert!(lines[1].contains("10") && lines[1].contains("20"));
    assert!(lines[2].contains("total"));
}

#[test]
fn test_write_saves_raw_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("new.csv");

    let (_, stderr, code) = run_command(&[path_arg(&path), "-s", "A1=4", "-s", "B1==A1*A1", "-w"]);
    assert_eq!(code, 0, "{}", stderr);
    assert_eq!(fs::read_to_string(&path).unwrap(), "4,=A1*A1\n");

    let (stdout, _, _) = run_command(&[path_arg(&path), "-c", "B1+1"]);
    assert_eq!(stdout.trim(), "17");
}

#[test]
fn test_custom_separator() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sheet.txt");
    fs::write(&path, "1;2;=A1+B1\n").unwrap();

    let (stdout, _, code) = run_command(&[path_arg(&path), "--separator", ";", "-c", "C1"]);
    assert_eq!(stdout.trim(), "3");
    assert_eq!(code, 0);
}

#[test]
fn test_markdown_export() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.md");

    let (stdout, _, code) = run_command(&["-s", "A1=2", "-s", "B1==A1/4", "-o", path_arg(&out)]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("Exported to"));
    let text = fs::read_to_string(&out).unwrap();
    assert!(text.contains("| 2 | 0.5 |"));
}

#[test]
fn test_invalid_address_fails() {
    let (_, stderr, code) = run_command(&["-s", "a1=5"]);
    assert!(stderr.starts_with("Error"));
    assert_eq!(code, 1);

    let (_, stderr, code) = run_command(&["--cols", "2", "-s", "C1=5"]);
    assert!(stderr.contains("outside"));
    assert_eq!(code, 1);
}

#[test]
fn test_write_without_file_fails() {
    let (_, stderr, code) = run_command(&["-s", "A1=1", "-w"]);
    assert!(stderr.contains("No file path set"));
    assert_eq!(code, 1);
}

#[test]
fn test_small_grid_treats_outside_refs_as_zero() {
    let (stdout, _, code) = run_command(&["--rows", "2", "--cols", "2", "-s", "B2=7", "-c", "B2+C3"]);
    assert_eq!(stdout.trim(), "7");
    assert_eq!(code, 0);
}

#[test]
fn test_range_past_grid_edge_keeps_inner_cells() {
    let (stdout, _, code) = run_command(&["-s", "A1=10", "-s", "B2=5", "-c", "SUM(A1:ZZ9999)"]);
    assert_eq!(stdout.trim(), "15");
    assert_eq!(code, 0);
}
