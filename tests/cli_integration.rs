//! Integration tests for the csv2html converter

use std::fs;
use std::path::Path;
use std::process::Command;

fn run_csv2html(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_csv2html"))
        .args(args)
        .output()
        .expect("Failed to execute csv2html");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp path is not UTF-8")
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_csv2html(&["--help"]);

    assert!(success);
    assert!(stdout.contains("csv2html"));
    assert!(stdout.contains("--separator"));
    assert!(stdout.contains("--no-header"));
    assert!(stdout.contains("--encoding"));
}

#[test]
fn test_default_output_next_to_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("people.csv");
    fs::write(&input, "Name;Note\nAda;\"first\r\nsecond\"\nBob;<b>\n").unwrap();

    let (_, stderr, success) = run_csv2html(&[path_str(&input)]);
    assert!(success, "csv2html failed: {stderr}");

    let html = fs::read_to_string(dir.path().join("people.csv.html")).unwrap();
    assert!(html.contains("<title>people</title>"));
    assert!(html.contains("<th>Name</th>"));
    assert!(html.contains("<td>first<br />second</td>"));
    assert!(html.contains("<td>&lt;b&gt;</td>"));
}

#[test]
fn test_no_header_and_explicit_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("data.csv");
    let output = dir.path().join("table.html");
    fs::write(&input, "1,2\n3,4\n").unwrap();

    let (_, stderr, success) = run_csv2html(&[
        path_str(&input),
        "--separator",
        ",",
        "--no-header",
        "--output",
        path_str(&output),
    ]);
    assert!(success, "csv2html failed: {stderr}");

    let html = fs::read_to_string(&output).unwrap();
    assert!(!html.contains("<thead>"));
    assert_eq!(html.matches("<tr>").count(), 2);
}

#[test]
fn test_malformed_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.csv");
    fs::write(&input, "h\n\"never closed\n").unwrap();

    let (_, stderr, success) = run_csv2html(&[path_str(&input)]);
    assert!(!success);
    assert!(stderr.contains("Malformed record"));
}

#[test]
fn test_unknown_encoding_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("x.csv");
    fs::write(&input, "a\n").unwrap();

    let (_, stderr, success) = run_csv2html(&[path_str(&input), "--encoding", "klingon"]);
    assert!(!success);
    assert!(stderr.contains("unknown encoding"));
}
