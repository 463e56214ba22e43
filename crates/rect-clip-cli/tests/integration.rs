//! Integration tests for rect-clip CLI commands.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

const SAMPLE: &str = "2\n-5 5 5 5\n20 20 30 30\n0 0 10 10\nP-5 5 5 15 15 5\n";

fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_rect-clip"))
}

/// Run the binary with `args`, feeding `stdin` to it.
fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(binary_path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for command")
}

/// A scratch file path unique to this test process.
fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("rect-clip-{}-{}", std::process::id(), name))
}

#[test]
fn clip_text_from_stdin() {
    let output = run(&["clip", "-"], SAMPLE);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "0 5 5 5\noutside\nP 10 5 0 5 0 10 10 10\n");
}

#[test]
fn clip_json_from_stdin() {
    let output = run(&["clip", "-", "--format", "json"], SAMPLE);
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["segments"].as_array().unwrap().len(), 2);
    assert_eq!(value["segments"][0]["clipped"]["x2"], 5.0);
    assert!(value["segments"][1]["clipped"].is_null());
    assert_eq!(value["polygon"]["area"], 50.0);
}

#[test]
fn clip_svg_to_file_with_style() {
    let input = temp_path("input.txt");
    let style = temp_path("style.yaml");
    let out = temp_path("out.svg");
    std::fs::write(&input, SAMPLE).unwrap();
    std::fs::write(&style, "clipped_segment: black\n").unwrap();

    let output = run(
        &[
            "clip",
            input.to_str().unwrap(),
            "-f",
            "svg",
            "--style",
            style.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
        ],
        "",
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(output.stdout.is_empty());

    let svg = std::fs::read_to_string(&out).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("stroke=\"black\""));
    assert!(svg.contains("</svg>"));

    for path in [input, style, out] {
        let _ = std::fs::remove_file(path);
    }
}

#[test]
fn malformed_input_fails_with_line_number() {
    let output = run(&["clip", "-"], "2\n1 1 2 2\n");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("missing segment data at line 3."),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn empty_input_fails() {
    let output = run(&["clip", "-"], "");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no input data."));
}

#[test]
fn missing_file_fails() {
    let output = run(&["clip", "/definitely/not/here.txt"], "");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read"));
}

#[test]
fn check_summarizes_input() {
    let output = run(&["check", "-"], SAMPLE);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("segments: 2"));
    assert!(stdout.contains("window: 0 0 10 10"));
    assert!(stdout.contains("polygon: 3 vertices"));
}

#[test]
fn help_shows_commands() {
    let output = run(&["--help"], "");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("clip"), "Should mention clip command");
    assert!(stdout.contains("check"), "Should mention check command");
}
