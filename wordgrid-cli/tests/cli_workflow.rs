//! Integration tests for the wordgrid CLI.
//!
//! Each test runs the built binary with `HOME` pointed at a temporary
//! directory, so configuration and logs never touch the real home directory.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Run the CLI with the given home directory.
fn run_cli(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wordgrid"))
        .args(args)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command")
}

/// Run the CLI, feeding `input` on stdin.
fn run_cli_with_input(home: &Path, args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_wordgrid"))
        .args(args)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI command");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input)
        .expect("Failed to write stdin");
    child.wait_with_output().expect("Failed to wait for CLI")
}

/// Assert a command succeeded.
fn assert_success(output: &Output, context: &str) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        panic!("{} failed:\nstdout: {}\nstderr: {}", context, stdout, stderr);
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Configure a 10x10 grid over one square degree with a five-word list.
fn write_toy_config(home: &Path) {
    let config_dir = home.join(".wordgrid");
    fs::create_dir_all(&config_dir).unwrap();

    let words = config_dir.join("words.txt");
    fs::write(&words, "alpha\nbravo\ncharlie\ndelta\necho\n").unwrap();

    fs::write(
        config_dir.join("config.ini"),
        format!(
            "[region]\nmin_lat = 0\nmax_lat = 1\nmin_lng = 0\nmax_lng = 1\ncell_size_meters = 11000\n\n\
             [vocabulary]\npath = {}\n",
            words.display()
        ),
    )
    .unwrap();
}

#[test]
fn test_encode_and_decode_toy_grid() {
    let home = TempDir::new().unwrap();
    write_toy_config(home.path());

    let output = run_cli(home.path(), &["encode", "--lat", "0.35", "--lng", "0.75"]);
    assert_success(&output, "encode");
    assert_eq!(stdout(&output), "charlie.charlie.bravo");

    let output = run_cli(home.path(), &["decode", "charlie.charlie.bravo"]);
    assert_success(&output, "decode dotted");
    assert_eq!(stdout(&output), "0.350000, 0.750000");

    let output = run_cli(home.path(), &["decode", "Charlie", "charlie", "BRAVO"]);
    assert_success(&output, "decode spaced");
    assert_eq!(stdout(&output), "0.350000, 0.750000");
}

#[test]
fn test_encode_json() {
    let home = TempDir::new().unwrap();
    write_toy_config(home.path());

    let output = run_cli(
        home.path(),
        &["encode", "--lat", "0.35", "--lng", "0.75", "--json"],
    );
    assert_success(&output, "encode --json");
    assert_eq!(stdout(&output), r#"{"words":["charlie","charlie","bravo"]}"#);
}

#[test]
fn test_out_of_bounds_fails() {
    let home = TempDir::new().unwrap();
    write_toy_config(home.path());

    let output = run_cli(home.path(), &["encode", "--lat", "-0.5", "--lng", "0.5"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("latitude must be >= 0"), "stderr: {}", stderr);
}

#[test]
fn test_unknown_words_fail() {
    let home = TempDir::new().unwrap();
    write_toy_config(home.path());

    let output = run_cli(home.path(), &["decode", "alpha.zulu.yankee"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown words: zulu, yankee"), "stderr: {}", stderr);
}

#[test]
fn test_wrong_word_count_fails() {
    let home = TempDir::new().unwrap();
    write_toy_config(home.path());

    let output = run_cli(home.path(), &["decode", "alpha.bravo"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid address"), "stderr: {}", stderr);
}

#[test]
fn test_batch_answers_every_line() {
    let home = TempDir::new().unwrap();
    write_toy_config(home.path());

    let input = concat!(
        "{\"latitude\": 0.35, \"longitude\": 0.75}\n",
        "\n",
        "{\"words\": [\"charlie\", \"charlie\", \"bravo\"]}\n",
        "{\"words\": [\"echo\", \"echo\", \"echo\"]}\n",
        "not json\n",
    );
    let output = run_cli_with_input(home.path(), &["batch"], input.as_bytes());
    assert_success(&output, "batch");

    let lines: Vec<serde_json::Value> = stdout(&output)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0]["words"][2], "bravo");
    assert!((lines[1]["coordinates"]["latitude"].as_f64().unwrap() - 0.35).abs() < 1e-9);
    assert_eq!(lines[2]["error"], "unaddressed_words");
    assert_eq!(lines[3]["error"], "invalid_request");
}

#[test]
fn test_batch_continues_past_invalid_utf8() {
    let home = TempDir::new().unwrap();
    write_toy_config(home.path());

    let mut input = Vec::new();
    input.extend_from_slice(b"{\"latitude\": 0.35, \"longitude\": 0.75}\n");
    input.extend_from_slice(b"{\"words\": [\"\xff\xfe\", \"alpha\", \"bravo\"]}\n");
    input.extend_from_slice(b"{\"latitude\": 0.05, \"longitude\": 0.05}\n");

    let output = run_cli_with_input(home.path(), &["batch"], &input);
    assert_success(&output, "batch with invalid UTF-8");

    let lines: Vec<serde_json::Value> = stdout(&output)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["words"][2], "bravo");
    assert_eq!(lines[1]["error"], "invalid_request");
    assert_eq!(lines[2]["words"][0], "alpha");
}

#[test]
fn test_info_reports_grid() {
    let home = TempDir::new().unwrap();
    write_toy_config(home.path());

    let output = run_cli(home.path(), &["info"]);
    assert_success(&output, "info");
    let text = stdout(&output);
    assert!(text.contains("10 rows x 10 columns"), "stdout: {}", text);
    assert!(text.contains("Cells:      100"), "stdout: {}", text);
    assert!(text.contains("Addresses:  125"), "stdout: {}", text);
}

#[test]
fn test_default_region_without_config() {
    let home = TempDir::new().unwrap();

    let output = run_cli(home.path(), &["encode", "--lat", "12.9716", "--lng", "77.5946"]);
    assert_success(&output, "encode with defaults");
    let words = stdout(&output);
    assert_eq!(words.split('.').count(), 3);

    let output = run_cli(home.path(), &["decode", &words]);
    assert_success(&output, "decode with defaults");
    let text = stdout(&output);
    let (lat, lng) = text.split_once(", ").unwrap();
    assert!((lat.parse::<f64>().unwrap() - 12.9716).abs() < 1e-4);
    assert!((lng.parse::<f64>().unwrap() - 77.5946).abs() < 1e-4);

    assert!(home.path().join(".wordgrid/wordgrid.log").exists());
}

#[test]
fn test_config_init_path_show() {
    let home = TempDir::new().unwrap();
    let config_path = home.path().join(".wordgrid/config.ini");

    let output = run_cli(home.path(), &["config", "path"]);
    assert_success(&output, "config path");
    assert_eq!(stdout(&output), config_path.display().to_string());

    let output = run_cli(home.path(), &["config", "init"]);
    assert_success(&output, "config init");
    assert!(config_path.exists());

    let output = run_cli(home.path(), &["config", "init"]);
    assert_success(&output, "config init again");
    assert!(stdout(&output).contains("already exists"));

    let output = run_cli(home.path(), &["config", "show"]);
    assert_success(&output, "config show");
    let text = stdout(&output);
    assert!(text.contains("max_lng = 97.25"), "stdout: {}", text);
    assert!(text.contains("generated_size = 16384"), "stdout: {}", text);
}

#[test]
fn test_insufficient_vocabulary_is_fatal() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".wordgrid");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.ini"),
        "[vocabulary]\ngenerated_size = 100\n",
    )
    .unwrap();

    let output = run_cli(home.path(), &["info"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("generated_size"), "stderr: {}", stderr);
}
