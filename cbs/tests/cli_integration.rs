//! Integration tests for the cbs CLI

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn run_cbs(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_cbs"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn create_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// `root/{a.go, b.go, sub/c.txt}` with 13 lines of Go and 3 of text
fn create_tree(base: &Path) {
    create_file(
        &base.join("root/a.go"),
        "package main\n\nimport \"fmt\"\n\nfunc main() {\n\tfmt.Println(1)\n\tfmt.Println(2)\n\tfmt.Println(3)\n\tfmt.Println(4)\n}\n",
    );
    create_file(
        &base.join("root/b.go"),
        "package main\nfunc b() {\n\tx := 1\n\t_ = x\n}\n",
    );
    create_file(&base.join("root/sub/c.txt"), "one\ntwo\nthree\n");
}

#[test]
fn test_cli_help() {
    let temp = tempdir().unwrap();
    let (stdout, _, success) = run_cbs(temp.path(), &["--help"]);

    assert!(success);
    assert!(stdout.contains("--exclude"));
    assert!(stdout.contains("--type"));
    assert!(stdout.contains("--ignore-null"));
    assert!(stdout.contains("--exclude-errors"));
    assert!(stdout.contains("--output"));
}

#[test]
fn test_cli_version() {
    let temp = tempdir().unwrap();
    let (stdout, _, success) = run_cbs(temp.path(), &["--version"]);

    assert!(success);
    assert!(stdout.contains("cbs"));
}

#[test]
fn test_text_report() {
    let temp = tempdir().unwrap();
    create_tree(temp.path());

    let (stdout, _, success) = run_cbs(temp.path(), &["root/"]);

    assert!(success);
    assert!(stdout.contains("CBS REPORT ON 'root':"));
    assert!(stdout.contains(" .go "));
    assert!(stdout.contains("[~81.25%]"));
    assert!(stdout.contains(" .txt"));
    assert!(stdout.contains("[~18.75%]"));
    assert!(stdout.contains("Total 16 lines of code spread across 3 files."));
    assert!(!stdout.contains("Skipped files/directories"));
}

#[test]
fn test_json_output() {
    let temp = tempdir().unwrap();
    create_tree(temp.path());

    let (stdout, _, success) = run_cbs(temp.path(), &["root", "--output", "json", "-t", "txt"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed["files_processed"], 3);
    assert_eq!(parsed["tallies"][0]["extension"], "go");
    assert_eq!(parsed["tallies"][0]["lines"], 13);
    assert_eq!(parsed["tallies"].as_array().unwrap().len(), 1);
    assert_eq!(parsed["skipped"][0]["kind"], "excluded_file");
    assert_eq!(parsed["skipped"][0]["path"], "root/sub/c.txt");
}

#[test]
fn test_exclude_directory_by_full_path() {
    let temp = tempdir().unwrap();
    create_tree(temp.path());

    let (stdout, _, success) = run_cbs(temp.path(), &["root", "-e", "root/sub"]);

    assert!(success);
    assert!(!stdout.contains(" .txt"));
    assert!(stdout.contains(" root/sub/ [EXCLUDED BY USER]"));
    assert!(stdout.contains("spread across 2 files."));
}

#[test]
fn test_ignore_null_flag() {
    let temp = tempdir().unwrap();
    create_tree(temp.path());
    create_file(&temp.path().join("root/bin"), &"x\n".repeat(100));

    let (stdout, _, success) = run_cbs(temp.path(), &["root"]);
    assert!(success);
    assert!(stdout.contains(" .NULL"));
    assert!(stdout.contains("don't have an extension"));

    let (stdout, _, success) = run_cbs(temp.path(), &["root", "-n"]);
    assert!(success);
    assert!(!stdout.contains(" .NULL"));
    assert!(stdout.contains(" root/bin"));
    assert!(stdout.contains("spread across 4 files."));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let temp = tempdir().unwrap();
    create_tree(temp.path());

    let (stdout, stderr, success) = run_cbs(temp.path(), &["root", "-v"]);

    assert!(success);
    assert!(stderr.contains("added to the queue"));
    assert!(stderr.contains("processing file"));
    assert!(!stdout.contains("processing file"));
}

#[test]
fn test_invalid_path() {
    let temp = tempdir().unwrap();
    let (_, stderr, success) = run_cbs(temp.path(), &["missing"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("missing"));
    assert_eq!(stderr.matches("Failed to scan").count(), 1);
}

#[cfg(unix)]
#[test]
fn test_json_output_with_non_utf8_file_name() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp = tempdir().unwrap();
    create_tree(temp.path());
    let name = OsStr::from_bytes(b"bad\xff.txt");
    create_file(&temp.path().join("root").join(name), "x\n");

    let (stdout, _, success) = run_cbs(temp.path(), &["root", "-o", "json", "-t", "txt"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    let paths: Vec<&str> = parsed["skipped"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|r| r["path"].as_str())
        .collect();
    assert!(paths.contains(&"root/bad\u{fffd}.txt"));
    assert_eq!(parsed["files_processed"], 4);
}

/// `root/link` points at `root/sub`, so reading it as a file fails.
#[cfg(unix)]
fn create_unreadable_link(base: &Path) {
    create_tree(base);
    std::os::unix::fs::symlink(base.join("root/sub"), base.join("root/link")).unwrap();
}

#[cfg(unix)]
#[test]
fn test_read_error_warns_on_stderr() {
    let temp = tempdir().unwrap();
    create_unreadable_link(temp.path());

    let (stdout, stderr, success) = run_cbs(temp.path(), &["root"]);

    assert!(success);
    assert!(stderr.contains("failed to read file"));
    assert!(stderr.contains("root/link"));
    assert!(stdout.contains(" root/link [READING ERROR]"));
    assert!(stdout.contains("CBS could not read some elements at 'root'"));
}

#[cfg(unix)]
#[test]
fn test_exclude_errors_keeps_stderr_quiet() {
    let temp = tempdir().unwrap();
    create_unreadable_link(temp.path());

    let (stdout, stderr, success) = run_cbs(temp.path(), &["root", "-r"]);

    assert!(success);
    assert!(!stderr.contains("failed to read file"));
    assert!(!stderr.contains("root/link"));
    assert!(stdout.contains(" root/link [READING ERROR]"));
    assert!(!stdout.contains("could not read"));
    assert!(stdout.contains("spread across 4 files."));
}
