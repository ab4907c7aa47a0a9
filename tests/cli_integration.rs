use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::{self, File};
use tempfile::TempDir;

fn dirlist() -> Command {
    Command::cargo_bin("dirlist").unwrap()
}

/// root/
///   B/
///   a/x.txt
///   z.txt
fn create_example_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("B")).unwrap();
    fs::create_dir(root.join("a")).unwrap();
    File::create(root.join("a/x.txt")).unwrap();
    File::create(root.join("z.txt")).unwrap();
    dir
}

#[test]
fn shows_help() {
    dirlist()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("rich text"));
}

#[test]
fn shows_version() {
    dirlist()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn requires_subcommand() {
    dirlist()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn list_subcommand_help() {
    dirlist()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("optionally files"));
}

#[test]
fn list_folders_only() {
    let dir = create_example_tree();

    dirlist()
        .arg("list")
        .arg(dir.path())
        .assert()
        .success()
        .stdout("a/\nB/\n");
}

#[test]
fn list_with_files() {
    let dir = create_example_tree();

    dirlist()
        .args(["list", "--files"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout("a/\n\tx.txt\nB/\nz.txt\n");
}

#[test]
fn list_as_rtf() {
    let dir = create_example_tree();

    let expected = "{\\rtf1\\ansi\n\
        {\\colortbl;\\red0\\green0\\blue255;\\red0\\green0\\blue0;}\n\
        \\b\\cf1 a/\\b0\\par\n\
        \\cf0     x.txt\\par\n\
        \\b\\cf1 B/\\b0\\par\n\
        \\cf0 z.txt\\par\n\
        }";

    dirlist()
        .args(["list", "--files", "--format", "rtf"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn list_as_json() {
    let dir = create_example_tree();

    let output = dirlist()
        .args(["list", "--format", "json"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(lines[0]["text"], "a/");
    assert_eq!(lines[0]["category"], "folder");
    assert_eq!(lines[1]["text"], "B/");
    assert_eq!(lines.as_array().unwrap().len(), 2);
}

#[test]
fn list_respects_depth() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("top/mid/deep")).unwrap();

    dirlist()
        .args(["list", "-d", "1"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout("top/\n\tmid/\n");
}

#[test]
fn list_missing_root_fails() {
    dirlist()
        .args(["list", "/nonexistent/path/12345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Path not found"));
}

#[test]
fn list_file_root_fails() {
    let dir = create_example_tree();

    dirlist()
        .arg("list")
        .arg(dir.path().join("z.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn invalid_config_path_fails() {
    dirlist()
        .args(["--config", "/nonexistent/path.toml", "list"])
        .assert()
        .failure();
}

#[test]
fn config_enables_files() {
    let dir = create_example_tree();
    let config = dir.path().join("a/dirlist.toml");
    fs::write(&config, "[listing]\ninclude_files = true\n").unwrap();

    dirlist()
        .arg("--config")
        .arg(&config)
        .arg("list")
        .arg(dir.path().join("a"))
        .assert()
        .success()
        .stdout("dirlist.toml\nx.txt\n");
}

#[test]
fn rtf_from_stdin() {
    dirlist()
        .arg("rtf")
        .write_stdin("docs/\n\tguide.md\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\\b\\cf1 docs/\\b0\\par\n"))
        .stdout(predicate::str::contains("\\cf0     guide.md\\par\n"))
        .stdout(predicate::str::ends_with("}"));
}

#[test]
fn rtf_escapes_braces_unless_disabled() {
    dirlist()
        .arg("rtf")
        .write_stdin("{x}\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\\cf0 \\{x\\}\\par"));

    dirlist()
        .args(["rtf", "--no-escape"])
        .write_stdin("{x}\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\\cf0 {x}\\par"));
}

#[test]
fn rtf_output_is_latin1() {
    let output = dirlist()
        .arg("rtf")
        .write_stdin("caf\u{e9}/\n\u{65e5}.txt\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stdout.windows(5).any(|w| w == b"caf\xe9/"));
    assert!(output.stdout.windows(5).any(|w| w == b"?.txt"));
}

#[test]
fn rtf_accepts_latin1_input() {
    // Feeding RTF-mode listing bytes back in must not fail on non-UTF-8.
    let output = dirlist()
        .arg("rtf")
        .write_stdin(&b"caf\xe9/\n\tna\xefve.txt\n"[..])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stdout.windows(16).any(|w| w == b"\\b\\cf1 caf\xe9/\\b0"));
    assert!(output.stdout.windows(9).any(|w| w == b"na\xefve.txt"));
}

#[test]
fn completions_for_bash() {
    dirlist()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dirlist"));
}

#[test]
fn man_page_renders() {
    dirlist()
        .arg("man")
        .assert()
        .success()
        .stdout(predicate::str::contains(".TH"));
}
