use assert_cmd::prelude::*;
use pretty_assertions::assert_eq;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

fn git(dir: &Path, args: &[&str]) {
    assert!(Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_CEILING_DIRECTORIES", dir.parent().unwrap_or(dir))
        .status()
        .unwrap()
        .success());
}

fn init_git_repo(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    git(dir, &["init"]);
    git(dir, &["config", "core.autocrlf", "false"]);
    git(dir, &["config", "user.email", "you@example.com"]);
    git(dir, &["config", "user.name", "Your Name"]);
}

/// Commit `name` as `author <email>` at a fixed `date` (`YYYY-MM-DD HH:MM:SS +ZZZZ`).
fn commit_file(dir: &Path, name: &str, author: &str, email: &str, date: &str) {
    let path = dir.join(name);
    let mut f = File::create(&path).unwrap();
    f.write_all(format!("{author} {date}\n").as_bytes()).unwrap();
    f.sync_all().unwrap();
    git(dir, &["add", "."]);
    assert!(Command::new("git")
        .args(["commit", "-q", "-m", &format!("add {name}")])
        .current_dir(dir)
        .env("GIT_AUTHOR_NAME", author)
        .env("GIT_AUTHOR_EMAIL", email)
        .env("GIT_AUTHOR_DATE", date)
        .env("GIT_COMMITTER_DATE", date)
        .status()
        .unwrap()
        .success());
}

fn gitstats(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gitstats").unwrap();
    cmd.current_dir(root)
        .env("GIT_CEILING_DIRECTORIES", root)
        .env_remove("RUST_LOG");
    cmd
}

fn seed_alice_and_bob(root: &Path) {
    let repo = root.join("project");
    init_git_repo(&repo);
    commit_file(&repo, "a.txt", "Alice", "alice@x.com", "2024-01-01 10:00:00 +0000");
    commit_file(&repo, "b.txt", "Bob", "bob@x.com", "2024-01-01 11:00:00 +0000");
    commit_file(&repo, "c.txt", "Alice", "alice@x.com", "2024-01-02 09:00:00 +0000");
    commit_file(&repo, "d.txt", "Alice", "alice@x.com", "2023-06-15 12:00:00 +0000");
}

#[test]
fn report_writes_svg_to_stdout() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();
    seed_alice_and_bob(dir.path());

    let out = gitstats(dir.path())
        .args(["--email", "alice@x.com", "report", ".", "--year", "2024", "--no-progress"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let svg = String::from_utf8(out).unwrap();

    assert!(svg.starts_with("<?xml"));
    assert_eq!(svg.matches("<rect ").count(), 364);
    // Jan 1: one mine + one other, both at full density against a max of 1.
    assert!(svg.contains("fill: #944ea8"));
    // Jan 2: mine only.
    assert!(svg.contains("fill: #94a8ee"));
    assert_eq!(svg.matches("fill: #eeeeee").count(), 362);
}

#[test]
fn analyze_then_render_matches_direct_report() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();
    seed_alice_and_bob(dir.path());
    let export = dir.path().join("log.json");
    let rendered = dir.path().join("2024.svg");

    gitstats(dir.path())
        .args(["analyze", ".", "--no-progress", "--output"])
        .arg(&export)
        .assert()
        .success();

    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&export).unwrap()).unwrap();
    assert_eq!(v["records"].as_array().map(|a| a.len()), Some(4));
    assert_eq!(v["repositories"].as_array().map(|a| a.len()), Some(1));

    gitstats(dir.path())
        .args(["--email", "alice@x.com", "render", "--year", "2024", "--output"])
        .arg(&rendered)
        .arg(&export)
        .assert()
        .success();

    let direct = gitstats(dir.path())
        .args(["--email", "alice@x.com", "report", ".", "--year", "2024", "--no-progress"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(fs::read_to_string(&rendered).unwrap(), String::from_utf8(direct).unwrap());
}

#[test]
fn render_defaults_to_latest_year() {
    let dir = tempdir().unwrap();
    let export = dir.path().join("legacy.json");
    fs::write(
        &export,
        r#"[["Alice", "alice@x.com", "2015-12-05T17:10:45+09:00"],
            ["Alice", "alice@x.com", "2013-03-03T12:00:00+00:00"]]"#,
    )
    .unwrap();

    let out = gitstats(dir.path())
        .args(["--email", "alice@x.com", "render"])
        .arg(&export)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let svg = String::from_utf8(out).unwrap();
    assert_eq!(svg.matches("fill: #eeeeee").count(), 363);
}

#[test]
fn broken_repository_is_skipped() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();
    seed_alice_and_bob(dir.path());
    fs::create_dir_all(dir.path().join("broken/.git")).unwrap();
    let export = dir.path().join("log.json");

    gitstats(dir.path())
        .args(["analyze", ".", "--no-progress", "--output"])
        .arg(&export)
        .assert()
        .success();

    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&export).unwrap()).unwrap();
    assert_eq!(v["records"].as_array().map(|a| a.len()), Some(4));
    assert_eq!(v["failed_repositories"].as_array().map(|a| a.len()), Some(1));
}

#[test]
fn excluded_and_empty_repositories_render_an_empty_year() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();
    seed_alice_and_bob(dir.path());
    fs::write(dir.path().join("project/.exclude"), "").unwrap();
    init_git_repo(&dir.path().join("fresh"));

    let out = gitstats(dir.path())
        .args(["--email", "alice@x.com", "report", ".", "--year", "2024", "--no-progress"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let svg = String::from_utf8(out).unwrap();
    assert_eq!(svg.matches("<rect ").count(), 364);
    assert_eq!(svg.matches("fill: #eeeeee").count(), 364);
}

#[test]
fn all_years_writes_one_file_per_year() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();
    seed_alice_and_bob(dir.path());
    let out_dir = dir.path().join("reports");

    gitstats(dir.path())
        .args(["--email", "alice@x.com", "report", ".", "--all-years", "--no-progress", "--out-dir"])
        .arg(&out_dir)
        .assert()
        .success();

    let mut names: Vec<_> = fs::read_dir(&out_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["2023.svg", "2024.svg"]);
}

#[test]
fn missing_root_fails() {
    let dir = tempdir().unwrap();
    gitstats(dir.path())
        .args(["report", "does-not-exist", "--no-progress"])
        .assert()
        .failure();
}
