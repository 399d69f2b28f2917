use assert_cmd::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

const CALENDAR: &str = r#"{
  "totalContributions": 5,
  "weeks": [
    { "contributionDays": [
      { "contributionCount": 3, "date": "2021-01-01" },
      { "contributionCount": 0, "date": "2021-01-02" },
      { "contributionCount": 2, "date": "2021-01-03" }
    ] }
  ]
}"#;

fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

fn write_calendar(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("calendar.json");
    fs::write(&path, CALENDAR).unwrap();
    path
}

fn calsynth(dir: &Path, calendar: &Path) -> Command {
    let mut cmd = Command::cargo_bin("calsynth").unwrap();
    cmd.current_dir(dir)
        .env_remove("GITHUB_TOKEN")
        .args(["--login", "octocat", "--from", "2021-01-01", "--to", "2021-01-03"])
        .arg("--calendar-file")
        .arg(calendar);
    cmd
}

fn sync_args(cmd: &mut Command) -> &mut Command {
    cmd.args([
        "sync",
        "--committer-name",
        "Jane Doe",
        "--committer-email",
        "jane@example.com",
    ])
}

#[test]
fn sync_json_reports_each_day() {
    let dir = tempdir().unwrap();
    let calendar = write_calendar(dir.path());

    let mut cmd = calsynth(dir.path(), &calendar);
    sync_args(&mut cmd).arg("--json");
    let out = cmd.assert().success().get_output().stdout.clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(v["total_contributions"].as_u64(), Some(5));
    let days = v["days"].as_array().unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0]["date"], "2021-01-01");
    assert_eq!(days[0]["committed"].as_u64(), Some(3));
    assert_eq!(days[1]["date"], "2021-01-03");
    assert_eq!(days[1]["committed"].as_u64(), Some(2));
    assert!(days.iter().all(|d| d["error"].is_null()));
    assert_eq!(v["warnings"].as_array().map(|w| w.len()), Some(0));

    // Default target is ./repo.<login>
    assert!(dir.path().join("repo.octocat").join(".git").exists());
}

#[test]
fn git_sees_the_synthesized_history() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    let calendar = write_calendar(dir.path());
    let repo_dir = dir.path().join("target-repo");

    let mut cmd = calsynth(dir.path(), &calendar);
    sync_args(&mut cmd).arg("--repo-dir").arg(&repo_dir);
    cmd.assert().success();

    let out = Command::new("git")
        .args(["log", "--reverse", "--format=%an|%ae|%cn|%aI|%s"])
        .current_dir(&repo_dir)
        .output()
        .unwrap();
    assert!(out.status.success());
    let log = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 5);
    for line in &lines {
        let fields: Vec<&str> = line.split('|').collect();
        assert_eq!(fields[0], "Jane Doe");
        assert_eq!(fields[1], "jane@example.com");
        assert_eq!(fields[2], "Jane Doe");
        assert!(fields[3].ends_with("+00:00"));
        assert_eq!(fields[4], "Private contribution");
    }
    assert!(lines[..3].iter().all(|l| l.contains("|2021-01-01T")));
    assert!(lines[3..].iter().all(|l| l.contains("|2021-01-03T")));

    // Empty commits: no file changes anywhere in history.
    let out = Command::new("git")
        .args(["log", "--name-only", "--format="])
        .current_dir(&repo_dir)
        .output()
        .unwrap();
    assert!(String::from_utf8(out.stdout).unwrap().trim().is_empty());
}

#[test]
fn second_sync_doubles_the_history() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    let calendar = write_calendar(dir.path());
    let repo_dir = dir.path().join("twice");

    for _ in 0..2 {
        let mut cmd = calsynth(dir.path(), &calendar);
        sync_args(&mut cmd).arg("--repo-dir").arg(&repo_dir);
        cmd.assert().success();
    }

    let out = Command::new("git")
        .args(["rev-list", "--count", "HEAD"])
        .current_dir(&repo_dir)
        .output()
        .unwrap();
    assert_eq!(String::from_utf8(out.stdout).unwrap().trim(), "10");
}

#[test]
fn plan_and_dry_run_do_not_touch_disk() {
    let dir = tempdir().unwrap();
    let calendar = write_calendar(dir.path());

    let mut cmd = calsynth(dir.path(), &calendar);
    cmd.arg("plan");
    let out = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("2021-01-01"));
    assert!(text.contains("5 commits over 2 days"));

    let mut cmd = calsynth(dir.path(), &calendar);
    sync_args(&mut cmd).arg("--dry-run");
    cmd.assert().success();

    assert!(!dir.path().join("repo.octocat").exists());
}

#[test]
fn missing_token_is_fatal() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("calsynth").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("GITHUB_TOKEN")
        .args(["--login", "octocat", "plan"]);
    cmd.assert().failure();
}

#[test]
fn inverted_range_is_fatal() {
    let dir = tempdir().unwrap();
    let calendar = write_calendar(dir.path());
    let mut cmd = Command::cargo_bin("calsynth").unwrap();
    cmd.current_dir(dir.path())
        .args(["--login", "octocat", "--from", "2021-02-01", "--to", "2021-01-01"])
        .arg("--calendar-file")
        .arg(&calendar);
    sync_args(&mut cmd);
    cmd.assert().failure();
    assert!(!dir.path().join("repo.octocat").exists());
}

#[test]
fn empty_committer_email_is_fatal() {
    let dir = tempdir().unwrap();
    let calendar = write_calendar(dir.path());
    let mut cmd = calsynth(dir.path(), &calendar);
    cmd.args(["sync", "--committer-name", "Jane Doe", "--committer-email", ""]);
    cmd.assert().failure();
}
