//! End-to-end tests for the filmcache CLI binary.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

const DAY: u64 = 86_400;

/// Test context with a private cache location
struct TestContext {
    _temp_dir: TempDir,
    cache_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let cache_path = temp_dir.path().join("letterboxd_popular_cache.json");
        Self {
            _temp_dir: temp_dir,
            cache_path,
        }
    }

    /// Write a cache with the given titles, last modified `age_days` ago.
    fn write_cache(&self, titles: &[&str], age_days: u64) {
        let records: Vec<String> = titles
            .iter()
            .map(|t| format!(r#"{{"title": "{t}", "rating": 4.1}}"#))
            .collect();
        std::fs::write(&self.cache_path, format!("[{}]", records.join(",")))
            .expect("failed to write cache");

        let mtime = SystemTime::now() - Duration::from_secs(age_days * DAY);
        File::options()
            .write(true)
            .open(&self.cache_path)
            .and_then(|f| f.set_modified(mtime))
            .expect("failed to set mtime");
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_filmcache"));
        cmd.env("FILMCACHE_FILE", &self.cache_path);
        cmd.env_remove("FILMCACHE_MAX_AGE_DAYS");
        cmd.env_remove("RUST_LOG");
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Run with `stdin` fed to the process.
    fn run(&self, args: &[&str], stdin: &str) -> Output {
        let mut child = self
            .cmd()
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to run filmcache");
        child
            .stdin
            .take()
            .expect("stdin piped")
            .write_all(stdin.as_bytes())
            .expect("failed to write stdin");
        child.wait_with_output().expect("failed to wait for filmcache")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_help_command() {
    let ctx = TestContext::new();
    let output = ctx.run(&["--help"], "");
    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage:"));
}

#[test]
fn test_version_command() {
    let ctx = TestContext::new();
    assert!(ctx.run(&["--version"], "").status.success());
}

#[test]
fn test_menu_check_without_cache() {
    let ctx = TestContext::new();
    let output = ctx.run(&[], "1\n");
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("Select option (1-3)"));
    assert!(text.contains("No cache file found"));
}

#[test]
fn test_menu_clear_without_cache() {
    let ctx = TestContext::new();
    let output = ctx.run(&[], "2\nyes\n");
    assert!(output.status.success());
    assert!(stdout(&output).contains("No cache file to clear"));
}

#[test]
fn test_menu_check_fresh_cache() {
    let ctx = TestContext::new();
    ctx.write_cache(&["Heat", "Alien", "Rashomon"], 3);

    let output = ctx.run(&[], "1\n");
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("3 cached"));
    assert!(text.contains("3.0 days"));
    assert!(text.contains("4.0 days"));
    assert!(text.contains("Cache is VALID"));
    let heat = text.find("- Heat").unwrap();
    let alien = text.find("- Alien").unwrap();
    let rashomon = text.find("- Rashomon").unwrap();
    assert!(heat < alien && alien < rashomon);
}

#[test]
fn test_check_expired_cache_shows_five_samples() {
    let ctx = TestContext::new();
    ctx.write_cache(
        &["Heat", "Alien", "Rashomon", "Jaws", "Klute", "Zelig", "Vertigo"],
        8,
    );

    let output = ctx.run(&["check"], "");
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("7 cached"));
    assert!(text.contains("8.0 days"));
    assert!(text.contains("-1.0 days"));
    assert!(text.contains("Cache is EXPIRED"));
    assert!(text.contains("- Klute"));
    assert!(!text.contains("- Zelig"));
    assert!(!text.contains("- Vertigo"));
}

#[test]
fn test_custom_threshold_expires_sooner() {
    let ctx = TestContext::new();
    ctx.write_cache(&["Heat"], 3);

    let output = ctx.run(&["check", "--max-age-days", "2"], "");
    assert!(stdout(&output).contains("Cache is EXPIRED (older than 2 days)"));
}

#[test]
fn test_malformed_cache_does_not_fail() {
    let ctx = TestContext::new();
    std::fs::write(&ctx.cache_path, "not json at all").unwrap();

    let output = ctx.run(&[], "1\n");
    assert!(output.status.success());
    assert!(stdout(&output).contains("Error reading cache"));
}

#[test]
fn test_menu_clear_confirmed() {
    let ctx = TestContext::new();
    ctx.write_cache(&["Heat"], 1);

    let output = ctx.run(&[], "2\nyes\n");
    assert!(output.status.success());
    assert!(stdout(&output).contains("Cache cleared successfully"));
    assert!(!ctx.cache_path.exists());

    let output = ctx.run(&[], "1\n");
    assert!(stdout(&output).contains("No cache file found"));
}

#[test]
fn test_menu_clear_declined() {
    let ctx = TestContext::new();
    ctx.write_cache(&["Heat"], 1);
    let before = std::fs::read(&ctx.cache_path).unwrap();

    let output = ctx.run(&[], "2\nno\n");
    assert!(output.status.success());
    assert!(stdout(&output).contains("Cache not cleared"));
    assert_eq!(std::fs::read(&ctx.cache_path).unwrap(), before);
}

#[test]
fn test_menu_invalid_option() {
    let ctx = TestContext::new();
    let output = ctx.run(&[], "7\n");
    assert!(output.status.success());
    assert!(stdout(&output).contains("Invalid option"));
}

#[test]
fn test_menu_exit() {
    let ctx = TestContext::new();
    let output = ctx.run(&[], "3\n");
    assert!(output.status.success());
    assert!(stdout(&output).contains("Goodbye!"));
}

#[test]
fn test_clear_subcommand_with_yes() {
    let ctx = TestContext::new();
    ctx.write_cache(&["Heat"], 1);

    let output = ctx.run(&["clear", "--yes"], "");
    assert!(output.status.success());
    assert!(!ctx.cache_path.exists());
}

#[test]
fn test_dry_run_keeps_cache() {
    let ctx = TestContext::new();
    ctx.write_cache(&["Heat"], 1);

    let output = ctx.run(&["clear", "--dry-run", "-y"], "");
    assert!(output.status.success());
    assert!(stdout(&output).contains("Would delete"));
    assert!(ctx.cache_path.exists());
}

#[test]
fn test_menu_dry_run_keeps_cache() {
    let ctx = TestContext::new();
    ctx.write_cache(&["Heat"], 1);

    let output = ctx.run(&["--dry-run"], "2\nyes\n");
    assert!(output.status.success());
    assert!(stdout(&output).contains("Would delete"));
    assert!(ctx.cache_path.exists());
}

#[test]
fn test_dry_run_with_check_is_rejected() {
    let ctx = TestContext::new();
    ctx.write_cache(&["Heat"], 1);

    let output = ctx.run(&["check", "--dry-run"], "");
    assert!(!output.status.success());

    let output = ctx.run(&["--dry-run", "check"], "");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("clear --dry-run"));
}

#[test]
fn test_untitled_record_past_sample_is_counted() {
    let ctx = TestContext::new();
    std::fs::write(
        &ctx.cache_path,
        r#"[{"title": "Heat"}, {"title": "Alien"}, {"title": "Rashomon"},
            {"title": "Jaws"}, {"title": "Klute"}, {"slug": "zelig"}]"#,
    )
    .unwrap();

    let output = ctx.run(&["check"], "");
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("6 cached"));
    assert!(text.contains("- Klute"));
    assert!(!text.contains("Error reading cache"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_unwritable_stdout_fails() {
    let ctx = TestContext::new();
    ctx.write_cache(&["Heat"], 1);

    let full = File::options()
        .write(true)
        .open("/dev/full")
        .expect("failed to open /dev/full");
    let status = ctx
        .cmd()
        .arg("check")
        .stdin(Stdio::null())
        .stdout(full)
        .stderr(Stdio::null())
        .status()
        .expect("failed to run filmcache");
    assert!(!status.success());
}

#[test]
fn test_check_json() {
    let ctx = TestContext::new();
    ctx.write_cache(&["Heat", "Ran"], 3);

    let output = ctx.run(&["check", "--json"], "");
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["film_count"], 2);
    assert_eq!(value["verdict"], "VALID");
    assert_eq!(value["sample_titles"][1], "Ran");
}

#[test]
fn test_completions_command() {
    let ctx = TestContext::new();
    let output = ctx.run(&["completions", "bash"], "");
    assert!(output.status.success());
    assert!(stdout(&output).contains("filmcache"));
}
