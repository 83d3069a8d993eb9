//! Error handling integration tests

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

fn clip_stash_bin(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_clip-stash"));
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("CLIP_STASH_ROOT")
        .env_remove("CLIP_STASH_LOG");
    cmd
}

#[test]
fn drop_without_storage_folder_fails() {
    let home = TempDir::new().unwrap();
    let output = clip_stash_bin(home.path())
        .args(["drop", "--no-notify", "--text", "orphan"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Should fail without a storage folder");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("No storage folder configured"),
        "Should explain the missing folder: {}",
        stderr
    );
}

#[test]
fn missing_root_folder_fails() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("not-there");

    let output = clip_stash_bin(home.path())
        .args(["drop", "--no-notify", "--text", "hello"])
        .arg("--root")
        .arg(&missing)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not be resolved"), "stderr: {}", stderr);
    assert!(!missing.exists(), "A missing root must not be created");
}

#[test]
fn vanished_configured_folder_is_forgotten() {
    let home = TempDir::new().unwrap();
    let stash = home.path().join("Stash");
    std::fs::create_dir(&stash).unwrap();

    let set = clip_stash_bin(home.path())
        .args(["config", "set", "storage_root"])
        .arg(&stash)
        .output()
        .expect("Failed to execute command");
    assert!(set.status.success());

    std::fs::remove_dir(&stash).unwrap();

    let output = clip_stash_bin(home.path())
        .args(["drop", "--no-notify", "--text", "hello"])
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());

    let get = clip_stash_bin(home.path())
        .args(["config", "get", "storage_root"])
        .output()
        .expect("Failed to execute command");
    let stdout = String::from_utf8_lossy(&get.stdout);
    assert!(stdout.contains("(not set)"), "Root should be cleared: {}", stdout);
}

#[test]
fn watch_requires_auto_save() {
    let home = TempDir::new().unwrap();
    let output = clip_stash_bin(home.path())
        .arg("watch")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Auto-save is off"), "stderr: {}", stderr);
}

#[test]
fn watch_rejects_invalid_interval() {
    let home = TempDir::new().unwrap();
    let output = clip_stash_bin(home.path())
        .args(["watch", "--force", "-i", "bogus"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2), "Invalid interval is a usage error");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid interval"));
}

#[test]
fn watch_without_storage_folder_fails_fast() {
    let home = TempDir::new().unwrap();
    let output = clip_stash_bin(home.path())
        .args(["watch", "--force"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No storage folder configured"));
}

#[test]
fn config_get_unknown_key() {
    let home = TempDir::new().unwrap();
    let output = clip_stash_bin(home.path())
        .args(["config", "get", "api_key"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Valid keys") || stderr.contains("api_key"));
}

#[test]
fn config_set_unknown_key() {
    let home = TempDir::new().unwrap();
    let output = clip_stash_bin(home.path())
        .args(["config", "set", "api_key", "secret"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[test]
fn config_set_invalid_bool() {
    let home = TempDir::new().unwrap();
    let output = clip_stash_bin(home.path())
        .args(["config", "set", "notify", "maybe"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("true") && stderr.contains("false"), "stderr: {}", stderr);
}

#[test]
fn config_set_missing_storage_root() {
    let home = TempDir::new().unwrap();
    let output = clip_stash_bin(home.path())
        .args(["config", "set", "storage_root"])
        .arg(home.path().join("nope"))
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not an existing directory"));
}

#[test]
fn drop_without_arguments_is_usage_error() {
    let home = TempDir::new().unwrap();
    let output = clip_stash_bin(home.path())
        .arg("drop")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("required") || stderr.contains("Usage"));
}

#[test]
fn invalid_subcommand() {
    let home = TempDir::new().unwrap();
    let output = clip_stash_bin(home.path())
        .arg("transcribe")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unrecognized subcommand") || stderr.contains("error"));
}
