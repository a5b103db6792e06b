//! Test utilities for systrig-lib.
//!
//! Helpers for tests that need to execute shell commands or write trigger
//! definitions to disk.

use std::path::{Path, PathBuf};

/// Returns an argv that runs `script` through the platform shell.
#[cfg(unix)]
pub fn shell_cmd(script: &str) -> Vec<String> {
  vec!["/bin/sh".to_string(), "-c".to_string(), script.to_string()]
}

#[cfg(windows)]
pub fn shell_cmd(script: &str) -> Vec<String> {
  vec!["cmd.exe".to_string(), "/C".to_string(), script.to_string()]
}

/// Returns an argv that creates `path` as an empty file.
#[cfg(unix)]
pub fn touch_file(path: &Path) -> Vec<String> {
  shell_cmd(&format!(": > '{}'", path.display()))
}

#[cfg(windows)]
pub fn touch_file(path: &Path) -> Vec<String> {
  shell_cmd(&format!("type nul > \"{}\"", path.display()))
}

/// Write a trigger definition named `name` into `dir`, returning its path.
pub fn write_trigger(dir: &Path, name: &str, content: &str) -> PathBuf {
  std::fs::create_dir_all(dir).unwrap();
  let path = dir.join(format!("{}.toml", name));
  std::fs::write(&path, content).unwrap();
  path
}

/// Create an empty file (and its parents) below `root`.
pub fn create_file(root: &Path, relative: &str) -> PathBuf {
  let path = root.join(relative);
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent).unwrap();
  }
  std::fs::write(&path, "").unwrap();
  path
}

/// Make `dir` read-only, returning false when permission bits do not stop
/// entries being created or removed (e.g. when running as root).
#[cfg(unix)]
pub fn lock_dir(dir: &Path) -> bool {
  use std::os::unix::fs::PermissionsExt;

  std::fs::set_permissions(dir, std::fs::Permissions::from_mode(0o555)).unwrap();
  let canary = dir.join(".systrig-write-check");
  if std::fs::write(&canary, "").is_ok() {
    std::fs::remove_file(&canary).unwrap();
    unlock_dir(dir);
    return false;
  }
  true
}

/// Restore write access to a directory locked by [`lock_dir`].
#[cfg(unix)]
pub fn unlock_dir(dir: &Path) {
  use std::os::unix::fs::PermissionsExt;

  std::fs::set_permissions(dir, std::fs::Permissions::from_mode(0o755)).unwrap();
}
