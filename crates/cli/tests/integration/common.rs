//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Get path to a fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    .join("tests")
    .join("fixtures")
    .join(name)
}

/// Read fixture content.
pub fn fixture_content(name: &str) -> String {
  std::fs::read_to_string(fixture_path(name)).unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

/// Isolated test environment.
///
/// Each test gets its own temporary directory holding a system and an admin
/// trigger directory, plus a scratch area for test artifacts.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  /// Create an empty test environment.
  pub fn empty() -> Self {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("system")).unwrap();
    std::fs::create_dir_all(temp.path().join("admin")).unwrap();
    std::fs::create_dir_all(temp.path().join("output")).unwrap();
    Self { temp }
  }

  /// Create with a fixture installed as a system trigger named `name`.
  pub fn from_fixture(fixture: &str, name: &str) -> Self {
    let env = Self::empty();
    env.system_trigger(name, &fixture_content(fixture));
    env
  }

  /// Directory for packaged triggers.
  pub fn system_dir(&self) -> PathBuf {
    self.temp.path().join("system")
  }

  /// Directory for administrator overrides.
  pub fn admin_dir(&self) -> PathBuf {
    self.temp.path().join("admin")
  }

  /// Output path for test artifacts.
  pub fn output_path(&self) -> PathBuf {
    self.temp.path().join("output")
  }

  /// Install a packaged trigger. `@OUTPUT@` is replaced with the output path.
  pub fn system_trigger(&self, name: &str, content: &str) {
    self.write_trigger(self.system_dir(), name, content);
  }

  /// Install an administrator override. `@OUTPUT@` is replaced with the output path.
  pub fn admin_trigger(&self, name: &str, content: &str) {
    self.write_trigger(self.admin_dir(), name, content);
  }

  fn write_trigger(&self, dir: PathBuf, name: &str, content: &str) {
    let content = content.replace("@OUTPUT@", &self.output_path().to_string_lossy());
    std::fs::write(dir.join(format!("{}.toml", name)), content).unwrap();
  }

  /// Get a pre-configured Command for the systrig binary.
  ///
  /// Sets `SYSTRIG_PATH` to the isolated system and admin directories, in
  /// that order.
  pub fn systrig_cmd(&self) -> Command {
    let search_path = std::env::join_paths([self.system_dir(), self.admin_dir()]).unwrap();
    let mut cmd: Command = cargo_bin_cmd!("systrig");
    cmd.env("SYSTRIG_PATH", search_path);
    cmd.env_remove("RUST_LOG");
    cmd
  }
}
