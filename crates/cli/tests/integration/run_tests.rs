//! Run command integration tests.

use predicates::prelude::*;

use super::common::{TestEnv, fixture_content};

fn read_log(env: &TestEnv) -> String {
  std::fs::read_to_string(env.output_path().join("log")).unwrap_or_default()
}

#[test]
fn run_passing_trigger() {
  let env = TestEnv::from_fixture("passing.toml", "fonts");

  env
    .systrig_cmd()
    .args(["run", "fonts"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Rebuilding font cache"))
    .stdout(predicate::str::contains("✓"));

  assert_eq!(read_log(&env), "fonts\nconfig\n");
}

#[test]
fn failing_bin_fails_run_but_siblings_execute() {
  let env = TestEnv::from_fixture("failing.toml", "icons");

  env
    .systrig_cmd()
    .args(["run", "icons"])
    .assert()
    .failure()
    .stdout(predicate::str::contains("icon theme missing"))
    .stderr(predicate::str::contains("1 task(s) failed"));

  assert_eq!(read_log(&env), "desktop\n");
}

#[test]
fn run_without_names_runs_everything_in_name_order() {
  let env = TestEnv::from_fixture("passing.toml", "b-fonts");
  env.system_trigger(
    "a-first",
    r#"
description = "First"
[[bins]]
task = "First"
cmd = ["/bin/sh", "-c", "echo first >> '@OUTPUT@/log'"]
"#,
  );

  env.systrig_cmd().arg("run").assert().success();

  assert_eq!(read_log(&env), "first\nfonts\nconfig\n");
}

#[test]
fn run_in_requested_order() {
  let env = TestEnv::from_fixture("passing.toml", "b-fonts");
  env.system_trigger(
    "a-first",
    r#"
description = "First"
[[bins]]
task = "First"
cmd = ["/bin/sh", "-c", "echo first >> '@OUTPUT@/log'"]
"#,
  );

  env.systrig_cmd().args(["run", "b-fonts", "a-first"]).assert().success();

  assert_eq!(read_log(&env), "fonts\nconfig\nfirst\n");
}

#[test]
fn unknown_trigger_fails_before_running_anything() {
  let env = TestEnv::from_fixture("passing.toml", "fonts");

  env
    .systrig_cmd()
    .args(["run", "fonts", "nope"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Unknown trigger: nope"));

  assert_eq!(read_log(&env), "");
}

#[test]
fn fanout_runs_once_per_match() {
  let env = TestEnv::from_fixture("fanout.toml", "schemas");
  let schemas = env.output_path().join("schemas");
  std::fs::create_dir_all(&schemas).unwrap();
  for name in ["b.xml", "a.xml", "old.bak"] {
    std::fs::write(schemas.join(name), "").unwrap();
  }

  env.systrig_cmd().args(["run", "schemas"]).assert().success();

  let a = schemas.join("a.xml");
  let b = schemas.join("b.xml");
  assert_eq!(read_log(&env), format!("{}\n{}\n", a.display(), b.display()));
}

#[test]
fn skip_condition_honored_and_overridden_by_force() {
  let env = TestEnv::from_fixture("skip_live.toml", "initramfs");

  env
    .systrig_cmd()
    .args(["run", "initramfs", "--live"])
    .assert()
    .success()
    .stdout(predicate::str::contains("skipped"));
  assert_eq!(read_log(&env), "");

  env
    .systrig_cmd()
    .args(["run", "initramfs", "--live", "--force"])
    .assert()
    .success();
  assert_eq!(read_log(&env), "ran\n");
}

#[test]
fn failed_check_skips_even_when_forced() {
  let env = TestEnv::from_fixture("check_missing.toml", "mime");

  env
    .systrig_cmd()
    .args(["run", "mime", "--force"])
    .assert()
    .success()
    .stdout(predicate::str::contains("skipped"))
    .stderr(predicate::str::contains("trigger precondition failed"));

  assert_eq!(read_log(&env), "");
}

#[test]
fn remove_runs_before_bins_and_env_is_applied() {
  let env = TestEnv::from_fixture("remove.toml", "caches");
  let stale = env.output_path().join("cache").join("stale");
  std::fs::create_dir_all(stale.parent().unwrap()).unwrap();
  std::fs::write(&stale, "old").unwrap();

  env.systrig_cmd().args(["run", "caches"]).assert().success();

  assert!(!env.output_path().join("cache").exists());
}

#[test]
fn run_json_reports_outputs() {
  let env = TestEnv::from_fixture("failing.toml", "icons");

  let output = env
    .systrig_cmd()
    .args(["--output", "json", "run", "icons"])
    .output()
    .unwrap();
  assert!(!output.status.success());

  let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  let outputs = &json[0]["outputs"];
  assert_eq!(json[0]["name"], "icons");
  assert_eq!(outputs[0]["status"], "failure");
  assert_eq!(outputs[0]["message"], "icon theme missing");
  assert_eq!(outputs[1]["status"], "success");
  assert_eq!(outputs[1]["message"], "");
}

#[test]
fn dry_run_neither_removes_nor_executes() {
  let env = TestEnv::from_fixture("remove.toml", "caches");
  let stale = env.output_path().join("cache").join("stale");
  std::fs::create_dir_all(stale.parent().unwrap()).unwrap();
  std::fs::write(&stale, "old").unwrap();
  env.system_trigger("fonts", &fixture_content("passing.toml"));

  env
    .systrig_cmd()
    .args(["run", "--dry-run", "caches", "fonts"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Dry run"));

  assert!(stale.exists());
  assert_eq!(read_log(&env), "");
}

#[test]
fn dry_run_reports_would_be_failures_as_success() {
  let env = TestEnv::from_fixture("failing.toml", "icons");

  env.systrig_cmd().args(["run", "-n", "icons"]).assert().success();

  assert_eq!(read_log(&env), "");
}
