//! Running expanded bins as child processes.

use std::collections::BTreeMap;
use std::process::ExitStatus;

use tokio::process::Command;
use tracing::{debug, info, warn};

use super::fanout::ExpandedBin;
use super::output::Output;
use super::scope::Scope;

/// Run one expanded bin to completion.
///
/// The child inherits the current environment with `env` layered on top.
/// A zero exit status is a success; anything else, including a failure to
/// launch, is reported as a failure carrying stderr or the error text.
/// stdout is only logged. A dry run logs the command and reports success
/// without spawning anything.
pub async fn execute_bin(bin: &ExpandedBin, env: &BTreeMap<String, String>, scope: &Scope) -> Output {
  let Some((program, args)) = bin.argv.split_first() else {
    return Output::failure(bin, "empty command");
  };

  if scope.dry_run {
    info!(task = %bin.task, argv = ?bin.argv, "would run");
    return Output::success(bin);
  }

  info!(task = %bin.task, program = %program, target = ?bin.target, "running");

  let mut command = Command::new(program);
  command.args(args).envs(env);

  let output = match command.output().await {
    Ok(output) => output,
    Err(e) => {
      warn!(task = %bin.task, program = %program, error = %e, "failed to launch");
      return Output::failure(bin, format!("failed to launch {}: {}", program, e));
    }
  };

  let stdout = String::from_utf8_lossy(&output.stdout);
  if !stdout.trim().is_empty() {
    debug!(stdout = %stdout.trim(), "command stdout");
  }

  if output.status.success() {
    return Output::success(bin);
  }

  let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
  let message = if stderr.is_empty() {
    describe_status(output.status)
  } else {
    stderr
  };

  warn!(task = %bin.task, code = ?output.status.code(), "command failed");
  Output::failure(bin, message)
}

fn describe_status(status: ExitStatus) -> String {
  match status.code() {
    Some(code) => format!("exited with status {}", code),
    None => "terminated by signal".to_string(),
  }
}
