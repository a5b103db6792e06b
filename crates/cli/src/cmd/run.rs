//! Implementation of the `systrig run` command.
//!
//! Resolves the requested triggers, builds the execution scope from the
//! running system plus command-line flags, and runs each trigger in turn.

use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::info;

use systrig_lib::{Output, Scope, Trigger, TriggerSet, load_all};

use crate::output::{
  OutputFormat, format_duration, print_info, print_json, print_output, print_stat, print_warning,
};

pub struct RunArgs {
  pub names: Vec<String>,
  pub force: bool,
  pub chroot: bool,
  pub live: bool,
  pub dry_run: bool,
}

/// Outputs of one trigger run, as presented to the user.
#[derive(Debug, Serialize)]
struct TriggerRun {
  name: String,
  description: String,
  #[serde(skip)]
  elapsed: Duration,
  outputs: Vec<Output>,
}

pub fn cmd_run(args: &RunArgs, format: OutputFormat) -> Result<()> {
  let triggers = load_all().context("Failed to load triggers")?;
  let selected = select(&triggers, &args.names)?;

  if selected.is_empty() {
    print_warning("No triggers to run");
    return Ok(());
  }

  let detected = Scope::detect(args.force);
  let scope = Scope::new(args.force, detected.chroot || args.chroot, detected.live || args.live).with_dry_run(args.dry_run);
  info!(
    forced = scope.forced,
    chroot = scope.chroot,
    live = scope.live,
    dry_run = scope.dry_run,
    "execution scope"
  );

  if scope.dry_run && !format.is_json() {
    print_info("Dry run - no changes made");
    println!();
  }

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;

  let mut runs = Vec::with_capacity(selected.len());
  for trigger in selected {
    let started = Instant::now();
    let outputs = rt.block_on(trigger.config.execute(&scope));
    let run = TriggerRun {
      name: trigger.name.clone(),
      description: trigger.config.description.clone(),
      elapsed: started.elapsed(),
      outputs,
    };

    if !format.is_json() {
      print_run(&run);
    }
    runs.push(run);
  }

  if format.is_json() {
    print_json(&runs)?;
  }

  let failed = runs
    .iter()
    .flat_map(|run| &run.outputs)
    .filter(|output| output.is_failure())
    .count();

  if failed > 0 {
    bail!("{} task(s) failed", failed);
  }

  Ok(())
}

/// Pick the requested triggers, or all of them when none are named.
fn select<'a>(triggers: &'a TriggerSet, names: &[String]) -> Result<Vec<&'a Trigger>> {
  if names.is_empty() {
    return Ok(triggers.iter().collect());
  }

  names
    .iter()
    .map(|name| {
      triggers
        .get(name)
        .with_context(|| format!("Unknown trigger: {}", name))
    })
    .collect()
}

fn print_run(run: &TriggerRun) {
  println!("{} ({})", run.name, run.description);
  for output in &run.outputs {
    print_output(output);
  }
  print_stat("Elapsed", &format_duration(run.elapsed));
  println!();
}
