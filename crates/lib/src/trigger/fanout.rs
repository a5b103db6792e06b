//! Fan-out of templated bins into concrete invocations.
//!
//! A bin whose `cmd` mentions the wildcard token (`***`) runs once per path
//! matched by its `[bins.replace]` globs. Expansion is a three-stage
//! pipeline:
//! 1. recognition: [`has_wildcard`]
//! 2. enumeration: [`enumerate_targets`]
//! 3. substitution: [`substitute`]

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::consts::WILDCARD_TOKEN;

use super::pattern::{self, PatternError};

/// One templated binary declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bin {
  /// Short label shown next to the status.
  pub task: String,
  /// Program followed by its arguments.
  #[serde(default)]
  pub cmd: Vec<String>,
  /// Globs supplying the values for the wildcard token.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub replace: Option<Replace>,
}

/// Source of wildcard substitutions for a bin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replace {
  #[serde(default)]
  pub paths: Vec<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub exclude: Vec<String>,
}

/// A concrete invocation produced by fan-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedBin {
  pub task: String,
  pub argv: Vec<String>,
  /// The glob match substituted into `argv`, if any.
  pub target: Option<String>,
}

impl ExpandedBin {
  /// The bin unchanged, for templates without a wildcard token.
  pub fn verbatim(bin: &Bin) -> Self {
    Self {
      task: bin.task.clone(),
      argv: bin.cmd.clone(),
      target: None,
    }
  }
}

#[derive(Debug, Error)]
pub enum ExpandError {
  #[error(transparent)]
  Pattern(#[from] PatternError),

  #[error("task `{task}` uses the wildcard token without [bins.replace] paths")]
  MissingReplace { task: String },
}

/// A bin after fan-out: either a runnable invocation or a bin that could
/// not be expanded and must be reported as failed.
#[derive(Debug)]
pub enum Invocation {
  Run(ExpandedBin),
  Unexpandable { task: String, error: ExpandError },
}

/// Returns true if any argument of the bin contains the wildcard token.
pub fn has_wildcard(bin: &Bin) -> bool {
  bin.cmd.iter().any(|arg| arg.contains(WILDCARD_TOKEN))
}

/// Enumerate the sorted, de-duplicated substitution targets of a bin.
///
/// Matches whose path is not valid UTF-8 cannot be substituted into an
/// argument and are logged and dropped.
pub fn enumerate_targets(replace: &Replace) -> Result<Vec<String>, PatternError> {
  let matches = pattern::expand(&replace.paths, &replace.exclude)?;
  Ok(
    matches
      .into_iter()
      .filter_map(|path| match path.to_str() {
        Some(target) => Some(target.to_string()),
        None => {
          warn!(path = %path.display(), "non UTF-8 match, ignoring");
          None
        }
      })
      .collect(),
  )
}

/// Replace every occurrence of the wildcard token in the bin with `target`.
pub fn substitute(bin: &Bin, target: &str) -> ExpandedBin {
  ExpandedBin {
    task: bin.task.clone(),
    argv: bin
      .cmd
      .iter()
      .map(|arg| arg.replace(WILDCARD_TOKEN, target))
      .collect(),
    target: Some(target.to_string()),
  }
}

/// Expand one bin into zero or more invocations.
///
/// No wildcard token yields the bin itself. Otherwise one invocation is
/// produced per match, in sorted order; no matches yields an empty vector.
pub fn fan_out(bin: &Bin) -> Result<Vec<ExpandedBin>, ExpandError> {
  if !has_wildcard(bin) {
    return Ok(vec![ExpandedBin::verbatim(bin)]);
  }

  let replace = bin
    .replace
    .as_ref()
    .filter(|r| !r.paths.is_empty())
    .ok_or_else(|| ExpandError::MissingReplace { task: bin.task.clone() })?;

  let targets = enumerate_targets(replace)?;
  debug!(task = %bin.task, matches = targets.len(), "expanded wildcard");

  Ok(targets.iter().map(|target| substitute(bin, target)).collect())
}

/// Fan out every bin, preserving declaration order.
pub fn expand_all(bins: &[Bin]) -> Vec<Invocation> {
  let mut invocations = Vec::with_capacity(bins.len());
  for bin in bins {
    match fan_out(bin) {
      Ok(expanded) => invocations.extend(expanded.into_iter().map(Invocation::Run)),
      Err(error) => invocations.push(Invocation::Unexpandable {
        task: bin.task.clone(),
        error,
      }),
    }
  }
  invocations
}
