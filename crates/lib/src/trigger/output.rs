//! Per-invocation results and the report builder that collects them.

use serde::Serialize;

use super::fanout::ExpandedBin;

/// Outcome of one invocation, or of a whole trigger when it never ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
  Success,
  Failure,
  Skipped,
}

/// One execution result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Output {
  /// Task label of the bin, or the trigger description for trigger-wide results.
  pub task: String,
  /// Glob match the invocation was expanded for.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub target: Option<String>,
  pub status: Status,
  /// Diagnostic text, empty on success.
  pub message: String,
}

impl Output {
  pub fn success(bin: &ExpandedBin) -> Self {
    Self {
      task: bin.task.clone(),
      target: bin.target.clone(),
      status: Status::Success,
      message: String::new(),
    }
  }

  pub fn failure(bin: &ExpandedBin, message: impl Into<String>) -> Self {
    Self {
      task: bin.task.clone(),
      target: bin.target.clone(),
      status: Status::Failure,
      message: message.into(),
    }
  }

  pub fn is_failure(&self) -> bool {
    self.status == Status::Failure
  }
}

/// Append-only collector of outputs.
///
/// Outputs keep the order they were pushed in, which is the declaration
/// order of bins and the expansion order within each bin.
#[derive(Debug, Default)]
pub struct Report {
  outputs: Vec<Output>,
}

impl Report {
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      outputs: Vec::with_capacity(capacity),
    }
  }

  /// A report holding a single `Skipped` entry for the whole trigger.
  pub fn skipped(label: &str) -> Self {
    Self {
      outputs: vec![Output {
        task: label.to_string(),
        target: None,
        status: Status::Skipped,
        message: String::new(),
      }],
    }
  }

  /// A report holding a single `Failure` entry for the whole trigger.
  pub fn failed(label: &str, message: impl Into<String>) -> Self {
    Self {
      outputs: vec![Output {
        task: label.to_string(),
        target: None,
        status: Status::Failure,
        message: message.into(),
      }],
    }
  }

  pub fn push(&mut self, output: Output) {
    self.outputs.push(output);
  }

  pub fn has_failures(&self) -> bool {
    self.outputs.iter().any(Output::is_failure)
  }

  pub fn len(&self) -> usize {
    self.outputs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.outputs.is_empty()
  }

  pub fn finish(self) -> Vec<Output> {
    self.outputs
  }
}
