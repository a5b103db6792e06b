//! CLI output formatting utilities.
//!
//! Provides consistent formatting for terminal output including colored status
//! lines, human-readable duration formatting, and Unicode symbols.

use std::time::Duration;

use anyhow::Context;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};
use systrig_lib::consts::MAX_TASK_LEN;
use systrig_lib::{Output, Status};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

impl OutputFormat {
  pub fn is_json(self) -> bool {
    matches!(self, OutputFormat::Json)
  }
}

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
  pub const SKIPPED: &str = "↷";
  pub const WARNING: &str = "⚠";
  pub const INFO: &str = "•";
  pub const ARROW: &str = "→";
}

pub fn format_duration(duration: Duration) -> String {
  let secs = duration.as_secs();
  let millis = duration.subsec_millis();

  if secs >= 60 {
    let mins = secs / 60;
    let remaining_secs = secs % 60;
    format!("{}m {}s", mins, remaining_secs)
  } else if secs > 0 {
    format!("{}.{:02}s", secs, millis / 10)
  } else {
    format!("{}ms", millis)
  }
}

/// Pad a task label to the aligned column width.
pub fn pad_task(task: &str) -> String {
  format!("{:<width$}", task, width = MAX_TASK_LEN)
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_warning(message: &str) {
  eprintln!(
    "{} {}",
    symbols::WARNING.if_supports_color(Stream::Stderr, |s| s.yellow()),
    message.if_supports_color(Stream::Stderr, |s| s.yellow())
  );
}

pub fn print_info(message: &str) {
  println!(
    "{} {}",
    symbols::INFO.if_supports_color(Stream::Stdout, |s| s.blue()),
    message
  );
}

pub fn print_stat(label: &str, value: &str) {
  println!(
    "  {}: {}",
    label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}

/// Print one aligned line for an output, followed by its message on failure.
pub fn print_output(output: &Output) {
  let task = pad_task(&output.task);
  let symbol = match output.status {
    Status::Success => symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()).to_string(),
    Status::Failure => symbols::ERROR.if_supports_color(Stream::Stdout, |s| s.red()).to_string(),
    Status::Skipped => symbols::SKIPPED.if_supports_color(Stream::Stdout, |s| s.yellow()).to_string(),
  };

  match &output.target {
    Some(target) => println!(
      "  {} {} {}",
      task,
      symbol,
      target.if_supports_color(Stream::Stdout, |s| s.dimmed())
    ),
    None => println!("  {} {}", task, symbol),
  }

  if output.status == Status::Skipped {
    println!("    {} skipped", symbols::ARROW);
  }

  for line in output.message.lines().filter(|l| !l.trim().is_empty()) {
    println!(
      "    {} {}",
      symbols::ARROW,
      line.if_supports_color(Stream::Stdout, |s| s.red())
    );
  }
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}
