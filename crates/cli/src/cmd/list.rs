//! Implementation of the `systrig list` command.

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};

use systrig_lib::load_all;

use crate::output::{OutputFormat, print_info, print_json};

/// Print every known trigger with its description, sorted by name.
pub fn cmd_list(format: OutputFormat) -> Result<()> {
  let triggers = load_all().context("Failed to load triggers")?;

  if format.is_json() {
    return print_json(&triggers.descriptions());
  }

  if triggers.is_empty() {
    print_info("No triggers found");
    return Ok(());
  }

  println!("Available triggers:");
  println!();

  let width = triggers.names().map(str::len).max().unwrap_or(0);
  for (name, description) in triggers.descriptions() {
    let padded = format!("{:<width$}", name, width = width);
    println!(
      "  {}  {}",
      padded.if_supports_color(Stream::Stdout, |s| s.cyan()),
      description
    );
  }

  Ok(())
}
