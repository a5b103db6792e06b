mod cmd;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cmd::{RunArgs, cmd_list, cmd_run};
use output::{OutputFormat, print_error};

/// systrig - post-install system trigger runner
#[derive(Parser)]
#[command(name = "systrig")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Output format
  #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
  output: OutputFormat,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// List available triggers
  #[command(alias = "ls")]
  List,

  /// Run triggers (all of them when no names are given)
  Run {
    /// Names of the triggers to run
    names: Vec<String>,

    /// Ignore [skip] conditions
    #[arg(short, long)]
    force: bool,

    /// Behave as if running inside a chroot
    #[arg(long)]
    chroot: bool,

    /// Behave as if running from a live medium
    #[arg(long)]
    live: bool,

    /// Show what would be removed and run without doing it
    #[arg(short = 'n', long)]
    dry_run: bool,
  },
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      print_error(&format!("{:#}", e));
      ExitCode::FAILURE
    }
  }
}

fn run(cli: Cli) -> Result<()> {
  match cli.command {
    Commands::List => cmd_list(cli.output),
    Commands::Run {
      names,
      force,
      chroot,
      live,
      dry_run,
    } => cmd_run(
      &RunArgs {
        names,
        force,
        chroot,
        live,
        dry_run,
      },
      cli.output,
    ),
  }
}
