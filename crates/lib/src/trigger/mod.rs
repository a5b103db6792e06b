//! Trigger definitions and the execution engine.
//!
//! A trigger is executed in stages:
//! 1. skip evaluation ([`skip::should_skip`]), yielding one `Skipped` output
//! 2. directory removal ([`remove::Remove::execute`]), yielding one `Failure`
//!    output if it fails
//! 3. fan-out of every bin ([`fanout::expand_all`])
//! 4. sequential execution of every invocation ([`exec::execute_bin`])
//!
//! In a dry run ([`Scope::dry_run`]) stages 2 and 4 only log what they would
//! do, and every invocation is reported as a success.
//!
//! A failing invocation never stops the ones after it; every invocation
//! produces exactly one [`Output`], in declaration order.

pub mod config;
pub mod exec;
pub mod fanout;
pub mod output;
pub mod pattern;
pub mod remove;
pub mod scope;
pub mod skip;

use tracing::{error, info};

pub use config::{Config, ConfigError, ValidationError};
pub use fanout::{Bin, ExpandError, ExpandedBin, Invocation, Replace};
pub use output::{Output, Report, Status};
pub use pattern::PatternError;
pub use remove::{Remove, RemoveError};
pub use scope::Scope;
pub use skip::{Check, CheckError, Skip};

impl Config {
  /// Run this trigger against `scope`.
  ///
  /// The configuration must have passed [`Config::validate`].
  pub async fn execute(&self, scope: &Scope) -> Vec<Output> {
    if skip::should_skip(self, scope) {
      info!(trigger = %self.description, "skipping trigger");
      return Report::skipped(&self.description).finish();
    }

    if let Some(remove) = &self.remove_dirs {
      if let Err(e) = remove.execute(scope) {
        error!(trigger = %self.description, error = %e, "directory removal failed");
        return Report::failed(&self.description, format!("error removing path: {}", e)).finish();
      }
    }

    let invocations = fanout::expand_all(&self.bins);
    let mut report = Report::with_capacity(invocations.len());

    for invocation in invocations {
      match invocation {
        Invocation::Run(bin) => report.push(exec::execute_bin(&bin, &self.env, scope).await),
        Invocation::Unexpandable { task, error } => {
          error!(task = %task, error = %error, "unable to expand bin");
          report.push(Output {
            task,
            target: None,
            status: Status::Failure,
            message: error.to_string(),
          });
        }
      }
    }

    info!(
      trigger = %self.description,
      invocations = report.len(),
      failed = report.has_failures(),
      "trigger complete"
    );

    report.finish()
  }
}
