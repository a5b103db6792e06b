//! Execution scope a trigger is evaluated against.

use crate::platform;

/// Runtime context supplied by the caller for one execution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scope {
  /// Override every `[skip]` condition.
  pub forced: bool,
  /// Running inside a chroot.
  pub chroot: bool,
  /// Running from a live medium.
  pub live: bool,
  /// Log removals and commands instead of performing them.
  pub dry_run: bool,
}

impl Scope {
  pub fn new(forced: bool, chroot: bool, live: bool) -> Self {
    Self {
      forced,
      chroot,
      live,
      dry_run: false,
    }
  }

  /// Build a scope from the running system.
  pub fn detect(forced: bool) -> Self {
    Self::new(forced, platform::in_chroot(), platform::is_live())
  }

  pub fn with_dry_run(mut self, dry_run: bool) -> Self {
    self.dry_run = dry_run;
    self
  }
}
