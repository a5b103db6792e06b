//! Platform probes used to build a [`Scope`](crate::trigger::Scope).
//!
//! Detects whether the current process runs inside a chroot or from a live
//! medium, and where trigger definitions live.

pub mod paths;

use std::path::Path;

use tracing::debug;

use crate::consts::LIVE_MARKER;

/// Returns true when `/` is not the root directory of PID 1.
///
/// If `/proc/1/root` cannot be inspected (no procfs, insufficient
/// privileges) this reports `false`.
pub fn in_chroot() -> bool {
  match roots_differ(Path::new("/"), Path::new("/proc/1/root")) {
    Some(differ) => differ,
    None => {
      debug!("unable to compare / with /proc/1/root, assuming no chroot");
      false
    }
  }
}

/// Returns true when the system was booted from a live medium.
pub fn is_live() -> bool {
  Path::new(LIVE_MARKER).exists()
}

/// Compare two directories by device and inode.
///
/// Returns `None` when either cannot be inspected.
#[cfg(unix)]
fn roots_differ(ours: &Path, init: &Path) -> Option<bool> {
  use std::os::unix::fs::MetadataExt;

  let ours = std::fs::metadata(ours).ok()?;
  let init = std::fs::metadata(init).ok()?;
  Some(ours.dev() != init.dev() || ours.ino() != init.ino())
}

#[cfg(not(unix))]
fn roots_differ(_ours: &Path, _init: &Path) -> Option<bool> {
  None
}
