//! Skip conditions and required-path checks.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use super::Config;
use super::pattern::{self, PatternError};
use super::scope::Scope;

/// Conditions under which a trigger is bypassed unless forced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skip {
  #[serde(default)]
  pub chroot: bool,
  #[serde(default)]
  pub live: bool,
  /// Skip when any of these paths exists.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub paths: Vec<String>,
}

impl Skip {
  /// Evaluate the conditions against a scope, ignoring `scope.forced`.
  pub fn applies_to(&self, scope: &Scope) -> bool {
    if self.chroot && scope.chroot {
      debug!("skip: running inside a chroot");
      return true;
    }

    if self.live && scope.live {
      debug!("skip: running from a live medium");
      return true;
    }

    self.paths.iter().any(|p| {
      let present = path_present(Path::new(p));
      if present {
        debug!(path = %p, "skip: path present");
      }
      present
    })
  }
}

/// Paths that must resolve before a trigger may run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
  #[serde(default)]
  pub paths: Vec<String>,
}

#[derive(Debug, Error)]
pub enum CheckError {
  #[error("required path `{path}` does not exist")]
  Missing { path: String },

  #[error("unable to resolve required path `{path}`: {source}")]
  Resolve {
    path: String,
    #[source]
    source: io::Error,
  },

  #[error(transparent)]
  Pattern(#[from] PatternError),
}

impl Check {
  /// Resolve every required path.
  ///
  /// Literal paths are canonicalized (symlinks followed); glob patterns must
  /// match at least one existing path.
  pub fn resolve_paths(&self) -> Result<Vec<PathBuf>, CheckError> {
    let mut resolved = Vec::with_capacity(self.paths.len());

    for path in &self.paths {
      if pattern::has_glob_meta(path) {
        let matches = pattern::expand(std::slice::from_ref(path), &[])?;
        if matches.is_empty() {
          return Err(CheckError::Missing { path: path.clone() });
        }
        resolved.extend(matches);
        continue;
      }

      let real = dunce::canonicalize(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => CheckError::Missing { path: path.clone() },
        _ => CheckError::Resolve {
          path: path.clone(),
          source,
        },
      })?;
      resolved.push(real);
    }

    Ok(resolved)
  }
}

/// Decide whether a trigger should be bypassed in `scope`.
///
/// A failing `[check]` always skips, even when forced. Otherwise `forced`
/// overrides the `[skip]` conditions.
pub fn should_skip(config: &Config, scope: &Scope) -> bool {
  if let Some(check) = &config.check {
    if let Err(e) = check.resolve_paths() {
      error!(trigger = %config.description, error = %e, "trigger precondition failed");
      return true;
    }
  }

  if scope.forced {
    return false;
  }

  match &config.skip {
    Some(skip) => skip.applies_to(scope),
    None => false,
  }
}

/// A path counts as present unless the filesystem reports it missing.
fn path_present(path: &Path) -> bool {
  !matches!(path.try_exists(), Ok(false))
}
