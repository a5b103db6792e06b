//! Directory cleanup performed before a trigger's bins run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use super::pattern::{self, PatternError};
use super::scope::Scope;

/// Paths deleted before running bins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remove {
  /// Paths or glob patterns to delete recursively.
  #[serde(default)]
  pub paths: Vec<String>,
  /// Glob patterns protecting matches of `paths` from deletion.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub exclude: Vec<String>,
}

#[derive(Debug, Error)]
pub enum RemoveError {
  #[error(transparent)]
  Pattern(#[from] PatternError),

  #[error("failed to remove {}: {source}", path.display())]
  Delete {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

impl Remove {
  /// Delete every matching path, stopping at the first failure.
  ///
  /// Paths that do not exist are ignored. In a dry run matches are only
  /// logged.
  pub fn execute(&self, scope: &Scope) -> Result<(), RemoveError> {
    let targets = pattern::expand(&self.paths, &self.exclude)?;
    debug!(count = targets.len(), dry_run = scope.dry_run, "removing paths");

    for path in targets {
      if scope.dry_run {
        info!(path = %path.display(), "would remove");
        continue;
      }
      remove_path(&path).map_err(|source| RemoveError::Delete { path: path.clone(), source })?;
    }

    Ok(())
  }
}

fn remove_path(path: &Path) -> io::Result<()> {
  let metadata = match fs::symlink_metadata(path) {
    Ok(metadata) => metadata,
    Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
    Err(e) => return Err(e),
  };

  let result = if metadata.is_dir() {
    fs::remove_dir_all(path)
  } else {
    fs::remove_file(path)
  };

  match result {
    Ok(()) => {
      info!(path = %path.display(), "removed");
      Ok(())
    }
    Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
    Err(e) => Err(e),
  }
}
