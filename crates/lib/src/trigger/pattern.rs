//! Glob expansion shared by fan-out, checks and directory removal.

use std::collections::BTreeSet;
use std::path::PathBuf;

use glob::Pattern;
use thiserror::Error;
use tracing::warn;

/// A glob pattern that could not be compiled.
#[derive(Debug, Error)]
#[error("invalid glob pattern `{pattern}`: {source}")]
pub struct PatternError {
  pub pattern: String,
  #[source]
  pub source: glob::PatternError,
}

/// Returns true if `pattern` contains glob metacharacters.
pub fn has_glob_meta(pattern: &str) -> bool {
  pattern.contains(['*', '?', '['])
}

/// Expand `patterns` against the filesystem, dropping anything matched by
/// one of the `exclude` patterns.
///
/// The result is sorted and free of duplicates regardless of the order the
/// filesystem yields entries in. Entries that cannot be read while walking
/// are logged and ignored.
///
/// Wildcard components only match file names that are valid UTF-8; other
/// names are never yielded by the walk.
pub fn expand(patterns: &[String], exclude: &[String]) -> Result<Vec<PathBuf>, PatternError> {
  let excluded = exclude
    .iter()
    .map(|p| compile(p))
    .collect::<Result<Vec<_>, _>>()?;

  let mut matches = BTreeSet::new();
  for pattern in patterns {
    let entries = glob::glob(pattern).map_err(|source| PatternError {
      pattern: pattern.clone(),
      source,
    })?;

    for entry in entries {
      match entry {
        Ok(path) => {
          if !excluded.iter().any(|ex| ex.matches_path(&path)) {
            matches.insert(path);
          }
        }
        Err(e) => warn!(pattern = %pattern, error = %e, "unreadable glob entry, ignoring"),
      }
    }
  }

  Ok(matches.into_iter().collect())
}

fn compile(pattern: &str) -> Result<Pattern, PatternError> {
  Pattern::new(pattern).map_err(|source| PatternError {
    pattern: pattern.to_string(),
    source,
  })
}
