//! Discovery of trigger definitions across the search path.
//!
//! Every `*.toml` file directly inside a search directory is a trigger named
//! after its file stem. Directories are read in order, so a trigger in a
//! later directory replaces a same-named trigger from an earlier one.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::consts::TRIGGER_EXTENSION;
use crate::platform::paths::trigger_search_path;
use crate::trigger::{Config, ConfigError, ValidationError};

#[derive(Debug, Error)]
pub enum DiscoveryError {
  #[error("failed to read trigger directory {}: {source}", dir.display())]
  ReadDir {
    dir: PathBuf,
    #[source]
    source: walkdir::Error,
  },

  #[error(transparent)]
  Load(#[from] ConfigError),

  #[error("invalid trigger {}: {source}", path.display())]
  Invalid {
    path: PathBuf,
    #[source]
    source: ValidationError,
  },
}

/// A loaded and validated trigger.
#[derive(Debug, Clone)]
pub struct Trigger {
  pub name: String,
  pub path: PathBuf,
  pub config: Config,
}

/// All known triggers, keyed and ordered by name.
#[derive(Debug, Clone, Default)]
pub struct TriggerSet {
  triggers: BTreeMap<String, Trigger>,
}

impl TriggerSet {
  pub fn get(&self, name: &str) -> Option<&Trigger> {
    self.triggers.get(name)
  }

  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.triggers.keys().map(String::as_str)
  }

  pub fn iter(&self) -> impl Iterator<Item = &Trigger> {
    self.triggers.values()
  }

  /// Map of trigger name to description, for listing.
  pub fn descriptions(&self) -> BTreeMap<&str, &str> {
    self
      .triggers
      .iter()
      .map(|(name, t)| (name.as_str(), t.config.description.as_str()))
      .collect()
  }

  pub fn len(&self) -> usize {
    self.triggers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.triggers.is_empty()
  }

  fn insert(&mut self, trigger: Trigger) {
    if let Some(previous) = self.triggers.insert(trigger.name.clone(), trigger) {
      debug!(name = %previous.name, path = %previous.path.display(), "trigger overridden");
    }
  }
}

/// Load every trigger from the default search path.
pub fn load_all() -> Result<TriggerSet, DiscoveryError> {
  load_all_from(&trigger_search_path())
}

/// Load every trigger from `dirs`, in precedence order (last wins).
///
/// Missing directories are ignored. Each trigger is validated; the first
/// failure aborts discovery.
pub fn load_all_from(dirs: &[PathBuf]) -> Result<TriggerSet, DiscoveryError> {
  let mut set = TriggerSet::default();

  for dir in dirs {
    if !dir.is_dir() {
      debug!(dir = %dir.display(), "trigger directory not present");
      continue;
    }

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
      let entry = entry.map_err(|source| DiscoveryError::ReadDir {
        dir: dir.clone(),
        source,
      })?;

      let path = entry.path();
      let Some(name) = trigger_name(path) else {
        continue;
      };

      let config = Config::load(path)?;
      config.validate().map_err(|source| DiscoveryError::Invalid {
        path: path.to_path_buf(),
        source,
      })?;

      set.insert(Trigger {
        name,
        path: path.to_path_buf(),
        config,
      });
    }
  }

  info!(count = set.len(), "loaded triggers");
  Ok(set)
}

/// Returns the trigger name for a definition file, or `None` if `path` is
/// not one.
fn trigger_name(path: &Path) -> Option<String> {
  if path.extension() != Some(OsStr::new(TRIGGER_EXTENSION)) || !path.is_file() {
    return None;
  }
  path.file_stem().and_then(OsStr::to_str).map(str::to_string)
}
