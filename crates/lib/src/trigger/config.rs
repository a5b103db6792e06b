//! Loading and validating trigger definitions.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::MAX_TASK_LEN;

use super::fanout::{self, Bin};
use super::remove::Remove;
use super::skip::{Check, Skip};

/// One trigger definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
  /// Human-readable label.
  #[serde(default)]
  pub description: String,
  /// Binaries to run, in order.
  #[serde(default)]
  pub bins: Vec<Bin>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub skip: Option<Skip>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub check: Option<Check>,
  /// Environment applied to every invocation.
  #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
  pub env: BTreeMap<String, String>,
  /// Paths deleted before any bin runs.
  #[serde(default, rename = "remove", skip_serializing_if = "Option::is_none")]
  pub remove_dirs: Option<Remove>,
}

/// Errors raised while loading a trigger definition.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("trigger file not found: {}", path.display())]
  NotFound { path: PathBuf },

  #[error("unable to read trigger file {}: {source}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("unable to parse trigger file {}: {source}", path.display())]
  Parse {
    path: PathBuf,
    #[source]
    source: toml::de::Error,
  },
}

/// Structural problems found by [`Config::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("triggers must contain at least one [[bins]] entry")]
  EmptyBins,

  #[error("the task `{task}` cannot exceed 42 characters")]
  TaskTooLong { task: String },

  #[error("the task `{task}` has an empty cmd")]
  EmptyCommand { task: String },

  #[error("the task `{task}` uses the wildcard token but has no [bins.replace] paths")]
  MissingReplace { task: String },
}

impl Config {
  /// Read and parse a trigger definition from `path`.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
      io::ErrorKind::NotFound => ConfigError::NotFound {
        path: path.to_path_buf(),
      },
      _ => ConfigError::Read {
        path: path.to_path_buf(),
        source,
      },
    })?;

    Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
      path: path.to_path_buf(),
      source,
    })
  }

  /// Parse a trigger definition from TOML text.
  pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
    toml::from_str(content)
  }

  /// Check structural constraints. Must pass before [`Config::execute`].
  pub fn validate(&self) -> Result<(), ValidationError> {
    if self.bins.is_empty() {
      return Err(ValidationError::EmptyBins);
    }

    for bin in &self.bins {
      if bin.task.chars().count() > MAX_TASK_LEN {
        return Err(ValidationError::TaskTooLong { task: bin.task.clone() });
      }

      if bin.cmd.is_empty() {
        return Err(ValidationError::EmptyCommand { task: bin.task.clone() });
      }

      let has_paths = bin.replace.as_ref().is_some_and(|r| !r.paths.is_empty());
      if fanout::has_wildcard(bin) && !has_paths {
        return Err(ValidationError::MissingReplace { task: bin.task.clone() });
      }
    }

    Ok(())
  }

  /// Serialize only the `[[bins]]` of this trigger.
  pub fn bins_to_toml(&self) -> Result<String, toml::ser::Error> {
    #[derive(Serialize)]
    struct BinsDocument<'a> {
      bins: &'a [Bin],
    }

    toml::to_string(&BinsDocument { bins: &self.bins })
  }
}
