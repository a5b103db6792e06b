use std::path::PathBuf;

use crate::consts::{APP_NAME, SEARCH_PATH_ENV};

/// Returns the directory holding trigger definitions shipped by packages
pub fn system_trigger_dir() -> PathBuf {
  PathBuf::from("/usr/share/defaults").join(format!("{}.d", APP_NAME))
}

/// Returns the directory holding administrator overrides
pub fn admin_trigger_dir() -> PathBuf {
  PathBuf::from("/etc").join(format!("{}.d", APP_NAME))
}

/// Returns the ordered list of directories searched for triggers.
///
/// Later directories take precedence over earlier ones. `SYSTRIG_PATH`
/// replaces the defaults when set to a non-empty value.
pub fn trigger_search_path() -> Vec<PathBuf> {
  match std::env::var_os(SEARCH_PATH_ENV) {
    Some(value) if !value.is_empty() => std::env::split_paths(&value).collect(),
    _ => vec![system_trigger_dir(), admin_trigger_dir()],
  }
}
