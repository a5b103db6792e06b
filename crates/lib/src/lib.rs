//! systrig-lib: Core types and logic for systrig
//!
//! This crate provides the trigger engine used by the `systrig` CLI:
//! - `Config`: a declarative trigger definition loaded from TOML
//! - `Scope`: the runtime context (forced/chroot/live) a trigger runs under
//! - `Output`: the per-invocation result handed back to the presentation layer
//! - `discovery`: locating and loading every trigger on the system

pub mod consts;
pub mod discovery;
pub mod platform;
pub mod trigger;
pub mod util;

pub use discovery::{DiscoveryError, Trigger, TriggerSet, load_all, load_all_from};
pub use trigger::{Bin, Config, ConfigError, ExpandedBin, Output, Scope, Status, ValidationError};
