//! CLI integration tests.

mod common;
#[cfg(unix)]
mod run_tests;
