//! Common test infrastructure
//!
//! This module provides everything the end-to-end tests need: fixture TSV
//! dumps written into a temp directory and the shared ids/names to assert
//! against. Tests should only import from this module, not from internal
//! submodules.

mod constants;
mod fixtures;

// Public API - this is what tests import
pub use constants::*;
pub use fixtures::{create_test_sources, write_sources, TestSources};
