//! Configuration resolution
//!
//! Merges process-wide defaults with command-line overrides, discovers
//! environment and test-suite files under the suite root, and validates
//! the result before any Newman process is launched.

mod defaults;
mod resolve;

pub use defaults::{DefaultSettings, ReportType};
pub use resolve::{resolve, Config};
