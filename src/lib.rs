//! Newman batch runner
//!
//! Orchestrates sequential Newman invocations over the Cartesian product
//! of environment files and test-suite files, aggregating a single exit
//! code for CI consumption.

pub mod common;
pub mod config;
pub mod runner;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use config::{Config, DefaultSettings, ReportType};
