//! Common utilities shared across the runner

pub mod error;
pub mod logging;
pub mod paths;

pub use error::{Error, Result};
