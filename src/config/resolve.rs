//! Command-line resolution and validation

use std::fs;
use std::path::{Path, PathBuf};

use super::defaults::{DefaultSettings, ReportType};
use crate::common::{Error, Result};

/// Validated run configuration, read-only once resolved
#[derive(Debug)]
pub struct Config {
    /// Suite root directory containing `env/` and `tests/`
    pub location: PathBuf,
    /// Environment files, in flag order or directory-enumeration order
    pub environments: Vec<PathBuf>,
    /// Test-suite files, in flag order or directory-enumeration order
    pub tests: Vec<PathBuf>,
    /// Iteration count handed to Newman's `-n` argument, always in 1..=10
    pub iterations: u32,
    /// Requested report format; code and extension derive from this
    pub report_type: ReportType,
    /// Directory Newman writes report files into
    pub report_file_location: String,
    /// Newman binary or launcher command
    pub newman_command: String,
}

/// Resolve command-line arguments against process-wide defaults.
///
/// Defaults apply first, then flags in encounter order; `--e` and `--t`
/// accumulate rather than overwrite. When no environment or test files
/// were named explicitly, the `env/` and `tests/` directories under the
/// suite root are enumerated instead. Fails with [`Error::Config`] on an
/// invalid result, before any Newman process is launched.
pub fn resolve<I>(args: I, defaults: &DefaultSettings) -> Result<Config>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut config = Config {
        location: PathBuf::from(&defaults.location),
        environments: Vec::new(),
        tests: Vec::new(),
        iterations: clamp_iterations(defaults.iterations),
        report_type: ReportType::from_ordinal(defaults.report_type),
        report_file_location: defaults.report_file_location.clone(),
        newman_command: defaults.newman_command.clone(),
    };

    for arg in args {
        let Some((flag, value)) = split_token(arg.as_ref()) else {
            // Malformed tokens are ignored, matching the historical
            // behavior operators rely on in CI wrappers.
            tracing::debug!("ignoring unrecognized argument '{}'", arg.as_ref());
            continue;
        };

        match flag {
            "--l" => config.location = PathBuf::from(value),
            "--e" => config.environments.push(PathBuf::from(value)),
            "--t" => config.tests.push(PathBuf::from(value)),
            "--i" => {
                config.iterations = value
                    .parse::<u32>()
                    .ok()
                    .map(clamp_iterations)
                    .unwrap_or(1);
            }
            "--T" => config.report_type = ReportType::from_token(value),
            "--n" => config.report_file_location = value.to_string(),
            "--N" => config.newman_command = value.to_string(),
            _ => tracing::debug!("ignoring unknown flag '{}'", flag),
        }
    }

    validate(&mut config)?;
    Ok(config)
}

/// Split a `--X:value` token at its fixed offsets.
///
/// The flag key is exactly three bytes followed by a `:`; anything
/// shorter or shaped differently yields None. The explicit length check
/// keeps short tokens from faulting the parser.
fn split_token(token: &str) -> Option<(&str, &str)> {
    if token.len() < 4 || !token.starts_with("--") {
        return None;
    }
    if token.as_bytes()[3] != b':' {
        return None;
    }
    Some((&token[..3], &token[4..]))
}

/// Out-of-range or unparsable iteration counts fall back to 1
fn clamp_iterations(n: u32) -> u32 {
    if (1..=10).contains(&n) {
        n
    } else {
        1
    }
}

fn validate(config: &mut Config) -> Result<()> {
    if config.report_type != ReportType::None && config.report_file_location.is_empty() {
        return Err(Error::Config(
            "--n:[report output directory] is required when --T requests a report".to_string(),
        ));
    }

    if !config.location.is_dir() {
        return Err(Error::Config(format!(
            "suite location '{}' is invalid, directory does not exist",
            config.location.display()
        )));
    }

    if config.environments.is_empty() {
        let env_dir = config.location.join("env");
        if !env_dir.is_dir() {
            return Err(Error::Config(format!(
                "suite location '{}' does not have an 'env' directory",
                config.location.display()
            )));
        }
        config.environments = list_files(&env_dir)?;
    }

    if config.tests.is_empty() {
        let tests_dir = config.location.join("tests");
        if !tests_dir.is_dir() {
            return Err(Error::Config(format!(
                "suite location '{}' does not have a 'tests' directory",
                config.location.display()
            )));
        }
        config.tests = list_files(&tests_dir)?;
    }

    Ok(())
}

/// Enumerate the regular files of a directory, in enumeration order
fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    Ok(files)
}
