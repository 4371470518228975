//! Run orchestration
//!
//! Walks the (environment × test-suite) matrix in order, builds one
//! Newman command line per pair, executes it, and folds the individual
//! exit codes into a single aggregate.

mod exec;

pub use exec::execute_command;

use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::common::Result;
use crate::config::{Config, ReportType};

/// Ephemeral record of a single Newman invocation
#[derive(Debug)]
pub struct RunRecord {
    pub environment: PathBuf,
    pub test: PathBuf,
    /// 1-based position in the matrix, environment-major
    pub sequence: usize,
    pub command: String,
    pub exit_code: i32,
}

/// Execute the full run matrix and return the aggregate exit code.
///
/// Environments iterate in list order (outer), tests in list order
/// (inner). The aggregate is 0 only if every invocation exited 0; the
/// first non-zero result pins it to 1 and the remaining pairs still run.
pub async fn run(config: &Config) -> Result<i32> {
    let mut exit_code = 0;
    let mut env_counter = 0;
    let mut sequence = 0;

    for env in &config.environments {
        env_counter += 1;

        println!();
        println!("{}", "----------------------------------------------------".dimmed());
        println!("{} {}", "Environment file:".blue().bold(), env.display());

        for test in &config.tests {
            sequence += 1;

            println!("{} {}", "Test suite file:".cyan(), test.display());

            let command = build_command(config, env, test, env_counter);
            println!("{} {}", "Executing:".cyan(), command.dimmed());
            println!();

            let code = exec::execute_command(&command).await;

            let record = RunRecord {
                environment: env.clone(),
                test: test.clone(),
                sequence,
                command,
                exit_code: code,
            };
            tracing::debug!(?record, "invocation finished");

            if code == 0 {
                println!("{} exit code {}", "✓".green(), code);
            } else {
                println!("{} exit code {}", "✗".red(), code);
                exit_code = 1;
            }
        }
    }

    Ok(exit_code)
}

/// Build the Newman command line for one (environment, test) pair.
///
/// Base form: `<newman> -n <iterations> -e <env> -c <test>`. When a
/// report is requested the report flag and output path are appended.
/// Report files are numbered by environment only, so several test files
/// against the same environment write to the same report path.
pub fn build_command(config: &Config, env: &Path, test: &Path, env_counter: usize) -> String {
    let mut command = format!(
        "{} -n {} -e {} -c {}",
        config.newman_command,
        config.iterations,
        env.display(),
        test.display()
    );

    if config.report_type != ReportType::None {
        command.push_str(&format!(
            " {} {}/testResult_{}{}",
            config.report_type.report_code(),
            config.report_file_location,
            env_counter,
            config.report_type.file_extension()
        ));
    }

    command
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(report_type: ReportType) -> Config {
        Config {
            location: PathBuf::from("/suite"),
            environments: vec![PathBuf::from("/suite/env/e1.json")],
            tests: vec![PathBuf::from("/suite/tests/t1.json")],
            iterations: 1,
            report_type,
            report_file_location: "/out".to_string(),
            newman_command: "newman".to_string(),
        }
    }

    #[test]
    fn test_base_command_form() {
        let config = config(ReportType::None);
        let command = build_command(
            &config,
            &config.environments[0],
            &config.tests[0],
            1,
        );
        assert_eq!(
            command,
            "newman -n 1 -e /suite/env/e1.json -c /suite/tests/t1.json"
        );
    }

    #[test]
    fn test_html_report_appends_flag_and_path() {
        let config = config(ReportType::Html);
        let command = build_command(
            &config,
            &config.environments[0],
            &config.tests[0],
            2,
        );
        assert!(command.ends_with("-H /out/testResult_2.html"), "got: {command}");
    }

    #[test]
    fn test_xml_report_appends_flag_and_path() {
        let config = config(ReportType::Xml);
        let command = build_command(
            &config,
            &config.environments[0],
            &config.tests[0],
            1,
        );
        assert!(command.ends_with("-t /out/testResult_1.xml"), "got: {command}");
    }

    #[test]
    fn test_json_report_has_path_but_no_flag() {
        let config = config(ReportType::Json);
        let command = build_command(
            &config,
            &config.environments[0],
            &config.tests[0],
            1,
        );
        assert!(command.ends_with("/out/testResult_1.json"), "got: {command}");
        assert!(!command.contains("-H"), "got: {command}");
        assert!(!command.contains(" -t "), "got: {command}");
    }

    #[test]
    fn test_iterations_flow_into_command() {
        let mut config = config(ReportType::None);
        config.iterations = 7;
        let command = build_command(
            &config,
            &config.environments[0],
            &config.tests[0],
            1,
        );
        assert!(command.starts_with("newman -n 7 "), "got: {command}");
    }
}
