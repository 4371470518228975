//! Newman batch runner CLI
//!
//! Fans a suite of API tests out to sequential Newman invocations, one
//! per (environment, test-suite) pair, and exits 0 only when every
//! invocation passed.

use newman_runner::common::logging;
use newman_runner::config::{self, DefaultSettings};
use newman_runner::runner;

#[tokio::main]
async fn main() {
    logging::init();

    let defaults = match DefaultSettings::load() {
        Ok(defaults) => defaults,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    let config = match config::resolve(std::env::args().skip(1), &defaults) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            print_usage();
            std::process::exit(2);
        }
    };

    match runner::run(&config).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    }
}

fn print_usage() {
    eprintln!(
        "\nUsage: newman-runner --l:<path/to/suite> [flags]\n\
         \n\
         Runs every test suite under <suite>/tests against every environment\n\
         file under <suite>/env, one Newman invocation per pair.\n\
         \n\
         Flags:\n\
         \x20 --l:<path>   suite root directory (contains env/ and tests/)\n\
         \x20 --e:<file>   use only this environment file (repeatable)\n\
         \x20 --t:<file>   run only this test suite file (repeatable)\n\
         \x20 --i:<n>      iterations per run, 1-10 (default 1)\n\
         \x20 --T:<type>   report type: html, xml, json, none\n\
         \x20 --n:<path>   report output directory (required with --T)\n\
         \x20 --N:<path>   newman command, overrides the global installation"
    );
}
