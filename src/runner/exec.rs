//! Shell invocation with concurrent output draining

use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

/// Run a command line through the shell and return its exit code.
///
/// Stdout and stderr are piped and drained by two concurrent reader
/// tasks that pass lines straight through to the console; both readers
/// must be joined before the exit status is read, otherwise a full OS
/// pipe buffer can deadlock the child. A launch failure or a missing
/// exit code counts as a failed invocation rather than aborting the run.
pub async fn execute_command(command: &str) -> i32 {
    let mut child = match Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            tracing::error!("failed to launch '{}': {}", command, e);
            return 1;
        }
    };

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let out_reader = tokio::spawn(async move {
        if let Some(stdout) = stdout {
            let mut lines = BufReader::new(stdout).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                println!("{line}");
            }
        }
    });

    let err_reader = tokio::spawn(async move {
        if let Some(stderr) = stderr {
            let mut lines = BufReader::new(stderr).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                println!("{line}");
            }
        }
    });

    let _ = out_reader.await;
    let _ = err_reader.await;

    match child.wait().await {
        // Terminated by signal yields no code; treat as failure.
        Ok(status) => status.code().unwrap_or(1),
        Err(e) => {
            tracing::error!("failed to wait on '{}': {}", command, e);
            1
        }
    }
}
