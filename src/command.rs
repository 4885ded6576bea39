// External command execution (fastfetch, vnstat).

use std::process::{Command, Stdio};
use std::sync::Arc;

/// Runs an external program and returns its stdout as text.
///
/// Failures (spawn error, non-zero exit) yield an empty string; callers treat
/// empty output as "no data". There is no timeout: a hung child blocks the caller.
pub trait CommandRunner: Send + Sync {
    fn run(&self, program: &str, args: &[&str]) -> String;
}

/// Spawns real processes with a discrete argument list (never through a shell).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> String {
        let output = match Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
        {
            Ok(o) => o,
            Err(e) => {
                tracing::warn!(program, ?args, error = %e, "command spawn failed");
                return String::new();
            }
        };
        if !output.status.success() {
            tracing::warn!(program, ?args, status = %output.status, "command exited with failure");
            return String::new();
        }
        String::from_utf8_lossy(&output.stdout).into_owned()
    }
}

/// Runs `program` on the blocking pool so request handlers never block a runtime worker.
pub async fn run_blocking(runner: Arc<dyn CommandRunner>, program: String, args: Vec<String>) -> String {
    let result = tokio::task::spawn_blocking(move || {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        runner.run(&program, &args)
    })
    .await;
    match result {
        Ok(out) => out,
        Err(e) => {
            tracing::warn!(error = %e, "command task join failed");
            String::new()
        }
    }
}
