// SystemCommandRunner: real process execution, failures collapse to empty output

use infoserv::command::{CommandRunner, SystemCommandRunner, run_blocking};
use std::sync::Arc;

#[cfg(unix)]
#[test]
fn run_captures_stdout() {
    let out = SystemCommandRunner.run("sh", &["-c", "printf 'rx tx'"]);
    assert_eq!(out, "rx tx");
}

#[cfg(unix)]
#[test]
fn run_passes_arguments_without_shell_expansion() {
    let out = SystemCommandRunner.run("echo", &["d;", "$HOME", "`id`"]);
    assert_eq!(out, "d; $HOME `id`\n");
}

#[cfg(unix)]
#[test]
fn run_non_zero_exit_is_empty() {
    let out = SystemCommandRunner.run("sh", &["-c", "echo partial; exit 3"]);
    assert_eq!(out, "");
}

#[test]
fn run_missing_program_is_empty() {
    let out = SystemCommandRunner.run("definitely-not-a-real-binary-4711", &[]);
    assert_eq!(out, "");
}

#[cfg(unix)]
#[tokio::test]
async fn run_blocking_returns_output() {
    let out = run_blocking(
        Arc::new(SystemCommandRunner),
        "echo".into(),
        vec!["pong".into()],
    )
    .await;
    assert_eq!(out, "pong\n");
}
