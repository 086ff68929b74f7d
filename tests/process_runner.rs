//! LftpProcess against a real subprocess. `sh -c` accepts the same argument
//! shape as `lftp -c`, so it stands in for the client here.

#![cfg(unix)]

use lftp_wrapper::{CommandRunner, LftpProcess, RunRequest, LFTP_PROGRAM};

fn sh(command: &str) -> RunRequest {
    RunRequest::lftp(command.to_string(), None)
}

#[test]
fn default_program_is_lftp() {
    assert_eq!(LftpProcess::new().program(), LFTP_PROGRAM);
    assert_eq!(LFTP_PROGRAM, "lftp");
}

#[test]
fn request_shape() {
    let req = RunRequest::lftp("ls".into(), None);
    assert_eq!(req.args, vec!["-c", "ls"]);
    assert_eq!(req.command(), Some("ls"));
}

#[tokio::test]
async fn collects_stdout_and_stderr() {
    let runner = LftpProcess::with_program("sh");
    let out = runner
        .run(sh("echo one; echo two; echo oops >&2"))
        .await
        .unwrap();
    assert_eq!(out.data, "one\ntwo\n");
    assert_eq!(out.error, "oops\n");
    assert_eq!(out.code, Some(0));
    assert!(out.success());
}

#[tokio::test]
async fn nonzero_exit_still_resolves() {
    let runner = LftpProcess::with_program("sh");
    let out = runner.run(sh("echo bad >&2; exit 3")).await.unwrap();
    assert_eq!(out.error, "bad\n");
    assert_eq!(out.code, Some(3));
    assert!(!out.success());
}

#[tokio::test]
async fn spawn_failure_rejects() {
    let runner = LftpProcess::with_program("/nonexistent/lftp-wrapper-test-binary");
    let err = runner.run(sh("ls")).await.unwrap_err();
    assert!(!err.error.is_empty());
}

#[tokio::test]
async fn runs_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    let expected = dir.path().canonicalize().unwrap();
    let runner = LftpProcess::with_program("sh");
    let out = runner
        .run(RunRequest::lftp("pwd -P".into(), Some(dir.path().to_path_buf())))
        .await
        .unwrap();
    assert_eq!(out.data.trim_end(), expected.to_string_lossy());
}
