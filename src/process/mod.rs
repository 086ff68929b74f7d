//! Boundary between the command builder and the spawned lftp process.
//!
//! The builder only needs "run this command line, give back stdout/stderr
//! text or an error". [`CommandRunner`] is that seam; [`LftpProcess`] is the
//! tokio-backed implementation used outside tests.

mod lftp;

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use serde::Serialize;
use thiserror::Error;

pub use lftp::LftpProcess;

/// Name of the external client executable.
pub const LFTP_PROGRAM: &str = "lftp";

/// Pending result of one execution.
pub type ExecFuture = Pin<Box<dyn Future<Output = Result<ExecOutput, ExecError>> + Send + 'static>>;

/// Everything needed to launch the client once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    /// Arguments after the program name: `-c` and the joined command line.
    pub args: Vec<String>,
    pub working_directory: Option<PathBuf>,
}

impl RunRequest {
    /// Request for `lftp -c <command>`.
    pub fn lftp(command: String, working_directory: Option<PathBuf>) -> Self {
        Self {
            args: vec!["-c".to_string(), command],
            working_directory,
        }
    }

    /// The joined command line, if this is a `-c` request.
    pub fn command(&self) -> Option<&str> {
        match self.args.as_slice() {
            [flag, command] if flag == "-c" => Some(command),
            _ => None,
        }
    }
}

/// Output collected from a process that ran to completion.
///
/// Chunks are concatenated in arrival order; nothing is parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExecOutput {
    /// Collected stdout.
    pub data: String,
    /// Collected stderr.
    pub error: String,
    /// Exit code, if the process exited normally.
    pub code: Option<i32>,
}

impl ExecOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// The process could not be started or awaited.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct ExecError {
    pub error: String,
}

/// Launches the external client and collects its output.
pub trait CommandRunner: Send + Sync {
    fn run(&self, request: RunRequest) -> ExecFuture;
}
