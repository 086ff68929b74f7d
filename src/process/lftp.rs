use std::process::Stdio;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

use super::{CommandRunner, ExecError, ExecFuture, ExecOutput, RunRequest, LFTP_PROGRAM};

/// Runs requests by spawning a real process with tokio.
#[derive(Debug, Clone)]
pub struct LftpProcess {
    program: String,
}

impl LftpProcess {
    pub fn new() -> Self {
        Self::with_program(LFTP_PROGRAM)
    }

    /// Use a different executable, e.g. an absolute path to lftp.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for LftpProcess {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for LftpProcess {
    fn run(&self, request: RunRequest) -> ExecFuture {
        let program = self.program.clone();
        Box::pin(async move { run_to_completion(&program, request).await })
    }
}

async fn run_to_completion(program: &str, request: RunRequest) -> Result<ExecOutput, ExecError> {
    let mut cmd = Command::new(program);
    cmd.args(&request.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = &request.working_directory {
        cmd.current_dir(dir);
    }

    let mut child = cmd.spawn().map_err(|e| {
        tracing::warn!(program, error = %e, "failed to start process");
        ExecError {
            error: e.to_string(),
        }
    })?;
    tracing::debug!(program, pid = ?child.id(), "process started");

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();
    let (data, error) = tokio::join!(collect(stdout), collect(stderr));

    let status = child.wait().await.map_err(|e| ExecError {
        error: if error.is_empty() { e.to_string() } else { error.clone() },
    })?;
    if !status.success() {
        tracing::warn!(program, code = ?status.code(), "process exited unsuccessfully");
    }

    Ok(ExecOutput {
        data,
        error,
        code: status.code(),
    })
}

/// Read a stream to EOF, appending chunks in arrival order.
async fn collect<R: AsyncRead + Unpin>(stream: Option<R>) -> String {
    let Some(mut stream) = stream else {
        return String::new();
    };
    let mut out = Vec::new();
    let mut chunk = [0u8; 8192];
    loop {
        match stream.read(&mut chunk).await {
            Ok(0) => break,
            Ok(n) => out.extend_from_slice(&chunk[..n]),
            Err(e) => {
                tracing::warn!(error = %e, "error reading process output");
                break;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}
