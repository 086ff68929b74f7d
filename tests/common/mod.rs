//! Shared test utilities and a recording runner.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;

use lftp_wrapper::{
    CommandRunner, ConnectionOptions, ExecError, ExecFuture, ExecOutput, Lftp, RunRequest,
};
use parking_lot::Mutex;

/// Captures every request and answers with a canned result.
pub struct RecordingRunner {
    pub requests: Mutex<Vec<RunRequest>>,
    result: Result<ExecOutput, ExecError>,
}

impl RecordingRunner {
    pub fn ok(data: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            result: Ok(ExecOutput {
                data: data.to_string(),
                error: String::new(),
                code: Some(0),
            }),
        })
    }

    pub fn failing(error: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            result: Err(ExecError {
                error: error.to_string(),
            }),
        })
    }

    /// Joined command line of the n-th request.
    pub fn command(&self, n: usize) -> String {
        self.requests.lock()[n]
            .command()
            .expect("request is not an lftp -c invocation")
            .to_string()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, request: RunRequest) -> ExecFuture {
        self.requests.lock().push(request);
        let result = self.result.clone();
        Box::pin(async move { result })
    }
}

pub fn options() -> ConnectionOptions {
    ConnectionOptions {
        host: "example.org".into(),
        username: "user".into(),
        password: Some("pass".into()),
        ..Default::default()
    }
}

pub const PREAMBLE: &str = "set net:max-retries 1;\
set net:timeout 10;\
set net:reconnect-interval-base 5;\
set net:reconnect-interval-multiplier 1;\
open -u \"user\",\"pass\" \"sftp://example.org:22\"";

/// Builder wired to a runner that never spawns anything.
pub fn lftp() -> Lftp {
    Lftp::with_runner(options(), RecordingRunner::ok("")).expect("valid options")
}

pub fn lftp_unescaped() -> Lftp {
    let mut ftp = lftp();
    ftp.set_escape(false);
    ftp
}
