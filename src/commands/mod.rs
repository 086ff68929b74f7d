//! Fluent builder for lftp command lines.
//!
//! ```text
//! ConnectionOptions → normalize → preamble
//! subcommand calls  → queue     ─┐
//!                                ├→ "stmt;stmt;…" → lftp -c
//! exec(extra)       → extras    ─┘
//! ```
//!
//! Every subcommand validates its own arguments and either appends exactly one
//! entry to the queue or returns a [`CommandError`] without touching it. The
//! methods return `Result<&mut Lftp, _>`, so chains are written with `?` and
//! stop at the first invalid call.

mod bookmark;
mod connection;
mod files;
mod jobs;
mod line;
mod navigation;
mod scripting;
mod transfer;

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::config::{ConfigError, ConnectionOptions, NormalizedConnection};
use crate::escape::escape_if;
use crate::preamble::build_preamble;
use crate::process::{CommandRunner, ExecFuture, LftpProcess, RunRequest};
use crate::queue::CommandQueue;

pub use bookmark::{BookmarkCommand, CacheCommand, ExpireUnit};
pub use connection::{CloseOptions, DebugLevel, DebugOptions};
pub use files::{ChmodOptions, EditOptions, LnOptions, MkdirOptions, RmOptions, RmdirOptions};
pub use jobs::{ExitMode, JobTarget, JobsOptions};
pub use navigation::{ClsOptions, FindOptions};
pub use scripting::{EchoOptions, EvalOptions, GlobOptions};
pub use transfer::{
    Get1Options, GetOptions, MirrorOptions, MultiTransferOptions, PgetOptions, PutOptions,
    DEFAULT_PGET_CONNECTIONS,
};

/// Separator between statements in the joined command line.
pub const STATEMENT_SEPARATOR: &str = ";";

/// A subcommand was called with missing or malformed arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{command}: missing required argument '{argument}'")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("{command}: {message}")]
    InvalidArgument {
        command: &'static str,
        message: String,
    },
}

impl CommandError {
    pub(crate) fn invalid(command: &'static str, message: impl Into<String>) -> Self {
        CommandError::InvalidArgument {
            command,
            message: message.into(),
        }
    }
}

pub type CommandResult<'a> = Result<&'a mut Lftp, CommandError>;

/// Fail unless `value` is non-empty.
pub(crate) fn require(
    command: &'static str,
    argument: &'static str,
    value: &str,
) -> Result<(), CommandError> {
    if value.is_empty() {
        return Err(CommandError::MissingArgument { command, argument });
    }
    Ok(())
}

/// Fail unless `values` has at least one entry and none of them are empty.
pub(crate) fn require_all<S: AsRef<str>>(
    command: &'static str,
    argument: &'static str,
    values: &[S],
) -> Result<(), CommandError> {
    if values.is_empty() || values.iter().any(|v| v.as_ref().is_empty()) {
        return Err(CommandError::MissingArgument { command, argument });
    }
    Ok(())
}

/// Builder for one lftp session.
///
/// Owns its connection descriptor and command queue exclusively. Not meant
/// for concurrent use: build the queue, then call [`Lftp::exec`].
pub struct Lftp {
    connection: NormalizedConnection,
    escape: bool,
    queue: CommandQueue,
    runner: Arc<dyn CommandRunner>,
}

impl fmt::Debug for Lftp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lftp")
            .field("host", &self.connection.host)
            .field("username", &self.connection.username)
            .field("escape", &self.escape)
            .field("queue", &self.queue)
            .finish_non_exhaustive()
    }
}

impl Lftp {
    /// Validate `options` and build a session that spawns the real `lftp`.
    pub fn new(options: ConnectionOptions) -> Result<Self, ConfigError> {
        Self::with_runner(options, Arc::new(LftpProcess::new()))
    }

    /// Like [`Lftp::new`], but executions go through `runner`.
    pub fn with_runner(
        options: ConnectionOptions,
        runner: Arc<dyn CommandRunner>,
    ) -> Result<Self, ConfigError> {
        let connection = options.normalize()?;
        tracing::debug!(host = %connection.host, "lftp session configured");
        Ok(Self {
            escape: connection.escape,
            connection,
            queue: CommandQueue::new(),
            runner,
        })
    }

    pub fn connection(&self) -> &NormalizedConnection {
        &self.connection
    }

    pub fn escape_enabled(&self) -> bool {
        self.escape
    }

    /// Toggle escape mode for subsequent calls and for the preamble.
    pub fn set_escape(&mut self, escape: bool) -> &mut Self {
        self.escape = escape;
        self
    }

    /// Escape `value` if escape mode is on, otherwise pass it through.
    pub fn escape_if_enabled<'v>(&self, value: &'v str) -> Cow<'v, str> {
        escape_if(self.escape, value)
    }

    /// Commands queued since the last execution.
    pub fn queued(&self) -> &[String] {
        self.queue.as_slice()
    }

    /// Connection setup statements for the current escape mode.
    pub fn preamble(&self) -> Vec<String> {
        build_preamble(&self.connection, self.escape)
    }

    /// Join preamble, `extra` and the queue with `;`, draining the queue.
    pub fn build_command<I, S>(&mut self, extra: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut statements = self.preamble();
        statements.extend(extra.into_iter().map(Into::into));
        let queued = self.queue.drain_all();
        tracing::debug!(queued = queued.len(), "draining command queue");
        statements.extend(queued);
        statements.join(STATEMENT_SEPARATOR)
    }

    /// Execute everything queued so far.
    ///
    /// The queue is drained before this returns; the process runs when the
    /// returned future is polled. A failed execution does not restore it.
    pub fn exec(&mut self) -> ExecFuture {
        self.exec_with(std::iter::empty::<String>())
    }

    /// Execute `extra` ad-hoc statements, then everything queued so far.
    pub fn exec_with<I, S>(&mut self, extra: I) -> ExecFuture
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let command = self.build_command(extra);
        let working_directory = self.connection.working_directory.clone();
        tracing::debug!(cwd = ?working_directory, "spawning lftp");
        self.runner.run(RunRequest::lftp(command, working_directory))
    }

    /// Append one finished subcommand.
    pub(crate) fn push(&mut self, line: String) -> CommandResult<'_> {
        tracing::debug!(command = %line.split(' ').next().unwrap_or_default(), "queued");
        self.queue.push(line);
        Ok(self)
    }

    /// Run `build`, then re-queue its last entry behind `prefix`.
    fn wrap_last<F>(&mut self, prefix: &'static str, build: F) -> CommandResult<'_>
    where
        F: FnOnce(&mut Self) -> Result<&mut Self, CommandError>,
    {
        let before = self.queue.len();
        build(&mut *self)?;
        if self.queue.len() == before {
            return Err(CommandError::MissingArgument {
                command: prefix,
                argument: "cmd",
            });
        }
        let inner = self.queue.pop().unwrap_or_default();
        self.push(format!("{prefix} {inner}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lftp() -> Lftp {
        Lftp::new(ConnectionOptions {
            host: "example.org".into(),
            username: "user".into(),
            password: Some("secret".into()),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn debug_output_hides_password() {
        let ftp = lftp();
        assert!(!format!("{ftp:?}").contains("secret"));
    }

    #[test]
    fn wrap_last_requires_an_entry() {
        let mut ftp = lftp();
        let err = ftp.wrap_last("command", |f| Ok(f)).unwrap_err();
        assert!(matches!(err, CommandError::MissingArgument { command: "command", .. }));
        assert!(ftp.queued().is_empty());
    }

    #[test]
    fn build_command_with_extras_only() {
        let mut ftp = lftp();
        let cmd = ftp.build_command(["ls"]);
        assert!(cmd.ends_with(";ls"));
    }
}
