//! Job control and command wrappers.

use std::fmt;
use std::str::FromStr;

use super::line::CommandLine;
use super::{require, CommandError, CommandResult, Lftp};

/// A job number, or every job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobTarget {
    Job(u32),
    All,
}

impl fmt::Display for JobTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobTarget::Job(n) => write!(f, "{n}"),
            JobTarget::All => f.write_str("all"),
        }
    }
}

impl FromStr for JobTarget {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(CommandError::MissingArgument {
                command: "wait",
                argument: "job",
            }),
            "all" => Ok(JobTarget::All),
            n => n.parse().map(JobTarget::Job).map_err(|_| {
                CommandError::invalid("wait", format!("expected a job number or 'all', got '{n}'"))
            }),
        }
    }
}

/// Argument of `exit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitMode {
    /// Move running jobs to the background.
    Bg,
    /// Exit the top-level lftp, not just the current script.
    Top,
    /// Exit to the parent shell.
    Parent,
    /// Kill all jobs, optionally with an exit code.
    Kill(Option<i32>),
}

impl FromStr for ExitMode {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bg" => Ok(ExitMode::Bg),
            "top" => Ok(ExitMode::Top),
            "parent" => Ok(ExitMode::Parent),
            "kill" => Ok(ExitMode::Kill(None)),
            other => Err(CommandError::invalid(
                "exit",
                format!("unknown mode '{other}', expected bg, top, parent or kill"),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JobsOptions {
    /// 1 to 3 emit `-v`, `-vv`, `-vvv`; anything else emits nothing.
    pub verbosity: u8,
    /// `-r`: list only the named job, not its children.
    pub no_recursion: bool,
    pub job: Option<u32>,
}

fn verbosity_flag(level: u8) -> Option<&'static str> {
    match level {
        1 => Some("-v"),
        2 => Some("-vv"),
        3 => Some("-vvv"),
        _ => None,
    }
}

impl Lftp {
    /// Run the rest of the session at `time`, or `command` if given.
    pub fn at(&mut self, time: &str, command: Option<&str>) -> CommandResult<'_> {
        require("at", "time", time)?;
        let mut line = CommandLine::new("at").arg(self.escape_if_enabled(time));
        if let Some(cmd) = command.filter(|c| !c.is_empty()) {
            line = line.arg("--").arg(cmd);
        }
        self.push(line.build())
    }

    /// Attach to a backgrounded lftp process.
    pub fn attach(&mut self, pid: &str) -> CommandResult<'_> {
        require("attach", "pid", pid)?;
        if !pid.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CommandError::invalid("attach", format!("pid must be numeric, got '{pid}'")));
        }
        self.push(format!("attach {pid}"))
    }

    pub fn jobs(&mut self, opts: JobsOptions) -> CommandResult<'_> {
        let line = CommandLine::new("jobs")
            .arg_opt(verbosity_flag(opts.verbosity))
            .flag(opts.no_recursion, "-r")
            .arg_opt(opts.job.map(|j| j.to_string()))
            .build();
        self.push(line)
    }

    pub fn wait(&mut self, target: JobTarget) -> CommandResult<'_> {
        self.push(format!("wait {target}"))
    }

    /// Alias of [`Lftp::wait`].
    pub fn fg(&mut self, target: JobTarget) -> CommandResult<'_> {
        self.wait(target)
    }

    pub fn kill(&mut self, target: JobTarget) -> CommandResult<'_> {
        self.push(format!("kill {target}"))
    }

    pub fn exit(&mut self, mode: ExitMode) -> CommandResult<'_> {
        let line = match mode {
            ExitMode::Bg => "exit bg".to_string(),
            ExitMode::Top => "exit top".to_string(),
            ExitMode::Parent => "exit parent".to_string(),
            ExitMode::Kill(code) => CommandLine::new("exit")
                .arg("kill")
                .arg_opt(code.map(|c| c.to_string()))
                .build(),
        };
        self.push(line)
    }

    pub fn sleep(&mut self, seconds: u32) -> CommandResult<'_> {
        self.push(format!("sleep {seconds}"))
    }

    /// Queue the subcommand built by `build`, bypassing lftp aliases.
    ///
    /// ```no_run
    /// # use lftp_wrapper::{Lftp, GetOptions};
    /// # fn demo(ftp: &mut Lftp) -> Result<(), lftp_wrapper::CommandError> {
    /// ftp.command(|f| f.get("file.txt", GetOptions::default()))?;
    /// assert_eq!(ftp.queued().last().unwrap(), "command get file.txt");
    /// # Ok(())
    /// # }
    /// ```
    pub fn command<F>(&mut self, build: F) -> CommandResult<'_>
    where
        F: FnOnce(&mut Self) -> Result<&mut Self, CommandError>,
    {
        self.wrap_last("command", build)
    }

    /// Queue the subcommand built by `build` in lftp's job queue.
    pub fn queue<F>(&mut self, build: F) -> CommandResult<'_>
    where
        F: FnOnce(&mut Self) -> Result<&mut Self, CommandError>,
    {
        self.wrap_last("queue", build)
    }
}
