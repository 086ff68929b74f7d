//! Connection control: raw statements, `close`, `set`, `debug`.

use std::fmt;
use std::str::FromStr;

use super::line::CommandLine;
use super::{require, CommandError, CommandResult, Lftp};

#[derive(Debug, Clone, Copy, Default)]
pub struct CloseOptions {
    /// `-a`: close every idle connection, not just the current one.
    pub all: bool,
}

/// Verbosity argument of `debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugLevel {
    Level(u32),
    Off,
}

impl fmt::Display for DebugLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebugLevel::Level(n) => write!(f, "{n}"),
            DebugLevel::Off => f.write_str("off"),
        }
    }
}

impl FromStr for DebugLevel {
    type Err = CommandError;

    /// Accepts a number or the literal `off`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(CommandError::MissingArgument {
                command: "debug",
                argument: "level",
            });
        }
        if s == "off" {
            return Ok(DebugLevel::Off);
        }
        s.parse::<u32>()
            .map(DebugLevel::Level)
            .map_err(|_| CommandError::invalid("debug", format!("level must be a number or 'off', got '{s}'")))
    }
}

#[derive(Debug, Clone, Default)]
pub struct DebugOptions {
    /// `-T`: truncate the output file.
    pub truncate: bool,
    /// `-o <file>`: write debug output to a file.
    pub output_file: Option<String>,
    /// `-c`: show message context.
    pub context: bool,
    /// `-p`: show PID.
    pub pid: bool,
    /// `-t`: show timestamps.
    pub timestamps: bool,
}

impl Lftp {
    /// Queue `command` verbatim, without validation or escaping.
    pub fn raw(&mut self, command: &str) -> CommandResult<'_> {
        require("raw", "command", command)?;
        self.push(command.to_string())
    }

    pub fn close(&mut self, opts: CloseOptions) -> CommandResult<'_> {
        let line = CommandLine::new("close").flag(opts.all, "-a").build();
        self.push(line)
    }

    /// `set <variable> <value>`; the value is escaped, the name is not.
    pub fn set(&mut self, variable: &str, value: &str) -> CommandResult<'_> {
        require("set", "variable", variable)?;
        require("set", "value", value)?;
        let line = CommandLine::new("set")
            .arg(variable)
            .arg(self.escape_if_enabled(value))
            .build();
        self.push(line)
    }

    pub fn debug(&mut self, level: DebugLevel, opts: DebugOptions) -> CommandResult<'_> {
        if let Some(file) = &opts.output_file {
            require("debug", "output_file", file)?;
        }
        let line = CommandLine::new("debug")
            .flag(opts.truncate, "-T")
            .option("-o", opts.output_file.as_deref().map(|f| self.escape_if_enabled(f)))
            .flag(opts.context, "-c")
            .flag(opts.pid, "-p")
            .flag(opts.timestamps, "-t")
            .arg(level.to_string())
            .build();
        self.push(line)
    }
}
