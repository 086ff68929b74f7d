//! Scripting helpers: `glob`, `eval`, `echo`, `local`.

use super::line::CommandLine;
use super::{require, require_all, CommandError, CommandResult, Lftp};

/// Options for `glob`.
///
/// Exactly one of `exist`, `not_exist` or `command` decides the shape:
///
/// - `exist` / `not_exist`: `glob --exist <patterns> [&& <command>]`
/// - otherwise: `glob <command> <patterns>`
///
/// `command` is lftp command text and is embedded verbatim.
#[derive(Debug, Clone, Default)]
pub struct GlobOptions {
    /// `-f`: plain files only.
    pub files_only: bool,
    /// `-d`: directories only.
    pub dirs_only: bool,
    /// `-a`: all types.
    pub all_types: bool,
    /// `--exist`: succeed if the patterns match anything.
    pub exist: bool,
    /// `--not-exist`: succeed if the patterns match nothing.
    pub not_exist: bool,
    pub command: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct EvalOptions {
    /// `-f <format>`: build the command from a format string.
    pub format: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EchoOptions {
    /// `-n`: no trailing newline.
    pub no_newline: bool,
}

impl Lftp {
    pub fn glob(&mut self, patterns: &[&str], opts: GlobOptions) -> CommandResult<'_> {
        require_all("glob", "patterns", patterns)?;
        if opts.exist && opts.not_exist {
            return Err(CommandError::invalid(
                "glob",
                "exist and not_exist are mutually exclusive",
            ));
        }
        let command = opts.command.as_deref().filter(|c| !c.is_empty());
        let escaped: Vec<_> = patterns.iter().map(|p| self.escape_if_enabled(p)).collect();

        let line = CommandLine::new("glob")
            .flag(opts.files_only, "-f")
            .flag(opts.dirs_only, "-d")
            .flag(opts.all_types, "-a");
        let line = if opts.exist || opts.not_exist {
            let check = if opts.exist { "--exist" } else { "--not-exist" };
            let line = line.arg(check).args(escaped);
            match command {
                Some(cmd) => line.arg("&&").arg(cmd),
                None => line,
            }
        } else {
            let Some(cmd) = command else {
                return Err(CommandError::MissingArgument {
                    command: "glob",
                    argument: "command",
                });
            };
            line.arg(cmd).args(escaped)
        };
        self.push(line.build())
    }

    pub fn eval(&mut self, args: &[&str], opts: EvalOptions) -> CommandResult<'_> {
        require_all("eval", "args", args)?;
        let line = CommandLine::new("eval")
            .option("-f", opts.format.as_deref().map(|f| self.escape_if_enabled(f)))
            .args(args.iter().map(|a| self.escape_if_enabled(a)))
            .build();
        self.push(line)
    }

    pub fn echo(&mut self, text: &str, opts: EchoOptions) -> CommandResult<'_> {
        require("echo", "text", text)?;
        let line = CommandLine::new("echo")
            .flag(opts.no_newline, "-n")
            .arg(self.escape_if_enabled(text))
            .build();
        self.push(line)
    }

    /// Run an lftp command against the local filesystem, e.g. `local ls`.
    pub fn local(&mut self, command: &str, args: &[&str]) -> CommandResult<'_> {
        require("local", "command", command)?;
        let line = CommandLine::new("local")
            .arg(self.escape_if_enabled(command))
            .args(args.iter().map(|a| self.escape_if_enabled(a)))
            .build();
        self.push(line)
    }
}
