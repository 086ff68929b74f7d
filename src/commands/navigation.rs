//! Directory navigation and listing.

use super::line::CommandLine;
use super::{require, CommandResult, Lftp};

#[derive(Debug, Clone, Default)]
pub struct ClsOptions {
    /// `-1`: single-column output.
    pub single_column: bool,
    /// `-D`: list directories before files.
    pub dirs_first: bool,
    /// Path or pattern to list.
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    /// `-d <depth>`: maximum recursion depth.
    pub max_depth: Option<u32>,
    /// `-l`: long listing.
    pub long: bool,
    /// Directory to search, defaults to the current one.
    pub directory: Option<String>,
}

impl Lftp {
    pub fn cd(&mut self, dir: &str) -> CommandResult<'_> {
        require("cd", "dir", dir)?;
        let line = CommandLine::new("cd").arg(self.escape_if_enabled(dir)).build();
        self.push(line)
    }

    /// Change the local working directory.
    pub fn lcd(&mut self, dir: &str) -> CommandResult<'_> {
        require("lcd", "dir", dir)?;
        let line = CommandLine::new("lcd").arg(self.escape_if_enabled(dir)).build();
        self.push(line)
    }

    pub fn pwd(&mut self) -> CommandResult<'_> {
        self.push("pwd".to_string())
    }

    pub fn lpwd(&mut self) -> CommandResult<'_> {
        self.push("lpwd".to_string())
    }

    pub fn ls(&mut self, path: Option<&str>) -> CommandResult<'_> {
        let line = CommandLine::new("ls")
            .arg_opt(path.filter(|p| !p.is_empty()).map(|p| self.escape_if_enabled(p)))
            .build();
        self.push(line)
    }

    pub fn cls(&mut self, opts: ClsOptions) -> CommandResult<'_> {
        let line = CommandLine::new("cls")
            .flag(opts.single_column, "-1")
            .flag(opts.dirs_first, "-D")
            .arg_opt(opts.path.as_deref().map(|p| self.escape_if_enabled(p)))
            .build();
        self.push(line)
    }

    pub fn find(&mut self, opts: FindOptions) -> CommandResult<'_> {
        let line = CommandLine::new("find")
            .option("-d", opts.max_depth.map(|d| d.to_string()))
            .flag(opts.long, "-l")
            .arg_opt(opts.directory.as_deref().map(|d| self.escape_if_enabled(d)))
            .build();
        self.push(line)
    }

    pub fn cat(&mut self, path: &str) -> CommandResult<'_> {
        require("cat", "path", path)?;
        let line = CommandLine::new("cat").arg(self.escape_if_enabled(path)).build();
        self.push(line)
    }
}
