//! Remote file management: permissions, links, moves, removal, editing.

use super::line::CommandLine;
use super::{require, require_all, CommandResult, Lftp};

#[derive(Debug, Clone, Copy, Default)]
pub struct ChmodOptions {
    /// `-v`: report every file processed.
    pub verbose: bool,
    /// `-c`: report only changed files.
    pub changes: bool,
    /// `-R`: recurse into directories.
    pub recursive: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LnOptions {
    /// `-s`: symbolic link.
    pub symbolic: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RmOptions {
    /// `-r`: recursive.
    pub recursive: bool,
    /// `-f`: ignore errors.
    pub force: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RmdirOptions {
    /// `-f`: ignore errors.
    pub force: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MkdirOptions {
    /// `-p`: create parent directories.
    pub parents: bool,
}

#[derive(Debug, Clone, Default)]
pub struct EditOptions {
    /// `-k`: keep the local temporary copy.
    pub keep: bool,
    /// `-o <dir>`: where to place the local copy.
    pub output_dir: Option<String>,
}

impl Lftp {
    pub fn chmod(&mut self, mode: &str, files: &[&str], opts: ChmodOptions) -> CommandResult<'_> {
        require("chmod", "mode", mode)?;
        require_all("chmod", "files", files)?;
        let line = CommandLine::new("chmod")
            .flag(opts.verbose, "-v")
            .flag(opts.changes, "-c")
            .flag(opts.recursive, "-R")
            .arg(self.escape_if_enabled(mode))
            .args(files.iter().map(|f| self.escape_if_enabled(f)))
            .build();
        self.push(line)
    }

    pub fn ln(&mut self, existing_file: &str, new_link: &str, opts: LnOptions) -> CommandResult<'_> {
        require("ln", "existing_file", existing_file)?;
        require("ln", "new_link", new_link)?;
        let line = CommandLine::new("ln")
            .flag(opts.symbolic, "-s")
            .arg(self.escape_if_enabled(existing_file))
            .arg(self.escape_if_enabled(new_link))
            .build();
        self.push(line)
    }

    pub fn mv(&mut self, src: &str, dest: &str) -> CommandResult<'_> {
        require("mv", "src", src)?;
        require("mv", "dest", dest)?;
        let line = CommandLine::new("mv")
            .arg(self.escape_if_enabled(src))
            .arg(self.escape_if_enabled(dest))
            .build();
        self.push(line)
    }

    pub fn rm(&mut self, paths: &[&str], opts: RmOptions) -> CommandResult<'_> {
        require_all("rm", "paths", paths)?;
        let line = CommandLine::new("rm")
            .flag(opts.recursive, "-r")
            .flag(opts.force, "-f")
            .args(paths.iter().map(|p| self.escape_if_enabled(p)))
            .build();
        self.push(line)
    }

    pub fn rmdir(&mut self, paths: &[&str], opts: RmdirOptions) -> CommandResult<'_> {
        require_all("rmdir", "paths", paths)?;
        let line = CommandLine::new("rmdir")
            .flag(opts.force, "-f")
            .args(paths.iter().map(|p| self.escape_if_enabled(p)))
            .build();
        self.push(line)
    }

    /// Remove files matching glob patterns.
    pub fn mrm(&mut self, patterns: &[&str]) -> CommandResult<'_> {
        require_all("mrm", "patterns", patterns)?;
        let line = CommandLine::new("mrm")
            .args(patterns.iter().map(|p| self.escape_if_enabled(p)))
            .build();
        self.push(line)
    }

    pub fn mkdir(&mut self, dirs: &[&str], opts: MkdirOptions) -> CommandResult<'_> {
        require_all("mkdir", "dirs", dirs)?;
        let line = CommandLine::new("mkdir")
            .flag(opts.parents, "-p")
            .args(dirs.iter().map(|d| self.escape_if_enabled(d)))
            .build();
        self.push(line)
    }

    /// Edit a remote file with the local `$EDITOR`.
    pub fn edit(&mut self, file: &str, opts: EditOptions) -> CommandResult<'_> {
        require("edit", "file", file)?;
        let line = CommandLine::new("edit")
            .flag(opts.keep, "-k")
            .option("-o", opts.output_dir.as_deref().map(|d| self.escape_if_enabled(d)))
            .arg(self.escape_if_enabled(file))
            .build();
        self.push(line)
    }
}
