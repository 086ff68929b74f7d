//! File transfer: `get`, `get1`, `put`, `pget`, `mirror`, `mget`, `mput`.

use super::line::CommandLine;
use super::{require, require_all, CommandError, CommandResult, Lftp};

/// Connections used by `pget` when none are requested.
pub const DEFAULT_PGET_CONNECTIONS: u32 = 4;

#[derive(Debug, Clone, Default)]
pub struct GetOptions {
    /// `-c`: continue a partial transfer.
    pub continue_transfer: bool,
    /// `-E`: delete the remote file after a successful transfer.
    pub delete_source: bool,
    /// `-e`: delete the local file before the transfer.
    pub delete_target: bool,
    /// `-a`: ascii mode.
    pub ascii: bool,
    /// `-O <base>`: base directory for the local file.
    pub base_dir: Option<String>,
    /// Trailing `-o <path>`: local file name.
    pub local_path: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Get1Options {
    /// `-o <dest>`: destination file.
    pub destination: Option<String>,
    /// `-c`: continue a partial transfer.
    pub continue_transfer: bool,
    /// `-E`: delete the source after a successful transfer.
    pub delete_source: bool,
    /// `-a`: ascii mode.
    pub ascii: bool,
    /// `--source-region=<from-to>`
    pub source_region: Option<String>,
    /// `--target-position=<pos>`
    pub target_position: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct PutOptions {
    /// `-c`: continue a partial transfer.
    pub continue_transfer: bool,
    /// `-E`: delete the local file after a successful transfer.
    pub delete_source: bool,
    /// `-a`: ascii mode.
    pub ascii: bool,
    /// `-O <base>`: base directory for the remote file.
    pub base_dir: Option<String>,
    /// Trailing `-o <path>`: remote file name.
    pub remote_path: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PgetOptions {
    /// `-n <n>`: number of connections, [`DEFAULT_PGET_CONNECTIONS`] if unset.
    pub connections: Option<u32>,
    /// Trailing `-o <path>`: local file name.
    pub local_path: Option<String>,
    /// Run through lftp's job queue.
    pub queue: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MirrorOptions {
    /// `--reverse`: upload `local_dir` to the remote directory.
    pub upload: bool,
    /// Local side of the mirror. Required for uploads.
    pub local_dir: Option<String>,
    /// `--parallel=<n>`: files transferred in parallel.
    pub parallel: Option<u32>,
    /// `--include='<regex>'`
    pub filter: Option<String>,
    /// `--use-pget-n=<n>`: connections per file.
    pub pget_n: Option<u32>,
    /// Extra mirror flags, emitted verbatim.
    pub options: Option<String>,
    /// Run through lftp's job queue.
    pub queue: bool,
}

/// Shared flags of `mget` and `mput`.
#[derive(Debug, Clone, Default)]
pub struct MultiTransferOptions {
    /// `-c`: continue partial transfers.
    pub continue_transfer: bool,
    /// `-d`: create directories named in the patterns.
    pub create_dirs: bool,
    /// `-E`: delete sources after successful transfers.
    pub delete_source: bool,
    /// `-a`: ascii mode.
    pub ascii: bool,
    /// `-O <base>`: target base directory.
    pub base_dir: Option<String>,
}

impl Lftp {
    pub fn get(&mut self, remote_path: &str, opts: GetOptions) -> CommandResult<'_> {
        require("get", "remote_path", remote_path)?;
        let mut line = CommandLine::new("get")
            .flag(opts.continue_transfer, "-c")
            .flag(opts.delete_source, "-E")
            .flag(opts.delete_target, "-e")
            .flag(opts.ascii, "-a")
            .option("-O", opts.base_dir.as_deref().map(|b| self.escape_if_enabled(b)))
            .arg(self.escape_if_enabled(remote_path));
        if let Some(local) = opts.local_path.as_deref() {
            line = line.option("-o", Some(self.escape_if_enabled(local)));
        }
        self.push(line.build())
    }

    /// Fetch a single file, optionally a byte region of it.
    pub fn get1(&mut self, remote_file: &str, opts: Get1Options) -> CommandResult<'_> {
        require("get1", "remote_file", remote_file)?;
        let line = CommandLine::new("get1")
            .option("-o", opts.destination.as_deref().map(|d| self.escape_if_enabled(d)))
            .flag(opts.continue_transfer, "-c")
            .flag(opts.delete_source, "-E")
            .flag(opts.ascii, "-a")
            .assign(
                "--source-region",
                opts.source_region.as_deref().map(|r| self.escape_if_enabled(r)),
            )
            .assign("--target-position", opts.target_position)
            .arg(self.escape_if_enabled(remote_file))
            .build();
        self.push(line)
    }

    pub fn put(&mut self, local_path: &str, opts: PutOptions) -> CommandResult<'_> {
        require("put", "local_path", local_path)?;
        let line = CommandLine::new("put")
            .flag(opts.continue_transfer, "-c")
            .flag(opts.delete_source, "-E")
            .flag(opts.ascii, "-a")
            .option("-O", opts.base_dir.as_deref().map(|b| self.escape_if_enabled(b)))
            .arg(self.escape_if_enabled(local_path))
            .option("-o", opts.remote_path.as_deref().map(|r| self.escape_if_enabled(r)))
            .build();
        self.push(line)
    }

    /// Download one file over several connections.
    pub fn pget(&mut self, remote_path: &str, opts: PgetOptions) -> CommandResult<'_> {
        require("pget", "remote_path", remote_path)?;
        let connections = opts.connections.unwrap_or(DEFAULT_PGET_CONNECTIONS);
        let line = CommandLine::new("pget")
            .queued(opts.queue)
            .option("-n", Some(connections.to_string()))
            .arg(self.escape_if_enabled(remote_path))
            .option("-o", opts.local_path.as_deref().map(|l| self.escape_if_enabled(l)))
            .build();
        self.push(line)
    }

    /// Mirror a directory tree; downloads unless `upload` is set.
    pub fn mirror(&mut self, remote_dir: &str, opts: MirrorOptions) -> CommandResult<'_> {
        require("mirror", "remote_dir", remote_dir)?;
        let local_dir = opts.local_dir.as_deref().filter(|d| !d.is_empty());
        if opts.upload && local_dir.is_none() {
            return Err(CommandError::MissingArgument {
                command: "mirror",
                argument: "local_dir",
            });
        }
        if let Some(filter) = &opts.filter {
            if filter.contains('\'') {
                return Err(CommandError::invalid(
                    "mirror",
                    "include filter must not contain a single quote",
                ));
            }
        }

        let remote = self.escape_if_enabled(remote_dir);
        let local = local_dir.map(|d| self.escape_if_enabled(d));
        let positionals = if opts.upload {
            [local, Some(remote)]
        } else {
            [Some(remote), local]
        };

        let line = CommandLine::new("mirror")
            .queued(opts.queue)
            .flag(opts.upload, "--reverse")
            .assign("--parallel", opts.parallel)
            .assign("--include", opts.filter.as_deref().map(|f| format!("'{f}'")))
            .assign("--use-pget-n", opts.pget_n)
            .arg_opt(opts.options.as_deref().filter(|o| !o.is_empty()))
            .args(positionals.into_iter().flatten())
            .build();
        self.push(line)
    }

    /// Download every file matching the glob patterns.
    pub fn mget(&mut self, patterns: &[&str], opts: MultiTransferOptions) -> CommandResult<'_> {
        require_all("mget", "patterns", patterns)?;
        let line = self.multi_transfer("mget", patterns, &opts);
        self.push(line)
    }

    /// Upload every local file matching the glob patterns.
    pub fn mput(&mut self, patterns: &[&str], opts: MultiTransferOptions) -> CommandResult<'_> {
        require_all("mput", "patterns", patterns)?;
        let line = self.multi_transfer("mput", patterns, &opts);
        self.push(line)
    }

    fn multi_transfer(&self, name: &str, patterns: &[&str], opts: &MultiTransferOptions) -> String {
        CommandLine::new(name)
            .flag(opts.continue_transfer, "-c")
            .flag(opts.create_dirs, "-d")
            .flag(opts.delete_source, "-E")
            .flag(opts.ascii, "-a")
            .option("-O", opts.base_dir.as_deref().map(|b| self.escape_if_enabled(b)))
            .args(patterns.iter().map(|p| self.escape_if_enabled(p)))
            .build()
    }
}
