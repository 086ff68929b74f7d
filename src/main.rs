use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use lftp_wrapper::config::Config;
use lftp_wrapper::logging::init_tracing;
use lftp_wrapper::{
    ConnectionOptions, GetOptions, Lftp, MirrorOptions, PgetOptions, PutOptions,
};

#[derive(Parser, Debug)]
#[command(name = "lftp-wrapper", about = "Run lftp transfers from connection profiles")]
struct Cli {
    /// Profiles file (default: ~/.config/lftp-wrapper/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Connection profile to use
    #[arg(short, long, value_name = "NAME")]
    profile: Option<String>,

    /// Server host
    #[arg(long)]
    host: Option<String>,

    /// Login name
    #[arg(short, long)]
    user: Option<String>,

    /// Login password
    #[arg(long, env = "LFTP_WRAPPER_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Protocol: ftp, sftp or ftps
    #[arg(long)]
    protocol: Option<String>,

    /// Server port
    #[arg(long)]
    port: Option<u16>,

    /// Do not escape paths before passing them to lftp
    #[arg(long)]
    no_escape: bool,

    /// Accept unknown sftp host keys
    #[arg(long)]
    auto_confirm: bool,

    /// Working directory for the lftp process
    #[arg(long, value_name = "DIR")]
    cwd: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Print the queued commands instead of running lftp
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Run lftp statements verbatim
    Raw {
        #[arg(required = true)]
        commands: Vec<String>,
    },
    /// List a remote directory
    Ls { path: Option<String> },
    /// Download a file
    Get {
        remote: String,
        #[arg(short, long)]
        output: Option<String>,
        /// Continue a partial download
        #[arg(short = 'c', long = "continue")]
        resume: bool,
    },
    /// Upload a file
    Put {
        local: String,
        #[arg(short, long)]
        output: Option<String>,
        /// Continue a partial upload
        #[arg(short = 'c', long = "continue")]
        resume: bool,
    },
    /// Download a file over several connections
    Pget {
        remote: String,
        #[arg(short, long)]
        output: Option<String>,
        #[arg(short = 'n', long)]
        connections: Option<u32>,
    },
    /// Mirror a directory tree
    Mirror {
        remote: String,
        local: Option<String>,
        /// Upload the local tree instead of downloading
        #[arg(long)]
        upload: bool,
        #[arg(long)]
        parallel: Option<u32>,
        /// Regex of files to include
        #[arg(long)]
        include: Option<String>,
    },
}

impl Cli {
    /// Profile values, overridden by whatever was given on the command line.
    fn connection_options(&self, config: &Config) -> Result<ConnectionOptions> {
        let mut opts = config.profile(self.profile.as_deref())?;
        if let Some(host) = &self.host {
            opts.host = host.clone();
        }
        if let Some(user) = &self.user {
            opts.username = user.clone();
        }
        if let Some(password) = &self.password {
            opts.password = Some(password.clone());
        }
        if let Some(protocol) = &self.protocol {
            opts.protocol = Some(protocol.clone());
        }
        if let Some(port) = self.port {
            opts.port = Some(port);
        }
        if self.no_escape {
            opts.escape = false;
        }
        if self.auto_confirm {
            opts.auto_confirm = true;
        }
        if let Some(cwd) = &self.cwd {
            opts.working_directory = Some(cwd.clone());
        }
        Ok(opts)
    }
}

fn queue_action(ftp: &mut Lftp, action: Action) -> Result<()> {
    match action {
        Action::Raw { commands } => {
            for cmd in &commands {
                ftp.raw(cmd)?;
            }
        }
        Action::Ls { path } => {
            ftp.ls(path.as_deref())?;
        }
        Action::Get {
            remote,
            output,
            resume,
        } => {
            ftp.get(
                &remote,
                GetOptions {
                    continue_transfer: resume,
                    local_path: output,
                    ..Default::default()
                },
            )?;
        }
        Action::Put {
            local,
            output,
            resume,
        } => {
            ftp.put(
                &local,
                PutOptions {
                    continue_transfer: resume,
                    remote_path: output,
                    ..Default::default()
                },
            )?;
        }
        Action::Pget {
            remote,
            output,
            connections,
        } => {
            ftp.pget(
                &remote,
                PgetOptions {
                    connections,
                    local_path: output,
                    ..Default::default()
                },
            )?;
        }
        Action::Mirror {
            remote,
            local,
            upload,
            parallel,
            include,
        } => {
            ftp.mirror(
                &remote,
                MirrorOptions {
                    upload,
                    local_dir: local,
                    parallel,
                    filter: include,
                    ..Default::default()
                },
            )?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    match run(Cli::parse()).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<i32> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let options = cli.connection_options(&config)?;
    let mut ftp = Lftp::new(options).context("invalid connection options")?;

    queue_action(&mut ftp, cli.action)?;

    if cli.dry_run {
        for cmd in ftp.queued() {
            println!("{cmd}");
        }
        return Ok(0);
    }

    let output = ftp.exec().await.context("failed to run lftp")?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", output.data);
        eprint!("{}", output.error);
    }
    Ok(output.code.unwrap_or(1))
}
