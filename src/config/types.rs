use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Raw connection options, as supplied by the caller or a profile file.
///
/// Nothing here is validated; [`ConnectionOptions::normalize`] turns it into a
/// [`NormalizedConnection`](super::NormalizedConnection) or fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionOptions {
    /// Server host name or address (required).
    #[serde(default)]
    pub host: String,
    /// Login name (required).
    #[serde(default)]
    pub username: String,
    /// Login password. Required unless `requires_password` is false.
    #[serde(default)]
    pub password: Option<String>,
    /// Whether a missing password is a configuration error (default: true).
    #[serde(default = "default_true")]
    pub requires_password: bool,
    /// One of `ftp`, `sftp`, `ftps` (default: `sftp`).
    #[serde(default)]
    pub protocol: Option<String>,
    /// Server port (default: 22).
    #[serde(default)]
    pub port: Option<u16>,
    /// Escape free-text tokens before embedding them (default: true).
    #[serde(default = "default_true")]
    pub escape: bool,
    /// `net:max-retries` (default: 1).
    #[serde(default = "default_retries")]
    pub retries: u32,
    /// `net:timeout` in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout: u32,
    /// `net:reconnect-interval-base` in seconds (default: 5).
    #[serde(default = "default_retry_interval")]
    pub retry_interval: u32,
    /// `net:reconnect-interval-multiplier` (default: 1).
    #[serde(default = "default_retry_interval_multiplier")]
    pub retry_interval_multiplier: f64,
    /// Answer yes to unknown host keys (sftp only, default: false).
    #[serde(default)]
    pub auto_confirm: bool,
    /// Working directory of the spawned lftp process.
    #[serde(default)]
    pub working_directory: Option<PathBuf>,
    /// Private key handed to ssh via `sftp:connect-program` (sftp only).
    #[serde(default)]
    pub ssh_key_path: Option<String>,
    /// Raw statements issued after the network settings, before `open`.
    #[serde(default)]
    pub additional_commands: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_retries() -> u32 {
    1
}

fn default_timeout() -> u32 {
    10
}

fn default_retry_interval() -> u32 {
    5
}

fn default_retry_interval_multiplier() -> f64 {
    1.0
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            host: String::new(),
            username: String::new(),
            password: None,
            requires_password: true,
            protocol: None,
            port: None,
            escape: true,
            retries: default_retries(),
            timeout: default_timeout(),
            retry_interval: default_retry_interval(),
            retry_interval_multiplier: default_retry_interval_multiplier(),
            auto_confirm: false,
            working_directory: None,
            ssh_key_path: None,
            additional_commands: Vec::new(),
        }
    }
}

/// Contents of the profiles file used by the command-line host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Profile used when `--profile` is not given.
    #[serde(default)]
    pub default_profile: Option<String>,
    #[serde(default)]
    pub profiles: BTreeMap<String, ConnectionOptions>,
}
