//! Option validation and the normalized connection descriptor.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::loader::ConfigError;
use crate::config::types::ConnectionOptions;

pub const DEFAULT_PORT: u16 = 22;

/// Transfer protocol understood by lftp's `open`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Protocol {
    Ftp,
    #[default]
    Sftp,
    Ftps,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Ftp => "ftp",
            Protocol::Sftp => "sftp",
            Protocol::Ftps => "ftps",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ftp" => Ok(Protocol::Ftp),
            "sftp" => Ok(Protocol::Sftp),
            "ftps" => Ok(Protocol::Ftps),
            _ => Err(ConfigError::InvalidProtocol {
                value: s.to_string(),
            }),
        }
    }
}

/// Validated connection settings with the port folded into `host`.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedConnection {
    /// `<protocol>://<host>:<port>`
    pub host: String,
    pub protocol: Protocol,
    pub username: String,
    /// Empty when no password was supplied and none was required.
    pub password: String,
    pub escape: bool,
    pub retries: u32,
    pub timeout: u32,
    pub retry_interval: u32,
    pub retry_interval_multiplier: f64,
    pub auto_confirm: bool,
    pub working_directory: Option<PathBuf>,
    pub ssh_key_path: Option<String>,
    pub additional_commands: Vec<String>,
}

impl ConnectionOptions {
    /// Validate required fields and fill defaults.
    ///
    /// Fails on the first missing field, in the order host, username, password,
    /// then on an unrecognised protocol.
    pub fn normalize(self) -> Result<NormalizedConnection, ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::MissingField { field: "host" });
        }
        if self.username.is_empty() {
            return Err(ConfigError::MissingField { field: "username" });
        }
        let password = self.password.filter(|p| !p.is_empty());
        if self.requires_password && password.is_none() {
            return Err(ConfigError::MissingField { field: "password" });
        }

        let protocol = match self.protocol.as_deref() {
            Some(p) => p.parse::<Protocol>()?,
            None => Protocol::default(),
        };
        let port = self.port.unwrap_or(DEFAULT_PORT);

        Ok(NormalizedConnection {
            host: format!("{}://{}:{}", protocol, self.host, port),
            protocol,
            username: self.username,
            password: password.unwrap_or_default(),
            escape: self.escape,
            retries: self.retries,
            timeout: self.timeout,
            retry_interval: self.retry_interval,
            retry_interval_multiplier: self.retry_interval_multiplier,
            auto_confirm: self.auto_confirm,
            working_directory: self.working_directory,
            ssh_key_path: self.ssh_key_path,
            additional_commands: self.additional_commands,
        })
    }
}

impl TryFrom<ConnectionOptions> for NormalizedConnection {
    type Error = ConfigError;

    fn try_from(options: ConnectionOptions) -> Result<Self, Self::Error> {
        options.normalize()
    }
}
