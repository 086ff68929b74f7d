//! `bookmark` and `cache` management.

use std::fmt;
use std::str::FromStr;

use super::{require, CommandError, CommandResult, Lftp};

/// Subcommand of `bookmark`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkCommand {
    /// Bookmark `location`, or the current location if `None`.
    Add { name: String, location: Option<String> },
    Del { name: String },
    Edit,
    /// Import bookmarks from another client, e.g. `ncftp`.
    Import { kind: String },
    List,
}

/// Unit suffix of `cache expire`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpireUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl fmt::Display for ExpireUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExpireUnit::Seconds => "s",
            ExpireUnit::Minutes => "m",
            ExpireUnit::Hours => "h",
            ExpireUnit::Days => "d",
        })
    }
}

impl FromStr for ExpireUnit {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s" => Ok(ExpireUnit::Seconds),
            "m" => Ok(ExpireUnit::Minutes),
            "h" => Ok(ExpireUnit::Hours),
            "d" => Ok(ExpireUnit::Days),
            other => Err(CommandError::invalid(
                "cache",
                format!("expire unit must be one of s, m, h, d, got '{other}'"),
            )),
        }
    }
}

/// Subcommand of `cache`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheCommand {
    Stat,
    On,
    Off,
    Flush,
    /// Memory limit in bytes; -1 means unlimited.
    Size(i64),
    Expire { amount: u32, unit: ExpireUnit },
}

impl Lftp {
    pub fn bookmark(&mut self, cmd: BookmarkCommand) -> CommandResult<'_> {
        let line = match &cmd {
            BookmarkCommand::Add { name, location } => {
                require("bookmark", "name", name)?;
                match location.as_deref().filter(|l| !l.is_empty()) {
                    Some(loc) => format!(
                        "bookmark add {} {}",
                        self.escape_if_enabled(name),
                        self.escape_if_enabled(loc)
                    ),
                    None => format!("bookmark add {}", self.escape_if_enabled(name)),
                }
            }
            BookmarkCommand::Del { name } => {
                require("bookmark", "name", name)?;
                format!("bookmark del {}", self.escape_if_enabled(name))
            }
            BookmarkCommand::Edit => "bookmark edit".to_string(),
            BookmarkCommand::Import { kind } => {
                require("bookmark", "type", kind)?;
                format!("bookmark import {}", self.escape_if_enabled(kind))
            }
            BookmarkCommand::List => "bookmark list".to_string(),
        };
        self.push(line)
    }

    pub fn cache(&mut self, cmd: CacheCommand) -> CommandResult<'_> {
        let line = match cmd {
            CacheCommand::Stat => "cache stat".to_string(),
            CacheCommand::On => "cache on".to_string(),
            CacheCommand::Off => "cache off".to_string(),
            CacheCommand::Flush => "cache flush".to_string(),
            CacheCommand::Size(limit) => format!("cache size {limit}"),
            CacheCommand::Expire { amount, unit } => format!("cache expire {amount}{unit}"),
        };
        self.push(line)
    }
}
