//! Token composer for a single lftp subcommand.

use std::fmt::Display;

/// Builder for the space-separated tokens of one subcommand.
///
/// Callers escape free-text values before handing them over; flags and
/// numeric values are emitted as-is.
#[derive(Debug, Clone)]
pub(crate) struct CommandLine {
    tokens: Vec<String>,
}

impl CommandLine {
    /// Start with the subcommand name.
    pub fn new(name: &str) -> Self {
        Self {
            tokens: vec![name.to_string()],
        }
    }

    /// Prefix with `queue` so lftp runs the subcommand in its job queue.
    pub fn queued(mut self, queue: bool) -> Self {
        if queue {
            self.tokens.insert(0, "queue".into());
        }
        self
    }

    /// Bare flag such as `-c`, emitted only when `on`.
    pub fn flag(mut self, on: bool, flag: &str) -> Self {
        if on {
            self.tokens.push(flag.into());
        }
        self
    }

    /// Flag followed by a separate value token (`-O base`).
    pub fn option<V: Into<String>>(mut self, flag: &str, value: Option<V>) -> Self {
        if let Some(v) = value {
            self.tokens.push(flag.into());
            self.tokens.push(v.into());
        }
        self
    }

    /// Long flag with an attached value (`--parallel=3`).
    pub fn assign<V: Display>(mut self, flag: &str, value: Option<V>) -> Self {
        if let Some(v) = value {
            self.tokens.push(format!("{flag}={v}"));
        }
        self
    }

    /// Positional token.
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.tokens.push(value.into());
        self
    }

    /// Positional token, emitted only when present.
    pub fn arg_opt<V: Into<String>>(self, value: Option<V>) -> Self {
        match value {
            Some(v) => self.arg(v),
            None => self,
        }
    }

    pub fn args<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.tokens.extend(values.into_iter().map(Into::into));
        self
    }

    /// Join the tokens with single spaces.
    pub fn build(self) -> String {
        self.tokens.join(" ")
    }
}
