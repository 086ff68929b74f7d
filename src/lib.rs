//! Fluent builder for `lftp -c` command lines.
//!
//! ```no_run
//! use lftp_wrapper::{ConnectionOptions, GetOptions, Lftp};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let mut ftp = Lftp::new(ConnectionOptions {
//!     host: "example.org".into(),
//!     username: "me".into(),
//!     password: Some("secret".into()),
//!     ..Default::default()
//! })?;
//! ftp.cd("incoming")?
//!     .get("report.csv", GetOptions { continue_transfer: true, ..Default::default() })?;
//! let output = ftp.exec().await?;
//! println!("{}", output.data);
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod config;
pub mod escape;
pub mod logging;
pub mod preamble;
pub mod process;
pub mod queue;

pub use commands::*;
pub use config::{Config, ConfigError, ConnectionOptions, NormalizedConnection, Protocol};
pub use escape::{escape, escape_if};
pub use process::{
    CommandRunner, ExecError, ExecFuture, ExecOutput, LftpProcess, RunRequest, LFTP_PROGRAM,
};
pub use queue::CommandQueue;
