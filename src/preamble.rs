//! Connection setup statements issued before any queued subcommand.

use crate::config::{NormalizedConnection, Protocol};
use crate::escape::escape_if;

/// Build the preamble for `conn`, escaping credentials when `escape` is set.
///
/// Order: auto-confirm (sftp only), ssh key (sftp only), retries, timeout,
/// reconnect base, reconnect multiplier, additional statements, `open`.
pub fn build_preamble(conn: &NormalizedConnection, escape: bool) -> Vec<String> {
    let mut statements = Vec::with_capacity(6 + conn.additional_commands.len());

    if conn.protocol == Protocol::Sftp {
        if conn.auto_confirm {
            statements.push("set sftp:auto-confirm yes".to_string());
        }
        if let Some(key) = &conn.ssh_key_path {
            statements.push(format!(
                "set sftp:connect-program \"ssh -a -x -i {}\"",
                escape_if(escape, key)
            ));
        }
    }

    statements.push(format!("set net:max-retries {}", conn.retries));
    statements.push(format!("set net:timeout {}", conn.timeout));
    statements.push(format!(
        "set net:reconnect-interval-base {}",
        conn.retry_interval
    ));
    statements.push(format!(
        "set net:reconnect-interval-multiplier {}",
        conn.retry_interval_multiplier
    ));
    statements.extend(conn.additional_commands.iter().cloned());

    // The host URI is built from validated fields and is never escaped.
    statements.push(format!(
        "open -u \"{}\",\"{}\" \"{}\"",
        escape_if(escape, &conn.username),
        escape_if(escape, &conn.password),
        conn.host
    ));

    statements
}
