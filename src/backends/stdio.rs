// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Stdio transport: backends spawned as child processes.
//!
//! The factory spawns the configured command with piped stdio and waits for
//! one line on the child's stdout as the ready handshake. Everything the
//! child says during startup lands in the task's [`Diagnostics`] buffer
//! instead of on the process output stream, so concurrent mounts never
//! interleave.

use std::collections::HashMap;
use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, Command};
use tracing::debug;

use crate::errors::FactoryError;
use crate::traits::{BackendProxy, Diagnostics};

/// Live handle to a spawned stdio backend.
///
/// Owns the child process and its stdio pipes for the session layer above;
/// the child is killed when the proxy is dropped.
#[derive(Debug)]
pub struct StdioProxy {
    command_line: String,
    child: Child,
}

impl StdioProxy {
    /// OS process id, if the child is still running.
    pub fn pid(&self) -> Option<u32> {
        self.child.id()
    }
}

impl BackendProxy for StdioProxy {
    fn transport(&self) -> &'static str {
        "stdio"
    }

    fn target(&self) -> String {
        self.command_line.clone()
    }
}

/// Spawn `command` and wait for its ready line.
///
/// The first line the child writes to stdout completes the handshake and is
/// recorded in `diagnostics`. A child that exits or closes stdout before
/// writing one fails the mount; its stderr is drained into `diagnostics` so
/// the failure block can show what the child said on the way down.
pub async fn spawn_backend(
    command: &str,
    args: &[String],
    env: &HashMap<String, String>,
    diagnostics: &mut Diagnostics,
) -> Result<StdioProxy, FactoryError> {
    if command.trim().is_empty() {
        return Err(FactoryError::InvalidDescriptor {
            details: "stdio backend has a blank command".to_string(),
        });
    }

    debug!(command = %command, ?args, "spawning stdio backend");

    let mut cmd = Command::new(command);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    for (key, value) in env {
        cmd.env(key, value);
    }

    let mut child = cmd.spawn().map_err(|source| FactoryError::Spawn {
        command: command.to_string(),
        source,
    })?;

    let stdout = match child.stdout.take() {
        Some(stdout) => stdout,
        None => {
            return Err(FactoryError::Handshake(
                "child stdout was not captured".to_string(),
            ))
        }
    };

    let mut lines = BufReader::new(stdout).lines();
    match lines.next_line().await {
        Ok(Some(line)) => diagnostics.note(line),
        Ok(None) => {
            let _ = child.kill().await;
            drain_stderr(&mut child, diagnostics).await;
            return Err(FactoryError::Handshake(format!(
                "'{}' exited before reporting ready",
                command
            )));
        }
        Err(error) => {
            let _ = child.kill().await;
            drain_stderr(&mut child, diagnostics).await;
            return Err(FactoryError::Handshake(format!(
                "failed reading ready line from '{}': {}",
                command, error
            )));
        }
    }

    // Hand the stdout pipe back to the child handle so the backend can keep
    // writing without hitting a closed pipe.
    child.stdout = Some(lines.into_inner().into_inner());

    Ok(StdioProxy {
        command_line: render_command_line(command, args),
        child,
    })
}

/// Drain whatever the dead child wrote to stderr into the warnings lane.
/// Callers kill the child first so the pipe is at EOF and this terminates.
async fn drain_stderr(child: &mut Child, diagnostics: &mut Diagnostics) {
    let stderr = match child.stderr.take() {
        Some(stderr) => stderr,
        None => return,
    };

    let mut lines = BufReader::new(stderr).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        diagnostics.warn(line);
    }
}

fn render_command_line(command: &str, args: &[String]) -> String {
    if args.is_empty() {
        command.to_string()
    } else {
        format!("{} {}", command, args.join(" "))
    }
}
