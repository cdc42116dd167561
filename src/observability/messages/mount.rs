// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for mount run lifecycle events and run output.
//!
//! Two families live here:
//! * Run lifecycle events (`MountRunStarted`, `MountRunCompleted`, ...)
//!   implementing [`StructuredLog`] for tracing.
//! * Presentation blocks (`SuccessBlock`, `FailureBlock`, the tallies)
//!   that render the human-readable text published through the
//!   [`Reporter`](crate::observability::Reporter). Each block renders as one
//!   self-contained string so the reporter can write it atomically.

use std::fmt::{Display, Formatter};
use std::time::Duration;

use tracing::Span;

use crate::errors::MountFailure;
use crate::observability::messages::StructuredLog;
use crate::traits::Diagnostics;

/// Width of the banner line framing each task block.
const SEPARATOR_WIDTH: usize = 60;

fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// A mount run began with the given shape and options.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use switchboard::observability::messages::mount::MountRunStarted;
///
/// let msg = MountRunStarted {
///     backend_count: 5,
///     max_concurrent: 2,
///     fail_fast: false,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct MountRunStarted {
    pub backend_count: usize,
    pub max_concurrent: usize,
    pub fail_fast: bool,
}

impl Display for MountRunStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting mount run: {} backends, max_concurrent={}, fail_fast={}",
            self.backend_count, self.max_concurrent, self.fail_fast
        )
    }
}

impl StructuredLog for MountRunStarted {
    fn log(&self) {
        tracing::info!(
            backend_count = self.backend_count,
            max_concurrent = self.max_concurrent,
            fail_fast = self.fail_fast,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "mount_run",
            span_name = name,
            backend_count = self.backend_count,
            max_concurrent = self.max_concurrent,
            fail_fast = self.fail_fast,
        )
    }
}

/// A mount run finished without raising.
///
/// # Log Level
/// `info!` - Important operational event
pub struct MountRunCompleted {
    pub successes: usize,
    pub failures: usize,
    pub duration: Duration,
}

impl Display for MountRunCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Mount run completed: {} mounted, {} failed in {:?}",
            self.successes, self.failures, self.duration
        )
    }
}

impl StructuredLog for MountRunCompleted {
    fn log(&self) {
        tracing::info!(
            successes = self.successes,
            failures = self.failures,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "mount_run_completed",
            span_name = name,
            successes = self.successes,
            failures = self.failures,
            duration = ?self.duration,
        )
    }
}

/// A mount run raised to its caller.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct MountRunFailed<'a> {
    pub error: &'a dyn std::error::Error,
    pub duration: Duration,
}

impl Display for MountRunFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Mount run failed after {:?}: {}",
            self.duration, self.error
        )
    }
}

impl StructuredLog for MountRunFailed<'_> {
    fn log(&self) {
        tracing::error!(
            error = %self.error,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "mount_run_failed",
            span_name = name,
            error = %self.error,
        )
    }
}

/// One backend failed to mount and the run recovered it into the report.
///
/// # Log Level
/// `warn!` - Recovered failure
///
/// # Example
/// ```
/// use switchboard::observability::messages::mount::BackendMountFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "test error");
/// let msg = BackendMountFailed {
///     name: "weather",
///     error: &error,
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct BackendMountFailed<'a> {
    pub name: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for BackendMountFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Backend '{}' failed to mount: {}", self.name, self.error)
    }
}

impl StructuredLog for BackendMountFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            backend = self.name,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "backend_mount_failed",
            span_name = name,
            backend = self.name,
            error = %self.error,
        )
    }
}

/// Self-contained output block for one successfully mounted backend.
///
/// Renders the banner, the outcome line and the task's captured
/// diagnostics. Published as a single write so blocks from concurrent tasks
/// never interleave.
pub struct SuccessBlock<'a> {
    pub name: &'a str,
    pub diagnostics: &'a Diagnostics,
}

impl Display for SuccessBlock<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let sep = separator();
        writeln!(f)?;
        writeln!(f, "{}", sep)?;
        writeln!(f, "✅ {} - MOUNTED SUCCESSFULLY", self.name)?;
        writeln!(f, "{}", sep)?;
        if !self.diagnostics.output().is_empty() {
            writeln!(f, "📤 Output:")?;
            for line in self.diagnostics.output() {
                writeln!(f, "{}", line)?;
            }
        }
        if !self.diagnostics.warnings().is_empty() {
            writeln!(f, "⚠️ Warnings:")?;
            for line in self.diagnostics.warnings() {
                writeln!(f, "{}", line)?;
            }
        }
        writeln!(f, "{}", sep)?;
        writeln!(f)
    }
}

/// Self-contained output block for one backend that failed to mount.
pub struct FailureBlock<'a> {
    pub name: &'a str,
    pub cause: &'a MountFailure,
    pub diagnostics: &'a Diagnostics,
}

impl Display for FailureBlock<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let sep = separator();
        writeln!(f)?;
        writeln!(f, "{}", sep)?;
        writeln!(f, "❌ {} - FAILED: {}", self.name, self.cause)?;
        writeln!(f, "{}", sep)?;
        if !self.diagnostics.output().is_empty() {
            writeln!(f, "📤 Output:")?;
            for line in self.diagnostics.output() {
                writeln!(f, "{}", line)?;
            }
        }
        if !self.diagnostics.warnings().is_empty() {
            writeln!(f, "🚨 Errors:")?;
            for line in self.diagnostics.warnings() {
                writeln!(f, "{}", line)?;
            }
        }
        writeln!(f, "{}", sep)?;
        writeln!(f)
    }
}

/// One-line tally of the backends that mounted, emitted in graceful mode.
pub struct SuccessTally<'a> {
    pub names: &'a [String],
}

impl Display for SuccessTally<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "✅ Successfully mounted {} backends: {}",
            self.names.len(),
            self.names.join(", ")
        )
    }
}

/// Multi-line tally of the backends that failed, emitted in graceful mode.
pub struct FailureTally<'a> {
    pub failures: &'a [(String, MountFailure)],
}

impl Display for FailureTally<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        writeln!(f, "❌ Failed to mount {} backends:", self.failures.len())?;
        for (name, cause) in self.failures {
            writeln!(f, "   - {}: {}", name, cause)?;
        }
        Ok(())
    }
}
