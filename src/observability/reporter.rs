// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Run output publishing.
//!
//! The orchestrator renders each task's outcome as one self-contained block
//! and hands it to a [`Reporter`]. The reporter serializes writes through a
//! mutex so blocks from concurrent tasks never interleave on the wire.

use std::io::Write;
use std::sync::{Arc, Mutex};

/// Serialized sink for rendered run output.
///
/// Cloning is cheap; clones share the underlying writer.
#[derive(Clone)]
pub struct Reporter {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Reporter {
    /// Reporter writing to the process's stdout.
    pub fn stdout() -> Self {
        Self::to_writer(Box::new(std::io::stdout()))
    }

    /// Reporter writing to an arbitrary sink. Tests pair this with
    /// [`CaptureBuffer`].
    pub fn to_writer(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Arc::new(Mutex::new(writer)),
        }
    }

    /// Write one rendered block in a single call.
    ///
    /// Output is best-effort: a failed or poisoned writer is logged and the
    /// block dropped rather than failing the mount run.
    pub fn publish(&self, text: &str) {
        let mut guard = match self.writer.lock() {
            Ok(guard) => guard,
            Err(_) => {
                tracing::warn!("run output writer lock poisoned, dropping block");
                return;
            }
        };

        if let Err(error) = guard.write_all(text.as_bytes()) {
            tracing::warn!(error = %error, "failed to write run output block");
            return;
        }
        if let Err(error) = guard.flush() {
            tracing::warn!(error = %error, "failed to flush run output block");
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::stdout()
    }
}

/// In-memory writer for asserting on published output.
///
/// Clones share the same backing buffer, so a test can keep one handle and
/// move another into [`Reporter::to_writer`].
#[derive(Clone, Default)]
pub struct CaptureBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything published so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        match self.bytes.lock() {
            Ok(guard) => String::from_utf8_lossy(&guard).into_owned(),
            Err(_) => String::new(),
        }
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self.bytes.lock() {
            Ok(mut guard) => {
                guard.extend_from_slice(buf);
                Ok(buf.len())
            }
            Err(_) => Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                "capture buffer lock poisoned",
            )),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
