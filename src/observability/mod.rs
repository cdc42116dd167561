// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and run output.
//!
//! This module provides centralized message types for all diagnostic and
//! operational logging throughout Switchboard. Message types follow a
//! struct-based pattern with `Display` trait implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Enable future internationalization without code changes
//! * Provide consistent, structured logging output
//!
//! # Architecture
//!
//! * `messages::mount` - Mount run lifecycle events and per-task output blocks
//! * `reporter` - Serialized publishing of rendered run output
//!
//! Structured log events go through `tracing`; the human-readable run
//! output (per-task blocks, tallies) goes through the [`Reporter`] so that
//! concurrently finishing tasks never interleave their text.
//!
//! # Usage
//!
//! ```rust
//! use switchboard::observability::messages::mount::BackendMountFailed;
//!
//! let error = std::io::Error::new(std::io::ErrorKind::Other, "test error");
//! let msg = BackendMountFailed {
//!     name: "weather",
//!     error: &error,
//! };
//!
//! tracing::warn!("{}", msg);
//! ```

pub mod messages;
pub mod reporter;

pub use reporter::{CaptureBuffer, Reporter};
