// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging and run output.
//!
//! This module contains the message types used for diagnostic and
//! operational output throughout the crate. Each message type implements
//! `Display` to provide consistent, human-readable text while keeping the
//! wording out of the call sites.
//!
//! Messages that are also operational log events implement [`StructuredLog`]
//! so the same struct drives both the human text and the tracing fields.
//!
//! # Usage Pattern
//!
//! ```rust
//! use switchboard::observability::messages::mount::MountRunStarted;
//! use switchboard::observability::messages::StructuredLog;
//!
//! let msg = MountRunStarted {
//!     backend_count: 5,
//!     max_concurrent: 2,
//!     fail_fast: false,
//! };
//!
//! msg.log();
//! ```

use tracing::Span;

pub mod mount;

/// A message that can emit itself as a structured tracing event.
///
/// `log()` records the message at its own level with its fields broken out;
/// `span()` builds a span carrying the same fields for nested work.
pub trait StructuredLog {
    fn log(&self);

    fn span(&self, name: &str) -> Span;
}
