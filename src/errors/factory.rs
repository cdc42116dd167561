// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for proxy factory operations.
//!
//! A factory turns a backend descriptor into a live proxy, which involves
//! process spawning or network I/O. Every way that can go wrong surfaces
//! here; none of these are retried by the mount layer.

use thiserror::Error;

/// Errors raised while turning a backend descriptor into a live proxy.
#[derive(Error, Debug)]
pub enum FactoryError {
    /// The descriptor itself is unusable (blank command, blank endpoint).
    #[error("Invalid backend descriptor: {details}")]
    InvalidDescriptor { details: String },

    /// The backend process could not be started.
    #[error("Failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The backend endpoint could not be reached.
    #[error("Backend at '{endpoint}' is unreachable: {source}")]
    Unreachable {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend was reached but never became ready to serve.
    #[error("Backend handshake failed: {0}")]
    Handshake(String),
}
