// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Backend transport implementations for Switchboard.
//!
//! This module provides the pluggable transports a backend can be reached
//! over. Each transport produces a `BackendProxy` and is instantiated
//! through the configuration-driven [`factory::TransportProxyFactory`].
//!
//! # Available Transports
//!
//! ## Stdio Transport
//! Backends spawned as child processes:
//! - **Spawn**: tokio process with piped stdio, killed on drop
//! - **Handshake**: one ready line on stdout before the mount counts
//! - **Diagnostics**: startup stdout/stderr captured per task
//! - **Use Case**: local tool servers, shell-scripted backends
//!
//! ## HTTP Transport
//! Backends reached over a URL:
//! - **Probe**: one GET against the endpoint before the mount counts
//! - **Client**: shared rustls-backed client across all probes
//! - **Use Case**: remote backends, already-running services
//!
//! ## Stub Transport (Test-Only)
//! Testing utilities for engine development (only available in test builds):
//! - **StubProxyFactory**: always succeeds, optional per-target delays
//! - **FlakyProxyFactory**: fails chosen targets for error handling tests
//! - **CountingProxyFactory**: observes concurrent admissions
//! - **Note**: NOT available in production builds
//!
//! # Architecture
//!
//! All transports follow a consistent factory pattern:
//! ```text
//! Configuration → Factory → Proxy Instance → Attachment Sink
//! ```
//!
//! # Examples
//!
//! ```rust,no_run
//! use switchboard::backends::factory::TransportProxyFactory;
//! use switchboard::config::BackendDescriptor;
//! use switchboard::traits::{Diagnostics, ProxyFactory};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), switchboard::errors::FactoryError> {
//! let factory = TransportProxyFactory::new();
//! let descriptor = BackendDescriptor::Http {
//!     endpoint: "http://127.0.0.1:8080/".to_string(),
//! };
//!
//! let mut diagnostics = Diagnostics::new();
//! let proxy = factory.create(&descriptor, &mut diagnostics).await?;
//! println!("mounted {}", proxy.target());
//! # Ok(())
//! # }
//! ```

pub mod factory;
pub mod http;
pub mod stdio;
#[cfg(test)]
pub mod stub;
