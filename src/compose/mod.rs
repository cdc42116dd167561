// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! High-level composition entry points.
//!
//! These functions tie the layers together: take a parsed mount config,
//! build the default transport factory, run the concurrent engine and hand
//! back the composed [`Gateway`]. They are the crate's equivalent of "give
//! me a working front for this config file".
//!
//! # Examples
//!
//! ```rust,no_run
//! use switchboard::compose::compose_gateway;
//! use switchboard::config::load_and_validate_config;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_and_validate_config("backends.yaml")?;
//! let gateway = compose_gateway(&config).await?;
//! println!("mounted: {:?}", gateway.namespaces());
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::backends::factory::TransportProxyFactory;
use crate::config::{BackendSet, MountConfig};
use crate::engine::{MountOrchestrator, MountReport};
use crate::errors::MountError;
use crate::gateway::Gateway;
use crate::observability::Reporter;
use crate::traits::{AttachmentSink, Diagnostics, ProxyFactory};

/// Build a fresh [`Gateway`] and mount every configured backend into it.
///
/// Graceful mode tolerates partial failures, so the returned gateway may
/// hold fewer mounts than the config lists. Mount into your own sink via
/// [`mount_config_into`] if you need the run's report.
pub async fn compose_gateway(config: &MountConfig) -> Result<Gateway, MountError> {
    let gateway = Gateway::default();
    mount_config_into(config, &gateway).await?;
    Ok(gateway)
}

/// Mount every backend from `config` into an existing sink.
///
/// Uses the default transport factory and the stdout reporter; concurrency
/// and failure handling follow `config.options`.
pub async fn mount_config_into(
    config: &MountConfig,
    sink: &dyn AttachmentSink,
) -> Result<MountReport, MountError> {
    let backends = BackendSet::from_config(config);
    let orchestrator = MountOrchestrator::new(
        Arc::new(TransportProxyFactory::new()),
        config.options.clone(),
        Reporter::stdout(),
    );
    orchestrator.run(&backends, sink).await
}

/// Mount backends one at a time, stopping at the first error.
///
/// The plain non-concurrent path: no admission gate, no output blocks, no
/// report. The first factory or attach error propagates as-is and later
/// backends are never attempted.
pub async fn mount_backends_sequential(
    backends: &BackendSet,
    factory: &dyn ProxyFactory,
    sink: &dyn AttachmentSink,
    prefix_names: bool,
) -> Result<(), MountError> {
    for (name, descriptor) in backends.iter() {
        let mut diagnostics = Diagnostics::new();
        let proxy = factory.create(descriptor, &mut diagnostics).await?;
        let namespace = prefix_names.then_some(name);
        sink.attach(namespace, proxy).await?;
        debug!(backend = name, "backend mounted");
    }
    Ok(())
}
