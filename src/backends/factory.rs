// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Default [`ProxyFactory`] dispatching on the configured transport.

use async_trait::async_trait;

use crate::backends::{http, stdio};
use crate::config::BackendDescriptor;
use crate::errors::FactoryError;
use crate::traits::{BackendProxy, Diagnostics, ProxyFactory};

/// Production factory covering every configured transport.
///
/// Holds one HTTP client shared across probes; stdio backends are spawned
/// per call.
pub struct TransportProxyFactory {
    client: reqwest::Client,
}

impl TransportProxyFactory {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for TransportProxyFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProxyFactory for TransportProxyFactory {
    async fn create(
        &self,
        descriptor: &BackendDescriptor,
        diagnostics: &mut Diagnostics,
    ) -> Result<Box<dyn BackendProxy>, FactoryError> {
        match descriptor {
            BackendDescriptor::Stdio { command, args, env } => {
                let proxy = stdio::spawn_backend(command, args, env, diagnostics).await?;
                Ok(Box::new(proxy))
            }
            BackendDescriptor::Http { endpoint } => {
                let proxy = http::probe_backend(endpoint, &self.client, diagnostics).await?;
                Ok(Box::new(proxy))
            }
        }
    }
}
